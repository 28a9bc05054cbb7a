use bertlv_logger::log_init;
use tracing::info;

use super::{FCI_HEX, fci_template};
use crate::{Tlv, TlvError, TlvValue, decode, encode, find_by_path, wire};

#[test]
fn test_encode_decode_fci() {
    log_init(None);
    let data = fci_template();

    let encoded = encode(&data).unwrap();
    assert_eq!(hex::encode_upper(&encoded), FCI_HEX);

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded, data);
    info!("decoded FCI: {decoded:#?}");

    // round-trip is loss-less
    assert_eq!(encode(&decoded).unwrap(), encoded);
}

#[test]
fn test_encode_accepts_lowercase_tags() {
    let data = vec![Tlv::constructed(
        "6f",
        vec![Tlv::primitive("9f37", vec![0x5F, 0x5B, 0xD5, 0x57])],
    )];

    let encoded = encode(&data).unwrap();
    assert_eq!(hex::encode_upper(&encoded), "6F069F37045F5BD557");

    // decode normalizes tag text to uppercase
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded[0].tag, "6F");
    assert_eq!(decoded[0].children().unwrap()[0].tag, "9F37");
}

#[test]
fn test_length_boundaries() {
    // 127 value bytes still use the short form
    let encoded = encode(&[Tlv::primitive("84", vec![0xAA; 127])]).unwrap();
    assert_eq!(encoded[1], 0x7F);
    assert_eq!(encoded.len(), 2 + 127);

    // 128 value bytes switch to the long form
    let encoded = encode(&[Tlv::primitive("84", vec![0xAA; 128])]).unwrap();
    assert_eq!(encoded[1..3], [0x81, 0x80]);
    assert_eq!(encoded.len(), 3 + 128);

    let encoded = encode(&[Tlv::primitive("84", vec![0xAA; 256])]).unwrap();
    assert_eq!(encoded[1..4], [0x82, 0x01, 0x00]);
    assert_eq!(encoded.len(), 4 + 256);

    for data in [
        vec![Tlv::primitive("84", vec![])],
        vec![Tlv::primitive("84", vec![0xAA; 127])],
        vec![Tlv::primitive("84", vec![0xAA; 128])],
        vec![Tlv::primitive("84", vec![0xAA; 300])],
    ] {
        assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data);
    }
}

#[test]
fn test_children_under_primitive_tag_are_rejected() {
    // 0x84 has the constructed bit clear
    let data = vec![Tlv::constructed(
        "84",
        vec![Tlv::primitive("4F", vec![0x01])],
    )];

    let err = encode(&data).unwrap_err();
    assert!(matches!(err, TlvError::NotConstructed(tag) if tag == "84"));

    // 0xA5 has the constructed bit set and accepts children
    let data = vec![Tlv::constructed(
        "A5",
        vec![Tlv::primitive("4F", vec![0x01])],
    )];
    assert!(encode(&data).is_ok());
}

#[test]
fn test_malformed_tags_are_rejected() {
    // not hex at all
    assert!(matches!(
        encode(&[Tlv::primitive("ZZ", vec![])]).unwrap_err(),
        TlvError::InvalidTag(_)
    ));
    // single-byte tag with trailing bytes
    assert!(matches!(
        encode(&[Tlv::primitive("8400", vec![])]).unwrap_err(),
        TlvError::InvalidTag(_)
    ));
    // truncated multi-byte tag
    assert!(matches!(
        encode(&[Tlv::primitive("9F", vec![])]).unwrap_err(),
        TlvError::InvalidTag(_)
    ));
    // middle continuation byte without the high bit
    assert!(matches!(
        encode(&[Tlv::primitive("9F0102", vec![])]).unwrap_err(),
        TlvError::InvalidTag(_)
    ));

    // a buffer ending inside a multi-byte tag
    assert!(matches!(
        decode(&[0x9F]).unwrap_err(),
        TlvError::InvalidTag(_)
    ));
}

#[test]
fn test_padding_bytes_are_skipped() {
    // padding before, between and after two records
    let bytes = hex::decode("008401AA00005002424200").unwrap();
    let decoded = decode(&bytes).unwrap();

    assert_eq!(
        decoded,
        vec![
            Tlv::primitive("84", vec![0xAA]),
            Tlv::primitive("50", vec![0x42, 0x42]),
        ]
    );

    // padding is not part of any node and is never re-emitted
    assert_eq!(hex::encode_upper(encode(&decoded).unwrap()), "8401AA50024242");
}

#[test]
fn test_truncated_value_fails() {
    // tag 84 declares 5 value bytes, only 2 remain
    let err = decode(&hex::decode("84052050").unwrap()).unwrap_err();
    assert!(matches!(
        err,
        TlvError::InsufficientData { ref tag, expected: 5, remaining: 2 } if tag == "84"
    ));

    // truncated long-form length
    let err = decode(&hex::decode("848201").unwrap()).unwrap_err();
    assert!(matches!(err, TlvError::InvalidLength(_)));
}

#[test]
fn test_decode_empty_buffer() {
    assert!(decode(&[]).unwrap().is_empty());
}

#[test]
fn test_empty_values() {
    // a primitive with a zero-length value
    let decoded = decode(&hex::decode("8400").unwrap()).unwrap();
    assert_eq!(decoded, vec![Tlv::primitive("84", vec![])]);

    // a constructed object with zero children
    let decoded = decode(&hex::decode("A500").unwrap()).unwrap();
    assert_eq!(decoded[0].value, TlvValue::Constructed(vec![]));

    for data in [decoded, vec![Tlv::primitive("84", vec![])]] {
        assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data);
    }
}

#[test]
fn test_nesting_ceiling() {
    // wrap a primitive in 70 levels of constructed 0xE1
    let mut bytes = hex::decode("8401AA").unwrap();
    for _ in 0..70 {
        let mut wrapped = vec![0xE1];
        wrapped.extend_from_slice(&wire::length::encode(bytes.len()));
        wrapped.extend_from_slice(&bytes);
        bytes = wrapped;
    }

    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, TlvError::NestingTooDeep(_)));
}

#[test]
fn test_decode_real_world_capture() {
    log_init(None);
    // a full contactless transaction data set, with trailing zero padding
    let data = "57135413330089604111D25122010123409172029F5A085413330089604111820219808407A0000000041010950500000080019A032407189C01005F24032512315F2A0208405F3401019F02060000000025009F03060000000000009F10120111A04003220000000000000000000000FF9F1A0208409F1E0863653162353436619F2608FF054006EF59A72D9F2701809F33030008089F34031F03029F3501219F360200FA9F37045F5BD5579F6B135413330089604111D25122010000400000000F9F6E2008400000303000000000000000000000000000000000000000000000000000008000000000000000000000";
    let decoded = decode(&hex::decode(data).unwrap()).unwrap();

    let tag = find_by_path(&decoded, "9F37").unwrap();
    assert_eq!(tag.value().unwrap(), &[0x5F, 0x5B, 0xD5, 0x57]);
}
