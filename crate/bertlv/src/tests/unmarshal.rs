use bertlv_logger::log_init;
use serde::Deserialize;

use crate::{Tlv, TlvError, from_tlv};

fn emv_data() -> Vec<Tlv> {
    vec![
        Tlv::primitive("84", *b"2PAY.SYS.DDF01"),
        Tlv::constructed(
            "61", // Application Template
            vec![
                Tlv::primitive("4F", vec![0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]),
                Tlv::primitive("50", *b"Mastercard"),
                Tlv::primitive("87", vec![0x01]),
            ],
        ),
        Tlv::primitive("9F02", vec![0x00, 0x00, 0x00, 0x00, 0x12, 0x34]),
        Tlv::primitive("9F03", *b"5678"),
    ]
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApplicationTemplate {
    #[serde(rename = "4F")]
    application_id: String,
    #[serde(rename = "50,ascii")]
    application_label: String,
    #[serde(rename = "87")]
    application_priority_indicator: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmvData {
    #[serde(rename = "84")]
    dedicated_file_name: Vec<u8>,
    #[serde(rename = "61")]
    application_template: ApplicationTemplate,
    #[serde(rename = "9F02")]
    amount_authorized: i64,
    #[serde(rename = "9F03,ascii")]
    amount_other: i64,
}

#[test]
fn test_unmarshal() {
    log_init(None);

    let emv: EmvData = from_tlv(&emv_data()).unwrap();

    assert_eq!(emv.dedicated_file_name, b"2PAY.SYS.DDF01");
    assert_eq!(emv.application_template.application_id, "A0000000041010");
    assert_eq!(emv.application_template.application_label, "Mastercard");
    assert_eq!(emv.application_template.application_priority_indicator, vec![0x01]);
    // hex digits of the value parsed as a decimal number
    assert_eq!(emv.amount_authorized, 1234);
    // ASCII digits of the value parsed as a decimal number
    assert_eq!(emv.amount_other, 5678);
}

#[test]
fn test_unmarshal_missing_tags_are_skipped() {
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct MissingTag {
        #[serde(rename = "99")]
        field: Vec<u8>,
        // bound to nothing decodable, never populated
        other: String,
    }

    let missing: MissingTag = from_tlv(&emv_data()).unwrap();
    assert!(missing.field.is_empty());
    assert!(missing.other.is_empty());
}

#[test]
fn test_unmarshal_optional_fields() {
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Optionals {
        #[serde(rename = "84")]
        dedicated_file_name: Option<Vec<u8>>,
        #[serde(rename = "99")]
        absent: Option<String>,
    }

    let optionals: Optionals = from_tlv(&emv_data()).unwrap();
    assert_eq!(
        optionals.dedicated_file_name.as_deref(),
        Some(b"2PAY.SYS.DDF01".as_slice())
    );
    assert!(optionals.absent.is_none());
}

#[test]
fn test_unmarshal_empty_composite() {
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Nested {
        #[serde(rename = "61")]
        template: ApplicationTemplate,
    }

    let data = vec![Tlv::constructed("61", vec![])];
    let nested: Nested = from_tlv(&data).unwrap();
    assert!(nested.template.application_id.is_empty());
}

#[test]
fn test_unmarshal_conversion_failure_names_the_field() {
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct BadBinding {
        // "Mastercard" is not a number in any interpretation
        #[serde(rename = "50,ascii")]
        application_label: i64,
    }

    let data = emv_data();
    let children = data[1].children().unwrap();
    let err = from_tlv::<BadBinding>(children).unwrap_err();
    match err {
        TlvError::Unmarshal { field, .. } => assert_eq!(field, "50,ascii"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unmarshal_requires_a_struct() {
    assert!(from_tlv::<String>(&emv_data()).is_err());
}
