mod codec;
mod unmarshal;

use crate::Tlv;

/// The FCI template returned by a PPSE SELECT, used across the suites.
pub(crate) const FCI_HEX: &str = "6F2F840E325041592E5359532E4444463031A51DBF0C1A61184F07A0000000041010500A4D617374657263617264870101";

pub(crate) fn fci_template() -> Vec<Tlv> {
    vec![Tlv::constructed(
        "6F", // File Control Information (FCI) Template
        vec![
            Tlv::primitive("84", *b"2PAY.SYS.DDF01"),
            Tlv::constructed(
                "A5", // FCI Proprietary Template
                vec![Tlv::constructed(
                    "BF0C", // FCI Issuer Discretionary Data
                    vec![Tlv::constructed(
                        "61", // Application Template
                        vec![
                            Tlv::primitive(
                                "4F",
                                vec![0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10],
                            ),
                            Tlv::primitive("50", *b"Mastercard"),
                            Tlv::primitive("87", vec![0x01]),
                        ],
                    )],
                )],
            ),
        ],
    )]
}
