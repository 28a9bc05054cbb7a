//! Human-readable names for common EMV tags, used by the pretty-printer.

pub(crate) fn tag_name(tag: &str) -> Option<&'static str> {
    let name = match tag {
        "42" => "Issuer Identification Number (IIN)",
        "4F" => "Application Identifier (AID)",
        "50" => "Application Label",
        "57" => "Track 2 Equivalent Data",
        "5A" => "Application Primary Account Number (PAN)",
        "61" => "Application Template",
        "6F" => "File Control Information (FCI) Template",
        "70" => "Record Template",
        "77" => "Response Message Template Format 2",
        "80" => "Response Message Template Format 1",
        "82" => "Application Interchange Profile",
        "84" => "Dedicated File (DF) Name",
        "87" => "Application Priority Indicator",
        "88" => "Short File Identifier (SFI)",
        "8C" => "Card Risk Management Data Object List 1 (CDOL1)",
        "8D" => "Card Risk Management Data Object List 2 (CDOL2)",
        "8E" => "Cardholder Verification Method (CVM) List",
        "94" => "Application File Locator (AFL)",
        "95" => "Terminal Verification Results (TVR)",
        "9A" => "Transaction Date",
        "9C" => "Transaction Type",
        "A5" => "FCI Proprietary Template",
        "5F24" => "Application Expiration Date",
        "5F2A" => "Transaction Currency Code",
        "5F2D" => "Language Preference",
        "5F34" => "Application PAN Sequence Number",
        "9F02" => "Amount, Authorised (Numeric)",
        "9F03" => "Amount, Other (Numeric)",
        "9F06" => "Application Identifier (AID) - terminal",
        "9F10" => "Issuer Application Data",
        "9F1A" => "Terminal Country Code",
        "9F26" => "Application Cryptogram",
        "9F27" => "Cryptogram Information Data",
        "9F33" => "Terminal Capabilities",
        "9F34" => "Cardholder Verification Method (CVM) Results",
        "9F36" => "Application Transaction Counter (ATC)",
        "9F37" => "Unpredictable Number",
        "9F38" => "Processing Options Data Object List (PDOL)",
        "9F66" => "Terminal Transaction Qualifiers (TTQ)",
        "BF0C" => "FCI Issuer Discretionary Data",
        _ => return None,
    };

    Some(name)
}
