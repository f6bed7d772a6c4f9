// frames that may occur more than once in a tag;
// each value gets written as its own frame
const MULTIPLE: [&str; 10] = [
    "TXXX", "WXXX", "WCOM", "WOAR", "PRIV", "UFID", "CHAP", "CTOC", "SYLT", "COMR",
];

pub fn is_multiple(identifier: &str) -> bool {
    MULTIPLE.contains(&identifier)
}

/// ID3v2.3 identifier for the ID3v2.2 frames that share a bespoke layout.
pub fn v3_identifier(identifier: &str) -> Option<&'static str> {
    match identifier {
        "PIC" => Some("APIC"),
        "COM" => Some("COMM"),
        "ULT" => Some("USLT"),
        "SLT" => Some("SYLT"),
        "TXX" => Some("TXXX"),
        "WXX" => Some("WXXX"),
        "POP" => Some("POPM"),
        "UFI" => Some("UFID"),
        "ETC" => Some("ETCO"),
        _ => None,
    }
}

#[test]
fn definitions_test() {
    assert!(is_multiple("TXXX"));
    assert!(is_multiple("WOAR"));
    assert!(!is_multiple("TIT2"));
    assert!(!is_multiple("WPUB"));
    assert_eq!(v3_identifier("PIC"), Some("APIC"));
    assert_eq!(v3_identifier("TT2"), None);
}
