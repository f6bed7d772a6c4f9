/// Read options.
///
/// `include`, when set, lists the only identifiers that get decoded;
/// `exclude` is checked afterwards and always wins.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Options {
    pub include: Option<Vec<String>>,
    pub exclude: Vec<String>,
}

impl Options {
    pub fn accepts(&self, identifier: &str) -> bool {
        if let Some(ref include) = self.include {
            if !include.iter().any(|i| i == identifier) {
                return false;
            }
        }
        !self.exclude.iter().any(|e| e == identifier)
    }
}

#[test]
fn options_test() {
    assert!(Options::default().accepts("TIT2"));

    let o = Options {
        include: Some(vec!["TIT2".to_string(), "APIC".to_string()]),
        exclude: vec!["APIC".to_string()],
    };
    assert!(o.accepts("TIT2"));
    assert!(!o.accepts("APIC"));
    assert!(!o.accepts("TALB"));
}
