use crate::id3v2::Frame;
use crate::types::FrameValue;

/// Ordered collection of frames, as found in a tag or nested in a
/// chapter / table of contents.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Tags {
    pub frames: Vec<Frame>,
}

impl Tags {
    pub fn new() -> Tags {
        Default::default()
    }

    pub fn push<V: Into<FrameValue>>(&mut self, identifier: &str, value: V) {
        self.frames.push(Frame::new(identifier, value.into()));
    }

    pub fn with<V: Into<FrameValue>>(mut self, identifier: &str, value: V) -> Tags {
        self.push(identifier, value);
        self
    }

    /// First value stored under `identifier`.
    pub fn get<'a>(&'a self, identifier: &'a str) -> Option<&'a FrameValue> {
        self.get_all(identifier).next()
    }

    pub fn get_all<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a FrameValue> {
        self.frames
            .iter()
            .filter(move |f| f.identifier == identifier)
            .map(|f| &f.value)
    }

    /// Identifiers in order of first appearance.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for f in self.frames.iter() {
            if !ids.contains(&f.identifier.as_str()) {
                ids.push(f.identifier.as_str());
            }
        }
        ids
    }

    pub fn remove(&mut self, identifier: &str) {
        self.frames.retain(|f| f.identifier != identifier);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    // every identifier present in `new` replaces all of the old frames
    // with that identifier, the rest is kept
    pub fn merge(&self, new: &Tags) -> Tags {
        let replaced = new.identifiers();
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .filter(|f| !replaced.contains(&f.identifier.as_str()))
            .cloned()
            .collect();
        frames.extend(new.frames.iter().cloned());
        Tags { frames }
    }
}

impl From<Vec<Frame>> for Tags {
    fn from(frames: Vec<Frame>) -> Tags {
        Tags { frames }
    }
}

#[test]
fn merge_test() {
    let old = Tags::new()
        .with("TIT2", FrameValue::Text("old title".to_string()))
        .with("TALB", FrameValue::Text("album".to_string()))
        .with("TIT2", FrameValue::Text("another old title".to_string()));
    let new = Tags::new().with("TIT2", FrameValue::Text("new title".to_string()));

    let merged = old.merge(&new);
    assert_eq!(merged.identifiers(), vec!["TALB", "TIT2"]);
    assert_eq!(
        merged.get_all("TIT2").collect::<Vec<_>>(),
        vec![&FrameValue::Text("new title".to_string())]
    );
    assert_eq!(
        merged.get("TALB"),
        Some(&FrameValue::Text("album".to_string()))
    );
}

#[test]
fn get_test() {
    let tags = Tags::new()
        .with("TIT2", FrameValue::Text("title".to_string()))
        .with("TIT2", FrameValue::Text("other".to_string()));
    let identifier = String::from("TIT2");
    assert_eq!(
        tags.get(&identifier),
        Some(&FrameValue::Text("title".to_string()))
    );
    assert_eq!(tags.get_all(&identifier).count(), 2);
    assert_eq!(tags.get("TALB"), None);
}
