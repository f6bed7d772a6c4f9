use crc::crc32::checksum_ieee;
use std::fmt;

const PICTURE_TYPES: [&str; 21] = [
    "other",
    "file icon",
    "other file icon",
    "front cover",
    "back cover",
    "leaflet page",
    "media",
    "lead artist",
    "artist",
    "conductor",
    "band",
    "composer",
    "lyricist",
    "recording location",
    "during recording",
    "during performance",
    "video screen capture",
    "a bright coloured fish",
    "illustration",
    "band logotype",
    "publisher logotype",
];

/// APIC picture type, `0x00..=0x14`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct PictureType(pub u8);

impl PictureType {
    pub const OTHER: PictureType = PictureType(0x00);
    pub const FRONT_COVER: PictureType = PictureType(0x03);
    pub const BACK_COVER: PictureType = PictureType(0x04);

    pub fn id(&self) -> u8 {
        self.0
    }

    /// `None` for ids outside of the ones defined by ID3v2.
    pub fn name(&self) -> Option<&'static str> {
        PICTURE_TYPES.get(self.0 as usize).copied()
    }
}

impl Default for PictureType {
    fn default() -> PictureType {
        PictureType::FRONT_COVER
    }
}

/// An attached picture (APIC / PIC).
#[derive(PartialEq, Clone, Default)]
pub struct Picture {
    /// Sniffed from `image` when left empty on write.
    pub mime: String,
    pub picture_type: PictureType,
    pub description: String,
    pub image: Vec<u8>,
}

impl Picture {
    pub fn new(image: Vec<u8>) -> Picture {
        Picture {
            image,
            ..Default::default()
        }
    }
}

pub fn mime_from_bytes(image: &[u8]) -> Option<&'static str> {
    match image {
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        _ => None,
    }
}

// binary payloads are printed as checksum and length
pub(crate) fn describe_bytes(bytes: &[u8]) -> String {
    format!("0x{:08X} ({} bytes)", checksum_ieee(bytes), bytes.len())
}

impl fmt::Debug for Picture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Picture")
            .field("mime", &self.mime)
            .field("picture_type", &self.picture_type)
            .field("description", &self.description)
            .field("image", &describe_bytes(&self.image))
            .finish()
    }
}

#[test]
fn mime_test() {
    assert_eq!(
        mime_from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        Some("image/png")
    );
    assert_eq!(mime_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
    assert_eq!(mime_from_bytes(&[0xFF, 0xD8]), None);
    assert_eq!(mime_from_bytes(b"GIF89a"), None);
}

#[test]
fn picture_type_test() {
    assert_eq!(PictureType::default().name(), Some("front cover"));
    assert_eq!(PictureType(20).name(), Some("publisher logotype"));
    assert_eq!(PictureType(21).name(), None);
}
