extern crate encoding;
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

/// Text encodings an ID3v2 frame can announce with its leading encoding byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Latin1,
    Utf16,
    Utf16BE,
    Utf8,
}

impl TextEncoding {
    pub fn from_byte(b: u8) -> TextEncoding {
        match b {
            0x00 => TextEncoding::Latin1,
            0x01 => TextEncoding::Utf16,
            0x02 => TextEncoding::Utf16BE,
            // anything else is most likely a broken UTF-8 writer
            _ => TextEncoding::Utf8,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            TextEncoding::Latin1 => 0x00,
            TextEncoding::Utf16 => 0x01,
            TextEncoding::Utf16BE => 0x02,
            TextEncoding::Utf8 => 0x03,
        }
    }

    pub fn is_double_byte(self) -> bool {
        match self {
            TextEncoding::Utf16 | TextEncoding::Utf16BE => true,
            TextEncoding::Latin1 | TextEncoding::Utf8 => false,
        }
    }

    pub fn terminator(self) -> &'static [u8] {
        if self.is_double_byte() {
            b"\x00\x00"
        } else {
            b"\x00"
        }
    }

    pub fn decode(self, input: &[u8]) -> String {
        match self {
            TextEncoding::Latin1 => decode_iso_8859_1(input),
            TextEncoding::Utf16 => decode_utf16(input),
            TextEncoding::Utf16BE => decode_utf16be(input),
            TextEncoding::Utf8 => decode_utf8(input),
        }
    }

    pub fn encode(self, input: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => encode_iso_8859_1(input),
            TextEncoding::Utf16 => encode_utf16(input),
            TextEncoding::Utf16BE => encode_utf16be(input),
            TextEncoding::Utf8 => input.as_bytes().to_vec(),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> TextEncoding {
        TextEncoding::Latin1
    }
}

pub fn encode_iso_8859_1(input: &str) -> Vec<u8> {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .encode(input, EncoderTrap::Replace)
        .unwrap_or(Vec::new())
}

// little endian, with BOM
pub fn encode_utf16(input: &str) -> Vec<u8> {
    use self::encoding::all::UTF_16LE;
    let mut v = vec![0xFF, 0xFE];
    v.append(
        &mut UTF_16LE
            .encode(input, EncoderTrap::Replace)
            .unwrap_or(Vec::new()),
    );
    v
}

pub fn encode_utf16be(input: &str) -> Vec<u8> {
    use self::encoding::all::UTF_16BE;
    UTF_16BE
        .encode(input, EncoderTrap::Replace)
        .unwrap_or(Vec::new())
}

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string()
}

pub fn decode_utf8(input: &[u8]) -> String {
    use self::encoding::all::UTF_8;
    UTF_8
        .decode(input, DecoderTrap::Replace)
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string()
}

pub fn decode_utf16(input: &[u8]) -> String {
    use self::encoding::all::{UTF_16BE, UTF_16LE};
    match input {
        [0xFF, 0xFE, rest @ ..] => UTF_16LE.decode(rest, DecoderTrap::Replace),
        [0xFE, 0xFF, rest @ ..] => UTF_16BE.decode(rest, DecoderTrap::Replace),
        // in case of no BOM, assume big endian
        _ => UTF_16BE.decode(input, DecoderTrap::Replace),
    }
    .unwrap_or("".to_string())
    .trim_end_matches('\0')
    .to_string()
}

pub fn decode_utf16be(input: &[u8]) -> String {
    use self::encoding::all::UTF_16BE;
    UTF_16BE
        .decode(input, DecoderTrap::Replace)
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string()
}
