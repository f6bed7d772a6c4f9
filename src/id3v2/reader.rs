use crate::tools::decode_int_be_u32;
use crate::tools::encoding::TextEncoding;

/// Sequential reader over a frame body.
///
/// Every `consume_*` call either returns the requested field and moves past
/// it, or returns `None` and leaves the position untouched, so running out
/// of data is never an error by itself.
pub struct FrameReader<'a> {
    buffer: &'a [u8],
    position: usize,
    encoding: TextEncoding,
}

impl<'a> FrameReader<'a> {
    /// Reader for layouts without an encoding byte; text is Latin-1.
    pub fn new(buffer: &'a [u8]) -> FrameReader<'a> {
        FrameReader {
            buffer,
            position: 0,
            encoding: TextEncoding::Latin1,
        }
    }

    /// Reader for layouts starting with an encoding byte, which is consumed.
    pub fn with_encoding_byte(buffer: &'a [u8]) -> FrameReader<'a> {
        let mut reader = FrameReader::new(buffer);
        if let Some(b) = reader.consume_bytes(1) {
            reader.encoding = TextEncoding::from_byte(b[0]);
        }
        reader
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn consume_bytes(&mut self, width: usize) -> Option<&'a [u8]> {
        if self.remaining() < width {
            return None;
        }
        let start = self.position;
        self.position += width;
        Some(&self.buffer[start..self.position])
    }

    pub fn consume_rest(&mut self) -> &'a [u8] {
        let start = self.position;
        self.position = self.buffer.len();
        &self.buffer[start..]
    }

    /// Big endian unsigned number, `width` of at most 4 bytes.
    pub fn consume_number(&mut self, width: usize) -> Option<u32> {
        self.consume_bytes(width).map(decode_int_be_u32)
    }

    /// Fixed width string, or the rest of the buffer when `width` is `None`.
    pub fn consume_string(&mut self, width: Option<usize>, encoding: TextEncoding) -> Option<String> {
        let bytes = match width {
            Some(w) => self.consume_bytes(w)?,
            None => self.consume_rest(),
        };
        Some(encoding.decode(bytes))
    }

    /// The rest of the buffer as a string in the frame's encoding.
    pub fn consume_text(&mut self) -> String {
        let encoding = self.encoding;
        encoding.decode(self.consume_rest())
    }

    pub fn consume_null_terminated(&mut self, encoding: TextEncoding) -> Option<String> {
        let rest = &self.buffer[self.position..];
        let end = null_terminator_position(rest, encoding)?;
        self.position += end + encoding.terminator().len();
        Some(encoding.decode(&rest[..end]))
    }

    /// Null terminated string in the frame's encoding.
    pub fn consume_null_terminated_text(&mut self) -> Option<String> {
        self.consume_null_terminated(self.encoding)
    }
}

// double byte encodings only match terminators on an even offset
fn null_terminator_position(input: &[u8], encoding: TextEncoding) -> Option<usize> {
    if encoding.is_double_byte() {
        (0..input.len() / 2)
            .map(|i| i * 2)
            .find(|&i| input[i] == 0x00 && input[i + 1] == 0x00)
    } else {
        input.iter().position(|&b| b == 0x00)
    }
}
