use crate::id3v2::tools::{encode_frame_id, encode_synch_int};
use crate::tools::encode_int_be;
use crate::tools::encoding::TextEncoding;

/// Append-only frame writer.
///
/// Collects the body field by field; `build` prefixes it with the frame
/// header (identifier, synchsafe size, no flags).
pub struct FrameBuilder {
    identifier: String,
    body: Vec<u8>,
}

impl FrameBuilder {
    pub fn new(identifier: &str) -> FrameBuilder {
        FrameBuilder {
            identifier: identifier.to_string(),
            body: Vec::new(),
        }
    }

    pub fn append_number(mut self, value: u32, width: usize) -> FrameBuilder {
        self.body.append(&mut encode_int_be(value, width));
        self
    }

    pub fn append_bytes(mut self, data: &[u8]) -> FrameBuilder {
        self.body.extend_from_slice(data);
        self
    }

    pub fn append_encoding(self, encoding: TextEncoding) -> FrameBuilder {
        self.append_number(encoding.to_byte() as u32, 1)
    }

    /// Encoded text, null padded or truncated to `width` bytes when given.
    pub fn append_string(mut self, data: &str, width: Option<usize>, encoding: TextEncoding) -> FrameBuilder {
        let mut encoded = encoding.encode(data);
        if let Some(w) = width {
            encoded.resize(w, 0x00);
        }
        self.body.append(&mut encoded);
        self
    }

    pub fn append_null_terminated(mut self, data: &str, encoding: TextEncoding) -> FrameBuilder {
        self.body.append(&mut encoding.encode(data));
        self.body.extend_from_slice(encoding.terminator());
        self
    }

    /// `None` if the identifier is not a valid frame id or the body does
    /// not fit in 28 bits.
    pub fn build(self) -> Option<Vec<u8>> {
        // always written with a 2.3/2.4 header
        if self.identifier.len() != 4 {
            return None;
        }
        let mut vec = Vec::with_capacity(self.body.len() + 10);
        vec.append(&mut encode_frame_id(&self.identifier).ok()?);
        vec.append(&mut encode_synch_int(self.body.len() as u32, false).ok()?);
        // no flags
        vec.extend_from_slice(b"\x00\x00");
        vec.extend_from_slice(&self.body);
        Some(vec)
    }
}
