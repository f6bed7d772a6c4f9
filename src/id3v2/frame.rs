use std::borrow::Cow;
use std::io::Read;

use flate2::read::{DeflateDecoder, ZlibDecoder};
use tracing::{debug, trace};

use crate::id3v2::definitions::{is_multiple, v3_identifier};
use crate::id3v2::frames::{self, FrameKind};
use crate::id3v2::read;
use crate::id3v2::structure::Flags;
use crate::id3v2::tools::{decode_synch_int, undo_unsynch};
use crate::tools::decode_int_be_u32;
use crate::types::FrameValue;

/// A single decoded frame.
#[derive(PartialEq, Debug, Clone)]
pub struct Frame {
    pub identifier: String,
    pub value: FrameValue,
    /// flags as found in the frame header, never written back
    pub flags: Flags,
}

impl Frame {
    pub fn new(identifier: &str, value: FrameValue) -> Frame {
        Frame {
            identifier: identifier.to_string(),
            value,
            flags: Flags::default(),
        }
    }
}

/// Decodes the frame at the start of `input`.
///
/// `None` means the frame is skipped: too short, encrypted, undecompressable,
/// of an unknown type, or with a body its type cannot make sense of.
/// `input` may extend past the frame.
pub fn read_frame(input: &[u8], version: u8) -> Option<Frame> {
    read_nested_frame(input, version, 0)
}

// `depth` counts the CHAP / CTOC frames around this one
pub(crate) fn read_nested_frame(input: &[u8], version: u8, depth: usize) -> Option<Frame> {
    let header_size = read::header_size(version);
    // a frame has at least one byte of body
    if input.len() < header_size + 1 {
        return None;
    }

    let header = read::frame_header(&input[..header_size], version).ok()?;
    if header.flags.is_encrypted {
        debug!(frame = %header.name, "skipping encrypted frame");
        return None;
    }

    // 2.3 compressed frames always carry the decompressed size
    let has_data_length = header.flags.has_data_length_indicator
        || (version == 3 && header.flags.is_compressed);
    let (data_length, offset) = if has_data_length {
        let field = input.get(header_size..header_size + 4)?;
        let length = match version {
            4 => decode_synch_int(field).ok()?,
            _ => decode_int_be_u32(field),
        };
        (length, 4)
    } else {
        (0, 0)
    };

    let start = header_size + offset;
    let end = (start + (header.size as usize).saturating_sub(offset)).min(input.len());
    let mut body = Cow::Borrowed(&input[start..end]);

    if header.flags.is_unsynchronized {
        undo_unsynch(body.to_mut());
    }

    if header.flags.is_compressed {
        body = match decompress(&body, data_length) {
            Some(b) => Cow::Owned(b),
            None => {
                debug!(frame = %header.name, data_length, "could not decompress frame");
                return None;
            }
        };
    }

    let kind = match FrameKind::from_identifier(&header.name) {
        Some(k) => k,
        None => {
            debug!(frame = %header.name, "skipping unsupported frame");
            return None;
        }
    };
    let value = match frames::read(kind, &body, version, depth) {
        Some(v) => v,
        None => {
            debug!(frame = %header.name, "skipping malformed frame");
            return None;
        }
    };

    trace!(frame = %header.name, size = header.size, "read frame");
    Some(Frame {
        identifier: header.name,
        value,
        flags: header.flags,
    })
}

/// Inflates a compressed frame body into exactly `expected` bytes.
///
/// ID3v2 asks for zlib, but not every writer agrees on whether the
/// 2 byte zlib header is stored, so zlib, raw deflate and raw deflate
/// after 2 bytes are tried in that order.
pub fn decompress(input: &[u8], expected: u32) -> Option<Vec<u8>> {
    if input.len() < 5 {
        return None;
    }
    let expected = expected as usize;
    inflate(ZlibDecoder::new(input), expected)
        .or_else(|| inflate(DeflateDecoder::new(input), expected))
        .or_else(|| inflate(DeflateDecoder::new(&input[2..]), expected))
}

fn inflate<R: Read>(decoder: R, expected: usize) -> Option<Vec<u8>> {
    let mut vec = Vec::new();
    // one byte past the expected length is enough to reject the output
    decoder
        .take(expected as u64 + 1)
        .read_to_end(&mut vec)
        .ok()?;
    if vec.len() == expected {
        Some(vec)
    } else {
        None
    }
}

/// Encodes `values` as consecutive frames under `identifier`.
///
/// Identifiers that may not repeat only get their first value written.
/// Values the frame type cannot encode are skipped; `None` if nothing is
/// left to write.
pub fn make_frame<'a, I>(identifier: &str, values: I) -> Option<Vec<u8>>
where
    I: IntoIterator<Item = &'a FrameValue>,
{
    let kind = FrameKind::from_identifier(identifier)?;
    let limit = if is_multiple(v3_identifier(identifier).unwrap_or(identifier)) {
        usize::MAX
    } else {
        1
    };

    let mut vec = Vec::new();
    let mut urls: Vec<&FrameValue> = Vec::new();
    for (index, value) in values.into_iter().take(limit).enumerate() {
        // repeated urls are written once
        if kind == FrameKind::Url {
            if urls.contains(&value) {
                continue;
            }
            urls.push(value);
        }
        match frames::create(kind, identifier, value, index) {
            Some(mut frame) => vec.append(&mut frame),
            None => debug!(frame = identifier, index, "skipping value"),
        }
    }

    if vec.is_empty() {
        None
    } else {
        Some(vec)
    }
}
