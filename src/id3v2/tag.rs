use std::borrow::Cow;

use tracing::{debug, warn};

use crate::id3v2::frame::{make_frame, read_nested_frame};
use crate::id3v2::read::{extended_header_size, frame_header, header_size};
use crate::id3v2::structure::Header;
use crate::id3v2::tools::{decode_synch_int, encode_synch_int, undo_unsynch};
use crate::tools::tag_error;
use crate::types::{Options, Tags};
use crate::Error;

const TAG_HEADER_SIZE: usize = 10;

/// Offset of the first thing that looks like a tag header.
///
/// Only the magic and version bytes are checked, the size is left for the
/// caller to validate.
pub fn tag_position(input: &[u8]) -> Option<usize> {
    input
        .windows(TAG_HEADER_SIZE)
        .position(|h| &h[0..3] == b"ID3" && h[3] != 0xFF && h[4] != 0xFF)
}

pub fn read(input: &[u8]) -> Result<Tags, Error> {
    read_with_options(input, &Options::default())
}

pub fn read_with_options(input: &[u8], options: &Options) -> Result<Tags, Error> {
    let position = tag_position(input).ok_or_else(|| tag_error("ID3v2 header not found"))?;
    let input = &input[position..];
    let header = Header::parse(input)?;

    // 2.2 used this bit for a compression scheme that was never defined
    if header.version == 2 && header.has_extended_header {
        return Err(tag_error("Compressed ID3v2.2 tags are not supported"));
    }

    let end = (TAG_HEADER_SIZE + header.size as usize).min(input.len());
    let mut body = Cow::Borrowed(&input[TAG_HEADER_SIZE..end]);

    // with older id3 versions, run unsynch on the whole tag
    if header.is_unsynchronized && header.version < 4 {
        undo_unsynch(body.to_mut());
    }

    let start = if header.has_extended_header {
        extended_header_size(&body, header.version)?.min(body.len())
    } else {
        0
    };

    debug!(
        version = header.version,
        size = header.size,
        "reading ID3v2 tag"
    );
    Ok(read_body(&body[start..], header.version, options))
}

/// Decodes the frames of a tag body.
///
/// Stops at the first header that does not parse, which is usually padding.
/// Frames the options reject are skipped without decoding their body.
pub fn read_body(body: &[u8], version: u8, options: &Options) -> Tags {
    read_nested_body(body, version, options, 0)
}

pub(crate) fn read_nested_body(body: &[u8], version: u8, options: &Options, depth: usize) -> Tags {
    let header_size = header_size(version);
    let mut tags = Tags::new();
    let mut position = 0;

    while position + header_size < body.len() {
        let input = &body[position..];
        let header = match frame_header(input, version) {
            Ok(h) => h,
            Err(_) => break,
        };

        if options.accepts(&header.name) {
            if let Some(frame) = read_nested_frame(input, version, depth) {
                tags.frames.push(frame);
            }
        }

        position = position.saturating_add(header_size + header.size as usize);
    }
    tags
}

/// All frames of `tags`, grouped by identifier in order of first appearance.
pub fn write_body(tags: &Tags) -> Vec<u8> {
    let mut vec = Vec::new();
    for identifier in tags.identifiers() {
        if let Some(mut frames) = make_frame(identifier, tags.get_all(identifier)) {
            vec.append(&mut frames);
        }
    }
    vec
}

/// A complete ID3v2.4 tag.
pub fn create(tags: &Tags) -> Result<Vec<u8>, Error> {
    let mut frames = write_body(tags);

    let mut vec = Vec::with_capacity(frames.len() + TAG_HEADER_SIZE);
    // id3v24; no flags
    vec.extend_from_slice(b"ID3\x04\x00\x00");
    vec.append(&mut encode_synch_int(frames.len() as u32, false)?);
    vec.append(&mut frames);
    Ok(vec)
}

/// `input` without its first tag.
pub fn remove(input: &[u8]) -> Result<Vec<u8>, Error> {
    let position = match tag_position(input) {
        Some(p) => p,
        None => return Ok(input.to_vec()),
    };

    let size = match decode_synch_int(&input[position + 6..position + 10]) {
        Ok(s) => s as usize,
        Err(e) => {
            warn!(position, "ID3v2 tag has an invalid size");
            return Err(Error::TagError(e));
        }
    };
    let footer = if input[position + 5] & 0b00010000 != 0 {
        TAG_HEADER_SIZE
    } else {
        0
    };

    let end = (position + TAG_HEADER_SIZE + size + footer).min(input.len());
    let mut vec = Vec::with_capacity(input.len() - (end - position));
    vec.extend_from_slice(&input[..position]);
    vec.extend_from_slice(&input[end..]);
    Ok(vec)
}

/// Replaces any tag in `input` with `tags`, placed at the front.
pub fn write(tags: &Tags, input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut vec = create(tags)?;
    vec.append(&mut remove(input)?);
    Ok(vec)
}

/// Like `write`, keeping the current frames whose identifier `tags` does
/// not mention.
pub fn update(tags: &Tags, input: &[u8]) -> Result<Vec<u8>, Error> {
    let current = match read(input) {
        Ok(t) => t,
        Err(Error::TagError(_)) => Tags::new(),
        Err(e) => return Err(e),
    };
    write(&current.merge(tags), input)
}
