mod builder;
mod definitions;
mod frame;
mod frames;
mod read;
mod reader;
mod structure;
mod tag;
mod tools;

pub use self::builder::FrameBuilder;
pub use self::definitions::is_multiple;
pub use self::frame::{decompress, make_frame, read_frame, Frame};
pub use self::frames::FrameKind;
pub use self::read::header_size;
pub use self::reader::FrameReader;
pub use self::structure::{Flags, FrameHeader, Header};
pub use self::tag::{
    create, read, read_body, read_with_options, remove, tag_position, update, write, write_body,
};
pub use self::tools::{decode_synch_int, encode_synch_int, undo_unsynch, unsynch};

/// Parses a frame header; `version` selects the 2.2, 2.3 or 2.4 layout.
pub fn frame_header(input: &[u8], version: u8) -> Result<FrameHeader, crate::Error> {
    self::read::frame_header(input, version)
}

#[cfg(test)]
mod tests;
