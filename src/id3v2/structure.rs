use crate::id3v2::read;
use crate::Error;

#[derive(Debug, Default, PartialEq)]
pub struct Header {
    // footer is essentially the same as the header
    pub version: u8,
    pub revision: u8,
    pub size: u32, // in bytes, goes up to 256 mb

    pub is_unsynchronized: bool,
    pub has_extended_header: bool,
    pub is_experimental: bool,
    pub has_footer: bool,
}

impl Header {
    /// Parses the 10 byte tag header at the start of `input`.
    pub fn parse(input: &[u8]) -> Result<Header, Error> {
        read::header(input)
    }
}

#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Flags {
    // status
    pub drop_after_tag_alteration: bool,
    pub drop_after_file_alteration: bool,
    pub is_read_only: bool,

    // format
    pub has_grouping_identity: bool,
    pub is_compressed: bool,
    pub is_encrypted: bool,
    pub is_unsynchronized: bool,
    pub has_data_length_indicator: bool,
}

#[derive(Debug, Default, PartialEq)]
pub struct FrameHeader {
    pub name: String,
    /// body size, header excluded
    pub size: u32,
    pub flags: Flags,
}
