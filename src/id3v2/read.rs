use crate::id3v2::structure;
use crate::id3v2::tools::*;
use crate::tools::decode_int_be_u32;
use crate::tools::tag_error;
use crate::Error;

#[derive(Clone, Copy)]
enum Flag {
    TagAlteration,
    FileAlteration,
    ReadOnly,
    GroupingIdentity,
    Compression,
    Encryption,
    Unsynchronisation,
    DataLengthIndicator,
}

// (flag byte, mask, flag)
//   2.3: %abc00000 %ijk00000
//   2.4: %0abc0000 %0h00kmnp
const FLAGS_V3: [(usize, u8, Flag); 6] = [
    (0, 0b10000000, Flag::TagAlteration),
    (0, 0b01000000, Flag::FileAlteration),
    (0, 0b00100000, Flag::ReadOnly),
    (1, 0b10000000, Flag::Compression),
    (1, 0b01000000, Flag::Encryption),
    (1, 0b00100000, Flag::GroupingIdentity),
];
const FLAGS_V4: [(usize, u8, Flag); 8] = [
    (0, 0b01000000, Flag::TagAlteration),
    (0, 0b00100000, Flag::FileAlteration),
    (0, 0b00010000, Flag::ReadOnly),
    (1, 0b01000000, Flag::GroupingIdentity),
    (1, 0b00001000, Flag::Compression),
    (1, 0b00000100, Flag::Encryption),
    (1, 0b00000010, Flag::Unsynchronisation),
    (1, 0b00000001, Flag::DataLengthIndicator),
];

fn flag_table(version: u8) -> &'static [(usize, u8, Flag)] {
    match version {
        3 => &FLAGS_V3,
        4 => &FLAGS_V4,
        // 2.2 frames have no flags
        _ => &[],
    }
}

pub fn flags(input: &[u8], version: u8) -> structure::Flags {
    let mut flags = structure::Flags::default();
    for (byte, mask, flag) in flag_table(version) {
        if input.get(*byte).map_or(false, |b| b & mask != 0) {
            match flag {
                Flag::TagAlteration => flags.drop_after_tag_alteration = true,
                Flag::FileAlteration => flags.drop_after_file_alteration = true,
                Flag::ReadOnly => flags.is_read_only = true,
                Flag::GroupingIdentity => flags.has_grouping_identity = true,
                Flag::Compression => flags.is_compressed = true,
                Flag::Encryption => flags.is_encrypted = true,
                Flag::Unsynchronisation => flags.is_unsynchronized = true,
                Flag::DataLengthIndicator => flags.has_data_length_indicator = true,
            }
        }
    }
    flags
}

pub fn header_size(version: u8) -> usize {
    match version {
        2 => 6,
        _ => 10,
    }
}

pub fn frame_header(input: &[u8], version: u8) -> Result<structure::FrameHeader, Error> {
    if input.len() < header_size(version) {
        return Err(tag_error("Frame header is cut short"));
    }

    // first, deal with id3v2.2
    // 3: Frame ID      $xx xx xx
    // 3: Size          $xx xx xx
    if version == 2 {
        return Ok(structure::FrameHeader {
            name: decode_frame_id(&input[0..3])?,
            size: decode_int_be_u32(&input[3..6]),
            ..Default::default()
        });
    }

    // 4: Frame ID      $xx xx xx xx  (four characters)
    // 4: Size      4 * %0xxxxxxx in 2.4 / $xx in 2.3
    // 2: Flags         $xx xx
    let size = match version {
        3 => decode_int_be_u32(&input[4..8]),
        4 => decode_synch_int(&input[4..8])?,
        _ => return Err(tag_error("Unknown ID3 version")),
    };

    Ok(structure::FrameHeader {
        name: decode_frame_id(&input[0..4])?,
        size,
        flags: flags(&input[8..10], version),
    })
}

pub fn header(input: &[u8]) -> Result<structure::Header, Error> {
    if input.len() < 10 {
        return Err(tag_error("ID3v2 header not found"));
    }

    // ID3v2/input identifier      "ID3"
    if &input[0..3] != b"ID3" {
        return Err(tag_error("ID3v2 header not found"));
    }

    let mut header = structure::Header {
        version: input[3],
        revision: input[4],
        ..Default::default()
    };

    // ID3v2 version              $0X 00
    if header.version == 0xFF || header.revision == 0xFF {
        return Err(tag_error("Invalid ID3v2 version"));
    }

    if header.version > 4 || header.version < 2 {
        return Err(tag_error(&format!(
            "ID3v2.{} is not supported",
            header.version
        )));
    }

    // ID3v2 flags                %abcd0000
    let flags = input[5];

    header.is_unsynchronized = flags & 0b10000000 != 0;
    header.has_extended_header = flags & 0b01000000 != 0;
    header.is_experimental = flags & 0b00100000 != 0;
    header.has_footer = flags & 0b00010000 != 0;

    if flags & 0x0F != 0 {
        return Err(tag_error("Unsupported flags found in ID3 header"));
    }

    header.size = decode_synch_int(&input[6..10])?;

    Ok(header)
}

// extended header length, counted from the end of the tag header
pub fn extended_header_size(input: &[u8], version: u8) -> Result<usize, Error> {
    if input.len() < 4 {
        return Err(tag_error("Extended header is cut short"));
    }
    match version {
        // size excludes itself
        3 => Ok(decode_int_be_u32(&input[0..4]) as usize + 4),
        // size includes itself
        4 => Ok(decode_synch_int(&input[0..4])? as usize),
        _ => Err(tag_error("Extended headers only exist in ID3v2.3 and ID3v2.4")),
    }
}
