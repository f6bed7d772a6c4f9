mod tools;

use std::io::prelude::*;

use flate2::write::{DeflateEncoder, ZlibEncoder};
use flate2::Compression;

use crate::id3v2::*;
use crate::types::*;

const TEXT: &[u8] = b"\x03A fairly long title that compresses";

fn frame_v4(identifier: &str, flags: [u8; 2], body: &[u8]) -> Vec<u8> {
    let mut vec = identifier.as_bytes().to_vec();
    vec.append(&mut encode_synch_int(body.len() as u32, false).unwrap());
    vec.extend_from_slice(&flags);
    vec.extend_from_slice(body);
    vec
}

fn frame_v3(identifier: &str, flags: [u8; 2], body: &[u8]) -> Vec<u8> {
    let mut vec = identifier.as_bytes().to_vec();
    vec.extend_from_slice(&(body.len() as u32).to_be_bytes());
    vec.extend_from_slice(&flags);
    vec.extend_from_slice(body);
    vec
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

// compressed v4 body: synchsafe decompressed size, then the data
fn compressed_body(expected: usize, data: &[u8]) -> Vec<u8> {
    let mut body = encode_synch_int(expected as u32, false).unwrap();
    body.extend_from_slice(data);
    body
}

fn title() -> FrameValue {
    FrameValue::Text("A fairly long title that compresses".to_string())
}

#[test]
fn short_frame_test() {
    assert_eq!(read_frame(b"TIT2\x00\x00\x00\x01\x00\x00", 4), None);
    assert_eq!(read_frame(b"TT2\x00\x00\x01", 2), None);
    assert_eq!(read_frame(b"", 3), None);
}

#[test]
fn plain_frame_test() {
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x00], TEXT), 4).unwrap();
    assert_eq!(frame.identifier, "TIT2");
    assert_eq!(frame.value, title());
    assert_eq!(frame.flags, Flags::default());

    // trailing data belongs to the next frame
    let mut input = frame_v4("TIT2", [0x00, 0x00], TEXT);
    input.extend_from_slice(b"TALB\x00\x00\x00\x02\x00\x00\x00a");
    assert_eq!(read_frame(&input, 4).unwrap().value, title());
}

#[test]
fn encrypted_frame_test() {
    assert_eq!(read_frame(&frame_v4("TIT2", [0x00, 0x04], TEXT), 4), None);
    assert_eq!(read_frame(&frame_v3("TIT2", [0x00, 0x40], TEXT), 3), None);
}

#[test]
fn status_flags_test() {
    let frame = read_frame(&frame_v4("TIT2", [0x70, 0x00], TEXT), 4).unwrap();
    assert!(frame.flags.drop_after_tag_alteration);
    assert!(frame.flags.drop_after_file_alteration);
    assert!(frame.flags.is_read_only);
    assert_eq!(frame.value, title());

    let frame = read_frame(&frame_v3("TIT2", [0x80, 0x00], TEXT), 3).unwrap();
    assert!(frame.flags.drop_after_tag_alteration);
    assert!(!frame.flags.is_read_only);
}

#[test]
fn zlib_frame_test() {
    let body = compressed_body(TEXT.len(), &zlib(TEXT));
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x09], &body), 4).unwrap();
    assert!(frame.flags.is_compressed);
    assert!(frame.flags.has_data_length_indicator);
    assert_eq!(frame.value, title());
}

#[test]
fn raw_deflate_frame_test() {
    let body = compressed_body(TEXT.len(), &deflate(TEXT));
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x09], &body), 4).unwrap();
    assert_eq!(frame.value, title());
}

#[test]
fn prefixed_deflate_frame_test() {
    let mut data = vec![0x00, 0x00];
    data.append(&mut deflate(TEXT));
    let body = compressed_body(TEXT.len(), &data);
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x09], &body), 4).unwrap();
    assert_eq!(frame.value, title());
}

#[test]
fn decompressed_size_mismatch_test() {
    let longer = compressed_body(TEXT.len() + 1, &zlib(TEXT));
    assert_eq!(read_frame(&frame_v4("TIT2", [0x00, 0x09], &longer), 4), None);
    let shorter = compressed_body(TEXT.len() - 1, &zlib(TEXT));
    assert_eq!(read_frame(&frame_v4("TIT2", [0x00, 0x09], &shorter), 4), None);
}

#[test]
fn decompress_test() {
    assert_eq!(decompress(&zlib(TEXT), TEXT.len() as u32), Some(TEXT.to_vec()));
    assert_eq!(decompress(&deflate(TEXT), TEXT.len() as u32), Some(TEXT.to_vec()));
    // too short to hold anything compressed
    assert_eq!(decompress(&[0x78, 0x9C, 0x03, 0x00], 0), None);
    assert_eq!(decompress(&[0xFF; 8], 8), None);
}

#[test]
fn compressed_v3_frame_test() {
    // 2.3 has no data length flag, the size is always there and plain
    let mut body = (TEXT.len() as u32).to_be_bytes().to_vec();
    body.append(&mut zlib(TEXT));
    let frame = read_frame(&frame_v3("TIT2", [0x00, 0x80], &body), 3).unwrap();
    assert_eq!(frame.value, title());
}

#[test]
fn data_length_only_test() {
    // uncompressed body behind a data length indicator
    let body = compressed_body(TEXT.len(), TEXT);
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x01], &body), 4).unwrap();
    assert_eq!(frame.value, title());
}

#[test]
fn unsynchronised_frame_test() {
    let body = unsynch(b"\x00a\xFF\xE5b\xFF");
    assert_eq!(body, b"\x00a\xFF\x00\xE5b\xFF\x00".to_vec());
    let frame = read_frame(&frame_v4("TIT2", [0x00, 0x02], &body), 4).unwrap();
    assert_eq!(frame.value, FrameValue::Text("a\u{FF}\u{E5}b\u{FF}".to_string()));
}

#[test]
fn v22_frame_test() {
    let frame = read_frame(b"TT2\x00\x00\x06\x00Title", 2).unwrap();
    assert_eq!(frame.identifier, "TT2");
    assert_eq!(frame.value, FrameValue::Text("Title".to_string()));

    // 3 character image format instead of a MIME type
    let frame = read_frame(b"PIC\x00\x00\x0D\x00JPG\x03desc\x00\xFF\xD8\xFF", 2).unwrap();
    assert_eq!(frame.identifier, "PIC");
    assert_eq!(
        frame.value,
        FrameValue::Picture(Picture {
            mime: "JPG".to_string(),
            picture_type: PictureType::FRONT_COVER,
            description: "desc".to_string(),
            image: vec![0xFF, 0xD8, 0xFF],
        })
    );

    let frame = read_frame(b"COM\x00\x00\x0A\x00engabc\x00xy", 2).unwrap();
    assert_eq!(frame.identifier, "COM");
    assert_eq!(
        frame.value,
        FrameValue::Comment(Comment {
            language: "eng".to_string(),
            short_text: "abc".to_string(),
            text: "xy".to_string(),
        })
    );
}

#[test]
fn unknown_frame_test() {
    assert_eq!(read_frame(&frame_v4("XYZW", [0x00, 0x00], b"data"), 4), None);
    assert_eq!(read_frame(&frame_v4("MCDI", [0x00, 0x00], b"data"), 4), None);
}

#[test]
fn comment_frame_test() {
    let comment = FrameValue::Comment(Comment {
        language: "eng".to_string(),
        short_text: "".to_string(),
        text: "Hello".to_string(),
    });
    let frame = make_frame("COMM", &[comment.clone()]).unwrap();
    assert_eq!(
        frame,
        b"COMM\x00\x00\x00\x14\x00\x00\x01eng\xFF\xFE\x00\x00\xFF\xFEH\x00e\x00l\x00l\x00o\x00"
            .to_vec()
    );
    assert_eq!(read_frame(&frame, 4).unwrap().value, comment);
}

#[test]
fn multiple_frames_test() {
    let values = vec![
        FrameValue::UserText(UserText {
            description: "first".to_string(),
            value: "1".to_string(),
        }),
        FrameValue::UserText(UserText {
            description: "second".to_string(),
            value: "2".to_string(),
        }),
    ];
    let bytes = make_frame("TXXX", &values).unwrap();
    let tags = read_body(&bytes, 4, &Options::default());
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.get_all("TXXX").cloned().collect::<Vec<_>>(), values);
}

#[test]
fn single_frame_test() {
    let values = vec![
        FrameValue::Text("first".to_string()),
        FrameValue::Text("second".to_string()),
    ];
    let bytes = make_frame("TIT2", &values).unwrap();
    let tags = read_body(&bytes, 4, &Options::default());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("TIT2"), Some(&values[0]));
}

#[test]
fn repeated_url_test() {
    let url = FrameValue::Url("http://example.com".to_string());
    let other = FrameValue::Url("http://example.org".to_string());
    let bytes = make_frame("WCOM", &[url.clone(), url.clone(), other.clone()]).unwrap();
    let tags = read_body(&bytes, 4, &Options::default());
    assert_eq!(tags.get_all("WCOM").cloned().collect::<Vec<_>>(), vec![url, other]);
}

#[test]
fn empty_frame_test() {
    assert_eq!(make_frame("TIT2", &[FrameValue::Text("".to_string())]), None);
    assert_eq!(make_frame("TIT2", &Vec::<FrameValue>::new()), None);
    // value does not fit the frame type
    assert_eq!(make_frame("APIC", &[FrameValue::Text("cover".to_string())]), None);
    assert_eq!(make_frame("XYZW", &[FrameValue::Text("x".to_string())]), None);
    // always written with a four character identifier
    assert_eq!(make_frame("TT2", &[FrameValue::Text("x".to_string())]), None);
}

#[test]
fn chapter_without_offsets_test() {
    // element id and times only
    let body = b"ch1\x00\x00\x00\x00\x00\x00\x00\x10\x00";
    assert_eq!(read_frame(&frame_v4("CHAP", [0x00, 0x00], body), 4), None);
}

#[test]
fn table_of_contents_flags_test() {
    let toc = |id: &str| {
        FrameValue::TableOfContents(TableOfContents {
            element_id: id.to_string(),
            is_ordered: true,
            elements: vec!["ch1".to_string()],
            tags: Tags::new(),
        })
    };
    let bytes = make_frame("CTOC", &[toc("toc"), toc("sub")]).unwrap();
    assert_eq!(
        &bytes[..24],
        b"CTOC\x00\x00\x00\x0A\x00\x00toc\x00\x03\x01ch1\x00CTOC".as_ref()
    );
    // only the first one is top level
    assert_eq!(bytes[34], 0x01);
    assert_eq!(bytes.len(), 40);
}
