use std::collections::BTreeMap;

use tracing::debug;

use crate::id3v2::builder::FrameBuilder;
use crate::id3v2::definitions::v3_identifier;
use crate::id3v2::reader::FrameReader;
use crate::id3v2::tag;
use crate::tools::decode_int_be_u32;
use crate::tools::encoding::TextEncoding::{Latin1, Utf16};
use crate::types::*;

// CHAP / CTOC frames deeper than this get no nested frames
const MAX_NESTING: usize = 4;

/// Frame layouts known to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    AttachedPicture,
    Comment,
    UnsynchronisedLyrics,
    SynchronisedLyrics,
    UserText,
    UserUrl,
    Popularity,
    Private,
    UniqueFileId,
    Chapter,
    TableOfContents,
    EventTimingCodes,
    Commercial,
    /// any other `T...` frame
    Text,
    /// any other `W...` frame
    Url,
}

impl FrameKind {
    pub fn from_identifier(identifier: &str) -> Option<FrameKind> {
        let id = v3_identifier(identifier).unwrap_or(identifier);
        match id {
            "APIC" => Some(FrameKind::AttachedPicture),
            "COMM" => Some(FrameKind::Comment),
            "USLT" => Some(FrameKind::UnsynchronisedLyrics),
            "SYLT" => Some(FrameKind::SynchronisedLyrics),
            "TXXX" => Some(FrameKind::UserText),
            "WXXX" => Some(FrameKind::UserUrl),
            "POPM" => Some(FrameKind::Popularity),
            "PRIV" => Some(FrameKind::Private),
            "UFID" => Some(FrameKind::UniqueFileId),
            "CHAP" => Some(FrameKind::Chapter),
            "CTOC" => Some(FrameKind::TableOfContents),
            "ETCO" => Some(FrameKind::EventTimingCodes),
            "COMR" => Some(FrameKind::Commercial),
            _ if id.starts_with('T') => Some(FrameKind::Text),
            _ if id.starts_with('W') => Some(FrameKind::Url),
            _ => None,
        }
    }
}

pub fn read(kind: FrameKind, body: &[u8], version: u8, depth: usize) -> Option<FrameValue> {
    match kind {
        FrameKind::AttachedPicture => read_picture(body, version).map(FrameValue::Picture),
        FrameKind::Comment => read_comment(body).map(FrameValue::Comment),
        FrameKind::UnsynchronisedLyrics => {
            read_comment(body).map(FrameValue::UnsynchronisedLyrics)
        }
        FrameKind::SynchronisedLyrics => {
            read_synchronised_lyrics(body).map(FrameValue::SynchronisedLyrics)
        }
        FrameKind::UserText => read_user_text(body).map(FrameValue::UserText),
        FrameKind::UserUrl => read_user_url(body).map(FrameValue::UserUrl),
        FrameKind::Popularity => read_popularity(body).map(FrameValue::Popularity),
        FrameKind::Private => read_private(body).map(FrameValue::Private),
        FrameKind::UniqueFileId => read_unique_file_id(body).map(FrameValue::UniqueFileId),
        FrameKind::Chapter => read_chapter(body, version, depth).map(FrameValue::Chapter),
        FrameKind::TableOfContents => {
            read_table_of_contents(body, version, depth).map(FrameValue::TableOfContents)
        }
        FrameKind::EventTimingCodes => {
            read_event_timing_codes(body).map(FrameValue::EventTimingCodes)
        }
        FrameKind::Commercial => read_commercial(body).map(FrameValue::Commercial),
        FrameKind::Text => Some(FrameValue::Text(
            FrameReader::with_encoding_byte(body).consume_text(),
        )),
        FrameKind::Url => Some(FrameValue::Url(
            FrameReader::new(body).consume_string(None, Latin1)?,
        )),
    }
}

/// Encodes a single value; `index` is its position among the values
/// written under the same identifier.
///
/// `None` when the value does not fit the frame kind or misses a field the
/// layout requires.
pub fn create(kind: FrameKind, identifier: &str, value: &FrameValue, index: usize) -> Option<Vec<u8>> {
    match (kind, value) {
        (FrameKind::AttachedPicture, FrameValue::Picture(p)) => create_picture(p),
        (FrameKind::Comment, FrameValue::Comment(c)) => create_comment("COMM", c),
        (FrameKind::UnsynchronisedLyrics, FrameValue::UnsynchronisedLyrics(c)) => {
            create_comment("USLT", c)
        }
        (FrameKind::UnsynchronisedLyrics, FrameValue::Text(text)) => create_comment(
            "USLT",
            &Comment {
                language: "eng".to_string(),
                short_text: String::new(),
                text: text.clone(),
            },
        ),
        (FrameKind::SynchronisedLyrics, FrameValue::SynchronisedLyrics(l)) => {
            create_synchronised_lyrics(l)
        }
        (FrameKind::UserText, FrameValue::UserText(t)) => create_user_text(t),
        (FrameKind::UserUrl, FrameValue::UserUrl(u)) => create_user_url(u),
        (FrameKind::Popularity, FrameValue::Popularity(p)) => create_popularity(p),
        (FrameKind::Private, FrameValue::Private(p)) => create_private(p),
        (FrameKind::UniqueFileId, FrameValue::UniqueFileId(u)) => create_unique_file_id(u),
        (FrameKind::Chapter, FrameValue::Chapter(c)) => create_chapter(c),
        (FrameKind::TableOfContents, FrameValue::TableOfContents(t)) => {
            create_table_of_contents(t, index)
        }
        (FrameKind::EventTimingCodes, FrameValue::EventTimingCodes(e)) => {
            create_event_timing_codes(e)
        }
        (FrameKind::Commercial, FrameValue::Commercial(c)) => create_commercial(c),
        (FrameKind::Text, FrameValue::Text(text)) => create_text(identifier, text),
        (FrameKind::Url, FrameValue::Url(url)) => create_url(identifier, url),
        _ => None,
    }
}

// generic text: encoding byte, UTF-16 text
fn create_text(identifier: &str, text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    FrameBuilder::new(identifier)
        .append_encoding(Utf16)
        .append_string(text, None, Utf16)
        .build()
}

// generic url: Latin-1, no encoding byte
fn create_url(identifier: &str, url: &str) -> Option<Vec<u8>> {
    if url.is_empty() {
        return None;
    }
    FrameBuilder::new(identifier)
        .append_string(url, None, Latin1)
        .build()
}

// 2.2 stores a 3 character image format instead of a MIME type
fn read_picture(body: &[u8], version: u8) -> Option<Picture> {
    let mut reader = FrameReader::with_encoding_byte(body);
    let mime = match version {
        2 => reader.consume_string(Some(3), Latin1)?,
        _ => reader.consume_null_terminated(Latin1)?,
    };
    let picture_type = PictureType(reader.consume_number(1)? as u8);
    let description = reader.consume_null_terminated_text()?;

    Some(Picture {
        mime,
        picture_type,
        description,
        image: reader.consume_rest().to_vec(),
    })
}

fn create_picture(picture: &Picture) -> Option<Vec<u8>> {
    if picture.image.is_empty() {
        return None;
    }
    let mime = match picture.mime.as_str() {
        "" => mime_from_bytes(&picture.image).unwrap_or(""),
        m => m,
    };

    // iTunes does not pick up artwork with an empty UTF-16 description
    let encoding = match picture.description.as_str() {
        "" => Latin1,
        _ => Utf16,
    };

    FrameBuilder::new("APIC")
        .append_encoding(encoding)
        .append_null_terminated(mime, Latin1)
        .append_number(picture.picture_type.id() as u32, 1)
        .append_null_terminated(&picture.description, encoding)
        .append_bytes(&picture.image)
        .build()
}

fn read_comment(body: &[u8]) -> Option<Comment> {
    let mut reader = FrameReader::with_encoding_byte(body);
    Some(Comment {
        language: reader.consume_string(Some(3), Latin1)?,
        short_text: reader.consume_null_terminated_text()?,
        text: reader.consume_text(),
    })
}

fn create_comment(identifier: &str, comment: &Comment) -> Option<Vec<u8>> {
    if comment.text.is_empty() {
        return None;
    }
    FrameBuilder::new(identifier)
        .append_encoding(Utf16)
        .append_string(&comment.language, Some(3), Latin1)
        .append_null_terminated(&comment.short_text, Utf16)
        .append_string(&comment.text, None, Utf16)
        .build()
}

fn read_synchronised_lyrics(body: &[u8]) -> Option<SynchronisedLyrics> {
    let mut reader = FrameReader::with_encoding_byte(body);
    let language = reader.consume_string(Some(3), Latin1)?;
    let time_stamp_format = reader.consume_number(1)? as u8;
    let content_type = reader.consume_number(1)? as u8;
    let short_text = reader.consume_null_terminated_text()?;

    // each record eats at least a terminator and a time stamp
    let mut synchronised_text = Vec::new();
    while reader.remaining() > 0 {
        let text = match reader.consume_null_terminated_text() {
            Some(t) => t,
            None => break,
        };
        let time_stamp = match reader.consume_number(4) {
            Some(t) => t,
            None => break,
        };
        synchronised_text.push(SynchronisedText { text, time_stamp });
    }

    Some(SynchronisedLyrics {
        language,
        time_stamp_format,
        content_type,
        short_text,
        synchronised_text,
    })
}

fn create_synchronised_lyrics(lyrics: &SynchronisedLyrics) -> Option<Vec<u8>> {
    let mut builder = FrameBuilder::new("SYLT")
        .append_encoding(Utf16)
        .append_string(&lyrics.language, Some(3), Latin1)
        .append_number(lyrics.time_stamp_format as u32, 1)
        .append_number(lyrics.content_type as u32, 1)
        .append_null_terminated(&lyrics.short_text, Utf16);
    for part in lyrics.synchronised_text.iter() {
        builder = builder
            .append_null_terminated(&part.text, Utf16)
            .append_number(part.time_stamp, 4);
    }
    builder.build()
}

fn read_user_text(body: &[u8]) -> Option<UserText> {
    let mut reader = FrameReader::with_encoding_byte(body);
    Some(UserText {
        description: reader.consume_null_terminated_text()?,
        value: reader.consume_text(),
    })
}

fn create_user_text(user_text: &UserText) -> Option<Vec<u8>> {
    FrameBuilder::new("TXXX")
        .append_encoding(Utf16)
        .append_null_terminated(&user_text.description, Utf16)
        .append_string(&user_text.value, None, Utf16)
        .build()
}

fn read_user_url(body: &[u8]) -> Option<UserUrl> {
    let mut reader = FrameReader::with_encoding_byte(body);
    Some(UserUrl {
        description: reader.consume_null_terminated_text()?,
        url: reader.consume_string(None, Latin1)?,
    })
}

fn create_user_url(user_url: &UserUrl) -> Option<Vec<u8>> {
    FrameBuilder::new("WXXX")
        .append_encoding(Utf16)
        .append_null_terminated(&user_url.description, Utf16)
        .append_string(&user_url.url, None, Latin1)
        .build()
}

fn read_popularity(body: &[u8]) -> Option<Popularity> {
    let mut reader = FrameReader::new(body);
    let email = reader.consume_null_terminated(Latin1)?;
    let rating = reader.consume_number(1)? as u8;

    // the counter may be omitted, or grow past 32 bits
    let rest = reader.consume_rest();
    let counter = match rest.len() {
        0..=4 => decode_int_be_u32(rest),
        n if rest[..n - 4].iter().all(|b| *b == 0) => decode_int_be_u32(rest),
        _ => u32::MAX,
    };

    Some(Popularity {
        email,
        rating,
        counter,
    })
}

fn create_popularity(popularity: &Popularity) -> Option<Vec<u8>> {
    if popularity.email.is_empty() {
        return None;
    }
    FrameBuilder::new("POPM")
        .append_null_terminated(&popularity.email, Latin1)
        .append_number(popularity.rating as u32, 1)
        .append_number(popularity.counter, 4)
        .build()
}

fn read_private(body: &[u8]) -> Option<Private> {
    let mut reader = FrameReader::new(body);
    Some(Private {
        owner_identifier: reader.consume_null_terminated(Latin1)?,
        data: reader.consume_rest().to_vec(),
    })
}

fn create_private(private: &Private) -> Option<Vec<u8>> {
    FrameBuilder::new("PRIV")
        .append_null_terminated(&private.owner_identifier, Latin1)
        .append_bytes(&private.data)
        .build()
}

fn read_unique_file_id(body: &[u8]) -> Option<UniqueFileId> {
    let mut reader = FrameReader::new(body);
    Some(UniqueFileId {
        owner_identifier: reader.consume_null_terminated(Latin1)?,
        identifier: reader.consume_rest().to_vec(),
    })
}

fn create_unique_file_id(ufid: &UniqueFileId) -> Option<Vec<u8>> {
    FrameBuilder::new("UFID")
        .append_null_terminated(&ufid.owner_identifier, Latin1)
        .append_bytes(&ufid.identifier)
        .build()
}

const NO_OFFSET: u32 = 0xFFFFFFFF;

fn read_nested_tags(body: &[u8], version: u8, depth: usize) -> Tags {
    if depth >= MAX_NESTING {
        if !body.is_empty() {
            debug!(depth, "skipping frames nested too deep");
        }
        return Tags::new();
    }
    tag::read_nested_body(body, version, &Options::default(), depth + 1)
}

fn read_chapter(body: &[u8], version: u8, depth: usize) -> Option<Chapter> {
    let mut reader = FrameReader::new(body);
    let element_id = reader.consume_null_terminated(Latin1)?;
    let start_time_ms = reader.consume_number(4)?;
    let end_time_ms = reader.consume_number(4)?;
    let start_offset_bytes = Some(reader.consume_number(4)?).filter(|o| *o != NO_OFFSET);
    let end_offset_bytes = Some(reader.consume_number(4)?).filter(|o| *o != NO_OFFSET);

    Some(Chapter {
        element_id,
        start_time_ms,
        end_time_ms,
        start_offset_bytes,
        end_offset_bytes,
        tags: read_nested_tags(reader.consume_rest(), version, depth),
    })
}

fn create_chapter(chapter: &Chapter) -> Option<Vec<u8>> {
    // a chapter needs an id and an end
    if chapter.element_id.is_empty() || chapter.end_time_ms == 0 {
        return None;
    }
    FrameBuilder::new("CHAP")
        .append_null_terminated(&chapter.element_id, Latin1)
        .append_number(chapter.start_time_ms, 4)
        .append_number(chapter.end_time_ms, 4)
        .append_number(chapter.start_offset_bytes.unwrap_or(NO_OFFSET), 4)
        .append_number(chapter.end_offset_bytes.unwrap_or(NO_OFFSET), 4)
        .append_bytes(&tag::write_body(&chapter.tags))
        .build()
}

// CTOC flags %000000ab: a - top-level, b - ordered
const TOP_LEVEL: u32 = 0b10;
const ORDERED: u32 = 0b01;

fn read_table_of_contents(body: &[u8], version: u8, depth: usize) -> Option<TableOfContents> {
    let mut reader = FrameReader::new(body);
    let element_id = reader.consume_null_terminated(Latin1)?;
    let flags = reader.consume_number(1)?;
    let entries = reader.consume_number(1)?;

    let mut elements = Vec::with_capacity(entries as usize);
    for _ in 0..entries {
        elements.push(reader.consume_null_terminated(Latin1)?);
    }

    Some(TableOfContents {
        element_id,
        is_ordered: flags & ORDERED != 0,
        elements,
        tags: read_nested_tags(reader.consume_rest(), version, depth),
    })
}

fn create_table_of_contents(toc: &TableOfContents, index: usize) -> Option<Vec<u8>> {
    if toc.element_id.is_empty() {
        return None;
    }
    let mut flags = 0;
    if index == 0 {
        flags |= TOP_LEVEL;
    }
    if toc.is_ordered {
        flags |= ORDERED;
    }

    let elements = &toc.elements[..toc.elements.len().min(0xFF)];
    let mut builder = FrameBuilder::new("CTOC")
        .append_null_terminated(&toc.element_id, Latin1)
        .append_number(flags, 1)
        .append_number(elements.len() as u32, 1);
    for element in elements.iter() {
        builder = builder.append_null_terminated(element, Latin1);
    }
    if !toc.tags.is_empty() {
        builder = builder.append_bytes(&tag::write_body(&toc.tags));
    }
    builder.build()
}

fn read_event_timing_codes(body: &[u8]) -> Option<EventTimingCodes> {
    let mut reader = FrameReader::new(body);
    let time_stamp_format = reader.consume_number(1)? as u8;

    // records are 1 byte type + 4 bytes time stamp
    let mut key_events = Vec::with_capacity(reader.remaining() / 5);
    while reader.remaining() >= 5 {
        let event_type = reader.consume_number(1)? as u8;
        let time_stamp = reader.consume_number(4)?;
        key_events.push(KeyEvent {
            event_type,
            time_stamp,
        });
    }

    Some(EventTimingCodes {
        time_stamp_format,
        key_events,
    })
}

fn create_event_timing_codes(codes: &EventTimingCodes) -> Option<Vec<u8>> {
    let mut builder = FrameBuilder::new("ETCO").append_number(codes.time_stamp_format as u32, 1);
    for event in codes.key_events.iter() {
        builder = builder
            .append_number(event.event_type as u32, 1)
            .append_number(event.time_stamp, 4);
    }
    builder.build()
}

// "EUR2.50/USD3" => {EUR: 2.50, USD: 3}
fn read_prices(input: &str) -> BTreeMap<String, String> {
    input
        .split('/')
        .filter_map(|price| {
            let (split, _) = price.char_indices().nth(3)?;
            Some((price[..split].to_string(), price[split..].to_string()))
        })
        .collect()
}

fn write_prices(prices: &BTreeMap<String, String>) -> String {
    prices
        .iter()
        .map(|(currency, amount)| format!("{}{}", currency.chars().take(3).collect::<String>(), amount))
        .collect::<Vec<String>>()
        .join("/")
}

fn read_commercial(body: &[u8]) -> Option<Commercial> {
    let mut reader = FrameReader::with_encoding_byte(body);
    let prices = read_prices(&reader.consume_null_terminated(Latin1)?);
    let valid_until = Date::from_yyyymmdd(&reader.consume_string(Some(8), Latin1)?);
    let contact_url = reader.consume_null_terminated(Latin1)?;
    let received_as = reader.consume_number(1)? as u8;
    let name_of_seller = reader.consume_null_terminated_text().unwrap_or_default();
    let description = reader.consume_null_terminated_text().unwrap_or_default();

    let mime_type = reader.consume_null_terminated(Latin1);
    let picture = reader.consume_rest();
    let seller_logo = match mime_type {
        Some(mime_type) if !picture.is_empty() => Some(SellerLogo {
            mime_type,
            picture: picture.to_vec(),
        }),
        _ => None,
    };

    Some(Commercial {
        prices,
        valid_until,
        contact_url,
        received_as,
        name_of_seller,
        description,
        seller_logo,
    })
}

// only PNG and JPEG logos are allowed, anything else is left as "image/"
fn seller_logo_mime(logo: &SellerLogo) -> &str {
    let mime = match logo.mime_type.as_str() {
        "" => mime_from_bytes(&logo.picture).unwrap_or(""),
        m => m,
    };
    match mime {
        "image/png" | "image/jpeg" => mime,
        _ => "image/",
    }
}

fn create_commercial(commercial: &Commercial) -> Option<Vec<u8>> {
    let mut builder = FrameBuilder::new("COMR")
        .append_encoding(Utf16)
        .append_null_terminated(&write_prices(&commercial.prices), Latin1)
        .append_string(&commercial.valid_until.to_yyyymmdd(), Some(8), Latin1)
        .append_null_terminated(&commercial.contact_url, Latin1)
        .append_number(commercial.received_as as u32, 1)
        .append_null_terminated(&commercial.name_of_seller, Utf16)
        .append_null_terminated(&commercial.description, Utf16);
    if let Some(ref logo) = commercial.seller_logo {
        builder = builder
            .append_null_terminated(seller_logo_mime(logo), Latin1)
            .append_bytes(&logo.picture);
    }
    builder.build()
}
