use std::collections::BTreeMap;
use std::fmt;

use crate::types::image::describe_bytes;
use crate::types::{Date, Picture, Tags};

/// Decoded body of a single frame.
///
/// Every bespoke frame layout gets its own variant; identifiers without one
/// fall back on `Text` (`T...`) or `Url` (`W...`).
#[derive(PartialEq, Debug, Clone)]
pub enum FrameValue {
    Text(String),
    Url(String),
    Picture(Picture),
    Comment(Comment),
    UnsynchronisedLyrics(Comment),
    SynchronisedLyrics(SynchronisedLyrics),
    UserText(UserText),
    UserUrl(UserUrl),
    Popularity(Popularity),
    Private(Private),
    UniqueFileId(UniqueFileId),
    Chapter(Chapter),
    TableOfContents(TableOfContents),
    EventTimingCodes(EventTimingCodes),
    Commercial(Commercial),
}

/// COMM, and the shape of USLT as well.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Comment {
    /// ISO-639-2 code, always 3 bytes on the wire
    pub language: String,
    pub short_text: String,
    pub text: String,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct SynchronisedLyrics {
    pub language: String,
    /// 1: MPEG frames, 2: milliseconds
    pub time_stamp_format: u8,
    pub content_type: u8,
    pub short_text: String,
    pub synchronised_text: Vec<SynchronisedText>,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct SynchronisedText {
    pub text: String,
    pub time_stamp: u32,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct UserText {
    pub description: String,
    pub value: String,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct UserUrl {
    pub description: String,
    pub url: String,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct Popularity {
    pub email: String,
    pub rating: u8,
    pub counter: u32,
}

#[derive(PartialEq, Clone, Default)]
pub struct Private {
    pub owner_identifier: String,
    pub data: Vec<u8>,
}

#[derive(PartialEq, Clone, Default)]
pub struct UniqueFileId {
    pub owner_identifier: String,
    pub identifier: Vec<u8>,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct Chapter {
    pub element_id: String,
    pub start_time_ms: u32,
    pub end_time_ms: u32,
    pub start_offset_bytes: Option<u32>,
    pub end_offset_bytes: Option<u32>,
    /// embedded sub-frames
    pub tags: Tags,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct TableOfContents {
    pub element_id: String,
    pub is_ordered: bool,
    /// child element ids, at most 255 of them are written
    pub elements: Vec<String>,
    pub tags: Tags,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct EventTimingCodes {
    pub time_stamp_format: u8,
    pub key_events: Vec<KeyEvent>,
}

#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct KeyEvent {
    pub event_type: u8,
    pub time_stamp: u32,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct Commercial {
    /// currency code (3 letters) to price
    pub prices: BTreeMap<String, String>,
    pub valid_until: Date,
    pub contact_url: String,
    pub received_as: u8,
    pub name_of_seller: String,
    pub description: String,
    pub seller_logo: Option<SellerLogo>,
}

#[derive(PartialEq, Clone, Default)]
pub struct SellerLogo {
    pub mime_type: String,
    pub picture: Vec<u8>,
}

impl fmt::Debug for Private {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Private")
            .field("owner_identifier", &self.owner_identifier)
            .field("data", &describe_bytes(&self.data))
            .finish()
    }
}

impl fmt::Debug for UniqueFileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UniqueFileId")
            .field("owner_identifier", &self.owner_identifier)
            .field("identifier", &describe_bytes(&self.identifier))
            .finish()
    }
}

impl fmt::Debug for SellerLogo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SellerLogo")
            .field("mime_type", &self.mime_type)
            .field("picture", &describe_bytes(&self.picture))
            .finish()
    }
}

macro_rules! from_value {
    ($variant:ident, $t:ty) => {
        impl From<$t> for FrameValue {
            fn from(value: $t) -> FrameValue {
                FrameValue::$variant(value)
            }
        }
    };
}

from_value!(Picture, Picture);
from_value!(Comment, Comment);
from_value!(SynchronisedLyrics, SynchronisedLyrics);
from_value!(UserText, UserText);
from_value!(UserUrl, UserUrl);
from_value!(Popularity, Popularity);
from_value!(Private, Private);
from_value!(UniqueFileId, UniqueFileId);
from_value!(Chapter, Chapter);
from_value!(TableOfContents, TableOfContents);
from_value!(EventTimingCodes, EventTimingCodes);
from_value!(Commercial, Commercial);
