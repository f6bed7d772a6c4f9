#[macro_use]
extern crate lazy_static;

mod types;
pub use crate::types::*;

pub mod id3v2;
pub use crate::id3v2::{Frame, FrameKind};

mod dispatch;
mod tools;
pub use crate::tools::encoding::TextEncoding;


pub use crate::dispatch::get_tags;
pub use crate::dispatch::remove_tags;
pub use crate::dispatch::set_tags;
pub use crate::dispatch::update_tags;

use std::io;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    TagError(String),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::TagError(ref e) => write!(f, "ID3v2 error: {}", e),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            Error::TagError(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
impl From<String> for Error {
    fn from(err: String) -> Error {
        Error::TagError(err)
    }
}
