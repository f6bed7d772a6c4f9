mod image;
pub use image::mime_from_bytes;
pub use image::Picture;
pub use image::PictureType;

mod tags;
pub use tags::Tags;

mod datetime;
pub use datetime::Date;

mod options;
pub use options::Options;

mod values;
pub use values::*;
