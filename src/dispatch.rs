use std;
use std::fs;
use std::path::{Path, PathBuf};

use crate::id3v2;
use crate::Error;
use crate::Tags;

pub fn get_tags<P: AsRef<Path>>(path: P) -> Result<Tags, Error> {
    let buffer = fs::read(path)?;
    id3v2::read(&buffer)
}

/// Replaces the tag of the file at `path`.
pub fn set_tags<P: AsRef<Path>>(path: P, tags: &Tags) -> Result<(), Error> {
    rewrite(path.as_ref(), |buffer| id3v2::write(tags, buffer))
}

/// Replaces the frames of the file's tag that `tags` has identifiers for.
pub fn update_tags<P: AsRef<Path>>(path: P, tags: &Tags) -> Result<(), Error> {
    rewrite(path.as_ref(), |buffer| id3v2::update(tags, buffer))
}

pub fn remove_tags<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    rewrite(path.as_ref(), id3v2::remove)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let mut e = std::ffi::OsString::from(p.extension().unwrap_or_default());
    e.push("tmp");
    p.set_extension(e);
    p
}

// write to a sibling file, then move it over the original
fn rewrite<F>(path: &Path, transform: F) -> Result<(), Error>
where
    F: FnOnce(&[u8]) -> Result<Vec<u8>, Error>,
{
    let buffer = fs::read(path)?;
    let output = transform(&buffer)?;

    let tmp_path = tmp_path(path);
    if let Err(x) = fs::write(&tmp_path, &output) {
        // on failure, delete temporary file
        fs::remove_file(&tmp_path).ok();
        return Err(x.into());
    }

    // replace original file
    if let Err(x) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(x.into());
    }
    Ok(())
}
