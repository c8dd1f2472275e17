use std::io::{Cursor, Read};

use zip::{result::ZipError, ZipArchive};

/// reads one entry out of an in-memory zip archive,
/// `Ok(None)` when the entry is not present
pub fn read_entry(archive: &[u8], name: &str) -> Result<Option<Vec<u8>>, ZipError> {
    let reader = Cursor::new(archive);
    let mut archive = ZipArchive::new(reader)?;

    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err),
    };

    let mut buf = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut buf)?;
    Ok(Some(buf))
}
