use std::io;

use super::download::DownloadError;

#[derive(Debug)]
pub enum SyncError {
    Download(DownloadError),
    Schema(serde_json::Error),
    Zip(zip::result::ZipError),
    Io(io::Error),
    ChecksumMismatch {
        file: String,
        expected: String,
        actual: String,
    },
    MalformedHash(String),
}

impl From<DownloadError> for SyncError {
    fn from(value: DownloadError) -> Self {
        Self::Download(value)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(value: serde_json::Error) -> Self {
        Self::Schema(value)
    }
}

impl From<io::Error> for SyncError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<zip::result::ZipError> for SyncError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Zip(value)
    }
}
