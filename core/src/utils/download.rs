use std::{io, time::Duration};

use bytes::Bytes;

#[derive(Debug)]
pub enum DownloadError {
    InvalidUrl,
    Timeout,
    Other(reqwest::Error),
    Status(reqwest::StatusCode),
    Io(io::Error),
}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DownloadError::Timeout
        } else if err.is_builder() {
            DownloadError::InvalidUrl
        } else if let Some(status) = err.status() {
            DownloadError::Status(status)
        } else {
            DownloadError::Other(err)
        }
    }
}

impl From<io::Error> for DownloadError {
    fn from(value: io::Error) -> Self {
        DownloadError::Io(value)
    }
}

/// source of remote bytes, implemented by [`Http`] and by test doubles
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Bytes, DownloadError>;
}

/// one blocking client, built once and reused for every request of a run
pub struct Http {
    client: reqwest::blocking::Client,
}

impl Http {
    pub fn new() -> Result<Self, DownloadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for Http {
    fn get(&self, url: &str) -> Result<Bytes, DownloadError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(DownloadError::Status(response.status()));
        }
        Ok(response.bytes()?)
    }
}
