use mc_lang_api::meta::manifest::{Version, VersionManifest};

use crate::{
    utils::{download::Fetch, errors::SyncError},
    MANIFEST_URL,
};

/// the global version manifest, fetched once per run
#[derive(Debug)]
pub struct Manifest {
    inner: VersionManifest,
}

impl Manifest {
    /// downloads and parses the version manifest;
    /// failure here is fatal for the whole run
    pub fn fetch(fetch: &impl Fetch) -> Result<Self, SyncError> {
        let raw = fetch.get(MANIFEST_URL)?;
        let inner = serde_json::from_slice(&raw)?;
        Ok(Self { inner })
    }

    /// the manifest's versions, newest first
    pub fn versions(&self) -> &[Version] {
        &self.inner.versions
    }
}
