use std::{fs, path::Path};

use mc_lang_api::meta::{
    manifest::Version,
    version::{AssetIndex, VersionMeta},
};

use crate::{
    config::SyncConfig,
    manifest::Manifest,
    select,
    utils::{checksum, download::Fetch, errors::SyncError, zip},
    RESOURCES_URL, VERSION_FILE,
};

/// path of the default locale inside client.jar
const EMBEDDED_LANG_ENTRY: &str = "assets/minecraft/lang/en_us.json";
/// asset index keys of language resources look like `minecraft/lang/<code>.json`
const LANG_PREFIX: &str = "minecraft/lang/";
const LANG_SUFFIX: &str = ".json";

/// the language code of an asset index key, `None` for non-language entries
pub fn lang_code(path: &str) -> Option<&str> {
    path.strip_prefix(LANG_PREFIX)?.strip_suffix(LANG_SUFFIX)
}

/// runs the whole sync: manifest, selection, then one version at a time.
/// a failed version is reported and skipped, the run carries on; only the
/// manifest fetch and the start-version resolution are fatal
pub fn run(fetch: &impl Fetch, config: &SyncConfig, root: &Path) -> Result<(), SyncError> {
    let manifest = Manifest::fetch(fetch)?;
    let start = config.start.resolve()?;

    let mut last = None;
    for version in select::select(manifest.versions(), &start) {
        println!("syncing {}", version.id);
        match sync_version(fetch, config, root, version) {
            Ok(()) => last = Some(version.id.as_str()),
            Err(err) => println!("{}: skipped ({:?})", version.id, err),
        }
    }

    if let Some(id) = last {
        fs::write(root.join(*VERSION_FILE), id)?;
    }
    println!("Done.");
    Ok(())
}

/// processes one version: metadata, asset index, client.jar with the embedded
/// default locale, then the per-language resource downloads
pub fn sync_version(
    fetch: &impl Fetch,
    config: &SyncConfig,
    root: &Path,
    version: &Version,
) -> Result<(), SyncError> {
    let meta: VersionMeta = serde_json::from_slice(&fetch.get(&version.url)?)?;
    let index: AssetIndex = serde_json::from_slice(&fetch.get(&meta.asset_index.url)?)?;

    let out_dir = config.layout.prepare(root, &version.id)?;
    extract_default_lang(fetch, &meta, &out_dir)?;
    download_langs(fetch, config, &index, &out_dir);
    Ok(())
}

/// downloads and verifies client.jar, then pulls the embedded en_us.json out
/// of it. the jar only lives in the output directory for the duration of this
/// call: a bad checksum discards it, a good one is deleted after extraction
fn extract_default_lang(
    fetch: &impl Fetch,
    meta: &VersionMeta,
    out_dir: &Path,
) -> Result<(), SyncError> {
    let client = &meta.downloads.client;
    let jar_path = out_dir.join("client.jar");
    let data = fetch.get(&client.url)?;
    fs::write(&jar_path, &data)?;

    let digest = checksum::sha1_file(&jar_path)?;
    if !checksum::matches(&digest, &client.sha1) {
        fs::remove_file(&jar_path)?;
        return Err(SyncError::ChecksumMismatch {
            file: "client.jar".to_string(),
            expected: client.sha1.clone(),
            actual: digest,
        });
    }

    // the jar goes away even if the entry read failed
    let extracted = zip::read_entry(&data, EMBEDDED_LANG_ENTRY);
    fs::remove_file(&jar_path)?;
    if let Some(bytes) = extracted? {
        fs::write(out_dir.join("en_us.json"), bytes)?;
    }
    Ok(())
}

/// downloads every selected language file that is not already on disk
fn download_langs(fetch: &impl Fetch, config: &SyncConfig, index: &AssetIndex, out_dir: &Path) {
    for (path, object) in &index.objects {
        let Some(code) = lang_code(path) else {
            continue;
        };
        if !config.langs.allows(code) {
            continue;
        }

        let out_path = out_dir.join(format!("{code}.json"));
        if out_path.exists() {
            println!("{code}.json already exists, skipping");
            continue;
        }

        if let Err(err) = download_lang(fetch, &object.hash, code, &out_path) {
            println!("{code}.json failed ({err:?})");
        }
    }
}

/// one content-addressed resource download. a hash mismatch is reported but
/// the file is kept, unlike the load-bearing client.jar verification
fn download_lang(
    fetch: &impl Fetch,
    hash: &str,
    code: &str,
    out_path: &Path,
) -> Result<(), SyncError> {
    // content-addressed urls shard on the first two hex chars
    let Some(prefix) = hash.get(..2) else {
        return Err(SyncError::MalformedHash(hash.to_string()));
    };
    let url = format!("{RESOURCES_URL}/{prefix}/{hash}");
    let data = fetch.get(&url)?;
    fs::write(out_path, &data)?;

    let digest = checksum::sha1_hex(&data);
    if !checksum::matches(&digest, hash) {
        println!("{code}.json sha1 mismatch, keeping file");
    }
    Ok(())
}
