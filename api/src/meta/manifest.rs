use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    Release,
    Snapshot,
    OldAlpha,
    OldBeta,
}

#[derive(Deserialize, Debug)]
pub struct Version {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VersionKind,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub versions: Vec<Version>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_versions() {
        let raw = r#"{
            "latest": { "release": "1.14", "snapshot": "19w14b" },
            "versions": [
                { "id": "19w14b", "type": "snapshot", "url": "https://meta/19w14b.json", "time": "t", "releaseTime": "t", "sha1": "s" },
                { "id": "1.13", "type": "release", "url": "https://meta/1.13.json" },
                { "id": "b1.8.1", "type": "old_beta", "url": "https://meta/b1.8.1.json" }
            ]
        }"#;
        let manifest: VersionManifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.versions.len(), 3);
        assert_eq!(manifest.versions[0].kind, VersionKind::Snapshot);
        assert_eq!(manifest.versions[1].id, "1.13");
        assert_eq!(manifest.versions[1].kind, VersionKind::Release);
        assert_eq!(manifest.versions[2].kind, VersionKind::OldBeta);
    }
}
