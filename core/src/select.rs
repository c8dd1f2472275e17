use mc_lang_api::meta::manifest::{Version, VersionKind};

/// reverses the manifest to oldest-first and drops everything
/// before the start version
fn at_or_after<'a>(versions: &'a [Version], start: &'a str) -> impl Iterator<Item = &'a Version> {
    versions
        .iter()
        .rev()
        .skip_while(move |version| version.id != start)
}

fn is_release(version: &Version) -> bool {
    version.kind == VersionKind::Release
}

/// all full releases at or after `start`, oldest first;
/// a start version absent from the manifest selects nothing
pub fn select<'a>(versions: &'a [Version], start: &'a str) -> impl Iterator<Item = &'a Version> {
    at_or_after(versions, start).filter(|version| is_release(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: &str, kind: VersionKind) -> Version {
        Version {
            id: id.to_string(),
            kind,
            url: format!("https://meta/{id}.json"),
        }
    }

    fn ids<'a>(selected: impl Iterator<Item = &'a Version>) -> Vec<&'a str> {
        selected.map(|v| v.id.as_str()).collect()
    }

    // manifest order is newest first
    fn sample() -> Vec<Version> {
        vec![
            version("1.14", VersionKind::Snapshot),
            version("1.13", VersionKind::Release),
            version("1.12", VersionKind::Release),
        ]
    }

    #[test]
    fn start_cuts_off_older_and_kind_filters_newer() {
        let versions = sample();
        assert_eq!(ids(select(&versions, "1.13")), vec!["1.13"]);
    }

    #[test]
    fn unknown_start_selects_nothing() {
        let versions = sample();
        assert_eq!(ids(select(&versions, "0.0.0")), Vec::<&str>::new());
    }

    #[test]
    fn selection_is_oldest_first() {
        let versions = vec![
            version("1.14.1", VersionKind::Release),
            version("19w13b", VersionKind::Snapshot),
            version("1.14", VersionKind::Release),
            version("1.13.2", VersionKind::Release),
            version("1.13", VersionKind::Release),
        ];
        assert_eq!(
            ids(select(&versions, "1.13")),
            vec!["1.13", "1.13.2", "1.14", "1.14.1"]
        );
    }

    #[test]
    fn snapshot_start_is_excluded_but_later_releases_are_kept() {
        let versions = vec![
            version("1.14", VersionKind::Release),
            version("19w13b", VersionKind::Snapshot),
        ];
        assert_eq!(ids(select(&versions, "19w13b")), vec!["1.14"]);
    }

    #[test]
    fn old_alpha_and_beta_are_never_selected() {
        let versions = vec![
            version("1.0", VersionKind::Release),
            version("b1.8.1", VersionKind::OldBeta),
            version("a1.2.6", VersionKind::OldAlpha),
        ];
        assert_eq!(ids(select(&versions, "a1.2.6")), vec!["1.0"]);
    }
}
