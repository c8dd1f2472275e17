use std::io::{self, BufRead, Write};

use crate::layout::Layout;

/// version the sync starts from when nothing else is configured
pub const DEFAULT_START_VERSION: &str = "1.13";

/// the historical fixed allow-list of language codes
pub const FIXED_LANGS: [&str; 16] = [
    "zh_cn", "zh_hk", "zh_tw", "lzh", "ja_jp", "ko_kr", "vi_vn", "de_de", "es_es", "fr_fr",
    "it_it", "nl_nl", "pt_br", "ru_ru", "th_th", "uk_ua",
];

/// where the start version comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartVersion {
    Default,
    Literal(String),
    Prompt,
}

impl StartVersion {
    /// resolves the configured source to a concrete version id;
    /// [`StartVersion::Prompt`] reads one line from stdin
    pub fn resolve(&self) -> io::Result<String> {
        match self {
            Self::Default => Ok(DEFAULT_START_VERSION.to_string()),
            Self::Literal(version) => Ok(version.clone()),
            Self::Prompt => {
                print!("start version: ");
                io::stdout().flush()?;
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
                Ok(line.trim().to_string())
            }
        }
    }
}

/// which language resources of the asset index get downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangFilter {
    /// every language the asset index knows about
    All,
    /// only the listed codes
    Fixed(Vec<String>),
}

impl LangFilter {
    pub fn allows(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Fixed(codes) => codes.iter().any(|c| c == code),
        }
    }
}

/// one run's worth of configuration, consolidating the historical script variants
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub start: StartVersion,
    pub layout: Layout,
    pub langs: LangFilter,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            start: StartVersion::Default,
            layout: Layout::Flat,
            langs: LangFilter::All,
        }
    }
}
