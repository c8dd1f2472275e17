use clap::{Parser, ValueEnum};

use mc_lang_core::config::{LangFilter, StartVersion, SyncConfig, FIXED_LANGS};
use mc_lang_core::layout::Layout;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// `<version>/` in the working directory
    Flat,
    /// `full/<version>/`
    Full,
    /// `mc_lang_<version>/lang/` plus a generated gradle descriptor
    Module,
}

/// fetches official minecraft language files, one directory per release
#[derive(Parser, Debug)]
#[command(name = "mc-lang", version)]
pub struct Cli {
    /// oldest release to sync from (defaults to 1.13)
    #[arg(long)]
    pub start: Option<String>,

    /// ask for the start version on stdin instead
    #[arg(long, conflicts_with = "start")]
    pub prompt: bool,

    /// output directory layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Flat)]
    pub layout: LayoutArg,

    /// only sync these language codes (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub langs: Option<Vec<String>>,

    /// shorthand for the classic 16-language allow-list
    #[arg(long, conflicts_with = "langs")]
    pub classic_langs: bool,
}

impl Cli {
    pub fn into_config(self) -> SyncConfig {
        let start = if self.prompt {
            StartVersion::Prompt
        } else if let Some(version) = self.start {
            StartVersion::Literal(version)
        } else {
            StartVersion::Default
        };

        let langs = if let Some(codes) = self.langs {
            LangFilter::Fixed(codes)
        } else if self.classic_langs {
            LangFilter::Fixed(FIXED_LANGS.iter().map(|s| s.to_string()).collect())
        } else {
            LangFilter::All
        };

        let layout = match self.layout {
            LayoutArg::Flat => Layout::Flat,
            LayoutArg::Full => Layout::Full,
            LayoutArg::Module => Layout::Module,
        };

        SyncConfig {
            start,
            layout,
            langs,
        }
    }
}
