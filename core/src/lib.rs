use std::path::Path;

use lazy_static::lazy_static;

pub mod config;
pub mod layout;
pub mod manifest;
pub mod release;
pub mod select;
pub mod utils;

/// mojang's global version manifest
pub const MANIFEST_URL: &str = "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";
/// host serving content-addressed asset objects
pub const RESOURCES_URL: &str = "https://resources.download.minecraft.net";

lazy_static! {
    // Paths, relative to the output root
    pub static ref FULL_ROOT: &'static Path = &Path::new("full");
    pub static ref VERSION_FILE: &'static Path = &Path::new("version.txt");
}
