use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::FULL_ROOT;

/// gradle snippet written at the root of a generated language module;
/// both slots take the underscore form of the version id
const MODULE_DESCRIPTOR: &str = "plugins {
    id 'java-library'
}

base.archivesName = '@module@'
version = '@module@'
";

/// per-version output directory strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `<id>/` directly under the output root
    Flat,
    /// `full/<id>/`
    Full,
    /// `mc_lang_<id>/lang/`, with a gradle descriptor at the module root
    Module,
}

impl Layout {
    /// underscore form of a version id, usable as a module name
    pub fn module_id(id: &str) -> String {
        format!("mc_lang_{}", id.replace('.', "_"))
    }

    /// the output directory for one version, without touching the filesystem
    pub fn dir_for(&self, root: &Path, id: &str) -> PathBuf {
        match self {
            Layout::Flat => root.join(id),
            Layout::Full => root.join(*FULL_ROOT).join(id),
            Layout::Module => root.join(Self::module_id(id)).join("lang"),
        }
    }

    /// creates the version's directory tree (idempotent) and, for
    /// [`Layout::Module`], rewrites the module descriptor from scratch
    pub fn prepare(&self, root: &Path, id: &str) -> io::Result<PathBuf> {
        let dir = self.dir_for(root, id);
        fs::create_dir_all(&dir)?;

        if let Layout::Module = self {
            let module = Self::module_id(id);
            let descriptor = MODULE_DESCRIPTOR.replace("@module@", &module);
            fs::write(root.join(&module).join("build.gradle"), descriptor)?;
        }

        Ok(dir)
    }
}
