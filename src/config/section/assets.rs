//! `[assets]` section configuration.
//!
//! ```toml
//! [assets]
//! public = "public"                 # static root, holds assets/
//! manifest = "public/manifest.json" # read in production only
//! ```

use crate::config::util::resolve;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served for static requests.
    pub public: PathBuf,

    /// Bundler manifest mapping logical names to hashed filenames.
    pub manifest: PathBuf,
}

impl AssetsConfig {
    pub fn normalize(&mut self, root: &Path) {
        self.public = resolve(root, &self.public);
        self.manifest = resolve(root, &self.manifest);
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            manifest: "public/manifest.json".into(),
        }
    }
}
