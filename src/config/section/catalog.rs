//! `[catalog]` section configuration.
//!
//! ```toml
//! [catalog]
//! path = "initialState.json"
//! ```

use crate::config::util::resolve;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the server reads the catalog snapshot it renders and serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    pub fn normalize(&mut self, root: &Path) {
        self.path = resolve(root, &self.path);
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "initialState.json".into(),
        }
    }
}
