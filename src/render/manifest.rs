//! Asset manifest and bundle resolution.
//!
//! In production the bundler writes `manifest.json`, a flat object mapping
//! logical bundle names to hashed filenames:
//!
//! ```json
//! { "main.css": "main.a1b2.css", "main.js": "main.c3d4.js", "vendors.js": "vendors.e5f6.js" }
//! ```
//!
//! Development links fixed paths and never reads the manifest.

use crate::core::{CatalogError, Environment};
use crate::log;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Logical bundle names looked up in the manifest.
pub const MAIN_CSS: &str = "main.css";
pub const MAIN_JS: &str = "main.js";
pub const VENDORS_JS: &str = "vendors.js";

/// Fixed development paths, in the same order.
pub const DEV_CSS: &str = "assets/app.css";
pub const DEV_JS: &str = "assets/app.js";
pub const DEV_VENDOR_JS: &str = "assets/vendor.js";

/// Emitted for a bundle the manifest cannot resolve.
pub const UNRESOLVED: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest(HashMap<String, String>);

impl AssetManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let unavailable = |reason: String| CatalogError::ManifestUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssetManifest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Asset resolution fixed at process start.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    env: Environment,
    manifest: Option<AssetManifest>,
}

impl Assets {
    pub fn new(env: Environment, manifest: Option<AssetManifest>) -> Self {
        Self { env, manifest }
    }

    /// Development assets: fixed paths.
    pub fn development() -> Self {
        Self::new(Environment::Development, None)
    }

    /// Resolve the asset mode for `env`, reading the manifest in production.
    ///
    /// A missing or malformed manifest is logged and leaves every bundle
    /// unresolved; rendering still succeeds.
    pub fn load(env: Environment, manifest_path: &Path) -> Self {
        if !env.is_production() {
            return Self::development();
        }

        match AssetManifest::load(manifest_path) {
            Ok(manifest) => Self::new(env, Some(manifest)),
            Err(e) => {
                log!("assets"; "{}", e);
                Self::new(env, None)
            }
        }
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    pub fn stylesheet(&self) -> Cow<'_, str> {
        self.resolve(MAIN_CSS, DEV_CSS)
    }

    pub fn main_script(&self) -> Cow<'_, str> {
        self.resolve(MAIN_JS, DEV_JS)
    }

    pub fn vendor_script(&self) -> Cow<'_, str> {
        self.resolve(VENDORS_JS, DEV_VENDOR_JS)
    }

    fn resolve(&self, name: &str, dev_path: &'static str) -> Cow<'_, str> {
        if !self.env.is_production() {
            return Cow::Borrowed(dev_path);
        }
        match self.manifest.as_ref().and_then(|m| m.get(name)) {
            Some(file) => Cow::Borrowed(file),
            None => Cow::Borrowed(UNRESOLVED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn hashed() -> AssetManifest {
        [
            ("main.css", "main.a1b2.css"),
            ("main.js", "main.c3d4.js"),
            ("vendors.js", "vendors.e5f6.js"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_load_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, r#"{"main.css":"main.a1b2.css","main.js":"main.c3d4.js"}"#).unwrap();

        let manifest = AssetManifest::load(&path).unwrap();
        assert_eq!(manifest.get("main.css"), Some("main.a1b2.css"));
        assert_eq!(manifest.get("vendors.js"), None);
    }

    #[test]
    fn test_load_manifest_missing_or_malformed() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("manifest.json");
        assert!(matches!(
            AssetManifest::load(&missing),
            Err(CatalogError::ManifestUnavailable { .. })
        ));

        let malformed = dir.path().join("broken.json");
        fs::write(&malformed, "[1, 2").unwrap();
        assert!(matches!(
            AssetManifest::load(&malformed),
            Err(CatalogError::ManifestUnavailable { .. })
        ));
    }

    #[test]
    fn test_production_resolves_through_manifest() {
        let assets = Assets::new(Environment::Production, Some(hashed()));
        assert_eq!(assets.stylesheet(), "main.a1b2.css");
        assert_eq!(assets.main_script(), "main.c3d4.js");
        assert_eq!(assets.vendor_script(), "vendors.e5f6.js");
    }

    #[test]
    fn test_development_ignores_manifest() {
        let assets = Assets::new(Environment::Development, Some(hashed()));
        assert_eq!(assets.stylesheet(), DEV_CSS);
        assert_eq!(assets.main_script(), DEV_JS);
        assert_eq!(assets.vendor_script(), DEV_VENDOR_JS);
    }

    #[test]
    fn test_production_without_manifest_is_unresolved() {
        let dir = TempDir::new().unwrap();
        let assets = Assets::load(Environment::Production, &dir.path().join("manifest.json"));
        assert_eq!(assets.stylesheet(), UNRESOLVED);
        assert_eq!(assets.main_script(), UNRESOLVED);
        assert_eq!(assets.vendor_script(), UNRESOLVED);
    }

    #[test]
    fn test_load_development_skips_manifest_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "not json").unwrap();
        let assets = Assets::load(Environment::Development, &path);
        assert_eq!(assets.stylesheet(), DEV_CSS);
    }
}
