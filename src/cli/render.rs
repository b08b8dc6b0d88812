//! `vidshelf render`: one server render without a server.

use super::common::write_output;
use crate::catalog::CatalogState;
use crate::config::SiteConfig;
use crate::render::{Assets, render_home};
use anyhow::Result;
use std::path::Path;

/// Render the catalog snapshot into a document.
pub fn render_page(config: &SiteConfig) -> Result<String> {
    let state = CatalogState::load(&config.catalog.path)?;
    let assets = Assets::load(config.env, &config.assets.manifest);
    Ok(render_home(&state, &assets, config.meta()))
}

pub fn run_render(config: &SiteConfig, output: Option<&Path>) -> Result<()> {
    let html = render_page(config)?;
    write_output(output, &html, "render")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;
    use crate::core::Environment;
    use std::fs;
    use tempfile::TempDir;

    fn site(dir: &TempDir, env: Environment) -> SiteConfig {
        let state = CatalogState {
            originals: vec![sample(9, "Orbit")],
            ..CatalogState::empty()
        };
        let catalog = dir.path().join("initialState.json");
        fs::write(&catalog, serde_json::to_string(&state).unwrap()).unwrap();

        let mut config = SiteConfig::default();
        config.env = env;
        config.catalog.path = catalog;
        config.assets.manifest = dir.path().join("manifest.json");
        config
    }

    #[test]
    fn test_render_production_with_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("manifest.json"),
            r#"{"main.css":"main.a1b2.css","main.js":"main.c3d4.js","vendors.js":"vendors.e5f6.js"}"#,
        )
        .unwrap();

        let html = render_page(&site(&dir, Environment::Production)).unwrap();
        assert!(html.contains("main.a1b2.css"));
        assert!(html.contains("Orbit"));
        assert!(!html.contains("assets/app.js"));
    }

    #[test]
    fn test_render_production_without_manifest() {
        let dir = TempDir::new().unwrap();
        let html = render_page(&site(&dir, Environment::Production)).unwrap();
        assert!(html.contains(r#"src="undefined""#));
    }

    #[test]
    fn test_render_missing_catalog_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir, Environment::Development);
        config.catalog.path = dir.path().join("missing.json");
        assert!(render_page(&config).is_err());
    }

    #[test]
    fn test_run_render_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist/index.html");
        run_render(&site(&dir, Environment::Development), Some(&out)).unwrap();
        assert!(fs::read_to_string(out).unwrap().contains("assets/app.css"));
    }
}
