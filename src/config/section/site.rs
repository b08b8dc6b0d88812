//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! title = "Vidshelf"
//! lang = "en"
//! env = "production"   # optional, overrides VIDSHELF_ENV
//! ```

use crate::core::Environment;
use crate::render::DocumentMeta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Page `<title>`.
    pub title: String,

    /// `lang` attribute of `<html>`.
    pub lang: String,

    /// Asset mode. Unset means: take it from the environment.
    pub env: Option<Environment>,
}

impl SiteSectionConfig {
    pub fn meta(&self) -> DocumentMeta<'_> {
        DocumentMeta {
            title: &self.title,
            lang: &self.lang,
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Vidshelf".into(),
            lang: "en".into(),
            env: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Vidshelf");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.site.env, None);
    }

    #[test]
    fn test_site_env() {
        let config = test_parse_config("[site]\ntitle = \"Shelf\"\nenv = \"production\"");
        assert_eq!(config.site.env, Some(Environment::Production));
        assert_eq!(config.site.meta().title, "Shelf");
    }

    #[test]
    fn test_site_env_rejects_unknown_value() {
        let result: Result<crate::config::SiteConfig, _> =
            toml::from_str("[site]\nenv = \"staging\"");
        assert!(result.is_err());
    }
}
