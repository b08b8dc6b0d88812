//! Configuration for `vidshelf.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, diagnostics, global handle
//! ├── util.rs        # Config file discovery, path resolution
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Page title, lang, optional asset mode          |
//! | `[serve]`   | HTTP server (interface, port)                  |
//! | `[catalog]` | Catalog snapshot rendered and served           |
//! | `[assets]`  | Public directory and bundler manifest          |
//! | `[hydrate]` | Bootstrap strategy, endpoint, timeout          |
//!
//! Precedence, lowest first: defaults, `vidshelf.toml`, CLI flags. The asset
//! mode additionally starts from `VIDSHELF_ENV`.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, CatalogConfig, HydrateConfig, ServeConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::cli::{Cli, Commands};
use crate::core::Environment;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "vidshelf.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vidshelf.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved asset mode
    #[serde(skip)]
    pub env: Environment,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub hydrate: HydrateConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing default config
    /// means defaults; a missing config named explicitly with `--config` is an
    /// error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None if cli.config.as_os_str() != DEFAULT_CONFIG => {
                return Err(ConfigError::Io(
                    cli.config.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )
                .into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or(cwd, Path::to_path_buf);

        config.finalize(&root, cli);
        config.validate()?;
        Ok(config)
    }

    /// Resolve paths, the environment and CLI overrides.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.root = root.to_path_buf();
        self.catalog.normalize(root);
        self.assets.normalize(root);
        self.env = resolve_env(Environment::from_env(), self.site.env, cli.env());
        self.apply_command_options(cli);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Page title and lang for the rendered document.
    pub fn meta(&self) -> crate::render::DocumentMeta<'_> {
        self.site.meta()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Render { .. } => {}
            Commands::Hydrate { args } => {
                Self::update_option(&mut self.hydrate.strategy, args.strategy.as_ref());
                Self::update_option(&mut self.hydrate.endpoint, args.endpoint.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, reporting every error at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.serve.validate(&mut diag);
        self.hydrate.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// `--env` beats `[site] env`, which beats `VIDSHELF_ENV`.
fn resolve_env(
    from_env: Environment,
    from_config: Option<Environment>,
    from_cli: Option<Environment>,
) -> Environment {
    from_cli.or(from_config).unwrap_or(from_env)
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
