//! Deployment environment: selects how the document resolves its assets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable consulted at process start.
pub const ENV_VAR: &str = "VIDSHELF_ENV";

/// Production resolves bundles through the asset manifest; development links
/// the fixed, unhashed bundle paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Read `VIDSHELF_ENV` (after an optional `.env` file has been loaded).
    ///
    /// Anything other than `production` is development.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!(" PROD ".parse(), Ok(Environment::Production));
        assert_eq!("development".parse(), Ok(Environment::Development));
        assert_eq!("staging".parse::<Environment>(), Err(()));
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
        assert!(!Environment::default().is_production());
    }
}
