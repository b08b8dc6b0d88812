//! `[hydrate]` section configuration.
//!
//! ```toml
//! [hydrate]
//! strategy = "embedded"              # or "fetch"
//! endpoint = "http://localhost:3000" # base of GET /initialState
//! timeout = 5                        # seconds
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::hydrate::Strategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateConfig {
    pub strategy: Strategy,

    /// Base URL; the state is fetched from `<endpoint>/initialState` and the
    /// page for the embedded strategy from `<endpoint>/`.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl HydrateConfig {
    pub const ENDPOINT: FieldPath = FieldPath::new("hydrate.endpoint");
    pub const TIMEOUT: FieldPath = FieldPath::new("hydrate.timeout");

    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.endpoint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// The endpoint must be an absolute http(s) URL whenever it is used.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.strategy == Strategy::Fetch {
            match self.endpoint_url() {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => diag.error(
                    Self::ENDPOINT,
                    format!("unsupported scheme `{}`", url.scheme()),
                ),
                Err(e) => diag.error_with_hint(
                    Self::ENDPOINT,
                    format!("`{}` is not an absolute URL: {e}", self.endpoint),
                    "use e.g. \"http://localhost:3000\"",
                ),
            }
        }
        if self.timeout == 0 {
            diag.error(Self::TIMEOUT, "timeout must be at least 1 second");
        }
    }
}

impl Default for HydrateConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Embedded,
            endpoint: "http://localhost:3000".into(),
            timeout: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn errors(extra: &str) -> usize {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.hydrate.validate(&mut diag);
        diag.len()
    }

    #[test]
    fn test_hydrate_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.hydrate.strategy, Strategy::Embedded);
        assert_eq!(config.hydrate.timeout(), Duration::from_secs(5));
        assert_eq!(errors(""), 0);
    }

    #[test]
    fn test_fetch_requires_absolute_endpoint() {
        assert_eq!(errors("[hydrate]\nstrategy = \"fetch\"\nendpoint = \"/api\""), 1);
        assert_eq!(errors("[hydrate]\nstrategy = \"fetch\"\nendpoint = \"ftp://x\""), 1);
        assert_eq!(errors("[hydrate]\nstrategy = \"fetch\"\nendpoint = \"https://x.io\""), 0);
    }

    #[test]
    fn test_embedded_ignores_endpoint() {
        assert_eq!(errors("[hydrate]\nendpoint = \"not a url\""), 0);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert_eq!(errors("[hydrate]\ntimeout = 0"), 1);
    }
}
