//! Boundary errors of the hydration pipeline.
//!
//! None of these reach the view tree: the render step and the hydration
//! bootstrap absorb them and continue with a safe default (unresolved asset
//! links, empty catalog state).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Asset manifest missing or not a JSON object of strings.
    #[error("asset manifest unavailable at `{path}`: {reason}")]
    ManifestUnavailable { path: PathBuf, reason: String },

    /// Snapshot handed to `replace_state` does not have the three collections.
    #[error("invalid catalog state: {0}")]
    InvalidStateShape(String),

    /// Initial-state endpoint unreachable or answered with a non-2xx status.
    #[error("initial state endpoint `{url}` unavailable: {reason}")]
    FetchUnavailable { url: String, reason: String },
}

impl CatalogError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::InvalidStateShape(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_location() {
        let err = CatalogError::ManifestUnavailable {
            path: PathBuf::from("public/manifest.json"),
            reason: "No such file or directory".into(),
        };
        assert!(err.to_string().contains("public/manifest.json"));

        let err = CatalogError::FetchUnavailable {
            url: "http://localhost:3000/initialState".into(),
            reason: "connection refused".into(),
        };
        assert!(err.to_string().contains("/initialState"));
    }

    #[test]
    fn test_shape_helper() {
        let err = CatalogError::shape("missing `trends`");
        assert!(matches!(err, CatalogError::InvalidStateShape(ref m) if m == "missing `trends`"));
    }
}
