//! Hydration bootstrap: obtain the initial snapshot and build the store.
//!
//! Two strategies, one per deployment:
//!
//! | Strategy   | Source                                               |
//! |------------|------------------------------------------------------|
//! | `embedded` | `window.__PRELOADED_STATE__` inside a rendered page  |
//! | `fetch`    | `GET <endpoint>/initialState`                        |
//!
//! Every failure (missing payload, bad shape, unreachable endpoint) ends in
//! the empty state `{mylist: [], trends: [], originals: []}`; the view tree is
//! never mounted on a partial snapshot.

mod embedded;
mod fetch;

pub use embedded::EmbeddedState;
pub use fetch::{FetchState, fetch_document};

use crate::catalog::{CatalogState, CatalogStore};
use crate::core::CatalogError;
use crate::log;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which bootstrap strategy is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Embedded,
    Fetch,
}

/// A source of the initial catalog snapshot.
///
/// `initial_state` takes `self`: a source is consumed by the one bootstrap
/// that reads it.
pub trait InitialState {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// The raw snapshot, not yet shape-checked.
    fn initial_state(self) -> Result<Value, CatalogError>;
}

/// Build a store from `source`, falling back to the empty state on any error.
///
/// Runs before anything subscribes, so installing the snapshot notifies
/// nobody.
pub fn bootstrap<S: InitialState>(source: S) -> CatalogStore {
    let name = source.name();
    let mut store = CatalogStore::new(CatalogState::empty());

    match source.initial_state().and_then(|snapshot| store.replace_state(snapshot)) {
        Ok(()) if store.get_state().is_empty() => {
            log!("hydrate"; "{}: catalog is empty", name);
        }
        Ok(()) => {
            let state = store.get_state();
            crate::debug!(
                "hydrate";
                "{}: {} favorite(s), {} trend(s), {} original(s)",
                name,
                state.mylist.len(),
                state.trends.len(),
                state.originals.len()
            );
        }
        Err(e) => log!("hydrate"; "{}: {}, starting from empty state", name, e),
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;
    use serde_json::json;

    struct Fixed(Result<Value, CatalogError>);

    impl InitialState for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn initial_state(self) -> Result<Value, CatalogError> {
            self.0
        }
    }

    #[test]
    fn test_bootstrap_installs_snapshot() {
        let snapshot = json!({"mylist": [], "trends": [sample(1, "Mirage")], "originals": []});
        let store = bootstrap(Fixed(Ok(snapshot)));
        assert_eq!(store.get_state().trends, vec![sample(1, "Mirage")]);
    }

    #[test]
    fn test_bootstrap_bad_shape_yields_empty_state() {
        let store = bootstrap(Fixed(Ok(json!({"mylist": [], "trends": "oops", "originals": []}))));
        assert_eq!(store.get_state(), &CatalogState::empty());
    }

    #[test]
    fn test_bootstrap_source_error_yields_empty_state() {
        let err = CatalogError::FetchUnavailable {
            url: "http://127.0.0.1:1/initialState".into(),
            reason: "connection refused".into(),
        };
        let store = bootstrap(Fixed(Err(err)));
        assert!(store.get_state().is_empty());
    }

    #[test]
    fn test_strategy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            strategy: Strategy,
        }
        let w: Wrap = toml::from_str(r#"strategy = "fetch""#).unwrap();
        assert_eq!(w.strategy, Strategy::Fetch);
        assert_eq!(Strategy::default(), Strategy::Embedded);
    }
}
