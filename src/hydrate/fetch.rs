//! Fetch strategy: one GET against the initial-state endpoint.
//!
//! No retry and no cancellation. Connection failures and non-2xx responses
//! surface as `FetchUnavailable`, bodies that are not JSON as
//! `InvalidStateShape`.

use super::InitialState;
use crate::core::CatalogError;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Path of the endpoint, relative to the configured base.
pub const INITIAL_STATE_PATH: &str = "initialState";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Agent with a global timeout and a shorter connect timeout.
fn agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .timeout_connect(Some(CONNECT_TIMEOUT.min(timeout)))
        .build()
        .into()
}

pub struct FetchState {
    agent: ureq::Agent,
    url: Url,
}

impl FetchState {
    /// Target `<base>/initialState`.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, CatalogError> {
        Ok(Self {
            agent: agent(timeout),
            url: endpoint(base, INITIAL_STATE_PATH)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl InitialState for FetchState {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn initial_state(self) -> Result<Value, CatalogError> {
        let body = get(&self.agent, &self.url)?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::shape(format!("{} did not return JSON: {e}", self.url)))
    }
}

/// Download the rendered page at `base`, for the embedded strategy.
pub fn fetch_document(base: &Url, timeout: Duration) -> Result<String, CatalogError> {
    get(&agent(timeout), base)
}

/// Append `path` to `base` as one more segment, keeping any base path.
fn endpoint(base: &Url, path: &str) -> Result<Url, CatalogError> {
    let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| unavailable(&joined, e.to_string()))
}

fn get(agent: &ureq::Agent, url: &Url) -> Result<String, CatalogError> {
    let mut response = agent.get(url.as_str()).call().map_err(|e| match e {
        ureq::Error::StatusCode(code) => unavailable(url.as_str(), format!("HTTP {code}")),
        other => unavailable(url.as_str(), other.to_string()),
    })?;

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| unavailable(url.as_str(), e.to_string()))
}

fn unavailable(url: &str, reason: String) -> CatalogError {
    CatalogError::FetchUnavailable {
        url: url.to_string(),
        reason,
    }
}
