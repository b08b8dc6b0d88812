//! Embedded-state strategy: read the payload the server render wrote.

use super::InitialState;
use crate::core::CatalogError;
use crate::render::STATE_SCRIPT;
use serde_json::Value;

/// The rendered document, consumed by the bootstrap.
#[derive(Debug)]
pub struct EmbeddedState {
    document: String,
}

impl EmbeddedState {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl InitialState for EmbeddedState {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn initial_state(self) -> Result<Value, CatalogError> {
        extract_preloaded(&self.document)
    }
}

/// Parse the value assigned by the state script in `document`.
///
/// The payload is JSON with `<` written as `\u003c`, so it can never contain
/// [`STATE_SCRIPT`]; the last occurrence is the one the render wrote, even when
/// item text in `#root` spells out the same assignment.
pub fn extract_preloaded(document: &str) -> Result<Value, CatalogError> {
    let start = document
        .rfind(STATE_SCRIPT)
        .ok_or_else(|| CatalogError::shape("no preloaded state script in document"))?;
    let rest = &document[start + STATE_SCRIPT.len()..];

    // Only the first value matters; the script and the page continue after it.
    serde_json::Deserializer::from_str(rest)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| CatalogError::shape("empty preloaded state"))?
        .map_err(|e| CatalogError::shape(format!("preloaded state is not JSON: {e}")))
}
