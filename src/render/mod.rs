//! Server-side render: markup + state + assets into one HTML document.
//!
//! - `escape` - script-safe JSON for the preloaded state
//! - `manifest` - production/development asset resolution

mod escape;
mod manifest;

pub use manifest::Assets;

use escape::script_safe_state;

use crate::catalog::CatalogState;
use crate::embed::document::{DOCUMENT_HTML, DocumentVars};
use crate::utils::html::{escape, escape_attr};
use crate::view;

/// Opening of the script that assigns the embedded state.
///
/// The payload never contains `<`, so the last occurrence of this marker in a
/// rendered document is always the real one, whatever the markup holds.
pub const STATE_SCRIPT: &str = "<script>window.__PRELOADED_STATE__ = ";

/// Page-level values taken from `[site]`.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta<'a> {
    pub title: &'a str,
    pub lang: &'a str,
}

impl Default for DocumentMeta<'_> {
    fn default() -> Self {
        Self {
            title: "Vidshelf",
            lang: "en",
        }
    }
}

/// Build the complete document.
///
/// `markup` goes verbatim into `<div id="root">`; `state` is serialized with
/// every `<` escaped and assigned in [`STATE_SCRIPT`]. Pure: concurrent
/// callers need no coordination.
pub fn render_document(
    markup: &str,
    state: &CatalogState,
    assets: &Assets,
    meta: DocumentMeta<'_>,
) -> String {
    let stylesheet = format!(
        r#"<link rel="stylesheet" href="{}" type="text/css">"#,
        escape_attr(&assets.stylesheet())
    );
    let scripts = format!(
        "<script src=\"{}\" type=\"text/javascript\"></script>\n  \
         <script src=\"{}\" type=\"text/javascript\"></script>",
        escape_attr(&assets.main_script()),
        escape_attr(&assets.vendor_script()),
    );

    DOCUMENT_HTML.render(&DocumentVars {
        lang: escape_attr(meta.lang).into_owned(),
        title: escape(meta.title).into_owned(),
        stylesheet,
        root: markup.to_string(),
        state: script_safe_state(state),
        scripts,
    })
}

/// Render the home view for `state` and wrap it in the document.
pub fn render_home(state: &CatalogState, assets: &Assets, meta: DocumentMeta<'_>) -> String {
    render_document(&view::home(state), state, assets, meta)
}
