//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - `document` - The server-rendered HTML shell

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod document {
    use super::{Template, TemplateVars, substitute};

    /// Variables for document.html.
    ///
    /// Every field is inserted verbatim: callers escape `title`/`lang`, build
    /// the asset tags and make `state` script-safe before rendering.
    pub struct DocumentVars {
        pub lang: String,
        pub title: String,
        pub stylesheet: String,
        pub root: String,
        pub state: String,
        pub scripts: String,
    }

    impl TemplateVars for DocumentVars {
        fn apply(&self, content: &str) -> String {
            substitute(
                content,
                &[
                    ("__VIDSHELF_LANG__", self.lang.as_str()),
                    ("__VIDSHELF_TITLE__", self.title.as_str()),
                    ("__VIDSHELF_STYLESHEET__", self.stylesheet.as_str()),
                    ("__VIDSHELF_ROOT__", self.root.as_str()),
                    ("__VIDSHELF_STATE__", self.state.as_str()),
                    ("__VIDSHELF_SCRIPTS__", self.scripts.as_str()),
                ],
            )
        }
    }

    /// HTML shell with the mount element and the preloaded-state script.
    pub const DOCUMENT_HTML: Template<DocumentVars> = Template::new(include_str!("document.html"));
}

#[cfg(test)]
mod tests {
    use super::document::{DOCUMENT_HTML, DocumentVars};

    fn vars() -> DocumentVars {
        DocumentVars {
            lang: "en".into(),
            title: "Vidshelf".into(),
            stylesheet: "<link rel=\"stylesheet\" href=\"a.css\">".into(),
            root: "<p>hi</p>".into(),
            state: "{}".into(),
            scripts: "<script src=\"a.js\"></script>".into(),
        }
    }

    #[test]
    fn test_document_template() {
        let html = DOCUMENT_HTML.render(&vars());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Vidshelf</title>"));
        assert!(html.contains("<div id=\"root\"><p>hi</p></div>"));
        assert!(html.contains("<script>window.__PRELOADED_STATE__ = {}</script>"));
        assert!(!html.contains("__VIDSHELF_"));
    }

    #[test]
    fn test_document_template_keeps_placeholder_text_in_values() {
        let mut vars = vars();
        vars.root = "__VIDSHELF_STATE__".into();
        let html = DOCUMENT_HTML.render(&vars);
        assert!(html.contains("<div id=\"root\">__VIDSHELF_STATE__</div>"));
    }
}
