//! URL to filesystem path resolution for the public directory.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under `serve_root`.
///
/// Returns `None` for anything that is not an existing regular file inside
/// the root, including traversal through `..` or symlinks.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url)?;

    if clean.is_empty() || clean.split('/').any(|segment| segment == "..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Request path without query string or fragment, percent-decoded.
pub fn request_path(url: &str) -> Option<String> {
    let raw = url.split(['?', '#']).next().unwrap_or(url);
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Decoded path with surrounding slashes trimmed.
fn normalize_url(url: &str) -> Option<String> {
    let path = request_path(url)?;
    Some(path.trim_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn public() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets/static")).unwrap();
        fs::write(dir.path().join("assets/app.css"), "body{}").unwrap();
        fs::write(dir.path().join("assets/static/plus icon.png"), [0u8; 4]).unwrap();
        dir
    }

    #[test]
    fn test_resolves_existing_file() {
        let dir = public();
        let path = resolve_path("/assets/app.css?v=3", dir.path()).unwrap();
        assert!(path.ends_with("assets/app.css"));
    }

    #[test]
    fn test_decodes_percent_escapes() {
        let dir = public();
        assert!(resolve_path("/assets/static/plus%20icon.png", dir.path()).is_some());
    }

    #[test]
    fn test_rejects_directories_and_missing_files() {
        let dir = public();
        assert!(resolve_path("/assets", dir.path()).is_none());
        assert!(resolve_path("/", dir.path()).is_none());
        assert!(resolve_path("/assets/app.js", dir.path()).is_none());
    }

    #[test]
    fn test_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("public");
        fs::create_dir_all(&root).unwrap();
        fs::write(dir.path().join("secret.txt"), "x").unwrap();

        assert!(resolve_path("/../secret.txt", &root).is_none());
        assert!(resolve_path("/%2e%2e/secret.txt", &root).is_none());
        assert!(resolve_path("/..%2fsecret.txt", &root).is_none());
    }

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("/initialState?x=1").as_deref(), Some("/initialState"));
        assert_eq!(request_path("/player/a%20b").as_deref(), Some("/player/a b"));
    }
}
