//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory.
///
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /srv/shelf/public/assets/  ← cwd
/// /srv/shelf/vidshelf.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public/assets");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vidshelf.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("vidshelf.toml")).unwrap();
        assert_eq!(found, dir.path().join("vidshelf.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-config-7f3a.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file_from(Path::new("/"), &path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(Path::new("/a"), Path::new("b/c")), Path::new("/a/b/c"));
        assert_eq!(resolve(Path::new("/a"), Path::new("/b")), Path::new("/b"));
    }
}
