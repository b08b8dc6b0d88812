//! Common utilities shared across CLI commands.

use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{}", content)?;
            log!(what; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}
