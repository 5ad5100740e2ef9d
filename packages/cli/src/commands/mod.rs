pub mod compile;
pub mod edit;
pub mod init;
pub mod lint;
pub mod variables;

pub use compile::{compile, CompileArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use variables::{variables, VariablesArgs};

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Template records under `dir`, sorted. A file path is returned as-is.
pub(crate) fn find_template_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(anyhow!("Path does not exist: {}", path.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Resolve a user-supplied path against the working directory
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(cwd).join(path)
    }
}
