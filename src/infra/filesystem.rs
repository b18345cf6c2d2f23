//! Filesystem operations
//!
//! Handles file reads and writes plus the device node scan used by `list`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Replace the content of a file
///
/// The new content goes to a sibling temporary file that is then renamed over
/// `path`, so readers never see a half-written file.
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    let write_error = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut staging = path.as_os_str().to_os_string();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    std::fs::write(&staging, content).map_err(write_error)?;
    std::fs::rename(&staging, path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        write_error(e)
    })
}

/// Entries of `dir` whose file name starts with `prefix`, sorted by name
///
/// Only the directory itself is scanned. A missing directory yields nothing.
pub fn scan_dir(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, FilesystemError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: dir.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_name().to_string_lossy().starts_with(prefix) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
