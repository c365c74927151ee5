//! Index definition file discovery.
//!
//! Walks the index folder recursively and collects every regular file with a
//! `.json` extension (case-insensitive). Symlinks to regular files count as
//! files; directory symlinks are not descended into. Entries are visited sorted
//! by file name, so the create order is stable across runs and platforms.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use azsearch_config::constants::INDEX_FILE_EXTENSION;

use crate::error::{ClientError, Result};

/// Discover all index definition files under `folder`.
pub fn discover_index_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(folder)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ClientError::Discovery {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| folder.to_path_buf()),
            message: e.to_string(),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        if !has_index_extension(entry.path()) {
            debug!(path = %entry.path().display(), "Skipping non-JSON file");
            continue;
        }
        // `is_file` on the path follows the link to its target.
        if entry.path_is_symlink() && !entry.path().is_file() {
            warn!(path = %entry.path().display(), "Skipping symlink that does not point to a regular file");
            continue;
        }
        if !entry.path_is_symlink() && !entry.file_type().is_file() {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

fn has_index_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(INDEX_FILE_EXTENSION))
}

/// An index definition read from disk.
#[derive(Debug, Clone)]
pub struct IndexFile {
    pub path: PathBuf,
    /// File stem, used in log lines and reports.
    pub name: String,
    /// Raw JSON text, sent unmodified as the create request body.
    pub content: String,
}

impl IndexFile {
    /// Read an index definition as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            content,
        })
    }
}
