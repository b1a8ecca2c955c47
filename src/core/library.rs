//! Turn a user-supplied target into the list of files to work on.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file yields itself; a directory yields its entries (not recursive),
/// in whatever order the filesystem reports them.
pub fn targets(target: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let io_err = |source| LibraryError::Io {
        path: target.to_path_buf(),
        source,
    };

    let meta = std::fs::metadata(target).map_err(io_err)?;
    if !meta.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }

    let mut out = Vec::new();
    for entry in std::fs::read_dir(target).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        out.push(entry.path());
    }

    Ok(out)
}

pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// The file name without its extension: what gets matched against a template.
pub fn content_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name for status lines; falls back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
