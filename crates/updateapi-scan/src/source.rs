//! Source file discovery and loading.

use crate::ScanError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A loaded source file: where it came from (for error messages) and its text.
pub(crate) struct SourceFile {
    pub origin: String,
    pub text: String,
}

/// Collect every file under `root` whose name ends with `suffix`, sorted by
/// path so scans are deterministic.
pub(crate) fn load_sources(root: &Path, suffix: &str) -> Result<Vec<SourceFile>, ScanError> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| ScanError::Io {
            path: root.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(suffix)
        {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|e| ScanError::Io {
            path: path.clone(),
            source: e,
        })?;
        sources.push(SourceFile {
            origin: path.display().to_string(),
            text,
        });
    }

    Ok(sources)
}

pub(crate) fn parse_source(origin: &str, text: &str) -> Result<syn::File, ScanError> {
    syn::parse_file(text).map_err(|e| ScanError::Parse {
        origin: origin.to_string(),
        source: e,
    })
}
