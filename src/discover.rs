use crate::config::MARKDOWN_EXTENSION;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The extension is whatever follows the last `.` in the name. Names without
/// a `.` never match, and the comparison is case-sensitive.
pub fn is_markdown(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map_or(false, |(_, ext)| ext == MARKDOWN_EXTENSION)
}

/// Collects every Markdown file under `root`, at any depth.
///
/// Walk errors abort discovery instead of being skipped, so a missing or
/// unreadable root fails the run. Directory symlinks are not descended into.
/// Names that are not valid UTF-8 still match on their trailing `.md`.
pub fn markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }
        if !is_markdown(&entry.file_name().to_string_lossy()) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
