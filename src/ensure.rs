use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    /// Something already exists at the path. It is not checked to be a directory.
    Existed,
    Created,
    WouldCreate,
}

/// Makes sure `path` exists, creating it as a single directory level if not.
///
/// Missing ancestors are not created. Any existing entry, including a regular
/// file, counts as present.
pub fn ensure_dir(path: &Path, dry_run: bool) -> Result<DirOutcome> {
    if path.exists() {
        return Ok(DirOutcome::Existed);
    }
    if dry_run {
        return Ok(DirOutcome::WouldCreate);
    }

    std::fs::create_dir(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DirOutcome::Created)
}
