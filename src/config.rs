use crate::error::{Error, Result};
use std::path::PathBuf;

/// Documentation root, relative to the working directory.
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Link prefix that gets retargeted.
pub const DEFAULT_LINK_PREFIX: &str = "/.eraser/";

/// What the link prefix is replaced with.
pub const DEFAULT_REPLACEMENT: &str = "/test-doc/img/";

/// Name of the image directory ensured directly under the docs root.
pub const IMAGE_DIR_NAME: &str = "img";

/// Only files with exactly this extension are rewritten.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct Config {
    pub docs_root: PathBuf,
    pub from: String,
    pub to: String,
    /// Overrides `<docs_root>/img` when set.
    pub image_dir: Option<PathBuf>,
    pub dry_run: bool,
    /// Keep before/after text of changed files so they can be diffed.
    pub keep_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from(DEFAULT_DOCS_ROOT),
            from: DEFAULT_LINK_PREFIX.to_string(),
            to: DEFAULT_REPLACEMENT.to_string(),
            image_dir: None,
            dry_run: false,
            keep_text: false,
        }
    }
}

impl Config {
    pub fn with_root(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }

    pub fn image_dir(&self) -> PathBuf {
        self.image_dir
            .clone()
            .unwrap_or_else(|| self.docs_root.join(IMAGE_DIR_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if self.from.is_empty() {
            return Err(Error::EmptyPrefix);
        }
        Ok(())
    }
}
