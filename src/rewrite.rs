use crate::config::Config;
use crate::discover::markdown_files;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Literal prefix substitution. No regex, no Markdown awareness.
#[derive(Debug, Clone)]
pub struct LinkRewrite {
    pub from: String,
    pub to: String,
}

impl LinkRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.from.clone(), config.to.clone())
    }

    /// Replaces every non-overlapping occurrence, scanning left to right.
    /// Returns the rewritten text and how many occurrences were replaced.
    pub fn apply(&self, content: &str) -> (String, usize) {
        if self.from.is_empty() {
            return (content.to_string(), 0);
        }
        let count = content.matches(self.from.as_str()).count();
        if count == 0 {
            return (content.to_string(), 0);
        }
        (content.replace(self.from.as_str(), &self.to), count)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteMode {
    pub dry_run: bool,
    /// Keep before/after text on each report for diffing.
    pub keep_text: bool,
}

#[derive(Debug, Clone)]
pub struct FileText {
    pub original: String,
    pub rewritten: String,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub replacements: usize,
    /// Only set for changed files when `RewriteMode::keep_text` is on.
    pub text: Option<FileText>,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Reads `path` as UTF-8, substitutes, and writes the full result back.
///
/// The file is written even when nothing matched. In dry-run mode nothing is
/// written.
pub fn rewrite_file(path: &Path, rewrite: &LinkRewrite, mode: RewriteMode) -> Result<FileReport> {
    let original = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let (rewritten, replacements) = rewrite.apply(&original);

    if !mode.dry_run {
        std::fs::write(path, &rewritten).map_err(|source| Error::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let text = (mode.keep_text && replacements > 0).then(|| FileText {
        original,
        rewritten,
    });

    Ok(FileReport {
        path: path.to_path_buf(),
        replacements,
        text,
    })
}

/// Rewrites every Markdown file under `root`, one at a time.
///
/// The first failure aborts the pass. Files handled before it keep their new
/// content and files after it are left alone.
pub fn rewrite_tree(root: &Path, rewrite: &LinkRewrite, mode: RewriteMode) -> Result<Vec<FileReport>> {
    markdown_files(root)?
        .iter()
        .map(|path| rewrite_file(path, rewrite, mode))
        .collect()
}
