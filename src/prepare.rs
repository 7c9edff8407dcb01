use crate::config::Config;
use crate::ensure::{ensure_dir, DirOutcome};
use crate::error::Result;
use crate::rewrite::{rewrite_tree, FileReport, LinkRewrite, RewriteMode};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Report {
    pub files: Vec<FileReport>,
    pub image_dir: PathBuf,
    pub dir_outcome: DirOutcome,
    pub dry_run: bool,
    pub elapsed: Duration,
}

impl Report {
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.changed()).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements).sum()
    }
}

/// Rewrites links across the docs tree, then ensures the image directory.
pub fn prepare(config: &Config) -> Result<Report> {
    config.validate()?;
    let start = Instant::now();

    let rewrite = LinkRewrite::from_config(config);
    let mode = RewriteMode {
        dry_run: config.dry_run,
        keep_text: config.keep_text,
    };
    let files = rewrite_tree(&config.docs_root, &rewrite, mode)?;

    let image_dir = config.image_dir();
    let dir_outcome = ensure_dir(&image_dir, config.dry_run)?;

    Ok(Report {
        files,
        image_dir,
        dir_outcome,
        dry_run: config.dry_run,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn docs_fixture() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("a.md"),
            "See /.eraser/foo.png and /.eraser/bar.png.",
        )
        .unwrap();
        fs::write(docs.join("notes.txt"), "/.eraser/ignored").unwrap();
        (tmp, docs)
    }

    #[test]
    fn test_prepare_example_tree() {
        let (_tmp, docs) = docs_fixture();

        let report = prepare(&Config::with_root(&docs)).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files_changed(), 1);
        assert_eq!(report.total_replacements(), 2);
        assert_eq!(report.dir_outcome, DirOutcome::Created);

        assert_eq!(
            fs::read_to_string(docs.join("a.md")).unwrap(),
            "See /test-doc/img/foo.png and /test-doc/img/bar.png."
        );
        assert_eq!(
            fs::read_to_string(docs.join("notes.txt")).unwrap(),
            "/.eraser/ignored"
        );
        assert!(docs.join("img").is_dir());
    }

    #[test]
    fn test_prepare_twice_is_stable() {
        let (_tmp, docs) = docs_fixture();
        let config = Config::with_root(&docs);

        prepare(&config).unwrap();
        let after_first = fs::read_to_string(docs.join("a.md")).unwrap();
        let second = prepare(&config).unwrap();

        assert_eq!(second.total_replacements(), 0);
        assert_eq!(second.dir_outcome, DirOutcome::Existed);
        assert_eq!(fs::read_to_string(docs.join("a.md")).unwrap(), after_first);
    }

    #[test]
    fn test_prepare_missing_root_fails_before_creating_dir() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");

        let err = prepare(&Config::with_root(&docs)).unwrap_err();
        assert!(matches!(err, Error::Walk(_)));
        assert!(!docs.exists());
    }

    #[test]
    fn test_prepare_dry_run_changes_nothing() {
        let (_tmp, docs) = docs_fixture();
        let config = Config {
            dry_run: true,
            ..Config::with_root(&docs)
        };

        let report = prepare(&config).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.total_replacements(), 2);
        assert_eq!(report.dir_outcome, DirOutcome::WouldCreate);
        assert!(report.files[0].text.is_none());
        assert_eq!(
            fs::read_to_string(docs.join("a.md")).unwrap(),
            "See /.eraser/foo.png and /.eraser/bar.png."
        );
        assert!(!docs.join("img").exists());
    }

    #[test]
    fn test_prepare_keeps_text_for_diffing() {
        let (_tmp, docs) = docs_fixture();
        let config = Config {
            keep_text: true,
            ..Config::with_root(&docs)
        };

        let report = prepare(&config).unwrap();
        let text = report.files[0].text.as_ref().unwrap();
        assert_eq!(text.original, "See /.eraser/foo.png and /.eraser/bar.png.");
        assert_eq!(
            text.rewritten,
            "See /test-doc/img/foo.png and /test-doc/img/bar.png."
        );
    }

    #[test]
    fn test_prepare_custom_prefixes() {
        let (_tmp, docs) = docs_fixture();
        let config = Config {
            from: "/.eraser/".to_string(),
            to: "/assets/".to_string(),
            ..Config::with_root(&docs)
        };

        prepare(&config).unwrap();
        assert_eq!(
            fs::read_to_string(docs.join("a.md")).unwrap(),
            "See /assets/foo.png and /assets/bar.png."
        );
    }

    #[test]
    fn test_prepare_rejects_empty_prefix() {
        let (_tmp, docs) = docs_fixture();
        let config = Config {
            from: String::new(),
            ..Config::with_root(&docs)
        };

        assert!(matches!(prepare(&config), Err(Error::EmptyPrefix)));
    }
}
