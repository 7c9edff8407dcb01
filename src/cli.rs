use crate::config::{Config, DEFAULT_DOCS_ROOT, DEFAULT_LINK_PREFIX, DEFAULT_REPLACEMENT};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prepare-docs",
    about = "Retarget image links in Markdown docs and ensure the image directory",
    version
)]
pub struct Cli {
    /// Documentation root to rewrite
    #[arg(default_value = DEFAULT_DOCS_ROOT)]
    pub docs_root: PathBuf,

    /// Link prefix to replace
    #[arg(long, default_value = DEFAULT_LINK_PREFIX, allow_hyphen_values = true)]
    pub from: String,

    /// Replacement for the link prefix
    #[arg(long, default_value = DEFAULT_REPLACEMENT, allow_hyphen_values = true)]
    pub to: String,

    /// Image directory to ensure [default: <DOCS_ROOT>/img]
    #[arg(long)]
    pub image_dir: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List rewritten files (-v) and show their diffs (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            docs_root: self.docs_root.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            image_dir: self.image_dir.clone(),
            dry_run: self.dry_run,
            keep_text: self.show_diff(),
        }
    }

    pub fn show_diff(&self) -> bool {
        self.verbose >= 2 || (self.verbose >= 1 && self.dry_run)
    }
}
