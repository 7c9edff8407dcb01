pub mod cli;
pub mod config;
pub mod discover;
pub mod ensure;
pub mod error;
pub mod output;
pub mod prepare;
pub mod rewrite;

pub use config::Config;
pub use error::{Error, Result};
pub use prepare::{prepare, Report};
