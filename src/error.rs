use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a fact file on disk.
/// Parsing and generation themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
