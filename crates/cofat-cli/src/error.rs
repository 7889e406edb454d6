use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] cofat_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No content provided on stdin")]
    EmptyContent,
    #[error("Page URL cannot be empty")]
    EmptyPageUrl,
    #[error("Failed to read attachment {path}: {source}")]
    AttachmentRead { path: PathBuf, source: io::Error },
    #[error("Attachment path has no file name: {0}")]
    AttachmentName(PathBuf),
}
