use std::{path::PathBuf, result::Result as StdResult, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// An enum for describing and handling various errors encountered while
/// loading configuration or appending changelog entries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse config file: {0}")]
    ConfigParse(PathBuf),

    #[error("cannot get current directory")]
    CurrentDir,

    #[error("fatal I/O error with the message or changelog file")]
    Io(#[from] std::io::Error),

    #[error("commit message is not valid UTF-8")]
    MessageDecode(#[from] FromUtf8Error),
}
