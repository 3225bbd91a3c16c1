use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A failure to acquire a source file, tied to the path that was requested.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: impl Into<PathBuf>) -> Self {
        Error {
            internal_error: error_impl,
            path: path.into(),
        }
    }

    /// Sorts an I/O failure from opening `path` into one of the two open errors.
    pub fn from_io(error: &io::Error, path: &Path) -> Self {
        let reason = error.to_string();
        let error_impl = match error.kind() {
            io::ErrorKind::InvalidInput => ErrorImpl::InvalidFileName { reason },
            _ => ErrorImpl::FileNotFound { reason },
        };

        Error::new(error_impl, path)
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::InvalidFileName { .. } => "InvalidFileName",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => ErrorTip::Suggestion(format!(
                "Check that `{}` exists and is readable",
                self.path.display()
            )),
            ErrorImpl::InvalidFileName { .. } => ErrorTip::None,
        }
    }

    /// The token kind that reports this error inside a token stream.
    pub fn sentinel_kind(&self) -> TokenKind {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => TokenKind::FileNotFound,
            ErrorImpl::InvalidFileName { .. } => TokenKind::InvalidFileName,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("file could not be located ({reason})")]
    FileNotFound { reason: String },
    #[error("invalid file name ({reason})")]
    InvalidFileName { reason: String },
}
