//! Unit tests for error handling.
//!
//! This module contains tests for open errors and their sentinel kinds.

use std::io;
use std::path::Path;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::{lexer::open_source, tokens::TokenKind};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            reason: "missing".to_string(),
        },
        "test.c",
    );

    assert_eq!(error.get_error_name(), "FileNotFound");
    assert_eq!(error.get_path(), Path::new("test.c"));
    assert_eq!(error.sentinel_kind(), TokenKind::FileNotFound);
}

#[test]
fn test_invalid_file_name_error() {
    let error = Error::new(
        ErrorImpl::InvalidFileName {
            reason: "empty path".to_string(),
        },
        "",
    );

    assert_eq!(error.get_error_name(), "InvalidFileName");
    assert_eq!(error.sentinel_kind(), TokenKind::InvalidFileName);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_from_io_not_found() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let error = Error::from_io(&io_error, Path::new("a.c"));

    assert_eq!(error.sentinel_kind(), TokenKind::FileNotFound);
}

#[test]
fn test_from_io_permission_denied_is_not_found() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let error = Error::from_io(&io_error, Path::new("a.c"));

    assert_eq!(error.sentinel_kind(), TokenKind::FileNotFound);
}

#[test]
fn test_from_io_invalid_input() {
    let io_error = io::Error::new(io::ErrorKind::InvalidInput, "nul byte");
    let error = Error::from_io(&io_error, Path::new("a\0.c"));

    assert_eq!(error.sentinel_kind(), TokenKind::InvalidFileName);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            reason: "no such file".to_string(),
        },
        "lexertest.c",
    );

    assert_eq!(
        error.to_string(),
        "lexertest.c: file could not be located (no such file)"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            reason: "missing".to_string(),
        },
        "prog.c",
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("prog.c")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_open_source_missing() {
    let error = open_source(Path::new("no/such/dir/file.c")).unwrap_err();

    assert_eq!(error.get_error_name(), "FileNotFound");
}

#[test]
fn test_open_source_empty_path() {
    let error = open_source(Path::new("")).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidFileName");
}

#[cfg(unix)]
#[test]
fn test_open_source_directory() {
    let dir = tempfile::tempdir().unwrap();
    let error = open_source(dir.path()).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidFileName");
}
