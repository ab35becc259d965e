//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, SourceError};
use crate::Position;
use std::{io, path::PathBuf};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position { line: 1, column: 9 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(
        error.get_reason(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::LoneOperator { character: '=' },
        Position { line: 4, column: 2 },
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
    assert_eq!(error.get_error_name(), "LoneOperator");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        Position { line: 3, column: 7 },
    );

    assert_eq!(error.to_string(), "Lexer Error at line 3, column 7");
}

#[test]
fn test_error_impl_display() {
    let reason = ErrorImpl::UnrecognisedCharacter { character: '@' };
    assert_eq!(reason.to_string(), "unrecognised character: '@'");

    let reason = ErrorImpl::LoneOperator { character: '!' };
    assert_eq!(reason.to_string(), "'!' must be followed by '='");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::LoneOperator { character: '!' },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`!=`")),
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
fn test_source_error_display() {
    let error = SourceError::Open {
        path: PathBuf::from("missing.src"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };

    assert_eq!(error.to_string(), "failed to open missing.src: not found");
}
