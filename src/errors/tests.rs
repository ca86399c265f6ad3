//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.ar".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.ar".to_string()));
    let error = Error::new(
        ErrorImpl::SyntaxError {
            message: "Expected '}' after block.".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_syntax_error() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            message: "Expected ')' after expression.".to_string(),
        },
        Position(0, Rc::new("test.ar".to_string())),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget,
        Position(0, Rc::new("test.ar".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.ar".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::SyntaxError {
            message: "Expected an identifier.".to_string(),
        },
        Position(0, Rc::new("test.ar".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(message) => assert_eq!(message, "Expected an identifier."),
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
fn test_syntax_error_message() {
    let error = ErrorImpl::SyntaxError {
        message: "Expected '(' after 'if'.".to_string(),
    };

    assert_eq!(error.to_string(), "Expected '(' after 'if'.");
}

#[test]
fn test_invalid_assignment_message() {
    assert_eq!(
        ErrorImpl::InvalidAssignmentTarget.to_string(),
        "Invalid assignment expression."
    );
}
