//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32, line: u32) -> Position {
    Position::new(offset, line, Rc::new("test.fox".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.category(), ErrorCategory::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        position(42, 3),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.line(), 3);
}

#[test]
fn test_syntax_errors_are_categorised() {
    let errors = [
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "expected `;`".to_string(),
        },
        ErrorImpl::ExpectedExpression {
            token: ";".to_string(),
        },
        ErrorImpl::UnclosedDelimiter {
            expected: ")".to_string(),
            found: "end of input".to_string(),
        },
        ErrorImpl::TrailingComma {
            list: "argument list".to_string(),
        },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];

    for error in errors {
        let error = Error::new(error, position(0, 1));
        assert_eq!(error.category(), ErrorCategory::Syntax, "{}", error);
    }
}

#[test]
fn test_missing_type_is_unsupported_feature() {
    let error = Error::new(
        ErrorImpl::ExpectedExplicitType {
            variable: "y".to_string(),
        },
        position(0, 1),
    );

    assert_eq!(error.get_error_name(), "ExpectedExplicitType");
    assert_eq!(error.category(), ErrorCategory::UnsupportedFeature);
    assert_eq!(
        error.get_tip().to_string(),
        "Type inference is not supported, write `let y <type>`"
    );
}

#[test]
fn test_unterminated_string_is_lex_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, position(0, 1));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.category(), ErrorCategory::Lex);
}

#[test]
fn test_error_display_names_the_line() {
    let error = Error::new(
        ErrorImpl::UnclosedDelimiter {
            expected: ")".to_string(),
            found: "end of input".to_string(),
        },
        position(6, 4),
    );

    assert_eq!(
        error.to_string(),
        "test.fox:4: syntax error: expected \")\", found \"end of input\""
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        position(0, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `}`, did you miss a semicolon?")
        }
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
fn test_trailing_comma_message() {
    let error = Error::new(
        ErrorImpl::TrailingComma {
            list: "parameter list".to_string(),
        },
        position(0, 1),
    );

    assert_eq!(
        error.get_internal_error().to_string(),
        "trailing comma in parameter list"
    );
}
