use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The three families of front-end diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A character the tokenizer cannot start a token with.
    Lex,
    /// A token of the wrong kind, or a missing one.
    Syntax,
    /// Input that is well formed but asks for something the language does not do yet.
    UnsupportedFeature,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lex => write!(f, "lex error"),
            ErrorCategory::Syntax => write!(f, "syntax error"),
            ErrorCategory::UnsupportedFeature => write!(f, "unsupported feature"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// 1-based source line of the offending token.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedString => {
                ErrorCategory::Lex
            }
            ErrorImpl::ExpectedExplicitType { .. } => ErrorCategory::UnsupportedFeature,
            _ => ErrorCategory::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnclosedDelimiter { .. } => "UnclosedDelimiter",
            ErrorImpl::TrailingComma { .. } => "TrailingComma",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::ExpectedExplicitType { .. } => "ExpectedExplicitType",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string literal"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedExpression { token } => ErrorTip::Suggestion(format!(
                "Expected an expression, found `{}`",
                token
            )),
            ErrorImpl::UnclosedDelimiter { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`, is a delimiter left open?",
                expected, found
            )),
            ErrorImpl::TrailingComma { list } => ErrorTip::Suggestion(format!(
                "Remove the trailing `,` at the end of the {}",
                list
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, split the expression up",
                limit
            )),
            ErrorImpl::ExpectedExplicitType { variable } => ErrorTip::Suggestion(format!(
                "Type inference is not supported, write `let {} <type>`",
                variable
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.position.file,
            self.position.line,
            self.category(),
            self.internal_error
        )
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unknown token {token:?} when expecting an expression")]
    ExpectedExpression { token: String },
    #[error("expected {expected:?}, found {found:?}")]
    UnclosedDelimiter { expected: String, found: String },
    #[error("trailing comma in {list}")]
    TrailingComma { list: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("variable {variable:?} has no type annotation, type inference is not supported")]
    ExpectedExplicitType { variable: String },
}
