//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics shared by the tokenizer and the
//! parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants grouped into lex, syntax and unsupported-feature categories
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
