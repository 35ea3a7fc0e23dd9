//! # calq
//!
//! calq is a calculator for single-line arithmetic expressions written in
//! Rust. It tokenizes an expression over integers, the operators `+ - * /`,
//! and parenthesized grouping, then computes its value directly while
//! consuming the token stream, without building a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{EvalError, ParseError},
    interpreter::{evaluator::eval_expression, lexer::tokenize},
};

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while lexing an input
/// line or computing its value. It standardizes error reporting and carries
/// the input column of each failure for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, arithmetic).
/// - Attaches input columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of expression evaluation.
///
/// This module ties together the lexer and the grammar-evaluation routines
/// to provide a complete pipeline from an input line to a numeric value.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely promote integer literals to `f64` without silent data loss.
pub mod util;

/// Evaluates a single arithmetic expression and returns its value.
///
/// This is the main entry point of the crate. The input is tokenized once,
/// the full token stream is consumed by one top-level expression, and any
/// tokens left over afterwards are reported as an error rather than ignored.
///
/// The returned value is an `f64`: exact for every integer result within
/// `±(2^53 - 1)`, and fractional where division produces a fraction
/// (`7/2` is `3.5`).
///
/// # Errors
/// Returns an [`EvalError`] identifying the failure: a malformed or
/// incomplete expression, an oversized literal, trailing input, or division
/// by zero. No partial result is produced.
///
/// # Examples
/// ```
/// use calq::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate("7/2").unwrap(), 3.5);
///
/// // Division by zero is a typed failure, not a default value.
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(source)?;
    let mut tokens = tokens.iter().peekable();

    let value = eval_expression(&mut tokens)?;

    if let Some((token, column)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  format!("{token:?}"),
                                                          column: *column, }.into());
    }

    Ok(value)
}
