//! # safexpr
//!
//! safexpr evaluates user-supplied mathematical expressions without ever
//! exposing the host program. Input passes through four stages — lexing,
//! parsing, validation and evaluation — and the tree between them can only
//! express numbers, arithmetic, and calls to explicitly registered
//! functions and constants. Anything else fails closed with a structured
//! error, never with a panic.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::evaluate,
        lexer::tokenize,
        parser::core::parse,
        registry::Registry,
        validator::{Limits, validate},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The tree is built by the parser,
/// checked by the validator, and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the five node shapes an expression can take.
/// - Attaches byte positions to every node for error reporting.
/// - Keeps the representation closed: nothing outside these shapes exists.
pub mod ast;
/// Provides unified error types for every processing stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// validating or evaluating an expression, plus an aggregate type for
/// callers that drive the whole pipeline. Every error carries the byte
/// position where it was detected.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, validator, evaluator).
/// - Attaches byte positions and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, validation, the registry and
/// evaluation to provide a complete pipeline from input text to numeric
/// result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, validator, registry
///   and evaluator.
/// - Provides the stage entry points used by [`evaluate_str`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an expression string against a registry, in one call.
///
/// This is the convenience entry point that runs all four stages in order:
/// tokenize, parse, validate, evaluate. Each stage must fully succeed
/// before the next begins, so nothing is ever evaluated that has not been
/// validated first. Callers that need the intermediate tree can invoke the
/// stages individually instead.
///
/// Evaluation is deterministic: the same input, registry and limits always
/// produce the same result.
///
/// # Parameters
/// - `input`: The expression text.
/// - `registry`: The permitted functions and constants.
/// - `limits`: Resource ceilings applied during validation.
///
/// # Returns
/// The computed value, always finite.
///
/// # Errors
/// The first [`EvalError`] raised by any stage.
///
/// # Examples
/// ```
/// use safexpr::{
///     evaluate_str,
///     interpreter::{registry::Registry, validator::Limits},
/// };
///
/// let registry = Registry::standard();
/// let limits = Limits::default();
///
/// assert_eq!(evaluate_str("2 + 3 * 4", &registry, &limits), Ok(14.0));
/// assert_eq!(evaluate_str("sqrt(16)", &registry, &limits), Ok(4.0));
///
/// // Unknown names fail validation, before anything runs.
/// assert!(evaluate_str("__import__('os')", &registry, &limits).is_err());
/// ```
pub fn evaluate_str(input: &str,
                    registry: &Registry,
                    limits: &Limits)
                    -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    let expr = parse(&tokens)?;
    validate(&expr, registry, limits)?;

    Ok(evaluate(&expr, registry)?)
}
