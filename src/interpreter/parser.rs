/// Binary operator precedence levels.
///
/// Implements the left-associative additive and multiplicative levels and
/// the right-associative exponentiation level, plus the token-to-operator
/// mapping shared by all of them.
pub mod binary;
/// Parser entry points.
///
/// Declares the `parse` function that drives a full parse, including the
/// trailing-token check, and the shared recursion-depth cap.
pub mod core;
/// Unary operators and primary expressions.
///
/// Parses negation, numeric literals, parenthesized groupings, constant
/// references and function calls.
pub mod unary;
/// Shared parsing helpers.
pub mod utils;
