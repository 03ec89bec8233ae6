use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Hard cap on grammar nesting inside a single parse.
///
/// Parenthesis towers, unary-minus chains and right-nested exponents all
/// consume parser stack before any tree exists for the validator to
/// measure, so the cap lives here. 256 levels is far beyond anything a
/// human-written formula needs and far below anything that threatens the
/// thread stack.
pub const MAX_PARSE_DEPTH: usize = 256;

/// Parses a complete token sequence into a syntax tree.
///
/// This is the entry point for parsing. It parses one full expression and
/// then requires the [`Token::End`] marker, so input with trailing garbage
/// after a complete expression is rejected rather than silently truncated.
///
/// The parser enforces grammar shape only; whether a name is known is the
/// validator's job.
///
/// # Parameters
/// - `tokens`: Token sequence produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `TrailingTokens` if input remains after a complete expression.
/// - Any error propagated from expression parsing.
///
/// # Example
/// ```
/// use safexpr::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("2 + 3 4").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.peek() {
        Some((Token::End, _)) | None => Ok(expr),
        Some((tok, position)) => {
            Err(ParseError::TrailingTokens { token:    format!("{tok:?}"),
                                             position: *position, })
        },
    }
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current grammar nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Increments the nesting depth, rejecting input beyond [`MAX_PARSE_DEPTH`].
///
/// Called wherever the grammar recurses into itself (groupings, argument
/// lists, unary chains, right-nested exponents).
///
/// # Errors
/// `NestingTooDeep` at the current token's position when the cap is hit.
pub(in crate::interpreter::parser) fn deepen<'a, I>(tokens: &mut Peekable<I>,
                                                    depth: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth >= MAX_PARSE_DEPTH {
        let position = tokens.peek().map_or(0, |(_, position)| *position);
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}
