use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, deepen, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-` (numeric negation). Unary operators are
/// right-associative, so `--x` parses as `-(-x)`. If no unary operator is
/// present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current grammar nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let depth = deepen(tokens, depth)?;
        let operand = parse_unary(tokens, depth)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           operand: Box::new(operand),
                           position })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - parenthesized expressions
/// - function calls
/// - constant references
///
/// Dispatch depends on the leading token. Reaching the end of input here
/// means an operand was still expected.
///
/// Grammar (simplified):
/// ```text
///     primary := number
///              | "(" expression ")"
///              | identifier "(" arguments ")"
///              | identifier
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Current grammar nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (Token::End, position) => Err(ParseError::UnexpectedEndOfInput { position: *position }),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                             position: *position, }),
    }
}

/// Parses a numeric literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number.
///
/// # Returns
/// An [`Expr::NumberLiteral`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => {
            Ok(Expr::NumberLiteral { value:    *value,
                                     position: *position, })
        },
        _ => unreachable!("parse_primary dispatches literals on a Number token"),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`. Grouping produces
/// no node of its own; the inner expression is returned as-is.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Current grammar nesting depth.
///
/// # Returns
/// The inner expression (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().expect("caller peeked '('");
    let depth = deepen(tokens, depth)?;
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a constant reference or a function call.
///
/// Supported forms:
///
/// - `identifier` — a constant reference such as `pi`
/// - `identifier(arg1, arg2, ...)` — a function call such as `sqrt(16)`
///
/// The function consumes the identifier token. If the next token is `(`, a
/// call is parsed with a comma-separated argument list (empty lists are
/// allowed; the validator enforces arity). Otherwise the identifier is a
/// constant reference.
///
/// The name is not resolved here: an unknown identifier still parses, and
/// the validator rejects it before anything is evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `depth`: Current grammar nesting depth.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::ConstantRef`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!("parse_primary dispatches identifiers on an Identifier token"),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let depth = deepen(tokens, depth)?;
            let arguments = parse_comma_separated(tokens,
                                                  |t| parse_expression(t, depth),
                                                  &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    position })
        },
        _ => Ok(Expr::ConstantRef { name, position }),
    }
}
