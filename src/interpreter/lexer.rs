use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a candidate expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines every token the expression language recognizes.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `1.5e-3`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**` (alias for `^`)
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input, appended by [`tokenize`] so the parser can never read
    /// past the input. The NUL pattern keeps a stray `\0` byte from lexing
    /// as anything else; [`tokenize`] rejects it like any other
    /// unrecognized character.
    #[token("\0")]
    End,

    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts a raw input string into a sequence of tokens.
///
/// Each token is paired with the byte offset where it starts, used for
/// error reporting throughout the pipeline. The returned sequence always
/// ends with a [`Token::End`] positioned at `input.len()`.
///
/// This is a pure function of the input string: no side effects, fully
/// deterministic.
///
/// # Parameters
/// - `input`: The candidate expression.
///
/// # Returns
/// The token sequence, or a [`LexError`] for the first unrecognized
/// character.
///
/// # Errors
/// Returns `LexError::UnrecognizedCharacter` when the input contains a
/// character outside the expression language.
///
/// # Example
/// ```
/// use safexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + pi").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0),
///                 (Token::Plus, 2),
///                 (Token::Identifier("pi".to_string()), 4),
///                 (Token::End, 6)]);
///
/// assert!(tokenize("1 $ 2").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::End) | Err(()) => {
                return Err(LexError::UnrecognizedCharacter { lexeme:   lexer.slice()
                                                                            .to_string(),
                                                             position: lexer.span().start, });
            },
            Ok(tok) => tokens.push((tok, lexer.span().start)),
        }
    }

    tokens.push((Token::End, input.len()));
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
