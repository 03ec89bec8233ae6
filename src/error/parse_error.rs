#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// These cover grammar shape only. Whether a name is actually permitted is
/// decided later by the validator, so that grammar concerns and whitelist
/// concerns stay independently testable.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression here.
    UnexpectedToken {
        /// A description of the token encountered.
        token:    String,
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input while an operand or argument was still
    /// expected.
    UnexpectedEndOfInput {
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// A description of the first extra token.
        token:    String,
        /// The byte offset where the error occurred.
        position: usize,
    },
    /// The expression nests grammar constructs deeper than the parser's
    /// fixed recursion cap.
    NestingTooDeep {
        /// The byte offset where the cap was hit.
        position: usize,
    },
}

impl ParseError {
    /// Gets the byte offset where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::TrailingTokens { position, .. }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at offset {position}: Extra tokens after expression: {token}."),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at offset {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
