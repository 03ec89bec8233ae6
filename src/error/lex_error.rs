#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character (or character sequence) that is not part of the
    /// expression language.
    UnrecognizedCharacter {
        /// The offending slice of the input.
        lexeme:   String,
        /// The byte offset where the slice starts.
        position: usize,
    },
}

impl LexError {
    /// Gets the byte offset where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { lexeme, position } => {
                write!(f, "Error at offset {position}: Unrecognized character '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
