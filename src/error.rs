/// Arithmetic errors.
///
/// Contains the error types that can be raised while reducing an
/// already-validated tree: division by zero, domain errors, and overflow.
pub mod arithmetic_error;
/// Lexical errors.
///
/// Defines the error types produced by the tokenizer when the input contains
/// characters outside the expression language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// a syntax tree: unexpected tokens, unmatched parentheses, trailing input,
/// and excessive grammar nesting.
pub mod parse_error;
/// Validation errors.
///
/// Contains the security-relevant error types raised when a parsed tree
/// refers to names outside the registry, calls a function with the wrong
/// arity, or exceeds the configured structural limits.
pub mod validation_error;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use validation_error::ValidationError;

/// Aggregates the four stage errors into one value for callers of the full
/// pipeline.
///
/// Each pipeline stage keeps its own closed enum so failures can be matched
/// by category; `EvalError` only exists so [`evaluate_str`](crate::evaluate_str)
/// can return a single error type. Nothing is ever thrown across layers and
/// no variant is fatal to the process.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The token stream was not a well-formed expression.
    Parse(ParseError),
    /// The tree was well-formed but not permitted.
    Validation(ValidationError),
    /// The permitted tree failed during numeric reduction.
    Arithmetic(ArithmeticError),
}

impl EvalError {
    /// Gets the byte offset where the underlying error occurred.
    ///
    /// ## Example
    /// ```
    /// use safexpr::{
    ///     error::EvalError,
    ///     evaluate_str,
    ///     interpreter::{registry::Registry, validator::Limits},
    /// };
    ///
    /// let registry = Registry::standard();
    /// let err = evaluate_str("1 + $", &registry, &Limits::default()).unwrap_err();
    ///
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Validation(e) => e.position(),
            Self::Arithmetic(e) => e.position(),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Arithmetic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for EvalError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}
