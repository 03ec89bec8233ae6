#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a validated tree.
///
/// These are ordinary numeric failures, deliberately distinct from
/// [`ValidationError`](crate::error::ValidationError): by the time one of
/// these is produced, the whitelist checks have already passed.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the division.
        position: usize,
    },
    /// An operation was applied outside the range where the real-valued
    /// numeric model defines a result (e.g. `log` of a non-positive number,
    /// or a negative base raised to a non-integer exponent).
    DomainError {
        /// Details about the out-of-domain input.
        details:  String,
        /// The byte offset of the operation.
        position: usize,
    },
    /// Finite operands produced a value outside the representable range.
    Overflow {
        /// The byte offset of the operation.
        position: usize,
    },
}

impl ArithmeticError {
    /// Gets the byte offset where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::DomainError { position, .. }
            | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::DomainError { details, position } => {
                write!(f, "Error at offset {position}: Domain error: {details}.")
            },

            Self::Overflow { position } => {
                write!(f, "Error at offset {position}: Result overflows the numeric range.")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}
