#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while validating a parsed tree.
///
/// This is the security-relevant category: every variant means the input was
/// rejected before any arithmetic was attempted. Callers and tests can match
/// on it to assert that a dangerous input never reached evaluation.
pub enum ValidationError {
    /// A constant reference or function call names something that is not in
    /// the registry.
    UnknownName {
        /// The name that failed to resolve.
        name:     String,
        /// The byte offset of the reference.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The arity declared in the registry.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The byte offset of the call.
        position: usize,
    },
    /// The tree exceeds the configured depth or node-count limit.
    ResourceLimitExceeded {
        /// Which limit was exceeded.
        details:  String,
        /// The byte offset of the node where the limit was hit.
        position: usize,
    },
}

impl ValidationError {
    /// Gets the byte offset where the error occurred.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownName { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::ResourceLimitExceeded { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { name, position } => {
                write!(f, "Error at offset {position}: Unknown name '{name}'.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error at offset {position}: Function '{name}' takes {expected} argument(s), but {found} were supplied."),

            Self::ResourceLimitExceeded { details, position } => {
                write!(f, "Error at offset {position}: Resource limit exceeded: {details}.")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
