/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` is a closed vocabulary: these five shapes are the only node kinds
/// that can exist, and every consumer matches them exhaustively. There is no
/// attribute access, no subscript, no assignment, and no
/// call-by-arbitrary-value node, so such constructs are unrepresentable
/// rather than filtered out after the fact. Adding a variant here forces
/// compiler errors in the validator and the evaluator until both explicitly
/// handle it.
///
/// Every variant carries the byte offset of the token that produced it,
/// used for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `1.5e-3`.
    NumberLiteral {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source string.
        position: usize,
    },
    /// Reference to a named constant such as `pi`.
    ConstantRef {
        /// Name of the constant.
        name:     String,
        /// Byte offset in the source string.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source string.
        position: usize,
    },
    /// A binary operation (addition, division, exponentiation, ...).
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the source string.
        position: usize,
    },
    /// A call to a named function, e.g. `sqrt(16)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Ordered argument expressions.
        arguments: Vec<Self>,
        /// Byte offset in the source string.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use safexpr::ast::Expr;
    ///
    /// let expr = Expr::ConstantRef { name:     "pi".to_string(),
    ///                                position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NumberLiteral { position, .. }
            | Self::ConstantRef { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// The arithmetic vocabulary is fixed: there are no comparison, logical, or
/// indexing operators because no such result shape exists in the numeric
/// model.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
