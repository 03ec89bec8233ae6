use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ArithmeticError,
    interpreter::registry::Registry,
};

/// Evaluates a validated tree to a single `f64`.
///
/// Evaluation is a pure recursive walk: no state outside the tree and the
/// registry is read, and nothing is written anywhere. Callers are expected
/// to run [`validate`](crate::interpreter::validator::validate) first;
/// names that somehow reach this stage unresolved still come back as error
/// values rather than panics.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
/// - `registry`: Source of constant values and function implementations.
///
/// # Returns
/// The computed value, always finite.
///
/// # Errors
/// - `DivisionByZero` when a divisor evaluates to exactly zero.
/// - `DomainError` when an operation is applied outside its domain, e.g.
///   a negative base raised to a non-integer exponent.
/// - `Overflow` when a result leaves the finite `f64` range.
///
/// # Example
/// ```
/// use safexpr::interpreter::{
///     evaluator::evaluate, lexer::tokenize, parser::core::parse,
///     registry::Registry,
/// };
///
/// let registry = Registry::standard();
/// let tree = parse(&tokenize("2 + 3 * 4").unwrap()).unwrap();
///
/// assert_eq!(evaluate(&tree, &registry), Ok(14.0));
/// ```
pub fn evaluate(expr: &Expr, registry: &Registry) -> Result<f64, ArithmeticError> {
    match expr {
        Expr::NumberLiteral { value, position } => finite_or_overflow(*value, *position),
        Expr::ConstantRef { name, position } => {
            registry.constant_value(name)
                    .ok_or_else(|| ArithmeticError::DomainError { details:  format!("reference to a constant outside the registry: '{name}'"),
                                                                  position: *position, })
        },
        Expr::UnaryOp { op: UnaryOperator::Negate,
                        operand,
                        .. } => Ok(-evaluate(operand, registry)?),
        Expr::BinaryOp { op,
                         left,
                         right,
                         position, } => {
            let lhs = evaluate(left, registry)?;
            let rhs = evaluate(right, registry)?;
            evaluate_binary(*op, lhs, rhs, *position)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            let mut values = Vec::with_capacity(arguments.len());
            for argument in arguments {
                values.push(evaluate(argument, registry)?);
            }
            registry.call(name, &values, *position)
        },
    }
}

/// Applies one binary operator to two already-evaluated operands.
///
/// Division checks its divisor before dividing, so `1 / 0` reports
/// `DivisionByZero` instead of producing an infinity. Exponentiation
/// rejects negative bases with non-integer exponents, where the real
/// result is not a real number.
fn evaluate_binary(op: BinaryOperator,
                   lhs: f64,
                   rhs: f64,
                   position: usize)
                   -> Result<f64, ArithmeticError> {
    let value = match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => {
            if rhs == 0.0 {
                return Err(ArithmeticError::DivisionByZero { position });
            }
            lhs / rhs
        },
        BinaryOperator::Pow => {
            if lhs < 0.0 && rhs.fract() != 0.0 {
                return Err(ArithmeticError::DomainError { details: format!("negative base {lhs} raised to non-integer exponent {rhs}"),
                                                          position });
            }
            lhs.powf(rhs)
        },
    };

    finite_or_overflow(value, position)
}

/// Returns the value unchanged when it is finite, and `Overflow` otherwise.
///
/// All inputs at this point are finite, so a non-finite result can only
/// mean the true value left the representable range.
fn finite_or_overflow(value: f64, position: usize) -> Result<f64, ArithmeticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::Overflow { position })
    }
}
