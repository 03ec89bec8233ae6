use crate::{ast::Expr, error::ValidationError, interpreter::registry::Registry};

/// Resource ceilings applied to a parsed tree before evaluation.
///
/// Limits are deliberately small. They exist to bound the work a single
/// expression can demand, not to accommodate the largest formula anyone
/// could imagine.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Maximum tree depth, counting the root as depth 1.
    pub max_depth: usize,
    /// Maximum total node count across the whole tree.
    pub max_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 64,
               max_nodes: 4096, }
    }
}

/// Checks a parsed tree against the registry and resource limits.
///
/// Validation is a separate pass that runs to completion before any
/// arithmetic happens. It walks the whole tree and confirms that:
///
/// - every constant reference resolves in the registry,
/// - every called function resolves in the registry,
/// - every call supplies exactly the registered number of arguments,
/// - the tree stays within `limits` (depth and node count).
///
/// Function and constant names live in separate namespaces; a name
/// registered only as a function does not validate as a constant. The walk
/// short-circuits on the first violation.
///
/// # Parameters
/// - `expr`: Root of the tree to check.
/// - `registry`: The permitted names.
/// - `limits`: Resource ceilings.
///
/// # Returns
/// `Ok(())` when the tree is safe to evaluate.
///
/// # Errors
/// The first [`ValidationError`] encountered in a pre-order walk.
///
/// # Example
/// ```
/// use safexpr::{
///     error::ValidationError,
///     interpreter::{
///         lexer::tokenize,
///         parser::core::parse,
///         registry::Registry,
///         validator::{Limits, validate},
///     },
/// };
///
/// let registry = Registry::standard();
/// let limits = Limits::default();
///
/// let ok = parse(&tokenize("sqrt(16) + pi").unwrap()).unwrap();
/// assert!(validate(&ok, &registry, &limits).is_ok());
///
/// let unknown = parse(&tokenize("system(0)").unwrap()).unwrap();
/// assert!(matches!(validate(&unknown, &registry, &limits),
///                  Err(ValidationError::UnknownName { .. })));
/// ```
pub fn validate(expr: &Expr, registry: &Registry, limits: &Limits) -> Result<(), ValidationError> {
    let mut visited = 0usize;
    check(expr, registry, limits, 1, &mut visited)
}

/// Recursive worker behind [`validate`].
///
/// `depth` is the depth of `expr` itself; `visited` counts every node seen
/// so far across the whole walk.
fn check(expr: &Expr,
         registry: &Registry,
         limits: &Limits,
         depth: usize,
         visited: &mut usize)
         -> Result<(), ValidationError> {
    *visited += 1;
    if *visited > limits.max_nodes {
        return Err(ValidationError::ResourceLimitExceeded { details:  format!("expression exceeds the node limit of {}",
                                                                              limits.max_nodes),
                                                            position: expr.position(), });
    }
    if depth > limits.max_depth {
        return Err(ValidationError::ResourceLimitExceeded { details:  format!("expression exceeds the depth limit of {}",
                                                                              limits.max_depth),
                                                            position: expr.position(), });
    }

    match expr {
        Expr::NumberLiteral { .. } => Ok(()),
        Expr::ConstantRef { name, position } => {
            if registry.constant_value(name).is_some() {
                Ok(())
            } else {
                Err(ValidationError::UnknownName { name:     name.clone(),
                                                   position: *position, })
            }
        },
        Expr::UnaryOp { operand, .. } => check(operand, registry, limits, depth + 1, visited),
        Expr::BinaryOp { left, right, .. } => {
            check(left, registry, limits, depth + 1, visited)?;
            check(right, registry, limits, depth + 1, visited)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            let Some(expected) = registry.function_arity(name) else {
                return Err(ValidationError::UnknownName { name:     name.clone(),
                                                          position: *position, });
            };
            if arguments.len() != expected {
                return Err(ValidationError::ArityMismatch { name: name.clone(),
                                                            expected,
                                                            found: arguments.len(),
                                                            position: *position });
            }
            for argument in arguments {
                check(argument, registry, limits, depth + 1, visited)?;
            }
            Ok(())
        },
    }
}
