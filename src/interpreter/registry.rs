use crate::error::ArithmeticError;

/// Type alias for registered function implementations.
///
/// A registered function receives a slice of already-evaluated argument
/// values and the byte offset of the call for error reporting. It returns
/// the computed value or an [`ArithmeticError`] (e.g. a domain error).
pub type RegistryFn = fn(&[f64], usize) -> Result<f64, ArithmeticError>;

/// One permitted function: its name, fixed arity and pure implementation.
#[derive(Clone, Copy)]
pub struct FunctionEntry {
    /// The name callers use.
    pub name:  &'static str,
    /// The exact number of arguments the function accepts.
    pub arity: usize,
    /// The implementation.
    pub func:  RegistryFn,
}

/// One permitted constant: its name and value.
#[derive(Clone, Copy)]
pub struct ConstantEntry {
    /// The name callers use.
    pub name:  &'static str,
    /// The constant's value.
    pub value: f64,
}

/// The read-only table of every name an expression may use.
///
/// This is the single place where "what is allowed" is declared: the
/// validator accepts only names that resolve here, and the evaluator looks
/// implementations up here. A `Registry` is built once — typically at
/// process start — and never mutated afterwards; there is deliberately no
/// insertion or removal API. Because all state is immutable, one instance
/// can be shared by reference across any number of threads.
///
/// Extending the permitted vocabulary is a one-line addition to the
/// seeding table, reviewable independently of parser and evaluator logic.
pub struct Registry {
    functions: Vec<FunctionEntry>,
    constants: Vec<ConstantEntry>,
}

/// Declares the standard function table.
///
/// Each entry provides a string name, an exact arity, and a function
/// pointer implementing the operation. Keeping the whole whitelist in one
/// table keeps additions reviewable at a glance.
macro_rules! function_table {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The functions seeded by [`Registry::standard`].
        pub static STANDARD_FUNCTIONS: &[FunctionEntry] = &[
            $(
                FunctionEntry { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

function_table! {
    "sin"   => { arity: 1, func: sin },
    "cos"   => { arity: 1, func: cos },
    "tan"   => { arity: 1, func: tan },
    "asin"  => { arity: 1, func: asin },
    "acos"  => { arity: 1, func: acos },
    "atan"  => { arity: 1, func: atan },
    "sinh"  => { arity: 1, func: sinh },
    "cosh"  => { arity: 1, func: cosh },
    "tanh"  => { arity: 1, func: tanh },
    "sqrt"  => { arity: 1, func: sqrt },
    "ln"    => { arity: 1, func: ln },
    "log"   => { arity: 1, func: log },
    "exp"   => { arity: 1, func: exp },
    "abs"   => { arity: 1, func: abs },
    "floor" => { arity: 1, func: floor },
    "ceil"  => { arity: 1, func: ceil },
    "round" => { arity: 1, func: round },
    "min"   => { arity: 2, func: min },
    "max"   => { arity: 2, func: max },
}

/// The constants seeded by [`Registry::standard`].
pub static STANDARD_CONSTANTS: &[ConstantEntry] =
    &[ConstantEntry { name:  "pi",
                      value: std::f64::consts::PI, },
      ConstantEntry { name:  "e",
                      value: std::f64::consts::E, },
      ConstantEntry { name:  "tau",
                      value: std::f64::consts::TAU, }];

impl Registry {
    /// Builds the standard registry: trigonometric and hyperbolic
    /// functions, square root, logarithms, rounding, `min`/`max`, and the
    /// constants `pi`, `e` and `tau`.
    ///
    /// # Example
    /// ```
    /// use safexpr::interpreter::registry::Registry;
    ///
    /// let registry = Registry::standard();
    ///
    /// assert_eq!(registry.function_arity("sqrt"), Some(1));
    /// assert_eq!(registry.constant_value("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(registry.function_arity("__import__"), None);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::with_entries(STANDARD_FUNCTIONS, STANDARD_CONSTANTS)
    }

    /// Builds a registry from caller-supplied entries.
    ///
    /// The hosting application decides exactly which names are exposed;
    /// the evaluator core only requires that the set be fixed and
    /// enumerable.
    ///
    /// # Example
    /// ```
    /// use safexpr::interpreter::registry::{ConstantEntry, Registry};
    ///
    /// let registry = Registry::with_entries(&[],
    ///                                       &[ConstantEntry { name:  "answer",
    ///                                                         value: 42.0, }]);
    ///
    /// assert_eq!(registry.constant_value("answer"), Some(42.0));
    /// assert_eq!(registry.function_arity("sin"), None);
    /// ```
    #[must_use]
    pub fn with_entries(functions: &[FunctionEntry], constants: &[ConstantEntry]) -> Self {
        Self { functions: functions.to_vec(),
               constants: constants.to_vec(), }
    }

    /// Looks up a function entry by name.
    fn function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Gets the declared arity of a registered function, or `None` if the
    /// name is not in the function set.
    #[must_use]
    pub fn function_arity(&self, name: &str) -> Option<usize> {
        self.function(name).map(|f| f.arity)
    }

    /// Gets the value of a registered constant, or `None` if the name is
    /// not in the constant set.
    #[must_use]
    pub fn constant_value(&self, name: &str) -> Option<f64> {
        self.constants
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value)
    }

    /// Calls a registered function with already-evaluated arguments.
    ///
    /// The evaluator only reaches this after validation has confirmed the
    /// name and arity, but both are re-checked so a misuse of the API
    /// surfaces as an error value rather than a panic.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `position`: Byte offset of the call, for error reporting.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// Propagates the implementation's [`ArithmeticError`], and reports a
    /// `DomainError` for names or arities that never passed validation.
    pub fn call(&self, name: &str, args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
        match self.function(name) {
            Some(entry) if args.len() == entry.arity => (entry.func)(args, position),
            Some(entry) => {
                Err(ArithmeticError::DomainError { details: format!("function '{}' called with {} argument(s) instead of {}",
                                                                    entry.name,
                                                                    args.len(),
                                                                    entry.arity),
                                                   position })
            },
            None => {
                Err(ArithmeticError::DomainError { details: format!("call to a function outside the registry: '{name}'"),
                                                   position })
            },
        }
    }
}

/// Returns the value unchanged when it is finite, and `Overflow` otherwise.
///
/// Registered functions operate on finite inputs (the evaluator checks its
/// literals and intermediate results), so a non-finite output means the
/// true result left the representable range.
fn finite_or_overflow(value: f64, position: usize) -> Result<f64, ArithmeticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::Overflow { position })
    }
}

/// Defines a registered unary function delegating to the matching `f64`
/// method, with a finiteness check on the result.
macro_rules! unary_function {
    ($fname:ident) => {
        fn $fname(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
            finite_or_overflow(args[0].$fname(), position)
        }
    };
}

unary_function!(sin);
unary_function!(cos);
unary_function!(tan);
unary_function!(atan);
unary_function!(sinh);
unary_function!(cosh);
unary_function!(tanh);
unary_function!(exp);
unary_function!(abs);
unary_function!(floor);
unary_function!(ceil);
unary_function!(round);

/// Inverse sine; defined on `[-1, 1]`.
fn asin(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
    if args[0].abs() > 1.0 {
        return Err(ArithmeticError::DomainError { details: format!("asin of {} (outside [-1, 1])",
                                                                   args[0]),
                                                  position });
    }
    Ok(args[0].asin())
}

/// Inverse cosine; defined on `[-1, 1]`.
fn acos(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
    if args[0].abs() > 1.0 {
        return Err(ArithmeticError::DomainError { details: format!("acos of {} (outside [-1, 1])",
                                                                   args[0]),
                                                  position });
    }
    Ok(args[0].acos())
}

/// Square root; defined for non-negative inputs.
fn sqrt(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
    if args[0] < 0.0 {
        return Err(ArithmeticError::DomainError { details: format!("square root of negative number {}",
                                                                   args[0]),
                                                  position });
    }
    Ok(args[0].sqrt())
}

/// Natural logarithm; defined for positive inputs.
fn ln(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
    if args[0] <= 0.0 {
        return Err(ArithmeticError::DomainError { details: format!("logarithm of non-positive number {}",
                                                                   args[0]),
                                                  position });
    }
    Ok(args[0].ln())
}

/// Base-10 logarithm; defined for positive inputs.
fn log(args: &[f64], position: usize) -> Result<f64, ArithmeticError> {
    if args[0] <= 0.0 {
        return Err(ArithmeticError::DomainError { details: format!("logarithm of non-positive number {}",
                                                                   args[0]),
                                                  position });
    }
    Ok(args[0].log10())
}

/// The smaller of two values.
#[allow(clippy::unnecessary_wraps)]
fn min(args: &[f64], _position: usize) -> Result<f64, ArithmeticError> {
    Ok(args[0].min(args[1]))
}

/// The larger of two values.
#[allow(clippy::unnecessary_wraps)]
fn max(args: &[f64], _position: usize) -> Result<f64, ArithmeticError> {
    Ok(args[0].max(args[1]))
}
