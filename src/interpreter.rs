/// The evaluator module computes the numeric value of a validated tree.
///
/// The evaluator traverses the tree bottom-up, performing arithmetic and
/// dispatching function calls through the registry. It is the only stage
/// that does arithmetic, and it runs exclusively on trees the validator has
/// accepted.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Resolves constant values and function implementations via the registry.
/// - Reports arithmetic errors such as division by zero, domain violations
///   and overflow.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw input and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a number,
/// identifier, operator or delimiter. This is the first stage of
/// interpretation, and the stage where any character outside the expression
/// alphabet is rejected.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Handles numeric literals (including scientific notation), identifiers
///   and operators.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a tree that represents the syntactic structure of the
/// expression. Only the five supported node shapes can be produced; there
/// is no token for anything else, so no other construct can appear.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Enforces operator precedence and associativity.
/// - Reports syntax errors with byte positions.
pub mod parser;
/// The registry module declares which names expressions may use.
///
/// The registry is an immutable table of permitted functions (with fixed
/// arities) and constants. It is built once by the host and passed by
/// reference to validation and evaluation; there is no global state.
///
/// # Responsibilities
/// - Defines the entry types and the standard function/constant tables.
/// - Answers name and arity lookups for the validator.
/// - Dispatches function calls for the evaluator.
pub mod registry;
/// The validator module checks a parsed tree before evaluation.
///
/// The validator resolves every name against the registry, checks call
/// arities, and enforces resource limits on tree depth and node count. It
/// runs to completion before any arithmetic happens.
///
/// # Responsibilities
/// - Rejects unknown function and constant names.
/// - Rejects calls whose argument count differs from the registered arity.
/// - Enforces configured depth and node-count ceilings.
pub mod validator;
