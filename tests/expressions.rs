use pretty_assertions::assert_eq;
use safexpr::{
    ast::{BinaryOperator, Expr},
    error::{ArithmeticError, EvalError, LexError, ParseError, ValidationError},
    evaluate_str,
    interpreter::{
        lexer::tokenize,
        parser::core::parse,
        registry::Registry,
        validator::{Limits, validate},
    },
};

fn eval(src: &str) -> Result<f64, EvalError> {
    evaluate_str(src, &Registry::standard(), &Limits::default())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = eval(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 4", 2.5);
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
}

#[test]
fn precedence_and_associativity() {
    // Subtraction and division associate to the left.
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 2", 5.0);

    // Exponentiation associates to the right.
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 ** 3", 8.0);
    assert_value("2 ** 3 ** 2", 512.0);

    // Unary minus binds tighter than the exponent.
    assert_value("-2 ^ 2", 4.0);
    assert_value("-(2 ^ 2)", -4.0);
    assert_value("--3", 3.0);
}

#[test]
fn number_literal_forms() {
    assert_value("3.25", 3.25);
    assert_value(".5 + .5", 1.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5e-1", 0.25);
    assert_value("1E2", 100.0);
}

#[test]
fn functions_and_constants() {
    assert_value("sqrt(16)", 4.0);
    assert_value("abs(-7)", 7.0);
    assert_value("floor(3.7)", 3.0);
    assert_value("ceil(3.2)", 4.0);
    assert_value("round(3.5)", 4.0);
    assert_value("min(3, 8)", 3.0);
    assert_value("max(3, 8)", 8.0);
    assert_value("log(1000)", 3.0);
    assert_value("ln(e)", 1.0);
    assert_value("sin(0)", 0.0);
    assert_value("pi", std::f64::consts::PI);
    assert_value("tau / 2", std::f64::consts::PI);
    assert_value("cos(pi) + 1", 0.0);
}

#[test]
fn lexer_rejects_foreign_characters() {
    assert!(matches!(eval("1 + $"),
                     Err(EvalError::Lex(LexError::UnrecognizedCharacter { position: 4, .. }))));
    assert!(matches!(eval("2 @ 3"), Err(EvalError::Lex(_))));
    assert!(matches!(eval("\"text\""), Err(EvalError::Lex(_))));

    // The classic injection probe dies at the first quote.
    assert!(matches!(eval("__import__('os')"), Err(EvalError::Lex(_))));
}

#[test]
fn injection_shapes_cannot_reach_evaluation() {
    // Without quotes the probe lexes fine, parses fine, and is then
    // rejected by name resolution.
    assert!(matches!(eval("__import__(1)"),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
    assert!(matches!(eval("eval(1)"),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
    assert!(matches!(eval("system(0)"),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
}

#[test]
fn parser_rejects_malformed_input() {
    assert!(matches!(eval(""),
                     Err(EvalError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("1 +"),
                     Err(EvalError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("((1 + 2)"),
                     Err(EvalError::Parse(ParseError::ExpectedClosingParen { .. }))));
    assert!(matches!(eval("1 2"),
                     Err(EvalError::Parse(ParseError::TrailingTokens { .. }))));
    assert!(matches!(eval("1 + * 2"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(eval("min(1 2)"), Err(EvalError::Parse(_))));
}

#[test]
fn parenthesis_towers_are_rejected_not_crashed() {
    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(eval(&deep),
                     Err(EvalError::Parse(ParseError::NestingTooDeep { .. }))));

    // A modest tower is fine.
    let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_value(&shallow, 1.0);
}

#[test]
fn validation_checks_names_and_arity() {
    assert!(matches!(eval("x + 1"),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
    assert!(matches!(eval("sin(1, 2)"),
                     Err(EvalError::Validation(ValidationError::ArityMismatch { expected: 1,
                                                                                found: 2,
                                                                                .. }))));
    assert!(matches!(eval("min(3)"),
                     Err(EvalError::Validation(ValidationError::ArityMismatch { expected: 2,
                                                                                found: 1,
                                                                                .. }))));
    assert!(matches!(eval("sqrt()"),
                     Err(EvalError::Validation(ValidationError::ArityMismatch { found: 0, .. }))));

    // Names are namespaced: `sin` is a function, not a constant.
    assert!(matches!(eval("sin + 1"),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
}

#[test]
fn limits_bound_depth_and_node_count() {
    let registry = Registry::standard();

    let tight_nodes = Limits { max_depth: 64,
                               max_nodes: 4, };
    assert!(matches!(evaluate_str("1 + 2 + 3 + 4", &registry, &tight_nodes),
                     Err(EvalError::Validation(ValidationError::ResourceLimitExceeded { .. }))));
    assert_eq!(evaluate_str("1 + 2", &registry, &tight_nodes), Ok(3.0));

    let tight_depth = Limits { max_depth: 3,
                               max_nodes: 4096, };
    assert!(matches!(evaluate_str("-(-(-(1)))", &registry, &tight_depth),
                     Err(EvalError::Validation(ValidationError::ResourceLimitExceeded { .. }))));
    assert_eq!(evaluate_str("-(-1)", &registry, &tight_depth), Ok(1.0));

    // A unary chain the parser accepts is still too deep for the default
    // limits.
    let chain = format!("{}1", "-".repeat(100));
    assert!(matches!(eval(&chain),
                     Err(EvalError::Validation(ValidationError::ResourceLimitExceeded { .. }))));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(eval("1 / 0"),
                     Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero { position: 2 }))));
    assert!(matches!(eval("1 / (2 - 2)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero { .. }))));
    assert!(matches!(eval("(-8) ^ 0.5"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert!(matches!(eval("1e308 * 10"),
                     Err(EvalError::Arithmetic(ArithmeticError::Overflow { .. }))));
    assert!(matches!(eval("10 ^ 1000"),
                     Err(EvalError::Arithmetic(ArithmeticError::Overflow { .. }))));

    // Negative base with an integer exponent is fine.
    assert_value("(-8) ^ 2", 64.0);
    assert_value("(-2) ^ 3", -8.0);
    assert_value("0 / 3", 0.0);
}

#[test]
fn registered_functions_check_their_domains() {
    assert!(matches!(eval("sqrt(-1)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert!(matches!(eval("ln(0)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert!(matches!(eval("log(-5)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert!(matches!(eval("asin(2)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert!(matches!(eval("acos(-1.5)"),
                     Err(EvalError::Arithmetic(ArithmeticError::DomainError { .. }))));
    assert_value("asin(1) * 2", std::f64::consts::PI);
}

#[test]
fn errors_carry_byte_positions() {
    assert_eq!(eval("1 + $").unwrap_err().position(), 4);
    assert_eq!(eval("2 * unknown").unwrap_err().position(), 4);
    assert_eq!(eval("1 / 0").unwrap_err().position(), 2);
    assert_eq!(eval("1 + sin(1, 2)").unwrap_err().position(), 4);
}

#[test]
fn evaluation_is_deterministic() {
    let registry = Registry::standard();
    let limits = Limits::default();
    let src = "sin(1.25) * cos(0.5) + sqrt(2) ^ 3 - ln(7)";

    let first = evaluate_str(src, &registry, &limits).unwrap();
    for _ in 0..10 {
        let again = evaluate_str(src, &registry, &limits).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Registry::standard();
    let limits = Limits::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|i| {
                      let registry = &registry;
                      scope.spawn(move || {
                               evaluate_str(&format!("sqrt({i}) + pi"), registry, &limits)
                           })
                  })
                  .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = (i as f64).sqrt() + std::f64::consts::PI;
            assert_eq!(handle.join().unwrap(), Ok(expected));
        }
    });
}

#[test]
fn hand_built_trees_are_still_validated() {
    let registry = Registry::standard();
    let limits = Limits::default();

    // A tree constructed directly, bypassing the parser, gets the same
    // name resolution as parsed input.
    let forged = Expr::FunctionCall { name:      "exec".to_string(),
                                      arguments: vec![Expr::NumberLiteral { value:    0.0,
                                                                            position: 5, }],
                                      position:  0, };
    assert!(matches!(validate(&forged, &registry, &limits),
                     Err(ValidationError::UnknownName { .. })));

    let wide = Expr::BinaryOp { op:       BinaryOperator::Add,
                                left:     Box::new(Expr::NumberLiteral { value:    1.0,
                                                                         position: 0, }),
                                right:    Box::new(Expr::NumberLiteral { value:    2.0,
                                                                         position: 4, }),
                                position: 2, };
    assert!(validate(&wide, &registry, &limits).is_ok());
}

#[test]
fn custom_registries_define_the_whole_vocabulary() {
    use safexpr::interpreter::registry::ConstantEntry;

    let registry = Registry::with_entries(&[],
                                          &[ConstantEntry { name:  "answer",
                                                            value: 42.0, }]);
    let limits = Limits::default();

    assert_eq!(evaluate_str("answer + 1", &registry, &limits), Ok(43.0));

    // The standard names are absent unless seeded.
    assert!(matches!(evaluate_str("pi", &registry, &limits),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
    assert!(matches!(evaluate_str("sqrt(4)", &registry, &limits),
                     Err(EvalError::Validation(ValidationError::UnknownName { .. }))));
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  2+3 ", 5.0);
    assert_value("2\t+\n3", 5.0);
    assert_value("min( 1 , 2 )", 1.0);
}

#[test]
fn tokenizer_reports_positions() {
    let tokens = tokenize("10 + pi").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|(_, p)| *p).collect();
    assert_eq!(positions, vec![0, 3, 5, 7]);

    let tree = parse(&tokens).unwrap();
    assert_eq!(tree.position(), 3);
}

#[test]
fn grouping_adds_no_nodes() {
    let plain = parse(&tokenize("1 + 2").unwrap()).unwrap();
    let grouped = parse(&tokenize("((1 + 2))").unwrap()).unwrap();
    match (plain, grouped) {
        (Expr::BinaryOp { op: a, .. }, Expr::BinaryOp { op: b, .. }) => assert_eq!(a, b),
        (p, g) => panic!("expected binary roots, got {p:?} and {g:?}"),
    }
}

#[test]
fn failing_expressions_never_panic() {
    assert_failure(")");
    assert_failure("()");
    assert_failure("1 + + 2");
    assert_failure("min(,)");
    assert_failure("pi(1)");
    assert_failure("1..2");
    assert_failure("^2");
}
