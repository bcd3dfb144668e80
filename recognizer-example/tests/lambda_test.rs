use recognizer_example::{parse, Env, LambdaError, Term};

fn var(name: &str) -> Term {
    Term::var(name)
}

#[test]
fn test_parse_var() {
    assert_eq!(parse("x"), Ok(var("x")));
    assert_eq!(parse("  xyz  "), Ok(var("xyz")));
}

#[test]
fn test_parse_application() {
    assert_eq!(parse("f x"), Ok(Term::apply(var("f"), var("x"))));
}

#[test]
fn test_application_is_left_associative() {
    let expected = Term::apply(Term::apply(var("f"), var("x")), var("y"));
    assert_eq!(parse("f x y"), Ok(expected));
}

#[test]
fn test_parse_lambda() {
    assert_eq!(parse("x -> x"), Ok(Term::lambda("x", var("x"))));
    assert_eq!(parse("x->x"), Ok(Term::lambda("x", var("x"))));
}

#[test]
fn test_lambda_body_extends_right() {
    let expected = Term::lambda("x", Term::apply(var("x"), var("y")));
    assert_eq!(parse("x -> x y"), Ok(expected));
}

#[test]
fn test_bracketed_lambda_applied() {
    let expected = Term::apply(Term::lambda("x", var("x")), var("y"));
    assert_eq!(parse("(x -> x) y"), Ok(expected));
}

#[test]
fn test_bracketed_application() {
    let expected = Term::apply(var("f"), Term::apply(var("g"), var("x")));
    assert_eq!(parse("f (g x)"), Ok(expected));
    assert_eq!(parse("((x))"), Ok(var("x")));
    assert_eq!(parse("( x y )"), Ok(Term::apply(var("x"), var("y"))));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse(""), Err(LambdaError::Syntax { offset: 0 }));
    assert_eq!(parse("->"), Err(LambdaError::Syntax { offset: 0 }));
    assert_eq!(parse("(x"), Err(LambdaError::Syntax { offset: 0 }));
    assert_eq!(parse("x )"), Err(LambdaError::TrailingInput { offset: 2 }));
}

#[test]
fn test_unclosed_bracket_fails() {
    assert!(parse("(x").is_err());
    assert!(parse("f (x").is_err());
}

#[test]
fn test_display_round_trips() {
    for text in ["x", "f x y", "f (g x)", "(x->x) y", "(x->y->x) a b", "(f->f (x->x)) g"] {
        let term = parse(text).expect(text);
        let printed = term.to_string();
        assert_eq!(parse(&printed), Ok(term), "{text} printed as {printed}");
    }
}

#[test]
fn test_display_format() {
    assert_eq!(parse("(x -> x) y").map(|t| t.to_string()), Ok("(x->x) y".to_string()));
    assert_eq!(parse("f (g x)").map(|t| t.to_string()), Ok("f (g x)".to_string()));
}

#[test]
fn test_eval_identity() {
    let term = parse("(x -> x) y").expect("term");
    assert_eq!(term.eval(&Env::new()), Ok(var("y")));
}

#[test]
fn test_eval_const() {
    let term = parse("(x -> y -> x) a b").expect("term");
    assert_eq!(term.eval(&Env::new()), Ok(var("a")));
}

#[test]
fn test_eval_unbound_is_stuck() {
    let term = parse("f x").expect("term");
    assert_eq!(term.eval(&Env::new()), Ok(term.clone()));
}

#[test]
fn test_eval_with_env() {
    let mut env = Env::new();
    env.insert("id".to_string(), parse("x -> x").expect("id"));
    let term = parse("id id z").expect("term");
    assert_eq!(term.eval(&env), Ok(var("z")));
}

#[test]
fn test_eval_divergence_is_bounded() {
    let omega = parse("(x -> x x) (x -> x x)").expect("term");
    assert!(matches!(omega.eval(&Env::new()), Err(LambdaError::TooDeep { .. })));
}

#[test]
fn test_deeply_bracketed_term() {
    let depth = 40;
    let text = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&text), Ok(var("x")));

    let unclosed = format!("{}x", "(".repeat(depth));
    assert_eq!(parse(&unclosed), Err(LambdaError::Syntax { offset: 0 }));
}

#[test]
fn test_deeply_nested_lambdas() {
    let depth = 40;
    let text = format!("{}x", "a -> (".repeat(depth)) + &")".repeat(depth);
    let expected = (0..depth).fold(var("x"), |body, _| Term::lambda("a", body));
    assert_eq!(parse(&text), Ok(expected));
}

#[test]
fn test_env_bindings_are_looked_up_once() {
    for _ in 0..64 {
        let mut env = Env::new();
        env.insert("a".to_string(), var("b"));
        env.insert("b".to_string(), var("c"));
        assert_eq!(var("a").eval(&env), Ok(var("b")));
        assert_eq!(parse("a b").expect("term").eval(&env), Ok(Term::apply(var("b"), var("c"))));
    }
}
