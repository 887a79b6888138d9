use std::collections::HashSet;

use kaleido::ast::{Expr, ExprKind};

fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Number { value } => format!("{value}"),
        Expr::Variable { name } => name.clone(),
        Expr::Binary { op, lhs, rhs } => format!("({} {op} {})", describe(lhs), describe(rhs)),
        Expr::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(describe).collect();
            format!("{callee}({})", args.join(", "))
        },
    }
}

#[test]
fn binary_keeps_operator_and_operands() {
    let expr = Expr::binary('+', Expr::number(2.0), Expr::number(2.0));

    let Expr::Binary { op, lhs, rhs } = &expr else {
        panic!("expected a binary node, got {expr:?}");
    };
    assert_eq!(*op, '+');
    assert_eq!(**lhs, Expr::number(2.0));
    assert_eq!(**rhs, Expr::number(2.0));
    assert!(!std::ptr::eq(lhs.as_ref(), rhs.as_ref()));
}

#[test]
fn call_with_no_arguments() {
    let expr = Expr::call("rand", Vec::new());

    let Expr::Call { callee, args } = &expr else {
        panic!("expected a call node, got {expr:?}");
    };
    assert_eq!(callee, "rand");
    assert!(args.is_empty());
}

#[test]
fn call_arguments_keep_their_order() {
    let expr = Expr::call("atan2",
                          vec![Expr::variable("y"),
                               Expr::binary('*', Expr::variable("x"), Expr::number(0.5))]);
    assert_eq!(describe(&expr), "atan2(y, (x * 0.5))");
}

#[test]
fn nested_trees() {
    // fib(x-1)+fib(x-2)
    let expr = Expr::binary('+',
                            Expr::call("fib",
                                       vec![Expr::binary('-',
                                                         Expr::variable("x"),
                                                         Expr::number(1.0))]),
                            Expr::call("fib",
                                       vec![Expr::binary('-',
                                                         Expr::variable("x"),
                                                         Expr::number(2.0))]));
    assert_eq!(describe(&expr), "(fib((x - 1)) + fib((x - 2)))");
}

#[test]
fn kinds_cover_every_variant() {
    let exprs = [Expr::number(1.0),
                 Expr::variable("x"),
                 Expr::binary('<', Expr::variable("x"), Expr::number(3.0)),
                 Expr::call("f", vec![])];
    let kinds: Vec<ExprKind> = exprs.iter().map(Expr::kind).collect();
    assert_eq!(kinds,
               vec![ExprKind::Number, ExprKind::Variable, ExprKind::Binary, ExprKind::Call]);
}

#[test]
fn clones_are_independent_and_equal() {
    let original = Expr::binary('-', Expr::variable("a"), Expr::number(1.0));
    let copy = original.clone();
    assert_eq!(original, copy);

    let (Expr::Binary { lhs: a, .. }, Expr::Binary { lhs: b, .. }) = (&original, &copy) else {
        panic!("expected binary nodes");
    };
    assert!(!std::ptr::eq(a.as_ref(), b.as_ref()));
}

#[test]
fn structural_equality_and_hashing() {
    let set: HashSet<Expr> = [Expr::number(0.5),
                              Expr::from(0.5),
                              Expr::variable("x"),
                              Expr::call("f", vec![Expr::number(1.0)]),
                              Expr::call("f", vec![Expr::number(1.0)]),
                              Expr::call("f", vec![Expr::number(2.0)])].into_iter()
                                                                       .collect();
    assert_eq!(set.len(), 4);
    assert_ne!(Expr::binary('+', Expr::number(1.0), Expr::number(2.0)),
               Expr::binary('+', Expr::number(2.0), Expr::number(1.0)));
}

#[test]
fn trees_can_be_shared_across_threads() {
    let expr = Expr::binary('*', Expr::variable("x"), Expr::variable("x"));
    let handle = std::thread::spawn(move || describe(&expr));
    assert_eq!(handle.join().ok(), Some("(x * x)".to_string()));
}
