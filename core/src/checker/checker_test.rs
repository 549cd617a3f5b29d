//! Unit tests for the type checker.

use super::*;
use crate::{
    test_utils::init_test_logging,
    typed::SomeGExp,
    types::Type,
    untyped::{self, OExp, OExpBuilder, Value},
};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

fn check_ok<'a>(arena: &'a Bump, expr: &OExp<'_>) -> SomeGExp<'a> {
    check(arena, expr).expect("type checking failed")
}

#[test]
fn test_literals() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    assert_eq!(check_ok(&arena, b.int(1)).ty(), Type::Int);
    assert_eq!(check_ok(&arena, b.bool(true)).ty(), Type::Bool);
}

#[test]
fn test_addition() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    let typed = check_ok(&arena, b.add(b.int(1), b.int(3)));
    let typed = typed.as_int().expect("expected an Int expression");
    assert_eq!(typed.eval(), 4);
}

#[test]
fn test_if_is_zero() {
    init_test_logging();
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    let expr = b.if_then_else(
        b.is_zero(b.add(b.int(3), b.int(-3))),
        b.int(3),
        b.int(4),
    );
    let typed = check_ok(&arena, expr);
    assert_eq!(typed.eval(), Value::Int(3));
    assert_eq!(typed.to_string(), expr.to_string());
}

#[test]
fn test_if_bool_branches() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    let expr = b.if_then_else(b.bool(true), b.bool(false), b.bool(true));
    match check_ok(&arena, expr) {
        SomeGExp::Bool(typed) => assert!(!typed.eval()),
        SomeGExp::Int(_) => panic!("expected a Bool expression"),
    }
}

#[test]
fn test_add_bool_rejected() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    assert_eq!(
        check(&arena, b.add(b.bool(true), b.int(1))),
        Err(TypeError::Mismatch {
            expected: Type::Int,
            found: Type::Bool,
            position: Position::AddLeft,
        })
    );
    assert_eq!(
        check(&arena, b.add(b.int(1), b.bool(true))),
        Err(TypeError::Mismatch {
            expected: Type::Int,
            found: Type::Bool,
            position: Position::AddRight,
        })
    );
}

#[test]
fn test_is_zero_bool_rejected() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    assert_eq!(
        check(&arena, b.is_zero(b.bool(false))),
        Err(TypeError::Mismatch {
            expected: Type::Int,
            found: Type::Bool,
            position: Position::IsZeroOperand,
        })
    );
}

#[test]
fn test_non_boolean_condition_rejected() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    let expr = b.if_then_else(b.int(1), b.bool(true), b.int(3));
    assert_eq!(
        check(&arena, expr),
        Err(TypeError::Mismatch {
            expected: Type::Bool,
            found: Type::Int,
            position: Position::Condition,
        })
    );
}

#[test]
fn test_branch_mismatch_rejected_even_if_untyped_succeeds() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);
    let expr = b.if_then_else(b.bool(true), b.int(1), b.bool(false));

    assert_eq!(untyped::eval(expr), Some(Value::Int(1)));
    assert_eq!(
        check(&arena, expr),
        Err(TypeError::BranchMismatch {
            then_branch: Type::Int,
            else_branch: Type::Bool,
        })
    );
}

#[test]
fn test_too_deep() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);

    let mut expr = b.int(0);
    for _ in 0..10 {
        expr = b.add(expr, b.int(1));
    }

    let shallow = CheckOptions { max_depth: 5 };
    assert_eq!(
        check_with_options(&arena, expr, shallow),
        Err(TypeError::TooDeep { max_depth: 5 })
    );

    let deep_enough = CheckOptions { max_depth: 11 };
    let typed = check_with_options(&arena, expr, deep_enough).expect("type checking failed");
    assert_eq!(typed.eval(), Value::Int(10));
}

#[test]
fn test_checked_trees_agree_with_untyped_eval() {
    let arena = Bump::new();
    let b = OExpBuilder::new(&arena);

    let exprs = [
        b.int(-8),
        b.add(b.int(1), b.int(3)),
        b.is_zero(b.int(0)),
        b.if_then_else(b.is_zero(b.add(b.int(3), b.int(-3))), b.int(3), b.int(4)),
        b.if_then_else(b.bool(true), b.bool(false), b.bool(true)),
        b.add(
            b.if_then_else(b.is_zero(b.int(2)), b.int(100), b.int(200)),
            b.int(1),
        ),
    ];

    for expr in exprs {
        let typed = check_ok(&arena, expr);
        assert_eq!(untyped::eval(expr), Some(typed.eval()), "{expr}");
        assert_eq!(typed.erase(OExpBuilder::new(&arena)), expr);
    }
}

#[test]
fn test_checker_into_separate_arena() {
    let typed_arena = Bump::new();
    let typed = {
        let arena = Bump::new();
        let b = OExpBuilder::new(&arena);
        check_ok(&typed_arena, b.is_zero(b.int(4)))
    };
    assert_eq!(typed.eval(), Value::Bool(false));
}
