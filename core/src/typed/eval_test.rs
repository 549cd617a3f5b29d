//! Unit tests for the typed evaluator.

use super::*;
use crate::{
    types::TypeIndex,
    untyped::{self, OExpBuilder, Value},
};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

/// Typed evaluation must agree with untyped evaluation of the erased tree.
fn assert_agrees<T: TypeIndex>(arena: &Bump, expr: &GExp<'_, T>) {
    let erased = expr.erase(OExpBuilder::new(arena));
    assert_eq!(untyped::eval(erased), Some(expr.eval().into_value()));
}

#[test]
fn test_literals() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    assert_eq!(b.int(7).eval(), 7);
    assert!(!b.bool(false).eval());
}

#[test]
fn test_addition() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    assert_eq!(eval(b.add(b.int(1), b.int(3))), 4);
}

#[test]
fn test_addition_wraps() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    assert_eq!(b.add(b.int(i64::MAX), b.int(1)).eval(), i64::MIN);
}

#[test]
fn test_is_zero() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    assert!(b.is_zero(b.int(0)).eval());
    assert!(!b.is_zero(b.int(-1)).eval());
}

#[test]
fn test_if_is_zero() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    let e = b.if_then_else(
        b.is_zero(b.add(b.int(3), b.int(-3))),
        b.int(3),
        b.int(4),
    );
    assert_eq!(e.eval(), 3);
}

#[test]
fn test_if_boolean_branches() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    let e = b.if_then_else(b.bool(true), b.bool(false), b.bool(true));
    assert!(!e.eval());
}

#[test]
fn test_nested_conditionals() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    let inner = b.if_then_else(b.is_zero(b.int(1)), b.int(10), b.int(20));
    let e = b.if_then_else(b.is_zero(b.add(inner, b.int(-20))), b.bool(true), b.bool(false));
    assert!(e.eval());
}

#[test]
fn test_agrees_with_untyped() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);

    assert_agrees(&arena, b.int(5));
    assert_agrees(&arena, b.bool(true));
    assert_agrees(&arena, b.add(b.int(1), b.int(3)));
    assert_agrees(&arena, b.is_zero(b.add(b.int(3), b.int(-3))));
    assert_agrees(
        &arena,
        b.if_then_else(b.is_zero(b.add(b.int(3), b.int(-3))), b.int(3), b.int(4)),
    );
    assert_agrees(
        &arena,
        b.if_then_else(b.bool(true), b.bool(false), b.bool(true)),
    );
    assert_agrees(
        &arena,
        b.add(
            b.if_then_else(b.bool(false), b.int(1), b.int(2)),
            b.add(b.int(40), b.int(0)),
        ),
    );
}

#[test]
fn test_some_gexp_value() {
    let arena = Bump::new();
    let b = GExpBuilder::new(&arena);
    let some = SomeGExp::from(b.if_then_else(b.bool(false), b.int(1), b.int(2)));
    assert_eq!(some.eval(), Value::Int(2));
}
