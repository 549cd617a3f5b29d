#![allow(dead_code)]

use bumpalo::Bump;
use kinded::{Error, OExp, OExpBuilder, Value, typecheck, untyped};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;

pub struct TestCase {
    pub name: &'static str,
    pub display: &'static str,
    pub build: for<'a> fn(OExpBuilder<'a>) -> &'a OExp<'a>,
    pub value: Option<Value>,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "simple_addition",
            display: "1 + 3",
            build: |b| b.add(b.int(1), b.int(3)),
            value: Some(Value::Int(4)),
        },
        TestCase {
            name: "if_is_zero",
            display: "if is_zero(3 + -3) then 3 else 4",
            build: |b| b.if_then_else(b.is_zero(b.add(b.int(3), b.int(-3))), b.int(3), b.int(4)),
            value: Some(Value::Int(3)),
        },
        TestCase {
            name: "if_returning_bool",
            display: "if true then false else true",
            build: |b| b.if_then_else(b.bool(true), b.bool(false), b.bool(true)),
            value: Some(Value::Bool(false)),
        },
        TestCase {
            name: "bool_plus_int",
            display: "true + 1",
            build: |b| b.add(b.bool(true), b.int(1)),
            value: None,
        },
        TestCase {
            name: "int_condition",
            display: "if 1 then true else 3",
            build: |b| b.if_then_else(b.int(1), b.bool(true), b.int(3)),
            value: None,
        },
    ]
});

/// Check the rendering and the untyped result of `expr`, then make sure the
/// checker agrees with the untyped evaluator.
///
/// A tree the untyped evaluator rejects must be rejected by the checker too,
/// and a tree the checker accepts must evaluate to the same value in both
/// worlds. The only trees that evaluate but fail to check are conditionals
/// whose branches disagree.
pub fn assert_case(arena: &Bump, expr: &OExp<'_>, display: &str, value: Option<Value>) {
    assert_eq!(expr.to_string(), display);
    assert_eq!(untyped::eval(expr), value);

    match typecheck(arena, expr) {
        Ok(typed) => {
            assert_eq!(Some(typed.eval()), value, "typed evaluation of {display}");
            assert_eq!(Some(typed.ty()), value.map(|v| v.ty()));
            assert_eq!(typed.to_string(), display);
        }
        Err(err) => assert!(
            value.is_none() || matches!(err, Error::BranchMismatch { .. }),
            "unexpected type error for {display}: {err}"
        ),
    }
}

macro_rules! test_case {
    (
        name: $name:ident,
        build: |$b:ident| $build:expr,
        display: $display:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let arena = ::bumpalo::Bump::new();
            let $b = ::kinded::OExpBuilder::new(&arena);
            let expr = $build;
            $crate::cases::assert_case(&arena, expr, $display, $value);
        }
    };
}
