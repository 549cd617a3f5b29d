//! Kinded - type-indexed expressions and emptiness-flagged lists
//!
//! # Overview
//!
//! Kinded contrasts runtime checking with type-level guarantees in two small
//! settings:
//!
//! - **Expressions.** An untyped [`OExp`] is evaluated with
//!   [`untyped::eval`], which returns `None` for ill-typed trees. A typed
//!   [`GExp<T>`](GExp) is indexed by its result type, so ill-typed trees cannot
//!   be built and [`GExp::eval`] always returns a `T`.
//! - **Lists.** A [`List<T, F>`](List) records at the type level whether it is
//!   [`Empty`] or [`NonEmpty`], so [`List::head`] is total. Operations whose
//!   result flag depends on the data, like [`List::filter`], return an
//!   [`AnyList`].
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use kinded::{OExpBuilder, SomeGExp, Value, typecheck, untyped};
//!
//! let arena = Bump::new();
//! let b = OExpBuilder::new(&arena);
//!
//! // if is_zero(3 + -3) then 3 else 4
//! let expr = b.if_then_else(b.is_zero(b.add(b.int(3), b.int(-3))), b.int(3), b.int(4));
//! assert_eq!(untyped::eval(expr), Some(Value::Int(3)));
//!
//! // Checking recovers a typed tree whose evaluation cannot fail.
//! match typecheck(&arena, expr).unwrap() {
//!     SomeGExp::Int(typed) => assert_eq!(typed.eval(), 3),
//!     SomeGExp::Bool(_) => unreachable!(),
//! }
//!
//! // true + 1 is rejected by both.
//! let bad = b.add(b.bool(true), b.int(1));
//! assert_eq!(untyped::eval(bad), None);
//! assert!(typecheck(&arena, bad).is_err());
//! ```
//!
//! ```
//! use kinded::{List, NonEmpty, list};
//!
//! let xs: List<i32, NonEmpty> = list![1, 2, 3];
//! assert_eq!(*xs.head(), 1);
//! assert_eq!(xs.filter(|x| *x == 2).to_vec(), vec![2]);
//! ```

use bumpalo::Bump;

mod error;

pub use error::Error;

// Expressions
pub use kinded_core::{
    CheckOptions, GExp, GExpBuilder, OExp, OExpBuilder, Position, SomeGExp, Type, TypeError,
    TypeIndex, Value,
};
pub use kinded_core::{checker, typed, types, untyped};

// Lists
pub use kinded_list::{AnyList, Empty, Flag, List, NonEmpty, list, partial_head};

/// Check `expr` with default options, reporting failures as [`Error`].
pub fn typecheck<'a>(arena: &'a Bump, expr: &OExp<'_>) -> Result<SomeGExp<'a>, Error> {
    typecheck_with_options(arena, expr, CheckOptions::default())
}

/// Check `expr` with custom options, reporting failures as [`Error`].
pub fn typecheck_with_options<'a>(
    arena: &'a Bump,
    expr: &OExp<'_>,
    options: CheckOptions,
) -> Result<SomeGExp<'a>, Error> {
    Ok(kinded_core::check_with_options(arena, expr, options)?)
}
