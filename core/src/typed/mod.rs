//! Type-indexed expressions and their total evaluator.
//!
//! A [`GExp<T>`](GExp) is indexed by the Rust type its evaluation produces:
//! `GExp<i64>` evaluates to an `i64`, `GExp<bool>` to a `bool`. The builder
//! only accepts operands whose index matches what the operation needs, so an
//! ill-typed tree is a compile error rather than a runtime failure:
//!
//! ```compile_fail
//! use bumpalo::Bump;
//! use kinded_core::typed::GExpBuilder;
//!
//! let arena = Bump::new();
//! let b = GExpBuilder::new(&arena);
//! let _ = b.add(b.bool(true), b.int(1));
//! ```
//!
//! Evaluation therefore has no failure path:
//!
//! ```
//! use bumpalo::Bump;
//! use kinded_core::typed::GExpBuilder;
//!
//! let arena = Bump::new();
//! let b = GExpBuilder::new(&arena);
//!
//! let e = b.if_then_else(b.is_zero(b.add(b.int(3), b.int(-3))), b.int(3), b.int(4));
//! let n: i64 = e.eval();
//! assert_eq!(n, 3);
//! ```

mod eval;
mod expr;

#[cfg(test)]
mod eval_test;

pub use eval::eval;
pub use expr::{GExp, GExpBuilder, SomeGExp};
