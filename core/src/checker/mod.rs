//! Type checker bridging untyped and typed expressions.
//!
//! [`check`] inspects an [`OExp`] and, when it is well typed, rebuilds it as a
//! [`GExp`] whose index is recovered at runtime and returned inside a
//! [`SomeGExp`]. Matching on the result hands back a statically indexed tree
//! that can be evaluated without any further checks.
//!
//! The checker is stricter than the untyped evaluator: both branches of a
//! conditional must have the same type, even though the untyped evaluator
//! accepts `if true then 1 else false`.
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use kinded_core::{OExpBuilder, SomeGExp, check};
//!
//! let arena = Bump::new();
//! let b = OExpBuilder::new(&arena);
//! let expr = b.add(b.int(1), b.int(3));
//!
//! match check(&arena, expr).unwrap() {
//!     SomeGExp::Int(typed) => assert_eq!(typed.eval(), 4),
//!     SomeGExp::Bool(_) => unreachable!(),
//! }
//! ```
//!
//! [`OExp`]: crate::untyped::OExp
//! [`GExp`]: crate::typed::GExp
//! [`SomeGExp`]: crate::typed::SomeGExp

mod checker;
mod error;
mod options;

#[cfg(test)]
mod checker_test;

pub use checker::{Checker, check, check_with_options};
pub use error::{Position, TypeError};
pub use options::CheckOptions;
