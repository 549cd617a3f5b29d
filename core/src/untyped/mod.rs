//! Untyped expressions and their dynamically checked evaluator.
//!
//! An [`OExp`] is a plain expression tree: nothing stops it from adding a
//! boolean to an integer. [`eval`] discovers such mistakes while it walks the
//! tree and reports them as an absent result.
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use kinded_core::untyped::{OExpBuilder, Value, eval};
//!
//! let arena = Bump::new();
//! let b = OExpBuilder::new(&arena);
//!
//! let sum = b.add(b.int(1), b.int(3));
//! assert_eq!(eval(sum), Some(Value::Int(4)));
//!
//! let bad = b.add(b.bool(true), b.int(1));
//! assert_eq!(eval(bad), None);
//! ```

mod eval;
mod expr;
mod value;


pub use eval::eval;
pub use expr::{OExp, OExpBuilder};
pub use value::Value;
