#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod checker;
mod display;
pub mod typed;
pub mod types;
pub mod untyped;

pub use checker::{CheckOptions, Position, TypeError, check, check_with_options};
pub use typed::{GExp, GExpBuilder, SomeGExp};
pub use types::{Type, TypeIndex};
pub use untyped::{OExp, OExpBuilder, Value};
