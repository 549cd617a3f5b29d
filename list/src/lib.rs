//! Singly linked lists that track emptiness in their type.
//!
//! A [`List<T, F>`](List) carries a flag `F` that is either [`Empty`] or
//! [`NonEmpty`]. The flag exists only at the type level, which lets
//! operations like [`List::head`] and [`List::fold1`] be total: they are only
//! defined on `List<T, NonEmpty>`, so calling them on an empty list is a
//! compile error rather than a runtime failure.
//!
//! When the flag cannot be known ahead of time, as with [`List::filter`], the
//! result is an [`AnyList`], which hides the flag until it is inspected with
//! [`AnyList::to_non_empty`].
//!
//! # Example
//!
//! ```
//! use kinded_list::{AnyList, List, NonEmpty, list};
//!
//! let xs: List<i32, NonEmpty> = list![1, 2, 3];
//! assert_eq!(*xs.head(), 1);
//!
//! let doubled = xs.map(|x| x * 2);
//! assert_eq!(*doubled.head(), 2);
//!
//! let evens: AnyList<i32> = xs.filter(|x| x % 2 == 0);
//! let evens = evens.to_non_empty().expect("2 is even");
//! assert_eq!(*evens.head(), 2);
//! ```
//!
//! Taking the head of an empty list does not compile:
//!
//! ```compile_fail
//! use kinded_list::List;
//!
//! let xs: List<i32, kinded_list::Empty> = List::nil();
//! let _ = xs.head();
//! ```

#![no_std]
extern crate alloc;

pub mod any_list;
pub mod flag;
pub mod iter;
pub mod list;
mod macros;
pub mod plain;

pub use any_list::AnyList;
pub use flag::{Empty, Flag, NonEmpty};
pub use iter::Iter;
pub use list::{List, Tail};
pub use plain::partial_head;
