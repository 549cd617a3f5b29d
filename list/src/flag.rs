//! Type-level emptiness flags.

use core::convert::Infallible;
use core::fmt::Debug;

use static_assertions::assert_eq_size;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Empty {}
    impl Sealed for super::NonEmpty {}
}

/// Flag of a list known to be empty. Never instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Empty {}

/// Flag of a list known to have at least one element. Never instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonEmpty {}

/// Emptiness flag of a [`List`](crate::List).
///
/// The associated types are the witnesses stored in each list constructor:
/// `()` where the constructor is allowed, [`Infallible`] where it is not.
pub trait Flag: sealed::Sealed + Debug + Copy + Eq + 'static {
    /// Witness for `Nil`; inhabited only for [`Empty`].
    type IfEmpty: Debug + Copy + Eq;

    /// Witness for `Cons`; inhabited only for [`NonEmpty`].
    type IfNonEmpty: Debug + Copy + Eq;

    /// Human-readable flag name.
    const NAME: &'static str;
}

impl Flag for Empty {
    type IfEmpty = ();
    type IfNonEmpty = Infallible;

    const NAME: &'static str = "Empty";
}

impl Flag for NonEmpty {
    type IfEmpty = Infallible;
    type IfNonEmpty = ();

    const NAME: &'static str = "NonEmpty";
}

// Flags are erased at runtime: every witness is zero-sized.
assert_eq_size!(<Empty as Flag>::IfEmpty, ());
assert_eq_size!(<Empty as Flag>::IfNonEmpty, ());
assert_eq_size!(<NonEmpty as Flag>::IfEmpty, ());
assert_eq_size!(<NonEmpty as Flag>::IfNonEmpty, ());
