//! Expression types, at runtime and at the type level.
//!
//! [`Type`] is the runtime tag carried by dynamic [`Value`]s and reported in
//! type errors. [`TypeIndex`] is its static counterpart: it is implemented for
//! exactly the Rust types that index a [`GExp`] (`i64` and `bool`).
//!
//! [`Value`]: crate::untyped::Value
//! [`GExp`]: crate::typed::GExp

use core::convert::Infallible;
use core::fmt;

use static_assertions::assert_eq_size;

use crate::untyped::Value;

/// Runtime type of an expression result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Bool => write!(f, "Bool"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for bool {}
}

/// A Rust type that can index a typed expression.
///
/// Each typed expression constructor that fixes its result type carries a
/// witness of one of the associated types below. For the matching index the
/// witness is `()`; for any other index it is [`Infallible`], so the
/// constructor cannot be built and the corresponding match arm is statically
/// unreachable.
///
/// The trait is sealed: `i64` and `bool` are the only indices.
pub trait TypeIndex: sealed::Sealed + Copy + fmt::Debug + fmt::Display + PartialEq + 'static {
    /// Inhabited only when `Self = i64`.
    type IfInt: Copy + fmt::Debug + PartialEq + Eq;

    /// Inhabited only when `Self = bool`.
    type IfBool: Copy + fmt::Debug + PartialEq + Eq;

    /// The runtime tag for this index.
    const TYPE: Type;

    /// Reinterpret an integer result at this index.
    fn from_int(witness: Self::IfInt, value: i64) -> Self;

    /// Reinterpret a boolean result at this index.
    fn from_bool(witness: Self::IfBool, value: bool) -> Self;

    /// Tag this result for the dynamic world.
    fn into_value(self) -> Value;
}

impl TypeIndex for i64 {
    type IfInt = ();
    type IfBool = Infallible;

    const TYPE: Type = Type::Int;

    fn from_int((): (), value: i64) -> i64 {
        value
    }

    fn from_bool(witness: Infallible, _: bool) -> i64 {
        match witness {}
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl TypeIndex for bool {
    type IfInt = Infallible;
    type IfBool = ();

    const TYPE: Type = Type::Bool;

    fn from_int(witness: Infallible, _: i64) -> bool {
        match witness {}
    }

    fn from_bool((): (), value: bool) -> bool {
        value
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

// The index never reaches the runtime representation.
assert_eq_size!(<i64 as TypeIndex>::IfInt, ());
assert_eq_size!(<i64 as TypeIndex>::IfBool, ());
assert_eq_size!(<bool as TypeIndex>::IfInt, ());
assert_eq_size!(<bool as TypeIndex>::IfBool, ());
