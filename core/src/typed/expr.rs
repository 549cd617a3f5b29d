use core::fmt;

use bumpalo::Bump;

use crate::{
    display::{ExprKind, ExprView, write_expr},
    types::{Type, TypeIndex},
    untyped::{OExp, OExpBuilder, Value},
};

/// Expression tree indexed by the type of its result.
///
/// The first field of `Int`, `Bool`, `Add` and `IsZero` is a zero-sized
/// witness that `T` is the type that constructor produces. At any other index
/// the witness type is uninhabited, so e.g. a `GExp<bool>` can never be an
/// `Add`. `If` propagates the index of its branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GExp<'a, T: TypeIndex> {
    Int(T::IfInt, i64),
    Bool(T::IfBool, bool),
    Add(T::IfInt, &'a GExp<'a, i64>, &'a GExp<'a, i64>),
    IsZero(T::IfBool, &'a GExp<'a, i64>),
    If(&'a GExp<'a, bool>, &'a GExp<'a, T>, &'a GExp<'a, T>),
}

impl<'a, T: TypeIndex> GExp<'a, T> {
    /// Runtime tag of the static index.
    pub fn ty(&self) -> Type {
        T::TYPE
    }

    /// Rebuild the structurally identical untyped tree.
    pub fn erase<'b>(&self, builder: OExpBuilder<'b>) -> &'b OExp<'b> {
        match self {
            GExp::Int(_, n) => builder.int(*n),
            GExp::Bool(_, b) => builder.bool(*b),
            GExp::Add(_, left, right) => builder.add(left.erase(builder), right.erase(builder)),
            GExp::IsZero(_, operand) => builder.is_zero(operand.erase(builder)),
            GExp::If(cond, then_branch, else_branch) => builder.if_then_else(
                cond.erase(builder),
                then_branch.erase(builder),
                else_branch.erase(builder),
            ),
        }
    }
}

impl<T: TypeIndex> ExprView for GExp<'_, T> {
    fn kind(&self) -> ExprKind<'_> {
        match self {
            GExp::Int(_, n) => ExprKind::Int(*n),
            GExp::Bool(_, b) => ExprKind::Bool(*b),
            GExp::Add(_, left, right) => ExprKind::Add(*left, *right),
            GExp::IsZero(_, operand) => ExprKind::IsZero(*operand),
            GExp::If(cond, then_branch, else_branch) => {
                ExprKind::If(*cond, *then_branch, *else_branch)
            }
        }
    }
}

impl<T: TypeIndex> fmt::Display for GExp<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

/// A typed expression whose index is only known at runtime.
///
/// This is what the checker produces from an untyped tree: the result type is
/// discovered by inspection, and matching on the variant recovers the static
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SomeGExp<'a> {
    Int(&'a GExp<'a, i64>),
    Bool(&'a GExp<'a, bool>),
}

impl<'a> SomeGExp<'a> {
    pub fn ty(&self) -> Type {
        match self {
            SomeGExp::Int(_) => Type::Int,
            SomeGExp::Bool(_) => Type::Bool,
        }
    }

    pub fn as_int(&self) -> Option<&'a GExp<'a, i64>> {
        let SomeGExp::Int(expr) = *self else {
            return None;
        };
        Some(expr)
    }

    pub fn as_bool(&self) -> Option<&'a GExp<'a, bool>> {
        let SomeGExp::Bool(expr) = *self else {
            return None;
        };
        Some(expr)
    }

    /// Evaluate and tag the result.
    pub fn eval(&self) -> Value {
        match self {
            SomeGExp::Int(expr) => expr.eval().into_value(),
            SomeGExp::Bool(expr) => expr.eval().into_value(),
        }
    }

    pub fn erase<'b>(&self, builder: OExpBuilder<'b>) -> &'b OExp<'b> {
        match self {
            SomeGExp::Int(expr) => expr.erase(builder),
            SomeGExp::Bool(expr) => expr.erase(builder),
        }
    }
}

impl<'a> From<&'a GExp<'a, i64>> for SomeGExp<'a> {
    fn from(expr: &'a GExp<'a, i64>) -> Self {
        SomeGExp::Int(expr)
    }
}

impl<'a> From<&'a GExp<'a, bool>> for SomeGExp<'a> {
    fn from(expr: &'a GExp<'a, bool>) -> Self {
        SomeGExp::Bool(expr)
    }
}

impl fmt::Display for SomeGExp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SomeGExp::Int(expr) => write!(f, "{expr}"),
            SomeGExp::Bool(expr) => write!(f, "{expr}"),
        }
    }
}

/// Arena-backed constructor for typed expressions.
///
/// Every method's signature states the index its operands must carry, which
/// is where ill-typed trees get rejected.
#[derive(Debug, Clone, Copy)]
pub struct GExpBuilder<'a> {
    arena: &'a Bump,
}

impl<'a> GExpBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    pub fn int(self, value: i64) -> &'a GExp<'a, i64> {
        self.arena.alloc(GExp::Int((), value))
    }

    pub fn bool(self, value: bool) -> &'a GExp<'a, bool> {
        self.arena.alloc(GExp::Bool((), value))
    }

    pub fn add(self, left: &'a GExp<'a, i64>, right: &'a GExp<'a, i64>) -> &'a GExp<'a, i64> {
        self.arena.alloc(GExp::Add((), left, right))
    }

    pub fn is_zero(self, operand: &'a GExp<'a, i64>) -> &'a GExp<'a, bool> {
        self.arena.alloc(GExp::IsZero((), operand))
    }

    pub fn if_then_else<T: TypeIndex>(
        self,
        cond: &'a GExp<'a, bool>,
        then_branch: &'a GExp<'a, T>,
        else_branch: &'a GExp<'a, T>,
    ) -> &'a GExp<'a, T> {
        self.arena.alloc(GExp::If(cond, then_branch, else_branch))
    }
}
