use core::fmt;

use bumpalo::Bump;

use crate::display::{ExprKind, ExprView, write_expr};

/// Untyped expression tree.
///
/// Nodes live in a [`Bump`] arena and refer to their children by reference.
/// Any combination of operands is representable, including ill-typed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OExp<'a> {
    Int(i64),
    Bool(bool),
    Add(&'a OExp<'a>, &'a OExp<'a>),
    IsZero(&'a OExp<'a>),
    If(&'a OExp<'a>, &'a OExp<'a>, &'a OExp<'a>),
}

impl<'a> OExp<'a> {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            OExp::Int(_) | OExp::Bool(_) => 1,
            OExp::Add(left, right) => 1 + left.size() + right.size(),
            OExp::IsZero(operand) => 1 + operand.size(),
            OExp::If(cond, then_branch, else_branch) => {
                1 + cond.size() + then_branch.size() + else_branch.size()
            }
        }
    }
}

impl ExprView for OExp<'_> {
    fn kind(&self) -> ExprKind<'_> {
        match self {
            OExp::Int(n) => ExprKind::Int(*n),
            OExp::Bool(b) => ExprKind::Bool(*b),
            OExp::Add(left, right) => ExprKind::Add(*left, *right),
            OExp::IsZero(operand) => ExprKind::IsZero(*operand),
            OExp::If(cond, then_branch, else_branch) => {
                ExprKind::If(*cond, *then_branch, *else_branch)
            }
        }
    }
}

impl fmt::Display for OExp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

/// Arena-backed constructor for untyped expressions.
///
/// The builder is a `Copy` handle, so it can be passed around freely while all
/// nodes share the arena's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct OExpBuilder<'a> {
    arena: &'a Bump,
}

impl<'a> OExpBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    pub fn int(self, value: i64) -> &'a OExp<'a> {
        self.arena.alloc(OExp::Int(value))
    }

    pub fn bool(self, value: bool) -> &'a OExp<'a> {
        self.arena.alloc(OExp::Bool(value))
    }

    pub fn add(self, left: &'a OExp<'a>, right: &'a OExp<'a>) -> &'a OExp<'a> {
        self.arena.alloc(OExp::Add(left, right))
    }

    pub fn is_zero(self, operand: &'a OExp<'a>) -> &'a OExp<'a> {
        self.arena.alloc(OExp::IsZero(operand))
    }

    pub fn if_then_else(
        self,
        cond: &'a OExp<'a>,
        then_branch: &'a OExp<'a>,
        else_branch: &'a OExp<'a>,
    ) -> &'a OExp<'a> {
        self.arena.alloc(OExp::If(cond, then_branch, else_branch))
    }
}
