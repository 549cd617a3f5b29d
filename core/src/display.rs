//! Shared pretty-printer for untyped and typed expressions.
//!
//! Both trees expose the same surface syntax through [`ExprView`], so a single
//! printer decides where parentheses are needed.

use core::fmt;

/// One layer of an expression, with children left behind a view.
pub(crate) enum ExprKind<'e> {
    Int(i64),
    Bool(bool),
    Add(&'e dyn ExprView, &'e dyn ExprView),
    IsZero(&'e dyn ExprView),
    If(&'e dyn ExprView, &'e dyn ExprView, &'e dyn ExprView),
}

pub(crate) trait ExprView {
    fn kind(&self) -> ExprKind<'_>;
}

/// Where a subexpression appears, for parenthesisation.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top,
    AddLeft,
    AddRight,
}

pub(crate) fn write_expr(f: &mut fmt::Formatter<'_>, expr: &dyn ExprView) -> fmt::Result {
    write_slot(f, expr, Slot::Top)
}

fn write_slot(f: &mut fmt::Formatter<'_>, expr: &dyn ExprView, slot: Slot) -> fmt::Result {
    let kind = expr.kind();
    let parens = match kind {
        ExprKind::If(..) => slot != Slot::Top,
        ExprKind::Add(..) => slot == Slot::AddRight,
        _ => false,
    };

    if parens {
        write!(f, "(")?;
    }
    match kind {
        ExprKind::Int(n) => write!(f, "{n}")?,
        ExprKind::Bool(b) => write!(f, "{b}")?,
        ExprKind::Add(left, right) => {
            write_slot(f, left, Slot::AddLeft)?;
            write!(f, " + ")?;
            write_slot(f, right, Slot::AddRight)?;
        }
        ExprKind::IsZero(operand) => {
            write!(f, "is_zero(")?;
            write_slot(f, operand, Slot::Top)?;
            write!(f, ")")?;
        }
        ExprKind::If(cond, then_branch, else_branch) => {
            write!(f, "if ")?;
            write_slot(f, cond, Slot::Top)?;
            write!(f, " then ")?;
            write_slot(f, then_branch, Slot::Top)?;
            write!(f, " else ")?;
            write_slot(f, else_branch, Slot::Top)?;
        }
    }
    if parens {
        write!(f, ")")?;
    }
    Ok(())
}
