//! Dynamically checked evaluation.

use tracing::trace;

use crate::untyped::{OExp, Value};

/// Evaluate an untyped expression.
///
/// Returns `None` when the tree is ill-typed somewhere: an addition or
/// zero-test over a non-integer, or a conditional whose guard is not a
/// boolean. The caller only learns *that* evaluation failed, not where.
///
/// A conditional evaluates its guard and both branches before choosing one, so
/// an ill-typed branch fails the whole expression even when it is not the
/// branch selected.
///
/// Integer addition wraps on overflow.
///
/// Evaluation recurses once per nesting level and has no depth limit, so a
/// builder tree nested deeply enough overflows the stack. Run
/// [`check_with_options`](crate::check_with_options) first to bound the depth.
pub fn eval(expr: &OExp<'_>) -> Option<Value> {
    match expr {
        OExp::Int(n) => Some(Value::Int(*n)),
        OExp::Bool(b) => Some(Value::Bool(*b)),

        OExp::Add(left, right) => match (eval(left)?, eval(right)?) {
            (Value::Int(a), Value::Int(b)) => Some(Value::Int(a.wrapping_add(b))),
            (a, b) => {
                trace!(left = ?a.ty(), right = ?b.ty(), "addition over non-integer operands");
                None
            }
        },

        OExp::IsZero(operand) => match eval(operand)? {
            Value::Int(n) => Some(Value::Bool(n == 0)),
            other => {
                trace!(operand = ?other.ty(), "zero-test over non-integer operand");
                None
            }
        },

        OExp::If(cond, then_branch, else_branch) => {
            let cond = eval(cond);
            let then_value = eval(then_branch);
            let else_value = eval(else_branch);
            match (cond?, then_value?, else_value?) {
                (Value::Bool(true), value, _) => Some(value),
                (Value::Bool(false), _, value) => Some(value),
                (other, _, _) => {
                    trace!(cond = ?other.ty(), "conditional over non-boolean guard");
                    None
                }
            }
        }
    }
}
