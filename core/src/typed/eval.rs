//! Total evaluation of typed expressions.

use crate::{typed::GExp, types::TypeIndex};

/// Evaluate a typed expression.
///
/// Equivalent to [`GExp::eval`].
pub fn eval<T: TypeIndex>(expr: &GExp<'_, T>) -> T {
    expr.eval()
}

impl<T: TypeIndex> GExp<'_, T> {
    /// Evaluate to a value of the index type.
    ///
    /// There is no failure case: operands always carry the index their
    /// operation needs, and the arms whose witness is uninhabited at `T`
    /// resolve through [`TypeIndex::from_int`] and [`TypeIndex::from_bool`]
    /// without a runtime check. Integer addition wraps on overflow, like the
    /// untyped evaluator.
    ///
    /// Like the untyped evaluator, this recurses once per nesting level with
    /// no depth limit.
    pub fn eval(&self) -> T {
        match self {
            GExp::Int(witness, n) => T::from_int(*witness, *n),
            GExp::Bool(witness, b) => T::from_bool(*witness, *b),
            GExp::Add(witness, left, right) => {
                T::from_int(*witness, left.eval().wrapping_add(right.eval()))
            }
            GExp::IsZero(witness, operand) => T::from_bool(*witness, operand.eval() == 0),
            GExp::If(cond, then_branch, else_branch) => {
                if cond.eval() {
                    then_branch.eval()
                } else {
                    else_branch.eval()
                }
            }
        }
    }
}
