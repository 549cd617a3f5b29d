//! Type checking errors.

use core::fmt;

use thiserror::Error;

use crate::types::Type;

/// Operand slot in which a type mismatch was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    AddLeft,
    AddRight,
    IsZeroOperand,
    Condition,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::AddLeft => write!(f, "left operand of `+`"),
            Position::AddRight => write!(f, "right operand of `+`"),
            Position::IsZeroOperand => write!(f, "operand of `is_zero`"),
            Position::Condition => write!(f, "condition of `if`"),
        }
    }
}

/// Reasons an untyped expression cannot be given a static type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypeError {
    /// An operand has the wrong type for its operation.
    #[error("type mismatch in {position}: expected {expected}, found {found}")]
    Mismatch {
        expected: Type,
        found: Type,
        position: Position,
    },

    /// The two branches of a conditional have different types.
    #[error("`if` branches have different types: then branch is {then_branch}, else branch is {else_branch}")]
    BranchMismatch { then_branch: Type, else_branch: Type },

    /// Expression nesting exceeded [`CheckOptions::max_depth`].
    ///
    /// [`CheckOptions::max_depth`]: crate::checker::CheckOptions::max_depth
    #[error("expression nesting exceeds maximum depth of {max_depth}")]
    TooDeep { max_depth: usize },
}
