//! Public error type for the kinded API.
//!
//! The checker in `kinded-core` reports [`TypeError`], which is `no_std` and
//! carries no rendering information. At the API boundary it is converted to
//! [`Error`], which adds a stable diagnostic code and help text for
//! [`miette`] reports.

use kinded_core::{Position, Type, TypeError};
use miette::Diagnostic;
use thiserror::Error;

/// Public error type for kinded operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("type mismatch in {position}: expected {expected}, found {found}")]
    #[diagnostic(
        code(kinded::type_mismatch),
        help("the {position} must have type {expected}")
    )]
    TypeMismatch {
        expected: Type,
        found: Type,
        position: Position,
    },

    #[error(
        "`if` branches have different types: then branch is {then_branch}, else branch is {else_branch}"
    )]
    #[diagnostic(
        code(kinded::branch_mismatch),
        help("both branches of `if` must have the same type")
    )]
    BranchMismatch { then_branch: Type, else_branch: Type },

    #[error("expression nesting exceeds maximum depth of {max_depth}")]
    #[diagnostic(
        code(kinded::too_deep),
        help("raise `CheckOptions::max_depth` or split the expression")
    )]
    TooDeep { max_depth: usize },
}

impl From<TypeError> for Error {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::Mismatch {
                expected,
                found,
                position,
            } => Error::TypeMismatch {
                expected,
                found,
                position,
            },
            TypeError::BranchMismatch {
                then_branch,
                else_branch,
            } => Error::BranchMismatch {
                then_branch,
                else_branch,
            },
            TypeError::TooDeep { max_depth } => Error::TooDeep { max_depth },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_matches_checker_error() {
        let err = TypeError::Mismatch {
            expected: Type::Bool,
            found: Type::Int,
            position: Position::Condition,
        };
        assert_eq!(Error::from(err).to_string(), err.to_string());

        let err = TypeError::TooDeep { max_depth: 3 };
        assert_eq!(Error::from(err).to_string(), err.to_string());
    }

    #[test]
    fn test_codes() {
        let code = |err: TypeError| Error::from(err).code().map(|c| c.to_string());

        assert_eq!(
            code(TypeError::Mismatch {
                expected: Type::Int,
                found: Type::Bool,
                position: Position::AddLeft,
            }),
            Some("kinded::type_mismatch".to_string())
        );
        assert_eq!(
            code(TypeError::BranchMismatch {
                then_branch: Type::Int,
                else_branch: Type::Bool,
            }),
            Some("kinded::branch_mismatch".to_string())
        );
        assert_eq!(
            code(TypeError::TooDeep { max_depth: 1 }),
            Some("kinded::too_deep".to_string())
        );
    }

    #[test]
    fn test_help_names_position() {
        let err = Error::from(TypeError::Mismatch {
            expected: Type::Int,
            found: Type::Bool,
            position: Position::IsZeroOperand,
        });
        let help = err.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("the operand of `is_zero` must have type Int")
        );
    }
}
