use bumpalo::Bump;
use tracing::{debug, trace};

use crate::{
    checker::{CheckOptions, Position, TypeError},
    typed::{GExp, GExpBuilder, SomeGExp},
    types::Type,
    untyped::OExp,
};

/// Type check an untyped expression with default options.
///
/// The typed tree is allocated in `arena`, which may differ from the arena
/// holding the input.
pub fn check<'a>(arena: &'a Bump, expr: &OExp<'_>) -> Result<SomeGExp<'a>, TypeError> {
    check_with_options(arena, expr, CheckOptions::default())
}

/// Type check an untyped expression with custom options.
pub fn check_with_options<'a>(
    arena: &'a Bump,
    expr: &OExp<'_>,
    options: CheckOptions,
) -> Result<SomeGExp<'a>, TypeError> {
    debug!(max_depth = options.max_depth, "Checking expression");
    Checker::new(arena, options).check(expr)
}

/// Recursive checker state.
pub struct Checker<'a> {
    builder: GExpBuilder<'a>,
    options: CheckOptions,
    depth: usize,
}

impl<'a> Checker<'a> {
    pub fn new(arena: &'a Bump, options: CheckOptions) -> Self {
        Self {
            builder: GExpBuilder::new(arena),
            options,
            depth: 0,
        }
    }

    /// Check one expression node, tracking nesting depth.
    pub fn check(&mut self, expr: &OExp<'_>) -> Result<SomeGExp<'a>, TypeError> {
        if self.depth >= self.options.max_depth {
            trace!(depth = self.depth, "Maximum nesting depth reached");
            return Err(TypeError::TooDeep {
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.check_inner(expr);
        self.depth -= 1;

        result
    }

    fn check_inner(&mut self, expr: &OExp<'_>) -> Result<SomeGExp<'a>, TypeError> {
        let b = self.builder;
        match expr {
            OExp::Int(n) => Ok(b.int(*n).into()),
            OExp::Bool(v) => Ok(b.bool(*v).into()),

            OExp::Add(left, right) => {
                let left = self.expect_int(left, Position::AddLeft)?;
                let right = self.expect_int(right, Position::AddRight)?;
                Ok(b.add(left, right).into())
            }

            OExp::IsZero(operand) => {
                let operand = self.expect_int(operand, Position::IsZeroOperand)?;
                Ok(b.is_zero(operand).into())
            }

            OExp::If(cond, then_branch, else_branch) => {
                let cond = self.expect_bool(cond, Position::Condition)?;
                let then_branch = self.check(then_branch)?;
                let else_branch = self.check(else_branch)?;
                match (then_branch, else_branch) {
                    (SomeGExp::Int(t), SomeGExp::Int(e)) => Ok(b.if_then_else(cond, t, e).into()),
                    (SomeGExp::Bool(t), SomeGExp::Bool(e)) => {
                        Ok(b.if_then_else(cond, t, e).into())
                    }
                    (t, e) => {
                        trace!(then_branch = %t.ty(), else_branch = %e.ty(), "Branch mismatch");
                        Err(TypeError::BranchMismatch {
                            then_branch: t.ty(),
                            else_branch: e.ty(),
                        })
                    }
                }
            }
        }
    }

    fn expect_int(
        &mut self,
        expr: &OExp<'_>,
        position: Position,
    ) -> Result<&'a GExp<'a, i64>, TypeError> {
        match self.check(expr)? {
            SomeGExp::Int(expr) => Ok(expr),
            other => Err(mismatch(Type::Int, other.ty(), position)),
        }
    }

    fn expect_bool(
        &mut self,
        expr: &OExp<'_>,
        position: Position,
    ) -> Result<&'a GExp<'a, bool>, TypeError> {
        match self.check(expr)? {
            SomeGExp::Bool(expr) => Ok(expr),
            other => Err(mismatch(Type::Bool, other.ty(), position)),
        }
    }
}

fn mismatch(expected: Type, found: Type, position: Position) -> TypeError {
    trace!(%expected, %found, %position, "Type mismatch");
    TypeError::Mismatch {
        expected,
        found,
        position,
    }
}
