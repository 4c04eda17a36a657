//! Helpers enforcing the statement/expression duality.

use viewexpr_ast::BindingExpr;
use viewexpr_core::{ConversionError, Mode};
use viewexpr_ir::IrExpr;

use crate::{Lowered, Result};

/// Fail unless `expr` is being converted as a statement.
pub fn ensure_statement_mode(mode: Mode, expr: &BindingExpr<'_>) -> Result<()> {
    ensure_mode(Mode::Statement, mode, expr)
}

/// Fail unless `expr` is being converted as an expression.
pub fn ensure_expression_mode(mode: Mode, expr: &BindingExpr<'_>) -> Result<()> {
    ensure_mode(Mode::Expression, mode, expr)
}

fn ensure_mode(required: Mode, mode: Mode, expr: &BindingExpr<'_>) -> Result<()> {
    if mode == required {
        Ok(())
    } else {
        Err(ConversionError::ModeViolation {
            kind: expr.kind(),
            required,
            span: expr.span(),
        })
    }
}

/// Identity in expression mode; promotes to a statement in statement mode.
#[inline]
pub fn wrap_if_statement(mode: Mode, expr: IrExpr) -> Lowered {
    if mode.is_statement() {
        Lowered::Stmt(expr.to_stmt())
    } else {
        Lowered::Expr(expr)
    }
}
