//! IR statements.

use crate::IrExpr;

/// An IR expression evaluated for its side effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IrStmt {
    /// `expr;`
    Expression(IrExpr),
}

impl IrStmt {
    /// Unwrap back into the expression.
    pub fn into_expr(self) -> IrExpr {
        match self {
            IrStmt::Expression(expr) => expr,
        }
    }
}
