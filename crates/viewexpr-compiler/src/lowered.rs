//! Intermediate results of the recursive converter.

use viewexpr_ir::{IrExpr, IrStmt};

/// What converting one node produced.
///
/// Expression mode yields [`Lowered::Implicit`] or [`Lowered::Expr`];
/// statement mode yields [`Lowered::Stmt`] or, for chains,
/// [`Lowered::Sequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lowered {
    /// The implicit receiver, not yet substituted.
    Implicit,
    /// A pure expression.
    Expr(IrExpr),
    /// A statement.
    Stmt(IrStmt),
    /// Converted chain members, possibly nested.
    Sequence(Vec<Lowered>),
}

/// The receiver of a member access, as seen at the access site.
#[derive(Debug, Clone, PartialEq)]
pub enum Receiver {
    /// No explicit receiver was written; the name may be a local.
    Unresolved,
    /// An explicit receiver expression.
    Resolved(IrExpr),
}

impl Receiver {
    /// The receiver expression, substituting `implicit` when unresolved.
    pub fn resolve(self, implicit: &IrExpr) -> IrExpr {
        match self {
            Receiver::Unresolved => implicit.clone(),
            Receiver::Resolved(expr) => expr,
        }
    }
}
