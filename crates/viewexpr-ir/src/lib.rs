//! Output IR of the viewexpr lowering stage.
//!
//! A small expression/statement tree consumed by a downstream code
//! generator:
//! - [`IrExpr`]: value-producing constructs (literals, reads, writes,
//!   calls, operators, conditionals, collection literals)
//! - [`IrStmt`]: an expression promoted to statement form
//! - [`BinaryOperator`]: operators with their source tokens
//!
//! Printing and emitting the IR belong to the code generator.

mod expr;
mod ops;
mod stmt;

pub use expr::{ExternalRef, IrExpr, Literal};
pub use ops::BinaryOperator;
pub use stmt::IrStmt;
