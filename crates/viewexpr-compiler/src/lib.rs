//! Binding-expression lowering.
//!
//! Converts a parsed [`BindingExpr`] into IR for the view code generator,
//! in one recursive pass.
//!
//! ## Entry points
//!
//! - [`convert_expression`]: property bindings and interpolations. Produces
//!   one pure [`IrExpr`] and reports whether the value unwrapper is needed.
//! - [`convert_statement`]: event bindings. Produces a flat, ordered list of
//!   [`IrStmt`]s.
//!
//! ## Modules
//!
//! - [`convert`]: The recursive converter
//! - [`flatten`]: Flattening of nested statement sequences
//! - [`mode`]: Statement/expression mode helpers
//! - [`resolver`]: The [`NameResolver`] contract
//!
//! # Example
//!
//! ```ignore
//! let converted = convert_expression(&mut resolver, &IrExpr::variable("ctx"), &expr, &unwrapper)?;
//! if converted.needs_value_unwrapper {
//!     // declare the unwrapper in the generated view
//! }
//! ```

pub mod convert;
pub mod flatten;
mod lowered;
pub mod mode;
pub mod resolver;

#[cfg(test)]
mod test_support;

use log::{debug, trace};
use viewexpr_ast::BindingExpr;
use viewexpr_core::Mode;
use viewexpr_ir::{IrExpr, IrStmt};

pub use convert::ExprConverter;
pub use flatten::flatten_statements;
pub use lowered::{Lowered, Receiver};
pub use resolver::NameResolver;

pub use viewexpr_core::ConversionError;

type Result<T> = std::result::Result<T, ConversionError>;

/// Result of converting a binding in expression form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedExpression {
    /// The lowered expression.
    pub expression: IrExpr,
    /// Whether the expression refers to the value unwrapper.
    pub needs_value_unwrapper: bool,
}

/// Convert a binding into a single IR expression.
///
/// # Arguments
///
/// * `resolver` - Name resolution for pipes, locals and literals
/// * `implicit_receiver` - Target of unqualified names without a local binding
/// * `expr` - The binding to convert
/// * `value_unwrapper` - Variable that finalizes pipe results
///
/// # Errors
///
/// Any [`ConversionError`]; chains are rejected since they have no value.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn convert_expression(
    resolver: &mut dyn NameResolver,
    implicit_receiver: &IrExpr,
    expr: &BindingExpr<'_>,
    value_unwrapper: &IrExpr,
) -> Result<ConvertedExpression> {
    trace!(
        "converting {} at {} as {}",
        expr.kind(),
        expr.span(),
        Mode::Expression
    );

    let mut converter = ExprConverter::new(resolver, implicit_receiver, Some(value_unwrapper));
    let expression = converter
        .convert_expr(expr)
        .inspect_err(|err| debug!("expression conversion failed: {}", err))?;

    let needs_value_unwrapper = converter.needs_value_unwrapper();
    if needs_value_unwrapper {
        debug!("binding at {} requires the value unwrapper", expr.span());
    }

    Ok(ConvertedExpression {
        expression,
        needs_value_unwrapper,
    })
}

/// Convert a binding into a flat list of IR statements.
///
/// Chains, including chains nested in chains, are flattened in evaluation
/// order. No value unwrapper is available, so pipes are rejected.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn convert_statement(
    resolver: &mut dyn NameResolver,
    implicit_receiver: &IrExpr,
    stmt: &BindingExpr<'_>,
) -> Result<Vec<IrStmt>> {
    trace!(
        "converting {} at {} as {}",
        stmt.kind(),
        stmt.span(),
        Mode::Statement
    );

    let mut converter = ExprConverter::new(resolver, implicit_receiver, None);
    let lowered = converter
        .convert(stmt, Mode::Statement)
        .inspect_err(|err| debug!("statement conversion failed: {}", err))?;

    let mut leaves = Vec::new();
    flatten_statements(lowered, &mut leaves);

    let mut statements = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        match leaf {
            Lowered::Stmt(statement) => statements.push(statement),
            Lowered::Expr(expr) => statements.push(expr.to_stmt()),
            Lowered::Implicit => statements.push(implicit_receiver.clone().to_stmt()),
            Lowered::Sequence(_) => unreachable!("flatten_statements yields only leaves"),
        }
    }
    Ok(statements)
}
