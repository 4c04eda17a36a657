//! viewexpr
//!
//! Lowers template binding expressions into an expression/statement IR for
//! a view code generator.
//!
//! ## Crates
//!
//! - [`core`]: spans, node kinds, evaluation modes and errors
//! - [`ast`]: arena-allocated binding AST and its builder
//! - [`ir`]: the output IR
//! - [`compiler`]: the converter and its entry points
//!
//! # Example
//!
//! ```
//! use viewexpr::prelude::*;
//!
//! struct NoLocals;
//!
//! impl NameResolver for NoLocals {
//!     fn instantiate_pipe(&mut self, name: &str) -> IrExpr {
//!         IrExpr::variable(format!("pipe_{name}"))
//!     }
//!
//!     fn lookup_local(&mut self, _name: &str) -> Option<IrExpr> {
//!         None
//!     }
//! }
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let expr = b.pipe(b.ident("title", Span::new(0, 5)), "uppercase", &[], Span::new(0, 17));
//!
//! let converted = convert_expression(
//!     &mut NoLocals,
//!     &IrExpr::variable("ctx"),
//!     &expr,
//!     &IrExpr::variable("unwrapper"),
//! )
//! .unwrap();
//! assert!(converted.needs_value_unwrapper);
//! ```

pub use viewexpr_ast as ast;
pub use viewexpr_compiler as compiler;
pub use viewexpr_core as core;
pub use viewexpr_ir as ir;

pub use viewexpr_compiler::{
    ConvertedExpression, NameResolver, convert_expression, convert_statement,
};
pub use viewexpr_core::{ConversionError, Mode, NodeKind, Span};

pub mod prelude {
    pub use bumpalo::Bump;
    pub use viewexpr_ast::{AstBuilder, BindingExpr, Primitive};
    pub use viewexpr_compiler::{
        ConvertedExpression, NameResolver, convert_expression, convert_statement,
    };
    pub use viewexpr_core::{ConversionError, Mode, NodeKind, Span};
    pub use viewexpr_ir::{BinaryOperator, ExternalRef, IrExpr, IrStmt, Literal};
}
