//! Binding-expression AST for the viewexpr lowering stage.
//!
//! This crate provides:
//! - [`BindingExpr`] and its node structs, the closed set of kinds the
//!   template parser produces
//! - [`AstBuilder`] for allocating trees in a [`bumpalo::Bump`] arena
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use viewexpr_ast::AstBuilder;
//! use viewexpr_core::{NodeKind, Span};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! // user.name | uppercase
//! let user = b.ident("user", Span::new(0, 4));
//! let name = b.property_read(user, "name", Span::new(0, 9));
//! let piped = b.pipe(name, "uppercase", &[], Span::new(0, 21));
//!
//! assert_eq!(piped.kind(), NodeKind::Pipe);
//! ```

mod builder;
pub mod expr;

pub use builder::AstBuilder;
pub use expr::*;
