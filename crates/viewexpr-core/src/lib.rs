//! Core types shared by the viewexpr crates.
//!
//! - [`Span`]: byte range of a node in the binding source
//! - [`NodeKind`]: the closed set of binding AST node kinds
//! - [`Mode`]: statement vs. expression evaluation mode
//! - [`ConversionError`]: faults raised while lowering to IR

mod error;
mod mode;
mod node_kind;
mod span;

pub use error::ConversionError;
pub use mode::Mode;
pub use node_kind::NodeKind;
pub use span::Span;
