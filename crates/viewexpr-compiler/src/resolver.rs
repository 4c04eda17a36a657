//! Name resolution supplied by the surrounding view compiler.
//!
//! The converter never decides on its own how pipes are instantiated, which
//! names are template locals, or how collection literals are materialized;
//! it asks a [`NameResolver`].

use viewexpr_ir::IrExpr;

/// Capability injected into every conversion.
pub trait NameResolver {
    /// Return an expression referring to an instance of pipe `name`,
    /// creating the instance in the generated view if needed.
    fn instantiate_pipe(&mut self, name: &str) -> IrExpr;

    /// Look up a template-local variable (`let-item`, `#ref`, ...).
    ///
    /// `None` means the name is not a local and resolves against the
    /// implicit receiver.
    fn lookup_local(&mut self, name: &str) -> Option<IrExpr>;

    /// Materialize an array literal from already converted elements.
    fn build_literal_array(&mut self, elements: Vec<IrExpr>) -> IrExpr {
        IrExpr::array(elements)
    }

    /// Materialize a map literal; `entries` are in source order.
    fn build_literal_map(&mut self, entries: Vec<(String, IrExpr)>) -> IrExpr {
        IrExpr::map(entries)
    }
}
