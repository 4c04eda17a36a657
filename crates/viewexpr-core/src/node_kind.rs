//! Kinds of binding-expression AST nodes, used for diagnostics.

use std::fmt;

/// The closed set of binding-expression node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Binary,
    Chain,
    Conditional,
    Pipe,
    FunctionCall,
    ImplicitReceiver,
    Interpolation,
    KeyedRead,
    KeyedWrite,
    LiteralArray,
    LiteralMap,
    LiteralPrimitive,
    MethodCall,
    PrefixNot,
    PropertyRead,
    PropertyWrite,
    SafePropertyRead,
    SafeMethodCall,
    Quote,
}

impl NodeKind {
    /// Human readable name of the node kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Binary => "binary expression",
            NodeKind::Chain => "expression chain",
            NodeKind::Conditional => "conditional expression",
            NodeKind::Pipe => "pipe",
            NodeKind::FunctionCall => "function call",
            NodeKind::ImplicitReceiver => "implicit receiver",
            NodeKind::Interpolation => "interpolation",
            NodeKind::KeyedRead => "keyed read",
            NodeKind::KeyedWrite => "keyed write",
            NodeKind::LiteralArray => "array literal",
            NodeKind::LiteralMap => "map literal",
            NodeKind::LiteralPrimitive => "primitive literal",
            NodeKind::MethodCall => "method call",
            NodeKind::PrefixNot => "prefix not",
            NodeKind::PropertyRead => "property read",
            NodeKind::PropertyWrite => "property write",
            NodeKind::SafePropertyRead => "safe property read",
            NodeKind::SafeMethodCall => "safe method call",
            NodeKind::Quote => "quote",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
