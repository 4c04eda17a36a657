//! Resolver double shared by the unit tests.

use rustc_hash::FxHashMap;
use viewexpr_ir::IrExpr;

use crate::NameResolver;

/// A resolver call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverCall {
    InstantiatePipe(String),
    LookupLocal(String),
    /// Number of elements
    BuildLiteralArray(usize),
    /// Keys in order
    BuildLiteralMap(Vec<String>),
}

/// Resolves a fixed set of locals and names pipe instances `pipe_<name>`.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    locals: FxHashMap<String, IrExpr>,
    calls: Vec<ResolverCall>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local(mut self, name: &str, value: IrExpr) -> Self {
        self.locals.insert(name.to_string(), value);
        self
    }

    pub fn calls(&self) -> &[ResolverCall] {
        &self.calls
    }
}

impl NameResolver for RecordingResolver {
    fn instantiate_pipe(&mut self, name: &str) -> IrExpr {
        self.calls.push(ResolverCall::InstantiatePipe(name.to_string()));
        IrExpr::variable(format!("pipe_{}", name))
    }

    fn lookup_local(&mut self, name: &str) -> Option<IrExpr> {
        self.calls.push(ResolverCall::LookupLocal(name.to_string()));
        self.locals.get(name).cloned()
    }

    fn build_literal_array(&mut self, elements: Vec<IrExpr>) -> IrExpr {
        self.calls.push(ResolverCall::BuildLiteralArray(elements.len()));
        IrExpr::array(elements)
    }

    fn build_literal_map(&mut self, entries: Vec<(String, IrExpr)>) -> IrExpr {
        self.calls.push(ResolverCall::BuildLiteralMap(
            entries.iter().map(|(key, _)| key.clone()).collect(),
        ));
        IrExpr::map(entries)
    }
}
