//! Arena-backed construction of binding ASTs.
//!
//! [`AstBuilder`] copies names, strings and child lists into the arena so
//! callers can build trees from borrowed data without managing lifetimes
//! by hand.

use bumpalo::Bump;
use viewexpr_core::Span;

use crate::expr::*;

/// Allocates binding-expression nodes in a [`Bump`] arena.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    fn name(&self, text: &str) -> &'ast str {
        self.arena.alloc_str(text)
    }

    fn list(&self, items: &[BindingExpr<'ast>]) -> &'ast [BindingExpr<'ast>] {
        self.arena.alloc_slice_copy(items)
    }

    fn node(&self, expr: BindingExpr<'ast>) -> &'ast BindingExpr<'ast> {
        self.arena.alloc(expr)
    }

    fn entry(&self, key: &str, value: BindingExpr<'ast>) -> MapEntry<'ast> {
        MapEntry {
            key: self.name(key),
            value,
        }
    }

    pub fn implicit_receiver(&self, span: Span) -> BindingExpr<'ast> {
        BindingExpr::ImplicitReceiver(ImplicitReceiverExpr { span })
    }

    pub fn binary(
        &self,
        op: &str,
        left: BindingExpr<'ast>,
        right: BindingExpr<'ast>,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::Binary(self.arena.alloc(BinaryExpr {
            op: self.name(op),
            left: self.node(left),
            right: self.node(right),
            span,
        }))
    }

    pub fn chain(&self, expressions: &[BindingExpr<'ast>], span: Span) -> BindingExpr<'ast> {
        BindingExpr::Chain(self.arena.alloc(ChainExpr {
            expressions: self.list(expressions),
            span,
        }))
    }

    pub fn conditional(
        &self,
        condition: BindingExpr<'ast>,
        true_expr: BindingExpr<'ast>,
        false_expr: BindingExpr<'ast>,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::Conditional(self.arena.alloc(ConditionalExpr {
            condition: self.node(condition),
            true_expr: self.node(true_expr),
            false_expr: self.node(false_expr),
            span,
        }))
    }

    pub fn pipe(
        &self,
        input: BindingExpr<'ast>,
        name: &str,
        args: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::Pipe(self.arena.alloc(PipeExpr {
            input: self.node(input),
            name: self.name(name),
            args: self.list(args),
            span,
        }))
    }

    pub fn function_call(
        &self,
        target: BindingExpr<'ast>,
        args: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::FunctionCall(self.arena.alloc(FunctionCallExpr {
            target: self.node(target),
            args: self.list(args),
            span,
        }))
    }

    pub fn interpolation(
        &self,
        strings: &[&str],
        expressions: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        let strings = strings.iter().map(|s| self.name(s));
        BindingExpr::Interpolation(self.arena.alloc(InterpolationExpr {
            strings: self.arena.alloc_slice_fill_iter(strings),
            expressions: self.list(expressions),
            span,
        }))
    }

    pub fn keyed_read(
        &self,
        object: BindingExpr<'ast>,
        key: BindingExpr<'ast>,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::KeyedRead(self.arena.alloc(KeyedReadExpr {
            object: self.node(object),
            key: self.node(key),
            span,
        }))
    }

    pub fn keyed_write(
        &self,
        object: BindingExpr<'ast>,
        key: BindingExpr<'ast>,
        value: BindingExpr<'ast>,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::KeyedWrite(self.arena.alloc(KeyedWriteExpr {
            object: self.node(object),
            key: self.node(key),
            value: self.node(value),
            span,
        }))
    }

    pub fn literal_array(
        &self,
        expressions: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::LiteralArray(self.arena.alloc(LiteralArrayExpr {
            expressions: self.list(expressions),
            span,
        }))
    }

    /// Build a map literal; `entries` keep their order.
    pub fn literal_map(
        &self,
        entries: &[(&str, BindingExpr<'ast>)],
        span: Span,
    ) -> BindingExpr<'ast> {
        let entries = entries.iter().map(|&(key, value)| self.entry(key, value));
        BindingExpr::LiteralMap(self.arena.alloc(LiteralMapExpr {
            entries: self.arena.alloc_slice_fill_iter(entries),
            span,
        }))
    }

    pub fn primitive(&self, value: Primitive<'ast>, span: Span) -> BindingExpr<'ast> {
        BindingExpr::LiteralPrimitive(LiteralPrimitiveExpr { value, span })
    }

    pub fn null(&self, span: Span) -> BindingExpr<'ast> {
        self.primitive(Primitive::Null, span)
    }

    pub fn bool(&self, value: bool, span: Span) -> BindingExpr<'ast> {
        self.primitive(Primitive::Bool(value), span)
    }

    pub fn int(&self, value: i64, span: Span) -> BindingExpr<'ast> {
        self.primitive(Primitive::Int(value), span)
    }

    pub fn float(&self, value: f64, span: Span) -> BindingExpr<'ast> {
        self.primitive(Primitive::Float(value), span)
    }

    pub fn string(&self, value: &str, span: Span) -> BindingExpr<'ast> {
        self.primitive(Primitive::String(self.name(value)), span)
    }

    pub fn method_call(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        args: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::MethodCall(self.method(receiver, name, args, span))
    }

    pub fn safe_method_call(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        args: &[BindingExpr<'ast>],
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::SafeMethodCall(self.method(receiver, name, args, span))
    }

    fn method(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        args: &[BindingExpr<'ast>],
        span: Span,
    ) -> &'ast MethodCallExpr<'ast> {
        self.arena.alloc(MethodCallExpr {
            receiver: self.node(receiver),
            name: self.name(name),
            args: self.list(args),
            span,
        })
    }

    pub fn prefix_not(&self, expr: BindingExpr<'ast>, span: Span) -> BindingExpr<'ast> {
        BindingExpr::PrefixNot(self.arena.alloc(PrefixNotExpr {
            expr: self.node(expr),
            span,
        }))
    }

    pub fn property_read(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::PropertyRead(self.property(receiver, name, span))
    }

    pub fn safe_property_read(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::SafePropertyRead(self.property(receiver, name, span))
    }

    fn property(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        span: Span,
    ) -> &'ast PropertyReadExpr<'ast> {
        self.arena.alloc(PropertyReadExpr {
            receiver: self.node(receiver),
            name: self.name(name),
            span,
        })
    }

    pub fn property_write(
        &self,
        receiver: BindingExpr<'ast>,
        name: &str,
        value: BindingExpr<'ast>,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::PropertyWrite(self.arena.alloc(PropertyWriteExpr {
            receiver: self.node(receiver),
            name: self.name(name),
            value: self.node(value),
            span,
        }))
    }

    /// Shorthand for a bare name, `name`, read off the implicit receiver.
    pub fn ident(&self, name: &str, span: Span) -> BindingExpr<'ast> {
        self.property_read(self.implicit_receiver(span), name, span)
    }

    pub fn quote(
        &self,
        prefix: &str,
        uninterpreted: &str,
        location: &str,
        span: Span,
    ) -> BindingExpr<'ast> {
        BindingExpr::Quote(self.arena.alloc(QuoteExpr {
            prefix: self.name(prefix),
            uninterpreted: self.name(uninterpreted),
            location: self.name(location),
            span,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewexpr_core::NodeKind;

    #[test]
    fn ident_reads_off_implicit_receiver() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let expr = b.ident("name", Span::new(0, 4));
        match expr {
            BindingExpr::PropertyRead(read) => {
                assert_eq!(read.name, "name");
                assert!(matches!(read.receiver, BindingExpr::ImplicitReceiver(_)));
            }
            other => panic!("expected property read, got {:?}", other),
        }
        assert_eq!(expr.span(), Span::new(0, 4));
    }

    #[test]
    fn interpolation_copies_strings() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let owned = vec![String::from("Hello "), String::from("!")];
        let parts: Vec<&str> = owned.iter().map(String::as_str).collect();

        let expr = b.interpolation(
            &parts,
            &[b.ident("user", Span::new(8, 12))],
            Span::new(0, 16),
        );
        drop(owned);

        match expr {
            BindingExpr::Interpolation(interp) => {
                assert_eq!(interp.strings, &["Hello ", "!"]);
                assert_eq!(interp.expressions.len(), 1);
            }
            other => panic!("expected interpolation, got {:?}", other),
        }
    }

    #[test]
    fn literal_map_keeps_entry_order() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let span = Span::default();

        let expr = b.literal_map(&[("z", b.int(1, span)), ("a", b.int(2, span))], span);
        match expr {
            BindingExpr::LiteralMap(map) => {
                let keys: Vec<&str> = map.entries.iter().map(|e| e.key).collect();
                assert_eq!(keys, vec!["z", "a"]);
            }
            other => panic!("expected map literal, got {:?}", other),
        }
    }

    #[test]
    fn kinds_match_constructors() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::default();
        let x = b.ident("x", s);

        let exprs = [
            b.binary("+", x, x, s),
            b.chain(&[x], s),
            b.conditional(x, x, x, s),
            b.pipe(x, "async", &[], s),
            b.function_call(x, &[], s),
            b.implicit_receiver(s),
            b.interpolation(&["", ""], &[x], s),
            b.keyed_read(x, x, s),
            b.keyed_write(x, x, x, s),
            b.literal_array(&[x], s),
            b.literal_map(&[("k", x)], s),
            b.string("s", s),
            b.method_call(x, "m", &[], s),
            b.prefix_not(x, s),
            x,
            b.property_write(b.implicit_receiver(s), "x", x, s),
            b.safe_property_read(x, "p", s),
            b.safe_method_call(x, "m", &[], s),
            b.quote("js", "a + b", "test", s),
        ];

        let kinds: Vec<NodeKind> = exprs.iter().map(BindingExpr::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Binary,
                NodeKind::Chain,
                NodeKind::Conditional,
                NodeKind::Pipe,
                NodeKind::FunctionCall,
                NodeKind::ImplicitReceiver,
                NodeKind::Interpolation,
                NodeKind::KeyedRead,
                NodeKind::KeyedWrite,
                NodeKind::LiteralArray,
                NodeKind::LiteralMap,
                NodeKind::LiteralPrimitive,
                NodeKind::MethodCall,
                NodeKind::PrefixNot,
                NodeKind::PropertyRead,
                NodeKind::PropertyWrite,
                NodeKind::SafePropertyRead,
                NodeKind::SafeMethodCall,
                NodeKind::Quote,
            ]
        );
    }
}
