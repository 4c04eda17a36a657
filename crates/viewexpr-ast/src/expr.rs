//! Binding-expression AST nodes.
//!
//! The template parser produces these nodes for property bindings, event
//! bindings and text interpolations. All nodes borrow from a
//! [`bumpalo::Bump`] arena and are immutable once built.
//!
//! The set of kinds is closed: [`BindingExpr`] is matched exhaustively by
//! the lowering stage, so a new kind fails to compile until every
//! consumer handles it.

use viewexpr_core::{NodeKind, Span};

/// A binding expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingExpr<'ast> {
    /// Binary operation, e.g. `a + b`
    Binary(&'ast BinaryExpr<'ast>),
    /// Semicolon separated expressions (event bindings only)
    Chain(&'ast ChainExpr<'ast>),
    /// Ternary `cond ? a : b`
    Conditional(&'ast ConditionalExpr<'ast>),
    /// Pipe application, e.g. `value | date:'short'`
    Pipe(&'ast PipeExpr<'ast>),
    /// Call of an arbitrary callee expression
    FunctionCall(&'ast FunctionCallExpr<'ast>),
    /// The unwritten receiver of an unqualified name
    ImplicitReceiver(ImplicitReceiverExpr),
    /// Text with embedded `{{ }}` expressions
    Interpolation(&'ast InterpolationExpr<'ast>),
    /// `obj[key]`
    KeyedRead(&'ast KeyedReadExpr<'ast>),
    /// `obj[key] = value`
    KeyedWrite(&'ast KeyedWriteExpr<'ast>),
    /// `[a, b, c]`
    LiteralArray(&'ast LiteralArrayExpr<'ast>),
    /// `{key: value}`
    LiteralMap(&'ast LiteralMapExpr<'ast>),
    /// Constant value
    LiteralPrimitive(LiteralPrimitiveExpr<'ast>),
    /// `receiver.name(args)`
    MethodCall(&'ast MethodCallExpr<'ast>),
    /// `!expr`
    PrefixNot(&'ast PrefixNotExpr<'ast>),
    /// `receiver.name`
    PropertyRead(&'ast PropertyReadExpr<'ast>),
    /// `receiver.name = value`
    PropertyWrite(&'ast PropertyWriteExpr<'ast>),
    /// `receiver?.name`
    SafePropertyRead(&'ast PropertyReadExpr<'ast>),
    /// `receiver?.name(args)`
    SafeMethodCall(&'ast MethodCallExpr<'ast>),
    /// `prefix: uninterpreted text`, never evaluable
    Quote(&'ast QuoteExpr<'ast>),
}

impl<'ast> BindingExpr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Binary(e) => e.span,
            Self::Chain(e) => e.span,
            Self::Conditional(e) => e.span,
            Self::Pipe(e) => e.span,
            Self::FunctionCall(e) => e.span,
            Self::ImplicitReceiver(e) => e.span,
            Self::Interpolation(e) => e.span,
            Self::KeyedRead(e) => e.span,
            Self::KeyedWrite(e) => e.span,
            Self::LiteralArray(e) => e.span,
            Self::LiteralMap(e) => e.span,
            Self::LiteralPrimitive(e) => e.span,
            Self::MethodCall(e) => e.span,
            Self::PrefixNot(e) => e.span,
            Self::PropertyRead(e) => e.span,
            Self::PropertyWrite(e) => e.span,
            Self::SafePropertyRead(e) => e.span,
            Self::SafeMethodCall(e) => e.span,
            Self::Quote(e) => e.span,
        }
    }

    /// Get the kind of this expression.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Binary(_) => NodeKind::Binary,
            Self::Chain(_) => NodeKind::Chain,
            Self::Conditional(_) => NodeKind::Conditional,
            Self::Pipe(_) => NodeKind::Pipe,
            Self::FunctionCall(_) => NodeKind::FunctionCall,
            Self::ImplicitReceiver(_) => NodeKind::ImplicitReceiver,
            Self::Interpolation(_) => NodeKind::Interpolation,
            Self::KeyedRead(_) => NodeKind::KeyedRead,
            Self::KeyedWrite(_) => NodeKind::KeyedWrite,
            Self::LiteralArray(_) => NodeKind::LiteralArray,
            Self::LiteralMap(_) => NodeKind::LiteralMap,
            Self::LiteralPrimitive(_) => NodeKind::LiteralPrimitive,
            Self::MethodCall(_) => NodeKind::MethodCall,
            Self::PrefixNot(_) => NodeKind::PrefixNot,
            Self::PropertyRead(_) => NodeKind::PropertyRead,
            Self::PropertyWrite(_) => NodeKind::PropertyWrite,
            Self::SafePropertyRead(_) => NodeKind::SafePropertyRead,
            Self::SafeMethodCall(_) => NodeKind::SafeMethodCall,
            Self::Quote(_) => NodeKind::Quote,
        }
    }
}

/// A binary operation. The operator is kept as the source token; mapping
/// it to an IR operator happens during lowering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Operator token, e.g. `"+"` or `"==="`
    pub op: &'ast str,
    /// Left operand
    pub left: &'ast BindingExpr<'ast>,
    /// Right operand
    pub right: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// A chain of expressions, `a(); b = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainExpr<'ast> {
    /// Expressions in evaluation order
    pub expressions: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// A ternary conditional expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalExpr<'ast> {
    /// Condition
    pub condition: &'ast BindingExpr<'ast>,
    /// Value when the condition holds
    pub true_expr: &'ast BindingExpr<'ast>,
    /// Value otherwise
    pub false_expr: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// A pipe application, `input | name:arg1:arg2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeExpr<'ast> {
    /// The piped value
    pub input: &'ast BindingExpr<'ast>,
    /// Registered pipe name
    pub name: &'ast str,
    /// Extra pipe arguments
    pub args: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// A call of an arbitrary callee, `target(args)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionCallExpr<'ast> {
    /// The value being called
    pub target: &'ast BindingExpr<'ast>,
    /// Arguments
    pub args: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// The implicit receiver of an unqualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitReceiverExpr {
    /// Source location
    pub span: Span,
}

/// Text interpolation. `strings` always surround `expressions`, so a
/// well formed node has one more string than expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationExpr<'ast> {
    /// Literal text parts
    pub strings: &'ast [&'ast str],
    /// Embedded expressions
    pub expressions: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// `obj[key]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedReadExpr<'ast> {
    /// The indexed value
    pub object: &'ast BindingExpr<'ast>,
    /// The key
    pub key: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// `obj[key] = value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedWriteExpr<'ast> {
    /// The indexed value
    pub object: &'ast BindingExpr<'ast>,
    /// The key
    pub key: &'ast BindingExpr<'ast>,
    /// The assigned value
    pub value: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// An array literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralArrayExpr<'ast> {
    /// Elements
    pub expressions: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// A map literal. Entry order is significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralMapExpr<'ast> {
    /// Entries in source order
    pub entries: &'ast [MapEntry<'ast>],
    /// Source location
    pub span: Span,
}

/// One `key: value` pair of a map literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEntry<'ast> {
    /// Literal key
    pub key: &'ast str,
    /// Value expression
    pub value: BindingExpr<'ast>,
}

/// A constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralPrimitiveExpr<'ast> {
    /// The constant value
    pub value: Primitive<'ast>,
    /// Source location
    pub span: Span,
}

/// Constant values accepted by the binding language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'ast> {
    /// `null` / `undefined`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integral number
    Int(i64),
    /// Non-integral number
    Float(f64),
    /// String literal
    String(&'ast str),
}

/// `receiver.name(args)`, also used for `receiver?.name(args)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodCallExpr<'ast> {
    /// The receiver; [`BindingExpr::ImplicitReceiver`] for `name(args)`
    pub receiver: &'ast BindingExpr<'ast>,
    /// Method name
    pub name: &'ast str,
    /// Arguments
    pub args: &'ast [BindingExpr<'ast>],
    /// Source location
    pub span: Span,
}

/// `!expr`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixNotExpr<'ast> {
    /// Operand
    pub expr: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// `receiver.name`, also used for `receiver?.name`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyReadExpr<'ast> {
    /// The receiver; [`BindingExpr::ImplicitReceiver`] for a bare name
    pub receiver: &'ast BindingExpr<'ast>,
    /// Property name
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

/// `receiver.name = value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyWriteExpr<'ast> {
    /// The receiver; [`BindingExpr::ImplicitReceiver`] for a bare name
    pub receiver: &'ast BindingExpr<'ast>,
    /// Property name
    pub name: &'ast str,
    /// Assigned value
    pub value: &'ast BindingExpr<'ast>,
    /// Source location
    pub span: Span,
}

/// A quoted escape, `prefix: uninterpreted`. Quotes are handed to
/// template transformers and are never evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteExpr<'ast> {
    /// Prefix before the colon
    pub prefix: &'ast str,
    /// Raw text after the colon
    pub uninterpreted: &'ast str,
    /// Location description supplied by the parser
    pub location: &'ast str,
    /// Source location
    pub span: Span,
}
