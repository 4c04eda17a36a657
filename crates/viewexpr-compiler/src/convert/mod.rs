//! Recursive binding-expression converter.
//!
//! [`ExprConverter`] walks a [`BindingExpr`] tree once, threading the
//! evaluation [`Mode`] through every call:
//! - `Mode::Expression` results are pure values ([`Lowered::Expr`] or the
//!   unresolved [`Lowered::Implicit`])
//! - `Mode::Statement` results are statements ([`Lowered::Stmt`]) or, for
//!   chains, nested [`Lowered::Sequence`]s
//!
//! # Example
//!
//! ```ignore
//! let mut converter = ExprConverter::new(&mut resolver, &implicit, Some(&unwrapper));
//! let lowered = converter.convert(&expr, Mode::Expression)?;
//! let value = converter.expression_value(lowered, &expr)?;
//! ```

mod binary;
mod calls;
mod literals;
mod member;

use viewexpr_ast::BindingExpr;
use viewexpr_core::{ConversionError, Mode, NodeKind};
use viewexpr_ir::IrExpr;

use crate::mode::{ensure_expression_mode, ensure_statement_mode};
use crate::{Lowered, NameResolver, Receiver, Result};

/// Converts binding expressions into IR.
///
/// One converter is created per top-level conversion. Apart from its
/// configuration it only remembers whether a pipe was converted.
pub struct ExprConverter<'r> {
    /// Pipe instantiation, locals and collection literals
    resolver: &'r mut dyn NameResolver,
    /// Substituted wherever the implicit receiver reaches an expression
    implicit_receiver: &'r IrExpr,
    /// Finalizes pipe results; absent for statement bindings
    value_unwrapper: Option<&'r IrExpr>,
    /// Set once a pipe has been converted
    needs_value_unwrapper: bool,
}

impl<'r> ExprConverter<'r> {
    /// Create a converter.
    ///
    /// # Arguments
    ///
    /// * `resolver` - Name resolution for pipes, locals and literals
    /// * `implicit_receiver` - Target of unqualified names without a local binding
    /// * `value_unwrapper` - Variable finalizing pipe results, `None` when pipes are not allowed
    pub fn new(
        resolver: &'r mut dyn NameResolver,
        implicit_receiver: &'r IrExpr,
        value_unwrapper: Option<&'r IrExpr>,
    ) -> Self {
        Self {
            resolver,
            implicit_receiver,
            value_unwrapper,
            needs_value_unwrapper: false,
        }
    }

    /// Whether any converted node required the value unwrapper.
    #[inline]
    pub fn needs_value_unwrapper(&self) -> bool {
        self.needs_value_unwrapper
    }

    /// Convert `expr` under `mode`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn convert<'ast>(&mut self, expr: &BindingExpr<'ast>, mode: Mode) -> Result<Lowered> {
        match expr {
            BindingExpr::Binary(bin) => binary::convert_binary(self, bin, mode),
            BindingExpr::Chain(chain) => {
                ensure_statement_mode(mode, expr)?;
                let mut lowered = Vec::with_capacity(chain.expressions.len());
                for sub in chain.expressions {
                    lowered.push(self.convert(sub, mode)?);
                }
                Ok(Lowered::Sequence(lowered))
            }
            BindingExpr::Conditional(cond) => binary::convert_conditional(self, cond, mode),
            BindingExpr::Pipe(pipe) => calls::convert_pipe(self, pipe, mode),
            BindingExpr::FunctionCall(call) => calls::convert_function_call(self, call, mode),
            BindingExpr::ImplicitReceiver(_) => {
                ensure_expression_mode(mode, expr)?;
                Ok(Lowered::Implicit)
            }
            BindingExpr::Interpolation(interp) => {
                ensure_expression_mode(mode, expr)?;
                literals::convert_interpolation(self, interp)
            }
            BindingExpr::KeyedRead(read) => member::convert_keyed_read(self, read, mode),
            BindingExpr::KeyedWrite(write) => member::convert_keyed_write(self, write, mode),
            BindingExpr::LiteralArray(array) => literals::convert_literal_array(self, array, mode),
            BindingExpr::LiteralMap(map) => literals::convert_literal_map(self, map, mode),
            BindingExpr::LiteralPrimitive(lit) => Ok(literals::convert_primitive(lit, mode)),
            BindingExpr::MethodCall(call) => calls::convert_method_call(self, call, mode),
            BindingExpr::PrefixNot(not) => binary::convert_prefix_not(self, not, mode),
            BindingExpr::PropertyRead(read) => member::convert_property_read(self, read, mode),
            BindingExpr::PropertyWrite(write) => member::convert_property_write(self, write, mode),
            BindingExpr::SafePropertyRead(read) => {
                member::convert_safe_property_read(self, read, mode)
            }
            BindingExpr::SafeMethodCall(call) => calls::convert_safe_method_call(self, call, mode),
            BindingExpr::Quote(quote) => Err(ConversionError::UnsupportedConstruct {
                kind: NodeKind::Quote,
                span: quote.span,
            }),
        }
    }

    /// Convert `expr` in expression mode and return its value.
    pub fn convert_expr<'ast>(&mut self, expr: &BindingExpr<'ast>) -> Result<IrExpr> {
        let lowered = self.convert(expr, Mode::Expression)?;
        self.expression_value(lowered, expr)
    }

    /// Turn a converted result back into an expression.
    ///
    /// The implicit receiver is substituted, statements are unwrapped.
    /// Sequences have no value and are rejected.
    pub fn expression_value<'ast>(
        &self,
        lowered: Lowered,
        expr: &BindingExpr<'ast>,
    ) -> Result<IrExpr> {
        match lowered {
            Lowered::Implicit => Ok(self.implicit_receiver.clone()),
            Lowered::Expr(value) => Ok(value),
            Lowered::Stmt(stmt) => Ok(stmt.into_expr()),
            Lowered::Sequence(_) => Err(ConversionError::ModeViolation {
                kind: expr.kind(),
                required: Mode::Expression,
                span: expr.span(),
            }),
        }
    }

    /// Convert the receiver of a member access.
    ///
    /// The implicit receiver stays [`Receiver::Unresolved`] so the caller
    /// can consult local bindings first.
    pub fn convert_receiver<'ast>(&mut self, expr: &BindingExpr<'ast>) -> Result<Receiver> {
        match self.convert(expr, Mode::Expression)? {
            Lowered::Implicit => Ok(Receiver::Unresolved),
            lowered => self.expression_value(lowered, expr).map(Receiver::Resolved),
        }
    }

    /// Convert call arguments left to right in expression mode.
    pub fn convert_args<'ast>(&mut self, args: &[BindingExpr<'ast>]) -> Result<Vec<IrExpr>> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.convert_expr(arg)?);
        }
        Ok(values)
    }

    /// Resolve an unresolved receiver to the configured implicit receiver.
    #[inline]
    pub(crate) fn resolve_receiver(&self, receiver: Receiver) -> IrExpr {
        receiver.resolve(self.implicit_receiver)
    }

    pub(crate) fn resolver(&mut self) -> &mut (dyn NameResolver + 'r) {
        &mut *self.resolver
    }

    pub(crate) fn value_unwrapper(&self) -> Option<&'r IrExpr> {
        self.value_unwrapper
    }

    pub(crate) fn mark_needs_value_unwrapper(&mut self) {
        self.needs_value_unwrapper = true;
    }
}

/// Build `receiver == null ? null : access(receiver)`.
pub(crate) fn guard_null(receiver: IrExpr, access: impl FnOnce(IrExpr) -> IrExpr) -> IrExpr {
    receiver
        .clone()
        .is_blank()
        .conditional(IrExpr::null(), access(receiver))
}
