//! Call conversion: pipes, function calls and method calls.
//!
//! Evaluation order differs per call form and is part of the contract:
//! - pipe: instance, input, arguments
//! - function call: target, arguments
//! - method call: arguments, receiver
//! - safe method call: receiver, arguments

use log::trace;
use viewexpr_ast::{FunctionCallExpr, MethodCallExpr, PipeExpr};
use viewexpr_core::{ConversionError, Mode};
use viewexpr_ir::IrExpr;

use super::{ExprConverter, Result, guard_null};
use crate::mode::wrap_if_statement;
use crate::{Lowered, Receiver};

/// Method invoked on a pipe instance.
pub const TRANSFORM_METHOD: &str = "transform";

/// Method invoked on the value unwrapper.
pub const UNWRAP_METHOD: &str = "unwrap";

/// Convert a pipe application: `input | name:arg...`
///
/// Produces `unwrapper.unwrap(pipe.transform(input, [args]))` and marks
/// the conversion as needing the value unwrapper.
pub fn convert_pipe<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &PipeExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let unwrapper = converter
        .value_unwrapper()
        .ok_or_else(|| ConversionError::PipeWithoutUnwrapper {
            name: expr.name.to_string(),
            span: expr.span,
        })?;

    let pipe = converter.resolver().instantiate_pipe(expr.name);
    let input = converter.convert_expr(expr.input)?;
    let args = converter.convert_args(expr.args)?;
    converter.mark_needs_value_unwrapper();
    trace!(
        "pipe '{}' at {} with {} argument(s)",
        expr.name,
        expr.span,
        args.len()
    );

    let args = IrExpr::array(args);
    let transformed = pipe.call_method(TRANSFORM_METHOD, vec![input, args]);
    let unwrapped = unwrapper
        .clone()
        .call_method(UNWRAP_METHOD, vec![transformed]);
    Ok(wrap_if_statement(mode, unwrapped))
}

/// Convert a call of an arbitrary target: `target(args)`
pub fn convert_function_call<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &FunctionCallExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let target = converter.convert_expr(expr.target)?;
    let args = converter.convert_args(expr.args)?;
    Ok(wrap_if_statement(mode, target.call_fn(args)))
}

/// Convert a method call: `receiver.name(args)` or `name(args)`
///
/// Arguments are converted before the receiver. A bare `name(args)` whose
/// name is a local binding calls the bound value directly.
pub fn convert_method_call<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &MethodCallExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let args = converter.convert_args(expr.args)?;
    let receiver = converter.convert_receiver(expr.receiver)?;

    let result = match receiver {
        Receiver::Unresolved => match converter.resolver().lookup_local(expr.name) {
            Some(local) => local.call_fn(args),
            None => converter
                .resolve_receiver(Receiver::Unresolved)
                .call_method(expr.name, args),
        },
        Receiver::Resolved(receiver) => receiver.call_method(expr.name, args),
    };

    Ok(wrap_if_statement(mode, result))
}

/// Convert a null-safe method call: `receiver?.name(args)`
///
/// Local bindings are not consulted; an implicit receiver is substituted.
pub fn convert_safe_method_call<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &MethodCallExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let receiver = converter.convert_expr(expr.receiver)?;
    let args = converter.convert_args(expr.args)?;

    let guarded = guard_null(receiver, |receiver| {
        receiver.call_method(expr.name, args)
    });
    Ok(wrap_if_statement(mode, guarded))
}
