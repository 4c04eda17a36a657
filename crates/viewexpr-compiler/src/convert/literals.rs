//! Literal conversion: primitives, collections and text interpolation.

use viewexpr_ast::{
    InterpolationExpr, LiteralArrayExpr, LiteralMapExpr, LiteralPrimitiveExpr, Primitive,
};
use viewexpr_core::{ConversionError, Mode};
use viewexpr_ir::{ExternalRef, IrExpr};

use super::{ExprConverter, Result};
use crate::Lowered;
use crate::mode::wrap_if_statement;

/// Runtime module exporting the interpolation helper.
pub const INTERPOLATE_MODULE: &str = "view_utils";

/// Name of the interpolation helper.
pub const INTERPOLATE_NAME: &str = "interpolate";

/// Reference to the runtime interpolation helper.
pub fn interpolate_helper() -> ExternalRef {
    ExternalRef::new(INTERPOLATE_MODULE, INTERPOLATE_NAME)
}

/// Convert a constant. Never consults the resolver.
pub fn convert_primitive(expr: &LiteralPrimitiveExpr<'_>, mode: Mode) -> Lowered {
    let value = match expr.value {
        Primitive::Null => IrExpr::null(),
        Primitive::Bool(value) => IrExpr::literal(value),
        Primitive::Int(value) => IrExpr::literal(value),
        Primitive::Float(value) => IrExpr::literal(value),
        Primitive::String(value) => IrExpr::literal(value),
    };
    wrap_if_statement(mode, value)
}

/// Convert an array literal: `[a, b, c]`
///
/// Elements are visited in the caller's mode and unwrapped back into
/// expressions before the resolver builds the array.
pub fn convert_literal_array<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &LiteralArrayExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let mut elements = Vec::with_capacity(expr.expressions.len());
    for element in expr.expressions {
        let lowered = converter.convert(element, mode)?;
        elements.push(converter.expression_value(lowered, element)?);
    }

    let array = converter.resolver().build_literal_array(elements);
    Ok(wrap_if_statement(mode, array))
}

/// Convert a map literal: `{key: value}`, keeping entry order.
pub fn convert_literal_map<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &LiteralMapExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let mut entries = Vec::with_capacity(expr.entries.len());
    for entry in expr.entries {
        let value = converter.convert_expr(&entry.value)?;
        entries.push((entry.key.to_string(), value));
    }

    let map = converter.resolver().build_literal_map(entries);
    Ok(wrap_if_statement(mode, map))
}

/// Convert a text interpolation into a call of the runtime helper.
///
/// The arguments are the expression count followed by the string parts
/// interleaved with the converted expressions:
/// `interpolate(n, s0, e0, s1, e1, ..., sn)`.
pub fn convert_interpolation<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &InterpolationExpr<'ast>,
) -> Result<Lowered> {
    let count = expr.expressions.len();
    if expr.strings.len() != count + 1 {
        return Err(ConversionError::MalformedInterpolation {
            strings: expr.strings.len(),
            expressions: count,
            span: expr.span,
        });
    }

    let mut args = Vec::with_capacity(2 * count + 2);
    args.push(IrExpr::literal(count as i64));
    for (text, embedded) in expr.strings.iter().zip(expr.expressions) {
        args.push(IrExpr::literal(*text));
        args.push(converter.convert_expr(embedded)?);
    }
    if let Some(last) = expr.strings.last() {
        args.push(IrExpr::literal(*last));
    }

    let helper = IrExpr::external(interpolate_helper());
    Ok(Lowered::Expr(helper.call_fn(args)))
}
