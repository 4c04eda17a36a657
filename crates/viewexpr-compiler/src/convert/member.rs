//! Member access conversion: property and keyed reads and writes.

use viewexpr_ast::{KeyedReadExpr, KeyedWriteExpr, PropertyReadExpr, PropertyWriteExpr};
use viewexpr_core::{ConversionError, Mode};

use super::{ExprConverter, Result, guard_null};
use crate::mode::wrap_if_statement;
use crate::{Lowered, Receiver};

/// Convert a property read: `receiver.name` or a bare `name`
///
/// A bare name bound as a local evaluates to the bound value.
pub fn convert_property_read<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &PropertyReadExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let receiver = converter.convert_receiver(expr.receiver)?;

    let result = match receiver {
        Receiver::Unresolved => match converter.resolver().lookup_local(expr.name) {
            Some(local) => local,
            None => converter
                .resolve_receiver(Receiver::Unresolved)
                .prop(expr.name),
        },
        Receiver::Resolved(receiver) => receiver.prop(expr.name),
    };

    Ok(wrap_if_statement(mode, result))
}

/// Convert a property write: `receiver.name = value`
///
/// Assigning to a bare name bound as a local is an error.
pub fn convert_property_write<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &PropertyWriteExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let receiver = match converter.convert_receiver(expr.receiver)? {
        Receiver::Unresolved => {
            if converter.resolver().lookup_local(expr.name).is_some() {
                return Err(ConversionError::IllegalReassignment {
                    name: expr.name.to_string(),
                    span: expr.span,
                });
            }
            converter.resolve_receiver(Receiver::Unresolved)
        }
        Receiver::Resolved(receiver) => receiver,
    };

    let value = converter.convert_expr(expr.value)?;
    Ok(wrap_if_statement(mode, receiver.set_prop(expr.name, value)))
}

/// Convert a null-safe property read: `receiver?.name`
pub fn convert_safe_property_read<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &PropertyReadExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let receiver = converter.convert_expr(expr.receiver)?;
    let guarded = guard_null(receiver, |receiver| receiver.prop(expr.name));
    Ok(wrap_if_statement(mode, guarded))
}

/// Convert a keyed read: `object[key]`
pub fn convert_keyed_read<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &KeyedReadExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let object = converter.convert_expr(expr.object)?;
    let key = converter.convert_expr(expr.key)?;
    Ok(wrap_if_statement(mode, object.key(key)))
}

/// Convert a keyed write: `object[key] = value`
pub fn convert_keyed_write<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &KeyedWriteExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let object = converter.convert_expr(expr.object)?;
    let key = converter.convert_expr(expr.key)?;
    let value = converter.convert_expr(expr.value)?;
    Ok(wrap_if_statement(mode, object.set_key(key, value)))
}
