//! Operator conversion: binary, prefix not and the ternary conditional.

use viewexpr_ast::{BinaryExpr, ConditionalExpr, PrefixNotExpr};
use viewexpr_core::{ConversionError, Mode};
use viewexpr_ir::BinaryOperator;

use super::{ExprConverter, Result};
use crate::Lowered;
use crate::mode::wrap_if_statement;

/// Convert a binary operation: `left op right`
///
/// The operator token is checked before either operand is visited.
pub fn convert_binary<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &BinaryExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let op = BinaryOperator::from_token(expr.op).ok_or_else(|| {
        ConversionError::UnsupportedOperator {
            op: expr.op.to_string(),
            span: expr.span,
        }
    })?;

    let lhs = converter.convert_expr(expr.left)?;
    let rhs = converter.convert_expr(expr.right)?;

    Ok(wrap_if_statement(mode, lhs.binary(op, rhs)))
}

/// Convert a logical negation: `!expr`
pub fn convert_prefix_not<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &PrefixNotExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let operand = converter.convert_expr(expr.expr)?;
    Ok(wrap_if_statement(mode, !operand))
}

/// Convert a ternary conditional: `cond ? a : b`
///
/// Condition, then true branch, then false branch.
pub fn convert_conditional<'ast>(
    converter: &mut ExprConverter<'_>,
    expr: &ConditionalExpr<'ast>,
    mode: Mode,
) -> Result<Lowered> {
    let condition = converter.convert_expr(expr.condition)?;
    let true_case = converter.convert_expr(expr.true_expr)?;
    let false_case = converter.convert_expr(expr.false_expr)?;

    let result = condition.conditional(true_case, false_case);
    Ok(wrap_if_statement(mode, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingResolver;
    use bumpalo::Bump;
    use viewexpr_ast::{AstBuilder, BindingExpr};
    use viewexpr_core::Span;
    use viewexpr_ir::IrExpr;

    fn convert(expr: &BindingExpr<'_>, mode: Mode) -> Result<Lowered> {
        let mut resolver = RecordingResolver::new();
        let ctx = IrExpr::variable("ctx");
        ExprConverter::new(&mut resolver, &ctx, None)
            .convert(expr, mode)
    }

    #[test]
    fn every_supported_token_maps() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let tokens = [
            ("+", BinaryOperator::Plus),
            ("-", BinaryOperator::Minus),
            ("*", BinaryOperator::Multiply),
            ("/", BinaryOperator::Divide),
            ("%", BinaryOperator::Modulo),
            ("&&", BinaryOperator::And),
            ("||", BinaryOperator::Or),
            ("==", BinaryOperator::Equals),
            ("!=", BinaryOperator::NotEquals),
            ("===", BinaryOperator::Identical),
            ("!==", BinaryOperator::NotIdentical),
            ("<", BinaryOperator::Lower),
            (">", BinaryOperator::Bigger),
            ("<=", BinaryOperator::LowerEquals),
            (">=", BinaryOperator::BiggerEquals),
        ];

        for (token, op) in tokens {
            let expr = b.binary(
                token,
                b.int(1, Span::new(0, 1)),
                b.int(2, Span::new(4, 5)),
                Span::new(0, 5),
            );
            let expected = IrExpr::literal(1i64).binary(op, IrExpr::literal(2i64));
            let result = convert(&expr, Mode::Expression);
            assert_eq!(result, Ok(Lowered::Expr(expected)), "token {token}");
        }
    }

    #[test]
    fn unknown_token_fails_before_operands() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        // The right operand is a quote, which would fail if it were visited.
        let expr = b.binary(
            "**",
            b.int(2, Span::new(0, 1)),
            b.quote("q", "x", "loc", Span::new(5, 8)),
            Span::new(0, 8),
        );

        let err = convert(&expr, Mode::Expression).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedOperator {
                op: "**".to_string(),
                span: Span::new(0, 8),
            }
        );
    }

    #[test]
    fn binary_statement_is_wrapped() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.binary(
            "&&",
            b.ident("a", Span::new(0, 1)),
            b.ident("b", Span::new(5, 6)),
            Span::new(0, 6),
        );

        let ctx = IrExpr::variable("ctx");
        let expected = ctx
            .clone()
            .prop("a")
            .binary(BinaryOperator::And, ctx.prop("b"));
        assert_eq!(
            convert(&expr, Mode::Statement),
            Ok(Lowered::Stmt(expected.to_stmt()))
        );
    }

    #[test]
    fn implicit_receiver_operand_is_substituted() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.binary(
            "==",
            b.implicit_receiver(Span::new(0, 0)),
            b.null(Span::new(4, 8)),
            Span::new(0, 8),
        );

        let expected = IrExpr::variable("ctx").equals(IrExpr::null());
        assert_eq!(
            convert(&expr, Mode::Expression),
            Ok(Lowered::Expr(expected))
        );
    }

    #[test]
    fn prefix_not_negates() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.prefix_not(b.ident("hidden", Span::new(1, 7)), Span::new(0, 7));

        let expected = !IrExpr::variable("ctx").prop("hidden");
        assert_eq!(
            convert(&expr, Mode::Expression),
            Ok(Lowered::Expr(expected.clone()))
        );
        assert_eq!(
            convert(&expr, Mode::Statement),
            Ok(Lowered::Stmt(expected.to_stmt()))
        );
    }

    #[test]
    fn conditional_builds_ternary() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.conditional(
            b.ident("ok", Span::new(0, 2)),
            b.string("yes", Span::new(5, 10)),
            b.string("no", Span::new(13, 17)),
            Span::new(0, 17),
        );

        let expected = IrExpr::variable("ctx")
            .prop("ok")
            .conditional(IrExpr::literal("yes"), IrExpr::literal("no"));
        assert_eq!(
            convert(&expr, Mode::Expression),
            Ok(Lowered::Expr(expected))
        );
    }

    #[test]
    fn conditional_branches_reject_chains() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let chain = b.chain(&[b.ident("a", Span::new(6, 7))], Span::new(6, 7));
        let expr = b.conditional(
            b.bool(true, Span::new(0, 4)),
            chain,
            b.null(Span::new(10, 14)),
            Span::new(0, 14),
        );

        let err = convert(&expr, Mode::Statement).unwrap_err();
        assert_eq!(
            err,
            ConversionError::ModeViolation {
                kind: viewexpr_core::NodeKind::Chain,
                required: Mode::Statement,
                span: Span::new(6, 7),
            }
        );
    }
}
