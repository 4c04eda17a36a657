//! IR expressions.
//!
//! [`IrExpr`] is an owned tree handed to the code generator. The builder
//! methods mirror how generated code reads: `receiver.prop("x")`,
//! `callee.call_fn(args)`, `cond.conditional(a, b)`.

use std::ops::Not;

use ordered_float::OrderedFloat;

use crate::{BinaryOperator, IrStmt};

/// A constant value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    String(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(OrderedFloat(value))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

/// A symbol exported by a runtime module, referenced by generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalRef {
    /// Module the symbol is imported from.
    pub module: String,
    /// Exported name.
    pub name: String,
}

impl ExternalRef {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

/// A value-producing IR construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IrExpr {
    /// Constant
    Literal(Literal),
    /// Reference to a variable in generated scope
    Variable(String),
    /// Reference to a runtime export
    External(ExternalRef),
    /// `receiver.name`
    ReadProp {
        receiver: Box<IrExpr>,
        name: String,
    },
    /// `receiver[index]`
    ReadKey {
        receiver: Box<IrExpr>,
        index: Box<IrExpr>,
    },
    /// `receiver.name = value`
    WriteProp {
        receiver: Box<IrExpr>,
        name: String,
        value: Box<IrExpr>,
    },
    /// `receiver[index] = value`
    WriteKey {
        receiver: Box<IrExpr>,
        index: Box<IrExpr>,
        value: Box<IrExpr>,
    },
    /// `receiver.name(args)`
    InvokeMethod {
        receiver: Box<IrExpr>,
        name: String,
        args: Vec<IrExpr>,
    },
    /// `callee(args)`
    InvokeFunction {
        callee: Box<IrExpr>,
        args: Vec<IrExpr>,
    },
    /// `lhs op rhs`
    Binary {
        op: BinaryOperator,
        lhs: Box<IrExpr>,
        rhs: Box<IrExpr>,
    },
    /// `!expr`
    Not(Box<IrExpr>),
    /// `condition ? true_case : false_case`
    Conditional {
        condition: Box<IrExpr>,
        true_case: Box<IrExpr>,
        false_case: Box<IrExpr>,
    },
    /// `[a, b]`
    LiteralArray(Vec<IrExpr>),
    /// `{key: value}`, entries in insertion order
    LiteralMap(Vec<(String, IrExpr)>),
}

impl IrExpr {
    /// The null constant.
    #[inline]
    pub fn null() -> Self {
        IrExpr::Literal(Literal::Null)
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        IrExpr::Literal(value.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        IrExpr::Variable(name.into())
    }

    pub fn external(reference: ExternalRef) -> Self {
        IrExpr::External(reference)
    }

    pub fn array(elements: Vec<IrExpr>) -> Self {
        IrExpr::LiteralArray(elements)
    }

    pub fn map(entries: Vec<(String, IrExpr)>) -> Self {
        IrExpr::LiteralMap(entries)
    }

    pub fn prop(self, name: impl Into<String>) -> Self {
        IrExpr::ReadProp {
            receiver: Box::new(self),
            name: name.into(),
        }
    }

    pub fn key(self, index: IrExpr) -> Self {
        IrExpr::ReadKey {
            receiver: Box::new(self),
            index: Box::new(index),
        }
    }

    pub fn set_prop(self, name: impl Into<String>, value: IrExpr) -> Self {
        IrExpr::WriteProp {
            receiver: Box::new(self),
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn set_key(self, index: IrExpr, value: IrExpr) -> Self {
        IrExpr::WriteKey {
            receiver: Box::new(self),
            index: Box::new(index),
            value: Box::new(value),
        }
    }

    pub fn call_method(self, name: impl Into<String>, args: Vec<IrExpr>) -> Self {
        IrExpr::InvokeMethod {
            receiver: Box::new(self),
            name: name.into(),
            args,
        }
    }

    pub fn call_fn(self, args: Vec<IrExpr>) -> Self {
        IrExpr::InvokeFunction {
            callee: Box::new(self),
            args,
        }
    }

    pub fn binary(self, op: BinaryOperator, rhs: IrExpr) -> Self {
        IrExpr::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    pub fn equals(self, rhs: IrExpr) -> Self {
        self.binary(BinaryOperator::Equals, rhs)
    }

    /// `self == null`
    pub fn is_blank(self) -> Self {
        self.equals(IrExpr::null())
    }

    pub fn conditional(self, true_case: IrExpr, false_case: IrExpr) -> Self {
        IrExpr::Conditional {
            condition: Box::new(self),
            true_case: Box::new(true_case),
            false_case: Box::new(false_case),
        }
    }

    /// Promote to a statement evaluated for its side effects.
    pub fn to_stmt(self) -> IrStmt {
        IrStmt::Expression(self)
    }
}

impl Not for IrExpr {
    type Output = IrExpr;

    fn not(self) -> IrExpr {
        IrExpr::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_nest_receivers() {
        let expr = IrExpr::variable("ctx")
            .prop("user")
            .call_method("greet", vec![IrExpr::literal("hi")]);

        let expected = IrExpr::InvokeMethod {
            receiver: Box::new(IrExpr::ReadProp {
                receiver: Box::new(IrExpr::Variable("ctx".into())),
                name: "user".into(),
            }),
            name: "greet".into(),
            args: vec![IrExpr::Literal(Literal::String("hi".into()))],
        };
        assert_eq!(expr, expected);
    }

    #[test]
    fn is_blank_compares_with_null() {
        let expr = IrExpr::variable("a").is_blank();
        match expr {
            IrExpr::Binary { op, lhs, rhs } => {
                assert_eq!(op, BinaryOperator::Equals);
                assert_eq!(*lhs, IrExpr::variable("a"));
                assert_eq!(*rhs, IrExpr::null());
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn not_operator_wraps() {
        let expr = !IrExpr::literal(true);
        let expected = IrExpr::Not(Box::new(IrExpr::Literal(Literal::Bool(true))));
        assert_eq!(expr, expected);
    }

    #[test]
    fn float_literals_are_hashable() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(IrExpr::literal(1.5));
        set.insert(IrExpr::literal(1.5));
        assert_eq!(set.len(), 1);
    }
}
