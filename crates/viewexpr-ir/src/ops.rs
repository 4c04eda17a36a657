//! Binary operators of the output IR.

use std::fmt;

/// Binary operators understood by the code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `===`
    Identical,
    /// `!==`
    NotIdentical,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// `%`
    Modulo,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<`
    Lower,
    /// `<=`
    LowerEquals,
    /// `>`
    Bigger,
    /// `>=`
    BiggerEquals,
}

impl BinaryOperator {
    /// Map a binding-language operator token to an IR operator.
    ///
    /// Returns `None` for tokens outside the supported set.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "+" => BinaryOperator::Plus,
            "-" => BinaryOperator::Minus,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            "&&" => BinaryOperator::And,
            "||" => BinaryOperator::Or,
            "==" => BinaryOperator::Equals,
            "!=" => BinaryOperator::NotEquals,
            "===" => BinaryOperator::Identical,
            "!==" => BinaryOperator::NotIdentical,
            "<" => BinaryOperator::Lower,
            ">" => BinaryOperator::Bigger,
            "<=" => BinaryOperator::LowerEquals,
            ">=" => BinaryOperator::BiggerEquals,
            _ => return None,
        })
    }

    /// The operator's source token.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Identical => "===",
            BinaryOperator::NotIdentical => "!==",
            BinaryOperator::Minus => "-",
            BinaryOperator::Plus => "+",
            BinaryOperator::Divide => "/",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Modulo => "%",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Lower => "<",
            BinaryOperator::LowerEquals => "<=",
            BinaryOperator::Bigger => ">",
            BinaryOperator::BiggerEquals => ">=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
