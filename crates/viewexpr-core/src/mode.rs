//! Evaluation mode threaded through lowering.

use std::fmt;

/// Whether a node is being lowered for its value or for its side effects.
///
/// The mode is passed down on every recursive call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The result is discarded; expression-shaped nodes become statements.
    Statement,
    /// The result is used as a value and must be a pure expression.
    Expression,
}

impl Mode {
    /// Returns true for [`Mode::Statement`].
    #[inline]
    pub fn is_statement(self) -> bool {
        matches!(self, Mode::Statement)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Statement => write!(f, "a statement"),
            Mode::Expression => write!(f, "an expression"),
        }
    }
}
