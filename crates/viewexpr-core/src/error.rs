//! Errors raised while lowering binding expressions.
//!
//! Every fault is a build-time error: it aborts the current conversion and
//! is handed back to the pipeline stage that invoked the lowering. There is
//! no local recovery. Each variant carries the [`Span`] of the offending
//! node so the caller can point at the template source.

use thiserror::Error;

use crate::{Mode, NodeKind, Span};

/// Errors that occur while converting a binding AST into IR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A node was visited under a mode it does not support.
    #[error("at {span}: expected {required}, but saw {kind}")]
    ModeViolation {
        /// Kind of the offending node.
        kind: NodeKind,
        /// The mode the node requires.
        required: Mode,
        /// Where the node appears.
        span: Span,
    },

    /// A binary node used a token outside the supported operator set.
    #[error("at {span}: unsupported operation '{op}'")]
    UnsupportedOperator {
        /// The operator token as written.
        op: String,
        /// Where the binary expression appears.
        span: Span,
    },

    /// A property write targeted a name bound as a local variable.
    #[error("at {span}: cannot reassign variable binding '{name}'")]
    IllegalReassignment {
        /// The local variable name.
        name: String,
        /// Where the write appears.
        span: Span,
    },

    /// A node kind that can never be evaluated.
    #[error("at {span}: {kind} cannot be evaluated")]
    UnsupportedConstruct {
        /// Kind of the offending node.
        kind: NodeKind,
        /// Where the node appears.
        span: Span,
    },

    /// An interpolation whose string parts do not surround its expressions.
    #[error(
        "at {span}: interpolation has {strings} string parts for {expressions} expressions"
    )]
    MalformedInterpolation {
        /// Number of literal string parts.
        strings: usize,
        /// Number of embedded expressions.
        expressions: usize,
        /// Where the interpolation appears.
        span: Span,
    },

    /// A pipe was used where no value unwrapper is available.
    #[error("at {span}: pipe '{name}' cannot be used in a statement binding")]
    PipeWithoutUnwrapper {
        /// The pipe name.
        name: String,
        /// Where the pipe appears.
        span: Span,
    },
}

impl ConversionError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            ConversionError::ModeViolation { span, .. } => *span,
            ConversionError::UnsupportedOperator { span, .. } => *span,
            ConversionError::IllegalReassignment { span, .. } => *span,
            ConversionError::UnsupportedConstruct { span, .. } => *span,
            ConversionError::MalformedInterpolation { span, .. } => *span,
            ConversionError::PipeWithoutUnwrapper { span, .. } => *span,
        }
    }

    /// Kind of the node that caused this error.
    pub fn kind(&self) -> NodeKind {
        match self {
            ConversionError::ModeViolation { kind, .. } => *kind,
            ConversionError::UnsupportedOperator { .. } => NodeKind::Binary,
            ConversionError::IllegalReassignment { .. } => NodeKind::PropertyWrite,
            ConversionError::UnsupportedConstruct { kind, .. } => *kind,
            ConversionError::MalformedInterpolation { .. } => NodeKind::Interpolation,
            ConversionError::PipeWithoutUnwrapper { .. } => NodeKind::Pipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_violation_display() {
        let err = ConversionError::ModeViolation {
            kind: NodeKind::Chain,
            required: Mode::Statement,
            span: Span::new(0, 7),
        };
        assert_eq!(
            format!("{err}"),
            "at 0..7: expected a statement, but saw expression chain"
        );
    }

    #[test]
    fn unsupported_operator_display() {
        let err = ConversionError::UnsupportedOperator {
            op: "**".to_string(),
            span: Span::new(2, 4),
        };
        assert_eq!(format!("{err}"), "at 2..4: unsupported operation '**'");
        assert_eq!(err.kind(), NodeKind::Binary);
    }

    #[test]
    fn reassignment_display() {
        let err = ConversionError::IllegalReassignment {
            name: "item".to_string(),
            span: Span::new(0, 10),
        };
        assert_eq!(
            format!("{err}"),
            "at 0..10: cannot reassign variable binding 'item'"
        );
    }

    #[test]
    fn quote_display() {
        let err = ConversionError::UnsupportedConstruct {
            kind: NodeKind::Quote,
            span: Span::new(0, 12),
        };
        assert_eq!(format!("{err}"), "at 0..12: quote cannot be evaluated");
    }

    #[test]
    fn span_accessor() {
        let span = Span::new(5, 9);
        let err = ConversionError::PipeWithoutUnwrapper {
            name: "async".to_string(),
            span,
        };
        assert_eq!(err.span(), span);
        assert_eq!(err.kind(), NodeKind::Pipe);
    }
}
