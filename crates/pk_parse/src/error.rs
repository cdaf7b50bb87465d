//! Parse error types.

use pk_ir::{SourceMap, Span, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    #[error("unclosed delimiter {0}")]
    Unclosed(&'static str),
    #[error("mismatched closing delimiter {0}")]
    Mismatched(&'static str),
    #[error("invalid input")]
    InvalidToken,
    #[error("source is larger than 4 GiB")]
    TooLarge,
}

/// A parse failure with the arena span it points at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub(crate) fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.display_name(),
            },
            span,
        )
    }

    pub(crate) fn eof(expected: &'static str, at: u32) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof { expected }, Span::point(at))
    }

    /// `line:column: message`, for reports on the command line.
    pub fn describe(&self, sources: &SourceMap) -> String {
        let (line, column) = sources.line_col(self.span.start);
        format!("{line}:{column}: {}", self.kind)
    }
}
