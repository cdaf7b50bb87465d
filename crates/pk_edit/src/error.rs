use std::path::PathBuf;

use pk_parse::ParseError;
use thiserror::Error;

/// Why a queue of edits could not be applied. The target file is left
/// untouched in every case.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("cannot access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// A precondition found no construct to edit.
    #[error("{0}")]
    MissingDeclaration(&'static str),
    #[error("{0}")]
    InvalidMethod(&'static str),
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
}

impl EditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditError::Io {
            path: path.into(),
            source,
        }
    }
}
