use std::path::PathBuf;

use pk_edit::EditError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("cannot access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("invalid answers file `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The child ran and exited unsuccessfully. `code` is `None` when it was
    /// killed by a signal.
    #[error("`{command}` failed{}", code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    Command { command: String, code: Option<i32> },
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
    #[error("unknown {tool} command `{command}`")]
    UnknownCommand { tool: &'static str, command: String },
}

impl ToolError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }
}
