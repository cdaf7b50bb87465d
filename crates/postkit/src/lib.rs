//! postkit CLI library: command handlers and logging setup for the
//! `postkit` binary.

use std::path::PathBuf;
use std::sync::Once;

use pk_edit::EditError;
use pk_tools::ToolError;
use thiserror::Error;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Call once at startup; later calls do
/// nothing. Logging stays off unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=pk_edit=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line; the message says what was expected.
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Parse error already placed at a line and column.
    #[error("{path}:{message}")]
    Parse { path: String, message: String },
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Tool(#[from] ToolError),
}
