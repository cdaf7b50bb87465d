use std::fs;
use std::path::{Path, PathBuf};

use crate::ToolError;

/// The project's `.env` file.
#[derive(Clone, Debug)]
pub struct Env {
    path: PathBuf,
}

impl Env {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Env {
            path: root.as_ref().join(".env"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `key` on every `KEY=` line, or append `\nKEY=value` when there
    /// is none.
    pub fn set(&self, key: &str, value: &str) -> Result<(), ToolError> {
        let text = fs::read_to_string(&self.path).map_err(|err| ToolError::io(&self.path, err))?;
        let text = set_line(&text, key, value);
        fs::write(&self.path, text).map_err(|err| ToolError::io(&self.path, err))?;
        tracing::debug!(key, "set environment value");
        Ok(())
    }
}

fn set_line(text: &str, key: &str, value: &str) -> String {
    let prefix = format!("{key}=");
    let line = format!("{key}={value}");
    let mut found = false;
    let lines: Vec<&str> = text
        .split('\n')
        .map(|current| {
            if current.starts_with(&prefix) {
                found = true;
                line.as_str()
            } else {
                current
            }
        })
        .collect();
    if found {
        lines.join("\n")
    } else {
        format!("{text}\n{line}")
    }
}
