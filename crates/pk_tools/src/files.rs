//! Plain-text edits of project files.
//!
//! Every path is relative to the project root. Line-based edits split on
//! `\n` and join back with `\n`, so a trailing newline survives.

use std::fs;
use std::path::{Path, PathBuf};

use regex_lite::Regex;

use crate::ToolError;

/// File operations rooted at a project directory.
#[derive(Clone, Debug)]
pub struct Files {
    root: PathBuf,
}

impl Files {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Files { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn read(&self, relative: &str) -> Result<(PathBuf, String), ToolError> {
        let path = self.path(relative);
        let text = fs::read_to_string(&path).map_err(|err| ToolError::io(&path, err))?;
        Ok((path, text))
    }

    fn write(path: &Path, text: &str) -> Result<(), ToolError> {
        fs::write(path, text).map_err(|err| ToolError::io(path, err))
    }

    /// Rewrite `relative` line by line.
    fn map_lines(
        &self,
        relative: &str,
        mut f: impl FnMut(&str, &mut Vec<String>),
    ) -> Result<(), ToolError> {
        let (path, text) = self.read(relative)?;
        let mut lines = Vec::new();
        for line in text.split('\n') {
            f(line, &mut lines);
        }
        Self::write(&path, &lines.join("\n"))
    }

    /// Copy `from` to `to`, creating the parent directories of `to`.
    pub fn copy(&self, from: &str, to: &str) -> Result<(), ToolError> {
        let source = self.path(from);
        let target = self.path(to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| ToolError::io(parent, err))?;
        }
        fs::copy(&source, &target).map_err(|err| ToolError::io(&source, err))?;
        tracing::debug!(from, to, "copied file");
        Ok(())
    }

    /// Delete files; paths that do not exist are skipped.
    pub fn delete(&self, paths: &[&str]) -> Result<(), ToolError> {
        for relative in paths {
            let path = self.path(relative);
            match fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = relative, "deleted file"),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(ToolError::io(&path, err)),
            }
        }
        Ok(())
    }

    /// Replace every occurrence of `search`.
    pub fn replace_in_file(&self, file: &str, search: &str, replace: &str) -> Result<(), ToolError> {
        let (path, text) = self.read(file)?;
        Self::write(&path, &text.replace(search, replace))
    }

    pub fn delete_lines_containing(&self, file: &str, content: &str) -> Result<(), ToolError> {
        self.map_lines(file, |line, out| {
            if !line.contains(content) {
                out.push(line.to_owned());
            }
        })
    }

    /// Replace each line containing `search` with `replace`, keeping the
    /// line's indentation width.
    pub fn replace_line_in_file(
        &self,
        file: &str,
        search: &str,
        replace: &str,
    ) -> Result<(), ToolError> {
        self.map_lines(file, |line, out| {
            if line.contains(search) {
                out.push(format!("{}{replace}", " ".repeat(indent_width(line))));
            } else {
                out.push(line.to_owned());
            }
        })
    }

    /// Insert `content` after each line containing `search`, at that line's
    /// indentation width.
    pub fn append_after_line(
        &self,
        file: &str,
        search: &str,
        content: &str,
    ) -> Result<(), ToolError> {
        self.map_lines(file, |line, out| {
            out.push(line.to_owned());
            if line.contains(search) {
                out.push(format!("{}{content}", " ".repeat(indent_width(line))));
            }
        })
    }

    pub fn append_to_file(&self, file: &str, content: &str) -> Result<(), ToolError> {
        let (path, mut text) = self.read(file)?;
        text.push_str(content);
        Self::write(&path, &text)
    }

    /// Strip the `//` (and one following space) from line comments that
    /// contain `search`.
    pub fn uncomment(&self, file: &str, search: &str) -> Result<(), ToolError> {
        let comment = Regex::new(r"^(\s*)//\s?(.*)$")?;
        self.map_lines(file, |line, out| {
            let uncommented = line
                .contains(search)
                .then(|| comment.captures(line))
                .flatten()
                .map(|caps| format!("{}{}", &caps[1], &caps[2]));
            out.push(uncommented.unwrap_or_else(|| line.to_owned()));
        })
    }

    /// Remove the `/* @tag */` and `/* @end-tag */` marker lines, keeping
    /// what they enclose.
    pub fn strip_block(&self, file: &str, tag: &str) -> Result<(), ToolError> {
        let markers = BlockMarkers::new(tag)?;
        self.map_lines(file, |line, out| {
            if !markers.start.is_match(line) && !markers.end.is_match(line) {
                out.push(line.to_owned());
            }
        })
    }

    /// Remove tagged blocks, markers and content both. An unterminated block
    /// runs to the end of the file.
    pub fn remove_block(&self, file: &str, tag: &str) -> Result<(), ToolError> {
        let markers = BlockMarkers::new(tag)?;
        let mut inside = false;
        self.map_lines(file, |line, out| {
            if markers.start.is_match(line) {
                inside = true;
            } else if inside && markers.end.is_match(line) {
                inside = false;
            } else if !inside {
                out.push(line.to_owned());
            }
        })
    }

    /// Copy every file under `from` into the project root, keeping relative
    /// paths.
    pub fn publish(&self, from: &str) -> Result<(), ToolError> {
        let source = self.path(from);
        let mut files = Vec::new();
        collect_files(&source, &mut files)?;
        files.sort();
        for file in &files {
            let Ok(relative) = file.strip_prefix(&source) else {
                continue;
            };
            let target = self.root.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|err| ToolError::io(parent, err))?;
            }
            fs::copy(file, &target).map_err(|err| ToolError::io(file, err))?;
        }
        tracing::debug!(from, files = files.len(), "published directory");
        Ok(())
    }
}

/// Width of the leading whitespace.
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ToolError> {
    let entries = fs::read_dir(dir).map_err(|err| ToolError::io(dir, err))?;
    for entry in entries {
        let path = entry.map_err(|err| ToolError::io(dir, err))?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Whole-line `/* @tag */` markers, optionally wrapped in `{...}` for
/// template files.
struct BlockMarkers {
    start: Regex,
    end: Regex,
}

impl BlockMarkers {
    fn new(tag: &str) -> Result<Self, ToolError> {
        let tag = regex_lite::escape(tag);
        Ok(BlockMarkers {
            start: Regex::new(&format!(r"^\s*\{{?/\*\s*@{tag}\s*\*/\}}?\s*$"))?,
            end: Regex::new(&format!(r"^\s*\{{?/\*\s*@end-{tag}\s*\*/\}}?\s*$"))?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
