//! Output Emitter
//!
//! Sink for printed source text. The printer mostly copies slices of the
//! original source, so the emitter only has to append.

/// Trait for emitting printed output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a line break in the style of the file being printed.
    fn emit_newline(&mut self);

    /// Emit an indentation string taken from the surrounding source.
    fn emit_indent(&mut self, indent: &str);
}

/// String-based emitter for in-memory printing.
pub struct StringEmitter {
    buffer: String,
    newline: &'static str,
}

impl Default for StringEmitter {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            newline: "\n",
        }
    }
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Emitter whose line breaks are `newline` (`"\n"` or `"\r\n"`).
    pub fn with_newline(newline: &'static str) -> Self {
        Self {
            newline,
            ..Self::default()
        }
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push_str(self.newline);
    }

    fn emit_indent(&mut self, indent: &str) {
        self.buffer.push_str(indent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_emitter_appends() {
        let mut out = StringEmitter::new();
        assert!(out.is_empty());
        out.emit("{");
        out.emit_newline();
        out.emit_indent("    ");
        out.emit("use A;");
        assert_eq!(out.as_str(), "{\n    use A;");
        assert_eq!(out.len(), 12);
        assert_eq!(out.output(), "{\n    use A;");
    }

    #[test]
    fn crlf_emitter_breaks_lines_with_crlf() {
        let mut out = StringEmitter::with_newline("\r\n");
        out.emit("{");
        out.emit_newline();
        out.emit("}");
        assert_eq!(out.output(), "{\r\n}");
    }
}
