//! Piecewise rewriting of one node's source text.

use pk_ir::{SourceMap, Span};

use crate::emitter::{Emitter, StringEmitter};

/// Original text of a node with replacements for some of its sub-ranges.
pub(crate) struct Splice<'a> {
    text: &'a str,
    span: Span,
    edits: Vec<(Span, String)>,
}

impl<'a> Splice<'a> {
    pub(crate) fn new(sources: &'a SourceMap, span: Span) -> Self {
        Splice {
            text: sources.text(),
            span,
            edits: Vec::new(),
        }
    }

    pub(crate) fn replace(&mut self, span: Span, text: String) {
        self.edits.push((span, text));
    }

    pub(crate) fn insert(&mut self, at: u32, text: String) {
        self.edits.push((Span::point(at), text));
    }

    pub(crate) fn finish(mut self) -> String {
        // Stable: insertions at one offset keep their order.
        self.edits.sort_by_key(|(span, _)| span.start);

        let mut out = StringEmitter::with_capacity(self.span.len() as usize);
        let mut cursor = self.span.start;
        for (span, text) in &self.edits {
            if span.start < cursor || span.end > self.span.end {
                tracing::warn!(edit = %span, node = %self.span, "dropping overlapping edit");
                continue;
            }
            out.emit(self.slice(cursor, span.start));
            out.emit(text);
            cursor = span.end;
        }
        out.emit(self.slice(cursor, self.span.end));
        out.output()
    }

    fn slice(&self, start: u32, end: u32) -> &'a str {
        self.text.get(start as usize..end as usize).unwrap_or("")
    }
}
