//! Append-only text arena shared by every parse of one edit session.
//!
//! The target file is always the first source, so its spans are plain byte
//! offsets into the file. Method snippets parsed by a mutation are appended
//! after it; their nodes keep arena spans, which lets the printer copy their
//! original text.

use rustc_hash::FxHashMap;

use crate::{Member, NodeId, Span, SpanError, TokenList};

/// One source appended to the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRange {
    /// Arena span of the source text.
    pub span: Span,
    /// Index of the source's first token in [`SourceMap::tokens`].
    pub first_token: usize,
    /// One past the source's last token.
    pub end_token: usize,
}

#[derive(Default)]
pub struct SourceMap {
    text: String,
    tokens: TokenList,
    sources: Vec<SourceRange>,
    next_id: u32,
    fragments: FxHashMap<NodeId, Member>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and its tokens (spans relative to `text`).
    pub fn push_source(&mut self, text: &str, tokens: &TokenList) -> Result<SourceRange, SpanError> {
        let span = Span::try_from_range(self.text.len()..self.text.len() + text.len())?;
        let first_token = self.tokens.len();
        self.text.push_str(text);
        self.tokens.extend_shifted(tokens, span.start);
        let range = SourceRange {
            span,
            first_token,
            end_token: self.tokens.len(),
        };
        self.sources.push(range);
        Ok(range)
    }

    /// The whole arena.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Arena text under `span`; empty for spans outside the arena.
    #[inline]
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn sources(&self) -> &[SourceRange] {
        &self.sources
    }

    /// First id not yet handed out.
    #[inline]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Record ids up to (not including) `next` as allocated.
    pub fn reserve_ids(&mut self, next: u32) {
        self.next_id = self.next_id.max(next);
    }

    /// Keep a parsed snippet member as the reference copy for printing.
    ///
    /// Members without an origin are ignored: they have no text to copy.
    pub fn register_fragment(&mut self, member: Member) {
        if let Some(id) = crate::Node::origin(&member) {
            self.fragments.insert(id, member);
        }
    }

    pub fn fragment(&self, id: NodeId) -> Option<&Member> {
        self.fragments.get(&id)
    }

    /// 1-based line and column of an arena offset.
    pub fn line_col(&self, offset: u32) -> (usize, usize) {
        let offset = (offset as usize).min(self.text.len());
        let before = &self.text.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = before.iter().rev().take_while(|&&b| b != b'\n').count() + 1;
        (line, column)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
