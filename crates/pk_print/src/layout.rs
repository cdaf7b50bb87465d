//! Layout of statement, member and comma-separated lists.
//!
//! A list is printed from the trivia of its reference elements: each
//! reference element owns the whitespace before it (its lead) and any text
//! left on its last line (its trail). Kept elements reuse those pieces,
//! removed elements drop them, and inserted elements borrow the list's
//! indentation.

use pk_ir::Span;

use crate::emitter::{Emitter, StringEmitter};

/// Spacing class of a line-list element.
///
/// Inserted elements are separated from their neighbours by a single line
/// break inside one group and by a blank line otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Group(u8),
    /// Classes, namespaces and methods always stand apart.
    Block,
}

impl Slot {
    fn emit_separator(self, next: Slot, indent: &str, out: &mut impl Emitter) {
        out.emit_newline();
        if self != next || self == Slot::Block || next == Slot::Block {
            out.emit_newline();
        }
        out.emit_indent(indent);
    }
}

/// One element of a printed line list.
pub(crate) struct LineEntry {
    /// Index of the reference element this entry stands for.
    pub kept: Option<usize>,
    pub slot: Slot,
    pub text: String,
}

pub(crate) struct LineLayout<'a> {
    leads: Vec<&'a str>,
    trails: Vec<&'a str>,
    tail: &'a str,
    indent: String,
    newline: &'static str,
}

impl<'a> LineLayout<'a> {
    /// Layout of the elements at `spans` inside `region` of `text`.
    pub(crate) fn new(text: &'a str, region: Span, spans: &[Span], default_indent: &str) -> Self {
        let slice = |start: u32, end: u32| text.get(start as usize..end as usize).unwrap_or("");

        let mut leads = Vec::with_capacity(spans.len());
        let mut trails = Vec::with_capacity(spans.len());
        let mut cursor = region.start;
        for span in spans {
            let gap = slice(cursor, span.start);
            if leads.is_empty() {
                leads.push(gap);
            } else {
                let (trail, lead) = split_trail(gap);
                trails.push(trail);
                leads.push(lead);
            }
            cursor = span.end;
        }
        let rest = slice(cursor, region.end);
        let tail = if spans.is_empty() {
            rest
        } else {
            let (trail, tail) = split_trail(rest);
            trails.push(trail);
            tail
        };

        let indent = leads
            .iter()
            .find_map(|lead| lead.rfind('\n').map(|i| &lead[i + 1..]))
            .filter(|indent| indent.bytes().all(|b| b == b' ' || b == b'\t'))
            .map_or_else(|| default_indent.to_owned(), str::to_owned);

        LineLayout {
            leads,
            trails,
            tail,
            indent,
            newline: "\n",
        }
    }

    /// Break inserted lines with `newline` instead of `\n`.
    pub(crate) fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    /// Indentation of the list's elements.
    pub(crate) fn indent(&self) -> &str {
        &self.indent
    }

    /// Print `entries`; `parent_indent` closes a list that had no elements.
    pub(crate) fn render(&self, entries: &[LineEntry], parent_indent: &str) -> String {
        let mut out = StringEmitter::with_newline(self.newline);
        if self.leads.is_empty() {
            if entries.is_empty() {
                return self.tail.to_owned();
            }
            out.emit(self.tail.trim_end());
            let mut prev: Option<Slot> = None;
            for entry in entries {
                match prev {
                    Some(slot) => slot.emit_separator(entry.slot, &self.indent, &mut out),
                    None => {
                        out.emit_newline();
                        out.emit_indent(&self.indent);
                    }
                }
                out.emit(&entry.text);
                prev = Some(entry.slot);
            }
            out.emit_newline();
            out.emit_indent(parent_indent);
            return out.output();
        }

        let mut prev: Option<&LineEntry> = None;
        for entry in entries {
            match (prev, entry.kept) {
                (None, _) => out.emit(self.leads[0]),
                (Some(LineEntry { kept: Some(_), .. }), Some(index)) => out.emit(self.leads[index]),
                (Some(before), _) => before
                    .slot
                    .emit_separator(entry.slot, &self.indent, &mut out),
            }
            out.emit(&entry.text);
            if let Some(index) = entry.kept {
                out.emit(self.trails[index]);
            }
            prev = Some(entry);
        }
        out.emit(self.tail);
        out.output()
    }
}

/// Split the text between two elements at its first line break: what comes
/// before stays on the first element's line. A `\r\n` break goes whole to
/// the second half.
fn split_trail(gap: &str) -> (&str, &str) {
    match gap.find('\n') {
        Some(i) => gap.split_at(gap[..i].strip_suffix('\r').map_or(i, str::len)),
        None => ("", gap),
    }
}

/// Layout of a comma-separated list such as `A, B` or a stacked array body.
pub(crate) struct CommaLayout<'a> {
    count: usize,
    head: &'a str,
    separators: Vec<&'a str>,
    end: &'a str,
    /// Indentation of a list that puts one element per line.
    stacked: Option<&'a str>,
    newline: &'static str,
}

impl<'a> CommaLayout<'a> {
    pub(crate) fn new(text: &'a str, region: Span, spans: &[Span]) -> Self {
        let slice = |start: u32, end: u32| text.get(start as usize..end as usize).unwrap_or("");

        let head = spans
            .first()
            .map_or_else(|| slice(region.start, region.end), |first| slice(region.start, first.start));
        let separators: Vec<&str> = spans
            .windows(2)
            .map(|pair| slice(pair[0].end, pair[1].start))
            .collect();
        let end = spans.last().map_or("", |last| slice(last.end, region.end));

        let stacked = separators
            .iter()
            .chain(std::iter::once(&head))
            .find_map(|gap| gap.rfind('\n').map(|i| &gap[i + 1..]));

        CommaLayout {
            count: spans.len(),
            head,
            separators,
            end,
            stacked,
            newline: "\n",
        }
    }

    /// Break stacked insertions with `newline` instead of `\n`.
    pub(crate) fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    /// Print `entries`, each the index of the reference element it keeps and
    /// its text.
    pub(crate) fn render(&self, entries: &[(Option<usize>, String)]) -> String {
        let mut out = StringEmitter::with_newline(self.newline);
        if entries.is_empty() {
            return String::new();
        }
        if self.count == 0 {
            for (i, (_, text)) in entries.iter().enumerate() {
                if i > 0 {
                    out.emit(", ");
                }
                out.emit(text);
            }
            return out.output();
        }

        out.emit(self.head);
        let mut prev: Option<Option<usize>> = None;
        for (kept, text) in entries {
            if let Some(before) = prev {
                match (before, *kept) {
                    (Some(a), Some(b)) if b == a + 1 => out.emit(self.separators[a]),
                    (_, Some(b)) if b > 0 => {
                        let sep = self.separators[b - 1];
                        out.emit(",");
                        out.emit(sep.find(',').map_or(" ", |i| &sep[i + 1..]));
                    }
                    _ => self.emit_fresh_separator(&mut out),
                }
            }
            out.emit(text);
            prev = Some(*kept);
        }
        out.emit(self.end);
        out.output()
    }

    fn emit_fresh_separator(&self, out: &mut impl Emitter) {
        out.emit(",");
        match self.stacked {
            Some(indent) => {
                out.emit_newline();
                out.emit_indent(indent);
            }
            None => out.emit(" "),
        }
    }
}

/// Leading whitespace of the line holding `offset`.
pub(crate) fn line_indent(text: &str, offset: u32) -> &str {
    let offset = (offset as usize).min(text.len());
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[start..];
    let width = line
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    &line[..width]
}

/// Line break of `text`: `\r\n` when its first line ends that way.
pub(crate) fn newline_style(text: &str) -> &'static str {
    match text.find('\n') {
        Some(i) if text[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Move `text`, whose first line is already placed, from indentation `from`
/// to indentation `to`, breaking lines with `newline`. Blank lines stay
/// empty.
pub(crate) fn reindent(text: &str, from: &str, to: &str, newline: &'static str) -> String {
    let mut out = StringEmitter::with_newline(newline);
    for (i, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if i == 0 {
            out.emit(line);
            continue;
        }
        out.emit_newline();
        if line.trim().is_empty() {
            continue;
        }
        out.emit_indent(to);
        out.emit(line.strip_prefix(from).unwrap_or_else(|| line.trim_start()));
    }
    out.output()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
