//! Format-preserving printer.
//!
//! [`print`] walks a working tree against the reference tree it was cloned
//! from:
//!
//! - a node equal to its reference counterpart prints as its original text;
//! - a changed node prints as its original text with the changed child
//!   regions replaced;
//! - a node without a counterpart is printed fresh, or copied from its own
//!   source text when it was parsed from a snippet.
//!
//! Counterparts are found through node origins, so text outside the edited
//! regions comes out byte-for-byte as it went in.

mod emitter;
mod fresh;
mod layout;
mod nodes;
mod splice;

use pk_ir::{File, Node, SourceMap, Span};

use crate::layout::{CommaLayout, LineEntry, LineLayout, Slot};
use crate::splice::Splice;

pub use emitter::{Emitter, StringEmitter};

/// Print `working` as source text, reusing the text of `reference` wherever
/// the two trees agree.
pub fn print(working: &File, reference: &File, sources: &SourceMap) -> String {
    let printer = Printer {
        sources,
        newline: layout::newline_style(sources.slice(reference.span)),
    };
    let text = printer.file(working, reference);
    tracing::debug!(
        bytes = text.len(),
        changed = working != reference,
        "printed file"
    );
    text
}

pub(crate) struct Printer<'a> {
    sources: &'a SourceMap,
    /// Line break style of the file being printed.
    newline: &'static str,
}

/// Element of a line-based list: statements, class members, method body
/// statements.
pub(crate) trait Line: Node + PartialEq {
    fn slot(&self) -> Slot;

    /// Print against a reference counterpart that differs from `self`.
    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String;

    /// Print an element that has no counterpart in the list, placed at
    /// `indent`.
    fn inserted(&self, printer: &Printer<'_>, indent: &str) -> String;
}

/// Element of a comma-separated list.
pub(crate) trait Item: Node + PartialEq {
    /// Print against a reference counterpart that differs from `self`.
    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String;

    /// Print an element built by a mutation.
    fn fresh(&self, printer: &Printer<'_>) -> String;
}

impl<'a> Printer<'a> {
    #[inline]
    fn text(&self) -> &'a str {
        self.sources.text()
    }

    #[inline]
    fn slice(&self, span: Span) -> &'a str {
        self.sources.slice(span)
    }

    fn file(&self, working: &File, reference: &File) -> String {
        if working == reference {
            return self.slice(reference.span).to_owned();
        }
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.body,
            self.line_list(reference.body, &working.stmts, &reference.stmts, "", ""),
        );
        splice.finish()
    }

    /// Print `working` over the region `reference` occupies.
    ///
    /// `default_indent` places elements when the reference list is empty;
    /// `parent_indent` then goes before the region's closing delimiter.
    fn line_list<T: Line>(
        &self,
        region: Span,
        working: &[T],
        reference: &[T],
        parent_indent: &str,
        default_indent: &str,
    ) -> String {
        let spans: Vec<Span> = reference.iter().map(Node::span).collect();
        let layout = LineLayout::new(self.text(), region, &spans, default_indent)
            .with_newline(self.newline);
        let entries: Vec<LineEntry> = working
            .iter()
            .map(|node| {
                let kept = counterpart(reference, node);
                let text = match kept {
                    Some(index) if *node == reference[index] => self.slice(node.span()).to_owned(),
                    Some(index) => node.changed(&reference[index], self),
                    None => node.inserted(self, layout.indent()),
                };
                LineEntry {
                    kept,
                    slot: node.slot(),
                    text,
                }
            })
            .collect();
        layout.render(&entries, parent_indent)
    }

    fn comma_list<T: Item>(&self, region: Span, working: &[T], reference: &[T]) -> String {
        let spans: Vec<Span> = reference.iter().map(Node::span).collect();
        let layout = CommaLayout::new(self.text(), region, &spans).with_newline(self.newline);
        let entries: Vec<(Option<usize>, String)> = working
            .iter()
            .map(|node| {
                let kept = counterpart(reference, node);
                let text = match kept {
                    Some(index) if *node == reference[index] => self.slice(node.span()).to_owned(),
                    Some(index) => node.changed(&reference[index], self),
                    None if node.origin().is_some() => self.slice(node.span()).to_owned(),
                    None => node.fresh(self),
                };
                (kept, text)
            })
            .collect();
        layout.render(&entries)
    }
}

/// Index of the element of `reference` that `node` was cloned from.
fn counterpart<T: Node>(reference: &[T], node: &T) -> Option<usize> {
    let id = node.origin()?;
    reference.iter().position(|other| other.origin() == Some(id))
}
