//! Recursive descent parser for the PHP subset the mutation engine edits.
//!
//! Parsing appends the source to a [`SourceMap`] and returns a tree whose
//! nodes carry fresh ids from the map's allocator. Declarations, imports,
//! class members and array literals are structured; every other construct
//! becomes an opaque node covering its exact source range.

mod cursor;
mod error;
mod grammar;

use pk_ir::{File, Member, Method, NodeId, SourceMap, SourceRange, Stmt, TokenKind};

pub use cursor::{Cursor, CursorSnapshot};
pub use error::{ParseError, ParseErrorKind};

/// Parser state for one source of the arena.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: SourceRange,
    body_start: u32,
    next_id: u32,
}

impl<'a> Parser<'a> {
    /// Parser over `source`, which must already be in `sources`.
    ///
    /// Leading inline HTML (such as a shebang line) and the first opening tag
    /// are stepped over; the file body starts after the tag.
    pub fn new(sources: &'a SourceMap, source: SourceRange) -> Result<Self, ParseError> {
        let tokens = &sources.tokens().as_slice()[source.first_token..source.end_token];
        if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
            return Err(ParseError::new(ParseErrorKind::InvalidToken, bad.span));
        }

        let open_tag = tokens
            .iter()
            .position(|t| t.kind == TokenKind::OpenTag)
            .filter(|&i| tokens[..i].iter().all(|t| t.kind == TokenKind::InlineHtml));
        let (start, body_start) = match open_tag {
            Some(i) => (source.first_token + i + 1, tokens[i].span.end),
            None => (source.first_token, source.span.start),
        };

        Ok(Parser {
            cursor: Cursor::new(
                sources.tokens().as_slice(),
                sources.text(),
                start,
                source.end_token,
                source.span.end,
            ),
            source,
            body_start,
            next_id: sources.next_id(),
        })
    }

    /// First id this parser has not handed out.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn alloc_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Append `text` to `sources` and parse it as a complete file.
pub fn parse_file(sources: &mut SourceMap, text: &str) -> Result<File, ParseError> {
    let range = append(sources, text)?;
    let mut parser = Parser::new(sources, range)?;
    let file = parser.parse_file();
    let next_id = parser.next_id();
    sources.reserve_ids(next_id);

    let file = file?;
    tracing::debug!(
        bytes = text.len(),
        statements = file.stmts.len(),
        "parsed source file"
    );
    Ok(file)
}

/// Parse a standalone method declaration such as
/// `public function boot(): void { ... }`.
///
/// The snippet is wrapped in a throwaway class, so it may carry attributes,
/// doc comments and modifiers. Returns `Ok(None)` when the code parses but
/// declares no method.
pub fn parse_method(sources: &mut SourceMap, code: &str) -> Result<Option<Method>, ParseError> {
    let wrapped = format!("<?php\nclass __DUMMY__ {{\n{code}\n}}\n");
    let file = parse_file(sources, &wrapped)?;
    let method = file.stmts.into_iter().find_map(|stmt| match stmt {
        Stmt::ClassLike(class) => class.members.into_iter().find_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        }),
        _ => None,
    });
    Ok(method)
}

fn append(sources: &mut SourceMap, text: &str) -> Result<SourceRange, ParseError> {
    let too_large = || ParseError::new(ParseErrorKind::TooLarge, pk_ir::Span::DUMMY);
    let total = sources.text().len().checked_add(text.len()).ok_or_else(too_large)?;
    if u32::try_from(total).is_err() {
        return Err(too_large());
    }
    let tokens = pk_lexer::lex(text);
    sources.push_source(text, &tokens).map_err(|_| too_large())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
