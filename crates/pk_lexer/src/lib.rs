//! Lossless PHP lexer built on logos.
//!
//! Produces a [`TokenList`] in which every byte of the input belongs to
//! exactly one token, trivia included. Text outside `<?php ... ?>` becomes
//! [`TokenKind::InlineHtml`]; unmatched input becomes [`TokenKind::Error`]
//! and is reported by the parser.

mod convert;
mod escape;
mod raw_token;

use logos::Logos;
use pk_ir::{Span, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

pub use escape::decode_string_literal;

/// Tokenize `source`. Spans are relative to the start of `source`.
///
/// # Panics
/// Panics if `source` is longer than `u32::MAX` bytes; callers check the
/// length first.
pub fn lex(source: &str) -> TokenList {
    let mut tokens = TokenList::with_capacity(source.len() / 3);
    let mut pos = 0;

    while pos < source.len() {
        let Some((offset, tag_len)) = find_open_tag(&source[pos..]) else {
            push(&mut tokens, TokenKind::InlineHtml, pos..source.len());
            break;
        };
        if offset > 0 {
            push(&mut tokens, TokenKind::InlineHtml, pos..pos + offset);
        }
        let tag_start = pos + offset;
        push(&mut tokens, TokenKind::OpenTag, tag_start..tag_start + tag_len);
        pos = lex_php(source, tag_start + tag_len, &mut tokens);
    }

    tracing::trace!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    tokens
}

/// Lex PHP code from `start` up to and including the next `?>`.
/// Returns the offset where inline HTML resumes.
fn lex_php(source: &str, start: usize, tokens: &mut TokenList) -> usize {
    let mut logos = RawToken::lexer(&source[start..]);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let range = start + range.start..start + range.end;
        match token_result {
            Ok(RawToken::CloseTag) => {
                let end = range.end;
                push(tokens, TokenKind::CloseTag, range);
                return end;
            }
            Ok(raw) => push(tokens, convert_token(raw), range),
            Err(()) => push(tokens, TokenKind::Error, range),
        }
    }

    source.len()
}

/// Position and length of the next `<?php` or `<?=` tag.
fn find_open_tag(text: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(found) = text[search..].find("<?") {
        let at = search + found;
        let after = &text.as_bytes()[at + 2..];
        if after.first() == Some(&b'=') {
            return Some((at, 3));
        }
        let is_php = after
            .get(..3)
            .is_some_and(|word| word.eq_ignore_ascii_case(b"php"));
        if is_php && after.get(3).map_or(true, u8::is_ascii_whitespace) {
            return Some((at, 5));
        }
        search = at + 2;
    }
    None
}

#[inline]
fn push(tokens: &mut TokenList, kind: TokenKind, range: std::ops::Range<usize>) {
    tokens.push(Token::new(kind, Span::from_range(range)));
}

#[cfg(test)]
mod tests;
