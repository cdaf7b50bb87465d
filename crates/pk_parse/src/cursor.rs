//! Token cursor for navigating the token stream.
//!
//! The cursor only ever rests on significant tokens: whitespace, comments and
//! re-opening `<?php` tags are stepped over on every advance. The parser still
//! sees exact offsets through [`Cursor::prev_end`], which is what node spans
//! are built from.

use pk_ir::{Span, Token, TokenKind};

use crate::ParseError;

/// Saved cursor state for speculative parsing.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pos: usize,
    prev_end: u32,
}

pub struct Cursor<'a> {
    tokens: &'a [Token],
    text: &'a str,
    first: usize,
    pos: usize,
    end: usize,
    prev_end: u32,
    eof: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor over `tokens[start..end]`; `eof` is the source's end offset.
    pub fn new(tokens: &'a [Token], text: &'a str, start: usize, end: usize, eof: u32) -> Self {
        let prev_end = tokens.get(start).map_or(eof, |t| t.span.start);
        let mut cursor = Cursor {
            tokens,
            text,
            first: start,
            pos: start,
            end,
            prev_end,
            eof,
        };
        cursor.skip_trivia();
        cursor
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.end {
            let kind = self.tokens[self.pos].kind;
            if !(kind.is_trivia() || kind == TokenKind::OpenTag) {
                break;
            }
            self.pos += 1;
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        if self.is_at_end() {
            None
        } else {
            self.tokens.get(self.pos)
        }
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Span of the current token, or a point at end of input.
    pub fn current_span(&self) -> Span {
        self.current().map_or(Span::point(self.eof), |t| t.span)
    }

    /// Start of the current token, moved back over comments on the lines
    /// above it. A comment sharing a line with the previous token stays
    /// with that token.
    pub fn leading_start(&self) -> u32 {
        let Some(current) = self.current() else {
            return self.eof;
        };
        let window = &self.tokens[self.first..self.pos];
        let (from, mut on_new_line) = match window.iter().rposition(|t| !t.kind.is_trivia()) {
            Some(i) => (i + 1, window[i].kind == TokenKind::OpenTag),
            None => (0, true),
        };
        for token in &window[from..] {
            match token.kind {
                TokenKind::Whitespace => on_new_line |= self.text(token).contains('\n'),
                _ if on_new_line => return token.span.start,
                kind => on_new_line = kind == TokenKind::LineComment,
            }
        }
        current.span.start
    }

    /// Source text of the current token; empty at end of input.
    pub fn current_text(&self) -> &'a str {
        self.current().map_or("", |t| self.text(t))
    }

    #[inline]
    pub fn text(&self, token: &Token) -> &'a str {
        self.text.get(token.span.to_range()).unwrap_or("")
    }

    /// End offset of the last consumed significant token.
    #[inline]
    pub fn prev_end(&self) -> u32 {
        self.prev_end
    }

    #[inline]
    pub fn eof(&self) -> u32 {
        self.eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Current token is the identifier `keyword`, ignoring ASCII case.
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.check(TokenKind::Ident) && self.current_text().eq_ignore_ascii_case(keyword)
    }

    /// Kind of the `n`th significant token after the current one.
    pub fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens[self.pos.min(self.end)..self.end]
            .iter()
            .filter(|t| !(t.kind.is_trivia() || t.kind == TokenKind::OpenTag))
            .nth(n)
            .map(|t| t.kind)
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = *self.current()?;
        self.prev_end = token.span.end;
        self.pos += 1;
        self.skip_trivia();
        tracing::trace!(kind = ?token.kind, span = %token.span, "advance");
        Some(token)
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                let token = *token;
                self.advance();
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected(expected, token.kind, token.span)),
            None => Err(ParseError::eof(expected, self.eof)),
        }
    }

    /// Error for the current token when it does not fit the grammar.
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::unexpected(expected, token.kind, token.span),
            None => ParseError::eof(expected, self.eof),
        }
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            pos: self.pos,
            prev_end: self.prev_end,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.pos = snapshot.pos;
        self.prev_end = snapshot.prev_end;
    }

    /// Consume a bracketed group starting at the current opener, including
    /// everything nested inside it.
    pub fn skip_balanced(&mut self) -> Result<Span, ParseError> {
        let start = self.current_span().start;
        let mut stack: Vec<(TokenKind, Span)> = Vec::new();
        loop {
            let Some(token) = self.current().copied() else {
                let what = stack.last().map_or("`(`", |&(closer, _)| opener_name(closer));
                let span = stack.last().map_or(Span::point(self.eof), |&(_, span)| span);
                return Err(ParseError::new(crate::ParseErrorKind::Unclosed(what), span));
            };
            match token.kind {
                TokenKind::LParen => stack.push((TokenKind::RParen, token.span)),
                TokenKind::LBracket | TokenKind::AttrOpen => {
                    stack.push((TokenKind::RBracket, token.span));
                }
                TokenKind::LBrace => stack.push((TokenKind::RBrace, token.span)),
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if stack.last().map(|&(closer, _)| closer) == Some(token.kind) {
                        stack.pop();
                    } else {
                        return Err(ParseError::new(
                            crate::ParseErrorKind::Mismatched(token.kind.display_name()),
                            token.span,
                        ));
                    }
                }
                _ => {}
            }
            self.advance();
            if stack.is_empty() {
                return Ok(Span::new(start, self.prev_end));
            }
        }
    }
}

fn opener_name(closer: TokenKind) -> &'static str {
    match closer {
        TokenKind::RBracket => "`[`",
        TokenKind::RBrace => "`{`",
        _ => "`(`",
    }
}
