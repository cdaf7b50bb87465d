//! Statements the parser does not structure, `return`, and method bodies.

use pk_ir::{Block, BodyStmt, Opaque, ReturnStmt, Span, TokenKind};

use super::ExprEnd;
use crate::{ParseError, Parser};

/// Keywords that continue a statement after its closing `}`.
const BLOCK_CONTINUATIONS: &[&str] = &["else", "elseif", "catch", "finally", "while"];

impl Parser<'_> {
    /// Consume one statement as an opaque node.
    ///
    /// A statement ends at a `;` or closing tag outside brackets, or after a
    /// braced block that is not followed by `else`, `catch` and the like.
    pub(crate) fn skip_statement(&mut self) -> Result<Opaque, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.leading_start();
        let mut consumed = false;

        while let Some(kind) = self.cursor.current_kind() {
            match kind {
                TokenKind::Semi | TokenKind::CloseTag => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::LBrace => {
                    self.cursor.skip_balanced()?;
                    if BLOCK_CONTINUATIONS
                        .iter()
                        .any(|kw| self.cursor.check_keyword(kw))
                    {
                        consumed = true;
                        continue;
                    }
                    self.cursor.eat(TokenKind::Semi);
                    break;
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::AttrOpen => {
                    self.cursor.skip_balanced()?;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if !consumed {
                        return Err(self.cursor.unexpected("statement"));
                    }
                    break;
                }
                _ => {
                    self.cursor.advance();
                }
            }
            consumed = true;
        }

        Ok(Opaque {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
        })
    }

    pub(crate) fn parse_return(&mut self) -> Result<ReturnStmt, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.leading_start();
        self.cursor.advance();

        let bare = self.cursor.is_at_end()
            || self.cursor.check(TokenKind::Semi)
            || self.cursor.check(TokenKind::CloseTag);
        let expr = if bare {
            None
        } else {
            Some(self.parse_expr(ExprEnd::Statement)?)
        };
        if !self.cursor.is_at_end() {
            self.expect_terminator()?;
        }

        Ok(ReturnStmt {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            expr,
        })
    }

    /// `{ ... }` holding direct statements of a method.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let origin = Some(self.alloc_id());
        let open = self.cursor.expect(TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::eof("`}`", self.cursor.eof()));
            }
            let stmt = if self.cursor.check_keyword("return") {
                BodyStmt::Return(self.parse_return()?)
            } else {
                BodyStmt::Other(self.skip_statement()?)
            };
            stmts.push(stmt);
        }
        let close = self.cursor.expect(TokenKind::RBrace, "`}`")?;
        Ok(Block {
            origin,
            span: Span::new(open.span.start, close.span.end),
            body: Span::new(open.span.end, close.span.start),
            stmts,
        })
    }

    pub(crate) fn skip_attributes(&mut self) -> Result<(), ParseError> {
        while self.cursor.check(TokenKind::AttrOpen) {
            self.cursor.skip_balanced()?;
        }
        Ok(())
    }
}
