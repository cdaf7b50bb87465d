//! Top-level statements: namespaces, imports, declarations.

use pk_ir::{File, Ident, Name, Namespace, Opaque, Span, Stmt, TokenKind, UseDecl, UseItem, UseKind};

use crate::{ParseError, Parser};

/// Where a statement list stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StmtEnd {
    /// End of input.
    Eof,
    /// A closing `}` (left for the caller).
    Brace,
    /// The next `namespace` declaration or end of input.
    NextNamespace,
}

impl Parser<'_> {
    pub fn parse_file(&mut self) -> Result<File, ParseError> {
        let origin = Some(self.alloc_id());
        let span = self.source.span;
        let stmts = self.parse_stmts(StmtEnd::Eof)?;
        Ok(File {
            origin,
            span,
            body: Span::new(self.body_start, span.end),
            stmts,
        })
    }

    pub(crate) fn parse_stmts(&mut self, end: StmtEnd) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                if end == StmtEnd::Brace {
                    return Err(ParseError::eof("`}`", self.cursor.eof()));
                }
                break;
            }
            if end == StmtEnd::Brace && self.cursor.check(TokenKind::RBrace) {
                break;
            }
            if end == StmtEnd::NextNamespace && self.at_namespace_decl() {
                break;
            }
            stmts.push(self.parse_stmt(end)?);
        }
        Ok(stmts)
    }

    fn parse_stmt(&mut self, end: StmtEnd) -> Result<Stmt, ParseError> {
        if end == StmtEnd::Eof && self.at_namespace_decl() {
            return self.parse_namespace().map(Stmt::Namespace);
        }
        if self.cursor.check_keyword("use") && self.cursor.peek_kind(1) != Some(TokenKind::LParen) {
            return self.parse_use().map(Stmt::Use);
        }
        if self.cursor.check_keyword("declare") {
            return self.skip_statement().map(Stmt::Declare);
        }
        if self.cursor.check_keyword("return") {
            return self.parse_return().map(Stmt::Return);
        }
        if self.at_class_like()? {
            return self.parse_class_like().map(Stmt::ClassLike);
        }
        if self.cursor.check(TokenKind::InlineHtml) {
            let origin = Some(self.alloc_id());
            let span = self.cursor.current_span();
            self.cursor.advance();
            return Ok(Stmt::Other(Opaque { origin, span }));
        }
        self.skip_statement().map(Stmt::Other)
    }

    /// `namespace Foo;` or `namespace {`, but not `namespace\foo()`.
    fn at_namespace_decl(&self) -> bool {
        self.cursor.check_keyword("namespace")
            && matches!(
                self.cursor.peek_kind(1),
                Some(TokenKind::Ident | TokenKind::LBrace)
            )
    }

    fn parse_namespace(&mut self) -> Result<Namespace, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.leading_start();
        self.cursor.advance();

        let name = if self.cursor.check(TokenKind::Ident) {
            Some(self.parse_name()?)
        } else {
            None
        };

        if self.cursor.eat(TokenKind::LBrace) {
            let body_start = self.cursor.prev_end();
            let stmts = self.parse_stmts(StmtEnd::Brace)?;
            let close = self.cursor.expect(TokenKind::RBrace, "`}`")?;
            return Ok(Namespace {
                origin,
                span: Span::new(start, close.span.end),
                name,
                braced: true,
                body: Span::new(body_start, close.span.start),
                stmts,
            });
        }

        self.expect_terminator()?;
        let body_start = self.cursor.prev_end();
        let stmts = self.parse_stmts(StmtEnd::NextNamespace)?;
        let end = self.cursor.prev_end();
        Ok(Namespace {
            origin,
            span: Span::new(start, end),
            name,
            braced: false,
            body: Span::new(body_start, end),
            stmts,
        })
    }

    /// A possibly-qualified name: `Foo`, `\Foo`, `App\Models\User`.
    pub(crate) fn parse_name(&mut self) -> Result<Name, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.current_span().start;
        let mut text = String::new();
        if self.cursor.eat(TokenKind::Backslash) {
            text.push('\\');
        }
        let first = self.cursor.expect(TokenKind::Ident, "name")?;
        text.push_str(self.cursor.text(&first));
        while self.cursor.check(TokenKind::Backslash)
            && self.cursor.peek_kind(1) == Some(TokenKind::Ident)
        {
            self.cursor.advance();
            if let Some(segment) = self.cursor.advance() {
                text.push('\\');
                text.push_str(self.cursor.text(&segment));
            }
        }
        Ok(Name {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            text,
        })
    }

    pub(crate) fn parse_name_list(&mut self) -> Result<Vec<Name>, ParseError> {
        let mut names = vec![self.parse_name()?];
        while self.cursor.eat(TokenKind::Comma) {
            names.push(self.parse_name()?);
        }
        Ok(names)
    }

    fn parse_use(&mut self) -> Result<UseDecl, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.leading_start();
        self.cursor.advance();
        let kind = self.parse_use_kind().unwrap_or(UseKind::Normal);

        let first_start = self.cursor.current_span().start;
        let first = self.parse_name()?;

        let (prefix, items, items_region) = if self.cursor.check(TokenKind::Backslash)
            && self.cursor.peek_kind(1) == Some(TokenKind::LBrace)
        {
            self.cursor.advance();
            self.cursor.advance();
            let region_start = self.cursor.prev_end();
            let mut items = Vec::new();
            while !self.cursor.check(TokenKind::RBrace) {
                items.push(self.parse_use_item(true)?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            let close = self.cursor.expect(TokenKind::RBrace, "`}`")?;
            (Some(first), items, Span::new(region_start, close.span.start))
        } else {
            let mut items = vec![self.finish_use_item(first_start, None, first)?];
            while self.cursor.eat(TokenKind::Comma) {
                items.push(self.parse_use_item(false)?);
            }
            let region = Span::new(first_start, self.cursor.prev_end());
            (None, items, region)
        };

        self.expect_terminator()?;
        Ok(UseDecl {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            kind,
            prefix,
            items_region,
            items,
        })
    }

    /// `function` or `const` right before a name.
    fn parse_use_kind(&mut self) -> Option<UseKind> {
        let followed_by_name = matches!(
            self.cursor.peek_kind(1),
            Some(TokenKind::Ident | TokenKind::Backslash)
        );
        if !followed_by_name {
            return None;
        }
        let kind = if self.cursor.check_keyword("function") {
            UseKind::Function
        } else if self.cursor.check_keyword("const") {
            UseKind::Const
        } else {
            return None;
        };
        self.cursor.advance();
        Some(kind)
    }

    fn parse_use_item(&mut self, in_group: bool) -> Result<UseItem, ParseError> {
        let start = self.cursor.current_span().start;
        let kind = if in_group { self.parse_use_kind() } else { None };
        let name = self.parse_name()?;
        self.finish_use_item(start, kind, name)
    }

    fn finish_use_item(
        &mut self,
        start: u32,
        kind: Option<UseKind>,
        name: Name,
    ) -> Result<UseItem, ParseError> {
        let origin = Some(self.alloc_id());
        let alias = if self.cursor.eat_keyword("as") {
            let token = self.cursor.expect(TokenKind::Ident, "alias")?;
            Some(Ident {
                span: token.span,
                text: self.cursor.text(&token).to_owned(),
            })
        } else {
            None
        };
        Ok(UseItem {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            kind,
            name,
            alias,
        })
    }

    /// `;`, or a closing tag, which ends a statement too.
    pub(crate) fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Semi) || self.cursor.eat(TokenKind::CloseTag) {
            return Ok(());
        }
        Err(self.cursor.unexpected("`;`"))
    }
}
