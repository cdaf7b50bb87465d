//! Class-like declarations and their members.

use pk_ir::{
    ClassKind, ClassLike, Ident, Member, Method, Modifiers, Opaque, Property, PropertyItem, Span,
    TokenKind, TraitUse,
};

use super::ExprEnd;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whether attributes and modifiers at the cursor lead into a class,
    /// interface, trait or enum declaration.
    pub(crate) fn at_class_like(&mut self) -> Result<bool, ParseError> {
        let snapshot = self.cursor.snapshot();
        let found = self.skip_attributes().map(|()| {
            self.skip_class_modifiers();
            ClassKind::from_keyword(self.cursor.current_text()).is_some()
                && self.cursor.check(TokenKind::Ident)
                && self.cursor.peek_kind(1) == Some(TokenKind::Ident)
        });
        self.cursor.restore(snapshot);
        found
    }

    fn skip_class_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        while self.cursor.check(TokenKind::Ident) {
            match Modifiers::from_keyword(self.cursor.current_text()) {
                Some(flag) => {
                    modifiers |= flag;
                    self.cursor.advance();
                }
                None => break,
            }
        }
        modifiers
    }

    pub(crate) fn parse_class_like(&mut self) -> Result<ClassLike, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.leading_start();
        self.skip_attributes()?;
        let modifiers = self.skip_class_modifiers();

        let keyword = self.cursor.expect(TokenKind::Ident, "`class`")?;
        let kind = ClassKind::from_keyword(self.cursor.text(&keyword))
            .ok_or_else(|| ParseError::unexpected("`class`", keyword.kind, keyword.span))?;
        let name_token = self.cursor.expect(TokenKind::Ident, "class name")?;
        let name = Ident {
            span: name_token.span,
            text: self.cursor.text(&name_token).to_owned(),
        };

        let mut extends = Vec::new();
        let mut implements = Vec::new();
        let mut implements_clause = None;
        let mut implements_region = Span::DUMMY;
        loop {
            if self.cursor.eat_keyword("extends") {
                extends = self.parse_name_list()?;
            } else if self.cursor.check_keyword("implements") {
                let clause_start = self.cursor.prev_end();
                self.cursor.advance();
                implements = self.parse_name_list()?;
                let first = implements.first().map_or(clause_start, |n| n.span.start);
                implements_region = Span::new(first, self.cursor.prev_end());
                implements_clause = Some(Span::new(clause_start, self.cursor.prev_end()));
            } else if kind == ClassKind::Enum && self.cursor.eat(TokenKind::Colon) {
                self.parse_name()?;
            } else {
                break;
            }
        }
        let implements_anchor = implements_clause.map_or(self.cursor.prev_end(), |c| c.start);

        let open = self.cursor.expect(TokenKind::LBrace, "`{`")?;
        let mut members = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::eof("`}`", self.cursor.eof()));
            }
            members.push(self.parse_member()?);
        }
        let close = self.cursor.expect(TokenKind::RBrace, "`}`")?;

        tracing::trace!(
            class = %name.text,
            members = members.len(),
            "parsed class-like declaration"
        );
        Ok(ClassLike {
            origin,
            span: Span::new(start, close.span.end),
            kind,
            modifiers,
            name,
            extends,
            implements,
            implements_clause,
            implements_region,
            implements_anchor,
            body: Span::new(open.span.end, close.span.start),
            members,
        })
    }

    fn parse_member(&mut self) -> Result<Member, ParseError> {
        let start = self.cursor.leading_start();
        self.skip_attributes()?;

        if self.cursor.check_keyword("use") {
            return self.parse_trait_use(start).map(Member::TraitUse);
        }

        let mut modifiers = Modifiers::empty();
        while self.cursor.check(TokenKind::Ident) && !self.cursor.check_keyword("function") {
            let Some(flag) = Modifiers::from_keyword(self.cursor.current_text()) else {
                break;
            };
            modifiers |= flag;
            self.cursor.advance();
        }

        if self.cursor.check_keyword("const") || self.cursor.check_keyword("case") {
            let rest = self.skip_statement()?;
            return Ok(Member::Other(Opaque {
                origin: rest.origin,
                span: Span::new(start, rest.span.end),
            }));
        }
        if self.cursor.check_keyword("function") {
            return self.parse_method(start, modifiers).map(Member::Method);
        }
        if self.cursor.check(TokenKind::Semi) {
            let origin = Some(self.alloc_id());
            self.cursor.advance();
            return Ok(Member::Other(Opaque {
                origin,
                span: Span::new(start, self.cursor.prev_end()),
            }));
        }
        self.parse_property(start, modifiers).map(Member::Property)
    }

    fn parse_trait_use(&mut self, start: u32) -> Result<TraitUse, ParseError> {
        let origin = Some(self.alloc_id());
        self.cursor.advance();
        let names = self.parse_name_list()?;
        let names_region = Span::new(
            names.first().map_or(start, |n| n.span.start),
            self.cursor.prev_end(),
        );
        let adaptations = if self.cursor.check(TokenKind::LBrace) {
            Some(self.cursor.skip_balanced()?)
        } else {
            self.expect_terminator()?;
            None
        };
        Ok(TraitUse {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            names_region,
            names,
            adaptations,
        })
    }

    fn parse_method(&mut self, start: u32, modifiers: Modifiers) -> Result<Method, ParseError> {
        let origin = Some(self.alloc_id());
        self.cursor.advance();
        self.cursor.eat(TokenKind::Amp);
        let name_token = self.cursor.expect(TokenKind::Ident, "method name")?;
        let name = Ident {
            span: name_token.span,
            text: self.cursor.text(&name_token).to_owned(),
        };

        if !self.cursor.check(TokenKind::LParen) {
            return Err(self.cursor.unexpected("`(`"));
        }
        self.cursor.skip_balanced()?;

        if self.cursor.eat(TokenKind::Colon) {
            while !(self.cursor.is_at_end()
                || self.cursor.check(TokenKind::LBrace)
                || self.cursor.check(TokenKind::Semi))
            {
                if self.cursor.check(TokenKind::LParen) {
                    self.cursor.skip_balanced()?;
                } else {
                    self.cursor.advance();
                }
            }
        }

        let body = if self.cursor.check(TokenKind::LBrace) {
            Some(self.parse_block()?)
        } else {
            self.expect_terminator()?;
            None
        };

        Ok(Method {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            modifiers,
            name,
            body,
        })
    }

    fn parse_property(&mut self, start: u32, modifiers: Modifiers) -> Result<Property, ParseError> {
        let origin = Some(self.alloc_id());

        // Type declaration up to the first variable.
        loop {
            match self.cursor.current_kind() {
                Some(TokenKind::Variable) => break,
                Some(TokenKind::LParen) => {
                    self.cursor.skip_balanced()?;
                }
                Some(TokenKind::Semi | TokenKind::LBrace | TokenKind::RBrace) | None => {
                    return Err(self.cursor.unexpected("property or method"));
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let mut items = Vec::new();
        loop {
            let item_origin = Some(self.alloc_id());
            let variable = self.cursor.expect(TokenKind::Variable, "property name")?;
            let text = self.cursor.text(&variable);
            let name = Ident {
                span: Span::new(variable.span.start + 1, variable.span.end),
                text: text.get(1..).unwrap_or_default().to_owned(),
            };
            let default = if self.cursor.eat(TokenKind::Eq) {
                Some(self.parse_expr(ExprEnd::Property)?)
            } else {
                None
            };
            items.push(PropertyItem {
                origin: item_origin,
                span: Span::new(variable.span.start, self.cursor.prev_end()),
                name,
                default,
            });

            if self.cursor.eat(TokenKind::Comma) {
                continue;
            }
            if self.cursor.check(TokenKind::LBrace) {
                // Property hooks.
                self.cursor.skip_balanced()?;
            } else {
                self.expect_terminator()?;
            }
            break;
        }

        Ok(Property {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            modifiers,
            items,
        })
    }
}
