//! Expressions.
//!
//! Only array literals and scalar literals are structured, and only when they
//! make up the whole expression. Anything else is consumed up to the
//! expression's terminator and kept opaque.

use pk_ir::{
    ArrayItem, ArrayLit, Expr, FloatLit, IntLit, Opaque, Span, StringLit, TokenKind,
};
use pk_lexer::decode_string_literal;

use crate::{ParseError, Parser};

/// Tokens that end an expression in a given context. Unmatched closing
/// brackets always end it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExprEnd {
    /// `;` or `?>`.
    Statement,
    /// `,` `;` or `?>`, after a property default.
    Property,
    /// `,` or `=>`, for the first expression of an array item.
    ArrayKey,
    /// `,`, for the value of an array item.
    ArrayValue,
}

impl Parser<'_> {
    fn at_expr_end(&self, end: ExprEnd) -> bool {
        let Some(kind) = self.cursor.current_kind() else {
            return true;
        };
        match kind {
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => true,
            TokenKind::Semi | TokenKind::CloseTag => {
                matches!(end, ExprEnd::Statement | ExprEnd::Property)
            }
            TokenKind::Comma => end != ExprEnd::Statement,
            TokenKind::FatArrow => end == ExprEnd::ArrayKey,
            _ => false,
        }
    }

    pub(crate) fn parse_expr(&mut self, end: ExprEnd) -> Result<Expr, ParseError> {
        if self.at_expr_end(end) {
            return Err(self.cursor.unexpected("expression"));
        }
        let start = self.cursor.current_span().start;

        let array_start = self.cursor.check(TokenKind::LBracket)
            || (self.cursor.check_keyword("array")
                && self.cursor.peek_kind(1) == Some(TokenKind::LParen));
        if array_start {
            if let Some(array) = self.parse_array()? {
                if self.at_expr_end(end) {
                    return Ok(Expr::Array(array));
                }
            }
        } else if let Some(literal) = self.parse_literal(end)? {
            return Ok(literal);
        }

        while !self.at_expr_end(end) {
            match self.cursor.current_kind() {
                Some(
                    TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::AttrOpen,
                ) => {
                    self.cursor.skip_balanced()?;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
        Ok(Expr::Other(Opaque {
            origin: Some(self.alloc_id()),
            span: Span::new(start, self.cursor.prev_end()),
        }))
    }

    /// A literal making up the whole expression: string, number (optionally
    /// negated) or constant name. Leaves the cursor untouched otherwise.
    fn parse_literal(&mut self, end: ExprEnd) -> Result<Option<Expr>, ParseError> {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.current_span().start;

        let negative = self.cursor.check(TokenKind::Op)
            && self.cursor.current_text() == "-"
            && matches!(
                self.cursor.peek_kind(1),
                Some(TokenKind::Int | TokenKind::Float)
            );
        if negative {
            self.cursor.advance();
        }

        let Some(token) = self.cursor.current().copied() else {
            self.cursor.restore(snapshot);
            return Ok(None);
        };
        let text = self.cursor.text(&token);

        let expr = match token.kind {
            TokenKind::String => {
                self.cursor.advance();
                decode_string_literal(text).map(|value| {
                    Expr::String(StringLit {
                        origin: None,
                        span: Span::new(start, token.span.end),
                        value,
                    })
                })
            }
            TokenKind::Int => {
                self.cursor.advance();
                parse_int(text, negative).map(|value| {
                    Expr::Int(IntLit {
                        origin: None,
                        span: Span::new(start, token.span.end),
                        value,
                    })
                })
            }
            TokenKind::Float => {
                self.cursor.advance();
                parse_float(text, negative).map(|value| {
                    Expr::Float(FloatLit {
                        origin: None,
                        span: Span::new(start, token.span.end),
                        value,
                    })
                })
            }
            TokenKind::Ident | TokenKind::Backslash if !negative => {
                Some(Expr::Const(self.parse_name()?))
            }
            _ => None,
        };

        match expr {
            Some(expr) if self.at_expr_end(end) => Ok(Some(with_origin(expr, self.alloc_id()))),
            _ => {
                self.cursor.restore(snapshot);
                Ok(None)
            }
        }
    }

    /// `[...]` or `array(...)` whose items are all well-formed. Returns
    /// `None` (cursor restored) for lists with empty slots.
    fn parse_array(&mut self) -> Result<Option<ArrayLit>, ParseError> {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.current_span().start;
        let short = self.cursor.eat(TokenKind::LBracket);
        let closer = if short {
            TokenKind::RBracket
        } else {
            self.cursor.advance();
            self.cursor.advance();
            TokenKind::RParen
        };
        let region_start = self.cursor.prev_end();

        let mut items = Vec::new();
        loop {
            if self.cursor.check(closer) {
                break;
            }
            if self.cursor.check(TokenKind::Comma) || self.at_expr_end(ExprEnd::ArrayValue) {
                self.cursor.restore(snapshot);
                return Ok(None);
            }
            items.push(self.parse_array_item()?);
            if self.cursor.eat(TokenKind::Comma) {
                continue;
            }
            if self.cursor.check(closer) {
                break;
            }
            self.cursor.restore(snapshot);
            return Ok(None);
        }
        let close = self.cursor.expect(closer, "array end")?;

        Ok(Some(ArrayLit {
            origin: Some(self.alloc_id()),
            span: Span::new(start, close.span.end),
            short,
            items_region: Span::new(region_start, close.span.start),
            items,
        }))
    }

    fn parse_array_item(&mut self) -> Result<ArrayItem, ParseError> {
        let origin = Some(self.alloc_id());
        let start = self.cursor.current_span().start;
        let unpack = self.cursor.eat(TokenKind::Ellipsis);
        let mut by_ref = self.cursor.eat(TokenKind::Amp);
        let first = self.parse_expr(ExprEnd::ArrayKey)?;

        let (key, value) = if self.cursor.eat(TokenKind::FatArrow) {
            by_ref = self.cursor.eat(TokenKind::Amp);
            (Some(first), self.parse_expr(ExprEnd::ArrayValue)?)
        } else {
            (None, first)
        };

        Ok(ArrayItem {
            origin,
            span: Span::new(start, self.cursor.prev_end()),
            key,
            value,
            by_ref,
            unpack,
        })
    }
}

fn with_origin(expr: Expr, id: pk_ir::NodeId) -> Expr {
    match expr {
        Expr::String(mut lit) => {
            lit.origin = Some(id);
            Expr::String(lit)
        }
        Expr::Int(mut lit) => {
            lit.origin = Some(id);
            Expr::Int(lit)
        }
        Expr::Float(mut lit) => {
            lit.origin = Some(id);
            Expr::Float(lit)
        }
        other => other,
    }
}

/// Integer literal value; `None` when it overflows (PHP turns it into a float).
fn parse_int(text: &str, negative: bool) -> Option<i64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };
    let value = i64::from_str_radix(body, radix).ok()?;
    if negative {
        value.checked_neg()
    } else {
        Some(value)
    }
}

fn parse_float(text: &str, negative: bool) -> Option<f64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let value: f64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
