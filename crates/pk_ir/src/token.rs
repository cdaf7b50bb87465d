//! Lossless PHP tokens.
//!
//! Unlike a compiler token stream, trivia (whitespace, comments, inline HTML)
//! is kept: concatenating the text of every token reproduces the source.

use std::fmt;

use super::Span;

/// A token with its span in the source arena.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Keywords are not distinguished here: PHP keywords are case-insensitive
/// and most of them are valid member names, so the parser matches them by
/// text on [`TokenKind::Ident`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Text outside `<?php ... ?>`.
    InlineHtml,
    /// `<?php` or `<?=`.
    OpenTag,
    /// `?>`.
    CloseTag,
    Whitespace,
    /// `// ...` or `# ...`.
    LineComment,
    /// `/* ... */`, including doc comments.
    BlockComment,

    /// `$name`.
    Variable,
    /// Identifier or keyword.
    Ident,
    Int,
    Float,
    /// Single- or double-quoted string.
    String,
    /// Heredoc or nowdoc, from `<<<` through the closing label.
    Heredoc,
    /// Backtick shell string.
    ShellExec,

    /// `#[`, opening an attribute group; closed by `]`.
    AttrOpen,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semi,
    Comma,
    Backslash,
    /// `=>`
    FatArrow,
    /// `=`
    Eq,
    /// `::`
    DoubleColon,
    Colon,
    Amp,
    /// `...`
    Ellipsis,
    Question,
    Dollar,
    /// Any other operator; the parser never looks inside.
    Op,

    /// Input the lexer could not match.
    Error,
}

impl TokenKind {
    /// Whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Short human-readable name used in parse errors and token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::InlineHtml => "inline HTML",
            TokenKind::OpenTag => "`<?php`",
            TokenKind::CloseTag => "`?>`",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment | TokenKind::BlockComment => "comment",
            TokenKind::Variable => "variable",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Heredoc => "heredoc",
            TokenKind::ShellExec => "shell string",
            TokenKind::AttrOpen => "`#[`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Semi => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Backslash => "`\\`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::Eq => "`=`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::Colon => "`:`",
            TokenKind::Amp => "`&`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Question => "`?`",
            TokenKind::Dollar => "`$`",
            TokenKind::Op => "operator",
            TokenKind::Error => "invalid input",
        }
    }
}

/// Tokens of every source in a [`SourceMap`](crate::SourceMap), in arena order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the first token starting at or after `offset`.
    pub fn index_at(&self, offset: u32) -> usize {
        self.tokens.partition_point(|t| t.span.start < offset)
    }

    /// Tokens lying entirely inside `span`.
    pub fn within(&self, span: Span) -> &[Token] {
        let start = self.index_at(span.start);
        let end = self.tokens.partition_point(|t| t.span.end <= span.end);
        if start >= end {
            return &[];
        }
        &self.tokens[start..end]
    }

    /// Append `other`, moving every span by `base`.
    pub fn extend_shifted(&mut self, other: &TokenList, base: u32) {
        self.tokens.extend(
            other
                .iter()
                .map(|t| Token::new(t.kind, t.span.shifted(base))),
        );
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
