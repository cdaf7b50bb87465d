//! Token Conversion
//!
//! Maps raw logos tokens onto the shared `TokenKind`.

use pk_ir::TokenKind;

use crate::raw_token::RawToken;

pub(crate) fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::LineComment => TokenKind::LineComment,
        RawToken::BlockComment => TokenKind::BlockComment,
        RawToken::CloseTag => TokenKind::CloseTag,
        RawToken::Variable => TokenKind::Variable,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::String => TokenKind::String,
        RawToken::ShellExec => TokenKind::ShellExec,
        RawToken::Heredoc => TokenKind::Heredoc,
        RawToken::AttrOpen => TokenKind::AttrOpen,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Backslash => TokenKind::Backslash,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Question => TokenKind::Question,
        RawToken::Dollar => TokenKind::Dollar,
        RawToken::Op => TokenKind::Op,
    }
}
