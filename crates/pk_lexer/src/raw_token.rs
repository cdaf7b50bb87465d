//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output for PHP mode
//! (the text between `<?php` and `?>`). Inline HTML is split off by hand in
//! [`crate::lex`] before logos sees the input.

use logos::{Lexer, Logos};

/// Raw token from logos. Trivia is not skipped: the printer needs it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"#([^\[\n][^\n]*)?")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("?>")]
    CloseTag,

    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    ShellExec,

    #[token("<<<", heredoc_body)]
    Heredoc,

    #[token("#[")]
    AttrOpen,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("\\")]
    Backslash,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("::")]
    DoubleColon,
    #[token(":")]
    Colon,
    #[token("&")]
    Amp,
    #[token("...")]
    Ellipsis,
    #[token("?")]
    Question,
    #[token("$")]
    Dollar,

    #[token("==")]
    #[token("===")]
    #[token("!=")]
    #[token("!==")]
    #[token("<>")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    #[token("<=>")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("**")]
    #[token(".")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token(".=")]
    #[token("%=")]
    #[token("**=")]
    #[token("??")]
    #[token("??=")]
    #[token("?->")]
    #[token("->")]
    #[token("!")]
    #[token("&&")]
    #[token("||")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("<<")]
    #[token(">>")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("@")]
    Op,
}

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Consume a `/* ... */` or `/** ... */` comment up to and including the
/// first `*/`. An unterminated comment is rejected.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Consume a heredoc or nowdoc after `<<<`: the label line, the body and the
/// closing label (which may be indented).
fn heredoc_body(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();

    let mut i = 0;
    while matches!(bytes.get(i), Some(b' ' | b'\t')) {
        i += 1;
    }
    let quote = match bytes.get(i) {
        Some(&q) if q == b'\'' || q == b'"' => {
            i += 1;
            Some(q)
        }
        _ => None,
    };
    let label_start = i;
    while bytes.get(i).copied().is_some_and(is_label_byte) {
        i += 1;
    }
    if i == label_start {
        return false;
    }
    let label = &rest[label_start..i];
    if let Some(q) = quote {
        if bytes.get(i) != Some(&q) {
            return false;
        }
        i += 1;
    }
    match bytes.get(i) {
        Some(b'\n') => i += 1,
        Some(b'\r') if bytes.get(i + 1) == Some(&b'\n') => i += 2,
        _ => return false,
    }

    let mut line_start = i;
    loop {
        let mut j = line_start;
        while matches!(bytes.get(j), Some(b' ' | b'\t')) {
            j += 1;
        }
        if rest[j..].starts_with(label) {
            let after = j + label.len();
            if !bytes.get(after).copied().is_some_and(is_label_byte) {
                lex.bump(after);
                return true;
            }
        }
        match rest[line_start..].find('\n') {
            Some(offset) => line_start += offset + 1,
            None => return false,
        }
    }
}
