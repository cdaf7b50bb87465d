use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source)
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, &source[t.span.to_range()]))
        .collect()
}

#[test]
fn class_header_tokens() {
    assert_eq!(
        kinds("<?php\nclass User extends Model implements \\Countable {}"),
        vec![
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::Ident, "class"),
            (TokenKind::Ident, "User"),
            (TokenKind::Ident, "extends"),
            (TokenKind::Ident, "Model"),
            (TokenKind::Ident, "implements"),
            (TokenKind::Backslash, "\\"),
            (TokenKind::Ident, "Countable"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
        ]
    );
}

#[test]
fn comments_and_attributes() {
    assert_eq!(
        kinds("<?php # note\n#[Attr]\n// line\n/** doc */"),
        vec![
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::LineComment, "# note"),
            (TokenKind::AttrOpen, "#["),
            (TokenKind::Ident, "Attr"),
            (TokenKind::RBracket, "]"),
            (TokenKind::LineComment, "// line"),
            (TokenKind::BlockComment, "/** doc */"),
        ]
    );
}

#[test]
fn block_comments_and_docblocks() {
    let source = "<?php\n/*\n|---\n| Mailer\n*/\n/**\n * @use HasFactory<UserFactory>\n */\n/**/ $a /* x */ / $b;";
    assert_eq!(
        kinds(source),
        vec![
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::BlockComment, "/*\n|---\n| Mailer\n*/"),
            (TokenKind::BlockComment, "/**\n * @use HasFactory<UserFactory>\n */"),
            (TokenKind::BlockComment, "/**/"),
            (TokenKind::Variable, "$a"),
            (TokenKind::BlockComment, "/* x */"),
            (TokenKind::Op, "/"),
            (TokenKind::Variable, "$b"),
            (TokenKind::Semi, ";"),
        ]
    );
}

#[test]
fn unterminated_block_comment_is_error() {
    assert!(lex("<?php /* never closed")
        .iter()
        .any(|t| t.kind == TokenKind::Error));
}

#[test]
fn literals() {
    assert_eq!(
        kinds(r#"<?php ['a' => "b\"", 1_000, 0x1F, 1.5e3, .5, $x];"#),
        vec![
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::LBracket, "["),
            (TokenKind::String, "'a'"),
            (TokenKind::FatArrow, "=>"),
            (TokenKind::String, r#""b\"""#),
            (TokenKind::Comma, ","),
            (TokenKind::Int, "1_000"),
            (TokenKind::Comma, ","),
            (TokenKind::Int, "0x1F"),
            (TokenKind::Comma, ","),
            (TokenKind::Float, "1.5e3"),
            (TokenKind::Comma, ","),
            (TokenKind::Float, ".5"),
            (TokenKind::Comma, ","),
            (TokenKind::Variable, "$x"),
            (TokenKind::RBracket, "]"),
            (TokenKind::Semi, ";"),
        ]
    );
}

#[test]
fn operators_collapse_to_op() {
    let ops: Vec<_> = kinds("<?php $a ?? $b->c === ...$d")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(
        ops,
        vec![
            TokenKind::OpenTag,
            TokenKind::Variable,
            TokenKind::Op,
            TokenKind::Variable,
            TokenKind::Op,
            TokenKind::Ident,
            TokenKind::Op,
            TokenKind::Ellipsis,
            TokenKind::Variable,
        ]
    );
}

#[test]
fn heredoc_and_nowdoc() {
    let source = "<?php\n$a = <<<EOT\nline $x\n  EOT;\n$b = <<<'RAW'\nraw\nRAW;\n";
    let heredocs: Vec<_> = kinds(source)
        .into_iter()
        .filter(|(kind, _)| *kind == TokenKind::Heredoc)
        .map(|(_, text)| text)
        .collect();
    assert_eq!(heredocs, vec!["<<<EOT\nline $x\n  EOT", "<<<'RAW'\nraw\nRAW"]);
}

#[test]
fn unterminated_heredoc_is_error() {
    assert!(lex("<?php $a = <<<EOT\nnever closed\n")
        .iter()
        .any(|t| t.kind == TokenKind::Error));
}

#[test]
fn inline_html_around_tags() {
    assert_eq!(
        kinds("#!/usr/bin/env php\n<?php echo 1; ?>\n<p>hi</p><?= $x ?>"),
        vec![
            (TokenKind::InlineHtml, "#!/usr/bin/env php\n"),
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::Ident, "echo"),
            (TokenKind::Int, "1"),
            (TokenKind::Semi, ";"),
            (TokenKind::CloseTag, "?>"),
            (TokenKind::InlineHtml, "\n<p>hi</p>"),
            (TokenKind::OpenTag, "<?="),
            (TokenKind::Variable, "$x"),
            (TokenKind::CloseTag, "?>"),
        ]
    );
}

#[test]
fn open_tag_requires_whitespace_after_php() {
    assert_eq!(
        kinds("<?phpx"),
        vec![(TokenKind::InlineHtml, "<?phpx")]
    );
    assert_eq!(kinds("<?PHP ")[0], (TokenKind::OpenTag, "<?PHP"));
}

#[test]
fn unknown_characters_become_error_tokens() {
    assert!(kinds("<?php \u{1}").iter().any(|(kind, _)| *kind == TokenKind::Error));
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(lex("").is_empty());
}
