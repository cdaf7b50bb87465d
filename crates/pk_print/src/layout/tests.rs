use pk_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

/// Spans of each `needle` in `text`, in order.
fn spans(text: &str, needles: &[&str]) -> Vec<Span> {
    let mut from = 0;
    needles
        .iter()
        .map(|needle| {
            let start = from + text[from..].find(needle).unwrap_or_else(|| panic!("{needle}"));
            from = start + needle.len();
            Span::from_range(start..from)
        })
        .collect()
}

fn region(text: &str) -> Span {
    Span::from_range(0..text.len())
}

fn kept(index: usize, text: &str) -> LineEntry {
    LineEntry {
        kept: Some(index),
        slot: Slot::Group(0),
        text: text.to_owned(),
    }
}

fn inserted(slot: Slot, text: &str) -> LineEntry {
    LineEntry {
        kept: None,
        slot,
        text: text.to_owned(),
    }
}

#[test]
fn unchanged_line_list_reprints_region() {
    let text = "\n    use A; // a\n\n    use B;\n";
    let layout = LineLayout::new(text, region(text), &spans(text, &["use A;", "use B;"]), "");
    assert_eq!(layout.indent(), "    ");
    assert_eq!(layout.render(&[kept(0, "use A;"), kept(1, "use B;")], ""), text);
}

#[test]
fn removed_line_takes_its_trailing_comment_along() {
    let text = "\n\nuse A; // a\nuse B;\n\nclass C {}\n";
    let layout = LineLayout::new(
        text,
        region(text),
        &spans(text, &["use A;", "use B;", "class C {}"]),
        "",
    );
    assert_eq!(
        layout.render(&[kept(1, "use B;"), kept(2, "class C {}")], ""),
        "\n\nuse B;\n\nclass C {}\n"
    );
    assert_eq!(
        layout.render(&[kept(0, "use A;"), kept(2, "class C {}")], ""),
        "\n\nuse A; // a\n\nclass C {}\n"
    );
}

#[test]
fn inserted_lines_use_list_indentation() {
    let text = "\n    protected $a;\n";
    let layout = LineLayout::new(text, region(text), &spans(text, &["protected $a;"]), "");
    let entries = [
        inserted(Slot::Group(1), "use T;"),
        LineEntry {
            kept: Some(0),
            slot: Slot::Group(2),
            text: "protected $a;".to_owned(),
        },
        inserted(Slot::Block, "public function f() {}"),
    ];
    assert_eq!(
        layout.render(&entries, ""),
        "\n    use T;\n\n    protected $a;\n\n    public function f() {}\n"
    );
}

#[test]
fn empty_line_list_opens_up() {
    let layout = LineLayout::new("", Span::DUMMY, &[], "    ");
    assert_eq!(
        layout.render(&[inserted(Slot::Group(0), "use T;")], ""),
        "\n    use T;\n"
    );
    assert_eq!(layout.render(&[], ""), "");
}

#[test]
fn removing_every_line_keeps_tail() {
    let text = "\n    use T;\n";
    let layout = LineLayout::new(text, region(text), &spans(text, &["use T;"]), "");
    assert_eq!(layout.render(&[], ""), "\n");
}

#[test]
fn inline_comma_list() {
    let text = "'a', 'b'";
    let layout = CommaLayout::new(text, region(text), &spans(text, &["'a'", "'b'"]));
    let out = layout.render(&[
        (Some(0), "'a'".to_owned()),
        (Some(1), "'b'".to_owned()),
        (None, "'c'".to_owned()),
    ]);
    assert_eq!(out, "'a', 'b', 'c'");
    assert_eq!(layout.render(&[(Some(1), "'b'".to_owned())]), "'b'");
}

#[test]
fn stacked_comma_list_keeps_trailing_comma() {
    let text = "\n    'a',\n    // b\n    'b',\n    'c',\n";
    let layout = CommaLayout::new(text, region(text), &spans(text, &["'a'", "'b'", "'c'"]));
    assert_eq!(
        layout.render(&[
            (Some(0), "'a'".to_owned()),
            (Some(1), "'b'".to_owned()),
            (Some(2), "'c'".to_owned()),
            (None, "'d'".to_owned()),
        ]),
        "\n    'a',\n    // b\n    'b',\n    'c',\n    'd',\n"
    );
    assert_eq!(
        layout.render(&[(Some(0), "'a'".to_owned()), (Some(2), "'c'".to_owned())]),
        "\n    'a',\n    'c',\n"
    );
    assert_eq!(
        layout.render(&[(Some(1), "'b'".to_owned()), (Some(2), "'c'".to_owned())]),
        "\n    'b',\n    'c',\n"
    );
    assert_eq!(layout.render(&[]), "");
}

#[test]
fn empty_comma_list_joins_inline() {
    let layout = CommaLayout::new("", Span::DUMMY, &[]);
    assert_eq!(
        layout.render(&[(None, "A".to_owned()), (None, "B".to_owned())]),
        "A, B"
    );
}

#[test]
fn indentation_helpers() {
    let text = "class A\n{\n    public function f()\n    {\n\n        return 1;\n    }";
    let offset = text.find("public").unwrap() as u32;
    assert_eq!(line_indent(text, offset), "    ");
    assert_eq!(line_indent(text, 0), "");

    let method = &text[offset as usize..];
    assert_eq!(
        reindent(method, "    ", "        ", "\n"),
        "public function f()\n        {\n\n            return 1;\n        }"
    );
    assert_eq!(reindent("f() {\n  x;\n}", "", "  ", "\n"), "f() {\n    x;\n  }");
}

#[test]
fn crlf_lists_insert_crlf_breaks() {
    let text = "\r\n    use T;\r\n\r\n    protected $a;\r\n";
    let layout = LineLayout::new(text, region(text), &spans(text, &["use T;", "protected $a;"]), "")
        .with_newline("\r\n");
    let entries = [
        kept(0, "use T;"),
        kept(1, "protected $a;"),
        inserted(Slot::Block, "public function f() {}"),
    ];
    assert_eq!(
        layout.render(&entries, ""),
        "\r\n    use T;\r\n\r\n    protected $a;\r\n\r\n    public function f() {}\r\n"
    );

    let text = "\r\n    'a',\r\n";
    let layout = CommaLayout::new(text, region(text), &spans(text, &["'a'"])).with_newline("\r\n");
    assert_eq!(
        layout.render(&[(Some(0), "'a'".to_owned()), (None, "'b'".to_owned())]),
        "\r\n    'a',\r\n    'b',\r\n"
    );
}

#[test]
fn newline_style_follows_the_first_line() {
    assert_eq!(newline_style("<?php\r\nclass A {}\n"), "\r\n");
    assert_eq!(newline_style("<?php\nclass A {}\r\n"), "\n");
    assert_eq!(newline_style("<?php"), "\n");
}
