use pk_ir::{BodyStmt, ClassKind, Expr, Member, Node, SourceMap, Stmt, UseKind};
use pretty_assertions::assert_eq;

use super::*;

fn parse(source: &str) -> (pk_ir::File, SourceMap) {
    let mut sources = SourceMap::new();
    let file = parse_file(&mut sources, source).unwrap();
    (file, sources)
}

fn class(file: &pk_ir::File) -> &pk_ir::ClassLike {
    file.declarations().next().expect("class declaration")
}

const MODEL: &str = "<?php

namespace App\\Models;

use Illuminate\\Database\\Eloquent\\Factories\\HasFactory;
use Illuminate\\Foundation\\Auth\\User as Authenticatable;

#[Fillable]
final class User extends Authenticatable implements \\Countable, HasName
{
    use HasFactory, Notifiable;

    const ROLE = 'user';

    /** @var list<string> */
    protected $fillable = [
        'name',
        'email',
    ];

    protected array $casts = ['email_verified_at' => 'datetime', 'age' => 3];

    public function count(): int
    {
        $x = 1;
        return 0;
    }

    abstract protected function name(): string;
}
";

#[test]
fn parses_namespaced_model() {
    let (file, sources) = parse(MODEL);
    assert_eq!(file.stmts.len(), 1);
    let Stmt::Namespace(ns) = &file.stmts[0] else {
        panic!("expected namespace");
    };
    assert!(!ns.braced);
    assert_eq!(ns.name.as_ref().map(|n| n.text.as_str()), Some("App\\Models"));
    assert_eq!(ns.stmts.len(), 3);
    assert_eq!(ns.span.end as usize, MODEL.trim_end().len());

    let Stmt::Use(first) = &ns.stmts[0] else {
        panic!("expected use");
    };
    assert_eq!(
        first.qualified(&first.items[0]),
        "Illuminate\\Database\\Eloquent\\Factories\\HasFactory"
    );
    let Stmt::Use(second) = &ns.stmts[1] else {
        panic!("expected use");
    };
    assert_eq!(
        second.items[0].alias.as_ref().map(|a| a.text.as_str()),
        Some("Authenticatable")
    );

    let user = class(&file);
    assert_eq!(user.kind, ClassKind::Class);
    assert_eq!(user.name.text, "User");
    assert!(user.modifiers.contains(pk_ir::Modifiers::FINAL));
    assert_eq!(user.extends[0].text, "Authenticatable");
    let implemented: Vec<_> = user.implements.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(implemented, vec!["\\Countable", "HasName"]);
    assert_eq!(
        sources.slice(user.implements_clause.unwrap()),
        " implements \\Countable, HasName"
    );
    assert_eq!(sources.slice(user.implements_region), "\\Countable, HasName");
    assert!(sources.slice(user.span).starts_with("#[Fillable]"));
    assert_eq!(user.members.len(), 6);
}

#[test]
fn parses_members() {
    let (file, sources) = parse(MODEL);
    let user = class(&file);

    let Member::TraitUse(traits) = &user.members[0] else {
        panic!("expected trait use");
    };
    assert_eq!(sources.slice(traits.names_region), "HasFactory, Notifiable");
    assert_eq!(sources.slice(traits.span), "use HasFactory, Notifiable;");

    assert!(matches!(user.members[1], Member::Other(_)));

    let Member::Property(fillable) = &user.members[2] else {
        panic!("expected property");
    };
    assert_eq!(fillable.items[0].name.text, "fillable");
    let Some(Expr::Array(array)) = &fillable.items[0].default else {
        panic!("expected array default");
    };
    assert!(array.short);
    let values: Vec<_> = array.items.iter().filter_map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["name", "email"]);
    assert_eq!(
        sources.slice(array.items_region),
        "\n        'name',\n        'email',\n    "
    );

    let Member::Property(casts) = &user.members[3] else {
        panic!("expected property");
    };
    let Some(Expr::Array(casts)) = &casts.items[0].default else {
        panic!("expected array default");
    };
    assert!(casts.entry("email_verified_at").is_some());
    assert!(matches!(
        casts.entry("age").map(|i| &i.value),
        Some(Expr::Int(lit)) if lit.value == 3
    ));

    let Member::Method(count) = &user.members[4] else {
        panic!("expected method");
    };
    assert_eq!(count.name.text, "count");
    let body = count.body.as_ref().unwrap();
    assert_eq!(body.stmts.len(), 2);
    assert!(matches!(body.stmts[1], BodyStmt::Return(_)));

    let Member::Method(abstract_method) = &user.members[5] else {
        panic!("expected method");
    };
    assert!(abstract_method.body.is_none());
    assert!(abstract_method
        .modifiers
        .contains(pk_ir::Modifiers::ABSTRACT | pk_ir::Modifiers::PROTECTED));
}

#[test]
fn every_node_has_unique_origin() {
    let (file, _) = parse(MODEL);
    let user = class(&file);
    let mut ids: Vec<_> = user
        .members
        .iter()
        .map(Node::origin)
        .chain(user.implements.iter().map(Node::origin))
        .chain(std::iter::once(file.origin))
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(ids.iter().all(Option::is_some));
}

#[test]
fn group_and_function_imports() {
    let (file, sources) = parse("<?php\nuse App\\{Models\\User, function helper as h,};\nuse const A\\B;\n");
    let Stmt::Use(group) = &file.stmts[0] else {
        panic!("expected use");
    };
    assert_eq!(group.prefix.as_ref().map(|p| p.text.as_str()), Some("App"));
    assert_eq!(group.items.len(), 2);
    assert_eq!(group.qualified(&group.items[0]), "App\\Models\\User");
    assert_eq!(group.items[1].kind, Some(UseKind::Function));
    assert_eq!(
        sources.slice(group.items_region),
        "Models\\User, function helper as h,"
    );

    let Stmt::Use(constant) = &file.stmts[1] else {
        panic!("expected use");
    };
    assert_eq!(constant.kind, UseKind::Const);
}

#[test]
fn config_file_return() {
    let (file, sources) = parse(
        "<?php\n\nreturn [\n    'name' => env('APP_NAME', 'Laravel'),\n    'debug' => (bool) env('APP_DEBUG', false),\n    'nested' => array('a' => -1.5, 'b' => null),\n];\n",
    );
    let array = file.returned_array().unwrap();
    assert_eq!(array.items.len(), 3);
    assert!(matches!(array.entry("name").map(|i| &i.value), Some(Expr::Other(_))));
    assert_eq!(
        sources.slice(array.entry("debug").unwrap().value.span()),
        "(bool) env('APP_DEBUG', false)"
    );
    let Some(Expr::Array(nested)) = array.entry("nested").map(|i| &i.value) else {
        panic!("expected nested array");
    };
    assert!(!nested.short);
    assert!(matches!(
        nested.entry("a").map(|i| &i.value),
        Some(Expr::Float(lit)) if lit.value == -1.5
    ));
    assert!(matches!(
        nested.entry("b").map(|i| &i.value),
        Some(Expr::Const(name)) if name.text == "null"
    ));
}

#[test]
fn array_prefix_of_larger_expression_is_opaque() {
    let (file, sources) = parse("<?php return ['a'] + $defaults;");
    let Stmt::Return(ret) = &file.stmts[0] else {
        panic!("expected return");
    };
    let expr = ret.expr.as_ref().unwrap();
    assert!(matches!(expr, Expr::Other(_)));
    assert_eq!(sources.slice(expr.span()), "['a'] + $defaults");
}

#[test]
fn array_with_empty_slot_is_opaque() {
    let (file, _) = parse("<?php return [1, , 2];");
    let Stmt::Return(ret) = &file.stmts[0] else {
        panic!("expected return");
    };
    assert!(matches!(ret.expr, Some(Expr::Other(_))));
}

#[test]
fn opaque_statements_keep_control_flow_together() {
    let (file, sources) = parse(
        "<?php\nif ($a) { foo(); } elseif ($b) { bar(); } else { baz(); }\n$f = function () { return 1; };\ntry { x(); } catch (E $e) { } finally { }\necho 1;\n",
    );
    let texts: Vec<_> = file.stmts.iter().map(|s| sources.slice(s.span())).collect();
    assert_eq!(
        texts,
        vec![
            "if ($a) { foo(); } elseif ($b) { bar(); } else { baz(); }",
            "$f = function () { return 1; };",
            "try { x(); } catch (E $e) { } finally { }",
            "echo 1;",
        ]
    );
}

#[test]
fn braced_namespaces_and_declare() {
    let (file, sources) = parse("<?php\ndeclare(strict_types=1);\nnamespace A {\n    class B {}\n}\n");
    assert!(matches!(file.stmts[0], Stmt::Declare(_)));
    let Stmt::Namespace(ns) = &file.stmts[1] else {
        panic!("expected namespace");
    };
    assert!(ns.braced);
    assert_eq!(sources.slice(ns.body), "\n    class B {}\n");
    assert_eq!(file.unit().len(), 1);
}

#[test]
fn enum_and_interface_headers() {
    let (file, sources) =
        parse("<?php\nenum Suit: string implements HasLabel\n{\n    case Hearts = 'H';\n}\ninterface Named {}\n");
    let decls: Vec<_> = file.declarations().map(|c| c.kind).collect();
    assert_eq!(decls, vec![ClassKind::Enum, ClassKind::Interface]);
    let suit = class(&file);
    assert_eq!(sources.slice(suit.implements_region), "HasLabel");
    assert!(matches!(suit.members[0], Member::Other(_)));

    let named = file.declarations().nth(1).unwrap();
    assert_eq!(named.implements_clause, None);
    let name_end = sources.text().find("Named").unwrap() + "Named".len();
    assert_eq!(named.implements_anchor as usize, name_end);
}

#[test]
fn file_body_starts_after_open_tag() {
    let (file, sources) = parse("#!/usr/bin/env php\n<?php\necho 1;\n");
    assert_eq!(sources.slice(file.body), "\necho 1;\n");
    assert_eq!(file.stmts.len(), 1);
}

#[test]
fn method_snippet_parses_into_arena() {
    let mut sources = SourceMap::new();
    parse_file(&mut sources, "<?php class A {}").unwrap();
    let method = parse_method(
        &mut sources,
        "    /** Boot. */\n    public function boot(): void\n    {\n        //\n    }",
    )
    .unwrap()
    .unwrap();
    assert_eq!(method.name.text, "boot");
    assert!(sources.slice(method.span).starts_with("/** Boot. */"));
    assert!(sources.slice(method.span).ends_with('}'));
    assert!(method.origin.unwrap().raw() >= 3);
}

#[test]
fn snippet_without_method_is_none() {
    let mut sources = SourceMap::new();
    assert_eq!(parse_method(&mut sources, "public $x = 1;").unwrap(), None);
}

#[test]
fn comments_above_a_node_belong_to_it() {
    let (file, sources) = parse(
        "<?php\nclass A\n{\n    public $a = 1; // trailing\n    // Boot the model.\n    /** @return void */\n    public function boot() {}\n}\n",
    );
    let a = class(&file);
    assert_eq!(sources.slice(a.members[0].span()), "public $a = 1;");
    assert!(sources
        .slice(a.members[1].span())
        .starts_with("// Boot the model."));
}

#[test]
fn errors_carry_spans() {
    let mut sources = SourceMap::new();
    let err = parse_file(&mut sources, "<?php\nclass A {\n    public function x() {\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof { expected: "`}`" });
    assert_eq!(err.describe(&sources), "4:1: expected `}`, found end of input");

    let mut sources = SourceMap::new();
    let err = parse_file(&mut sources, "<?php\nfoo(1, [2;\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Unclosed("`[`"));
    assert_eq!(err.describe(&sources), "2:8: unclosed delimiter `[`");

    let mut sources = SourceMap::new();
    let err = parse_file(&mut sources, "<?php\n}").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));

    let mut sources = SourceMap::new();
    let err = parse_file(&mut sources, "<?php $a = 'unterminated;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidToken);
}
