use pretty_assertions::assert_eq;

use super::*;
use crate::{NodeId, Span};

fn opaque() -> Opaque {
    Opaque {
        origin: None,
        span: Span::DUMMY,
    }
}

fn class(kind: ClassKind, members: Vec<Member>) -> ClassLike {
    ClassLike {
        origin: None,
        span: Span::DUMMY,
        kind,
        modifiers: Modifiers::empty(),
        name: Ident::synthetic("User"),
        extends: Vec::new(),
        implements: vec![Name::synthetic("Illuminate\\Contracts\\Auth\\MustVerifyEmail")],
        implements_clause: None,
        implements_region: Span::DUMMY,
        implements_anchor: 0,
        body: Span::DUMMY,
        members,
    }
}

fn array(values: &[&str]) -> ArrayLit {
    ArrayLit::synthetic(
        values
            .iter()
            .map(|v| ArrayItem::synthetic(None, Expr::string(*v)))
            .collect(),
    )
}

fn method_returning(name: &str, ret: Option<Expr>) -> Member {
    Member::Method(Method {
        origin: None,
        span: Span::DUMMY,
        modifiers: Modifiers::PUBLIC,
        name: Ident::synthetic(name),
        body: Some(Block {
            origin: None,
            span: Span::DUMMY,
            body: Span::DUMMY,
            stmts: vec![
                BodyStmt::Other(opaque()),
                BodyStmt::Return(ReturnStmt {
                    origin: None,
                    span: Span::DUMMY,
                    expr: ret,
                }),
            ],
        }),
    })
}

#[test]
fn names_split_on_backslash() {
    assert_eq!(simple_name("App\\Models\\User"), "User");
    assert_eq!(simple_name("User"), "User");
    assert_eq!(normalize_name("\\App\\User"), "App\\User");
    assert_eq!(Name::synthetic("\\Countable").simple(), "Countable");
}

#[test]
fn group_use_qualifies_items_with_prefix() {
    let mut decl = UseDecl::synthetic("Post");
    decl.prefix = Some(Name::synthetic("\\App\\Models"));
    let item = decl.items[0].clone();
    assert_eq!(decl.qualified(&item), "App\\Models\\Post");
}

#[test]
fn unit_prefers_first_namespace_body() {
    let namespace = Namespace {
        origin: Some(NodeId::new(1)),
        span: Span::DUMMY,
        name: Some(Name::synthetic("App")),
        braced: false,
        body: Span::DUMMY,
        stmts: vec![Stmt::ClassLike(class(ClassKind::Class, Vec::new()))],
    };
    let mut file = File {
        origin: None,
        span: Span::DUMMY,
        body: Span::DUMMY,
        stmts: vec![Stmt::Declare(opaque()), Stmt::Namespace(namespace)],
    };

    assert_eq!(file.unit().len(), 1);
    assert!(file.declares_any(&[ClassKind::Class]));
    assert!(!file.declares_any(&[ClassKind::Trait]));

    file.with_unit_mut(|stmts| stmts.push(Stmt::Other(opaque())));
    assert_eq!(file.unit().len(), 2);
    assert_eq!(file.stmts.len(), 2);
}

#[test]
fn unit_without_namespace_is_top_level() {
    let mut file = File {
        origin: None,
        span: Span::DUMMY,
        body: Span::DUMMY,
        stmts: vec![Stmt::Return(ReturnStmt {
            origin: None,
            span: Span::DUMMY,
            expr: Some(Expr::Array(array(&["a"]))),
        })],
    };
    assert!(file.returned_array().is_some());
    file.with_unit_mut(Vec::clear);
    assert!(file.stmts.is_empty());
}

#[test]
fn interface_and_trait_checks_use_simple_names() {
    let mut c = class(ClassKind::Class, Vec::new());
    c.members.push(Member::TraitUse(TraitUse::synthetic(vec![Name::synthetic(
        "Illuminate\\Database\\Eloquent\\SoftDeletes",
    )])));
    assert!(c.implements_interface("MustVerifyEmail"));
    assert!(c.uses_trait("SoftDeletes"));
    assert!(!c.uses_trait("HasFactory"));
}

#[test]
fn target_array_prefers_property_with_array_default() {
    let property = Member::Property(Property {
        origin: None,
        span: Span::DUMMY,
        modifiers: Modifiers::PROTECTED,
        items: vec![PropertyItem {
            origin: None,
            span: Span::DUMMY,
            name: Ident::synthetic("casts"),
            default: Some(Expr::Array(array(&["p"]))),
        }],
    });
    let method = method_returning("casts", Some(Expr::Array(array(&["m"]))));
    let mut c = class(ClassKind::Class, vec![method, property]);

    let found = c.target_array_mut("casts").map(|a| a.contains_value("m"));
    assert_eq!(found, Some(true));
}

#[test]
fn target_array_method_without_return_array_is_none() {
    let method = method_returning("casts", Some(Expr::string("nope")));
    let property = Member::Property(Property {
        origin: None,
        span: Span::DUMMY,
        modifiers: Modifiers::PROTECTED,
        items: vec![PropertyItem {
            origin: None,
            span: Span::DUMMY,
            name: Ident::synthetic("casts"),
            default: Some(Expr::Array(array(&["p"]))),
        }],
    });
    let mut c = class(ClassKind::Class, vec![method, property]);
    assert!(c.target_array_mut("casts").is_none());
}

#[test]
fn array_entries_by_key_and_value() {
    let mut arr = array(&["auth"]);
    arr.items
        .push(ArrayItem::synthetic(Some(Expr::string("name")), Expr::string("x")));
    assert!(arr.contains_value("auth"));
    assert!(!arr.contains_value("x"));
    assert!(arr.entry("name").is_some());
    assert!(arr.entry("auth").is_none());
}

#[test]
fn modifiers_from_keywords() {
    assert_eq!(Modifiers::from_keyword("Protected"), Some(Modifiers::PROTECTED));
    assert_eq!(Modifiers::from_keyword("function"), None);
    assert_eq!(ClassKind::from_keyword("ENUM"), Some(ClassKind::Enum));
}
