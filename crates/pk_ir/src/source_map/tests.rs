use pretty_assertions::assert_eq;

use super::*;
use crate::{Method, Token, TokenKind};

fn tokens(kinds: &[(TokenKind, u32, u32)]) -> TokenList {
    let mut list = TokenList::new();
    for &(kind, start, end) in kinds {
        list.push(Token::new(kind, Span::new(start, end)));
    }
    list
}

#[test]
fn sources_are_appended_after_each_other() {
    let mut map = SourceMap::new();
    let first = map
        .push_source("<?php", &tokens(&[(TokenKind::OpenTag, 0, 5)]))
        .unwrap();
    let second = map
        .push_source("foo", &tokens(&[(TokenKind::Ident, 0, 3)]))
        .unwrap();

    assert_eq!(first.span, Span::new(0, 5));
    assert_eq!(second.span, Span::new(5, 8));
    assert_eq!(second.first_token, 1);
    assert_eq!(second.end_token, 2);
    assert_eq!(map.slice(second.span), "foo");
    assert_eq!(map.tokens().get(1).map(|t| t.span), Some(Span::new(5, 8)));
}

#[test]
fn slice_outside_arena_is_empty() {
    let map = SourceMap::new();
    assert_eq!(map.slice(Span::new(3, 9)), "");
}

#[test]
fn reserve_ids_never_goes_backwards() {
    let mut map = SourceMap::new();
    map.reserve_ids(10);
    map.reserve_ids(4);
    assert_eq!(map.next_id(), 10);
}

#[test]
fn fragments_are_keyed_by_origin() {
    let mut map = SourceMap::new();
    let method = Method {
        origin: Some(NodeId::new(7)),
        span: Span::new(0, 3),
        modifiers: crate::Modifiers::PUBLIC,
        name: crate::Ident::synthetic("boot"),
        body: None,
    };
    map.register_fragment(Member::Method(method.clone()));
    assert_eq!(map.fragment(NodeId::new(7)), Some(&Member::Method(method)));
    assert_eq!(map.fragment(NodeId::new(8)), None);
}

#[test]
fn line_col_is_one_based() {
    let mut map = SourceMap::new();
    map.push_source("ab\ncd", &TokenList::new()).unwrap();
    assert_eq!(map.line_col(0), (1, 1));
    assert_eq!(map.line_col(4), (2, 2));
}
