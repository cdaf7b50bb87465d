//! postkit IR - syntax tree and source bookkeeping
//!
//! This crate holds the data shared by the lexer, parser, printer and the
//! mutation operations:
//! - [`Span`] and [`Token`]/[`TokenList`] for lossless source positions
//! - the syntax tree ([`File`], [`ClassLike`], [`Expr`], ...)
//! - [`SourceMap`], the append-only text arena and node-id allocator
//! - [`VisitorMut`], the pre-order walker mutations plug into
//!
//! # Two-tree model
//!
//! Every parsed node carries `origin: Some(NodeId)`. The mutation pipeline
//! clones the parsed tree; clones keep their ids, so each node of the working
//! tree points back at its reference counterpart. Nodes built by a mutation
//! carry `origin: None` and [`Span::DUMMY`].

mod ast;
mod node_id;
mod source_map;
mod span;
mod token;
pub mod visitor;

pub use ast::{
    normalize_name, simple_name, ArrayItem, ArrayLit, Block, BodyStmt, ClassKind, ClassLike, Expr,
    File, FloatLit, Ident, IntLit, Member, Method, Modifiers, Name, Namespace, Opaque, Property,
    PropertyItem, ReturnStmt, Stmt, StringLit, TraitUse, UseDecl, UseItem, UseKind,
};
pub use node_id::{Node, NodeId};
pub use source_map::{SourceMap, SourceRange};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use visitor::VisitorMut;
