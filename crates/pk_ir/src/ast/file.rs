use super::class::{ClassKind, ClassLike};
use super::expr::{ArrayLit, Expr};
use super::name::{Ident, Name};
use crate::node_id::impl_node;
use crate::{NodeId, Span};

/// A parsed source file.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// Region holding the top-level statements: after the opening tag to EOF.
    pub body: Span,
    pub stmts: Vec<Stmt>,
}

impl File {
    /// Statements of the declaration unit: the body of the first namespace
    /// when the file declares one, otherwise the top-level list.
    pub fn unit(&self) -> &[Stmt] {
        self.stmts
            .iter()
            .find_map(|stmt| match stmt {
                Stmt::Namespace(ns) => Some(ns.stmts.as_slice()),
                _ => None,
            })
            .unwrap_or(self.stmts.as_slice())
    }

    /// Run `f` on the declaration unit's statement list.
    pub fn with_unit_mut<R>(&mut self, f: impl FnOnce(&mut Vec<Stmt>) -> R) -> R {
        let index = self
            .stmts
            .iter()
            .position(|stmt| matches!(stmt, Stmt::Namespace(_)));
        if let Some(index) = index {
            if let Stmt::Namespace(ns) = &mut self.stmts[index] {
                return f(&mut ns.stmts);
            }
        }
        f(&mut self.stmts)
    }

    /// Class-like declarations of the declaration unit, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &ClassLike> {
        self.unit().iter().filter_map(|stmt| match stmt {
            Stmt::ClassLike(class) => Some(class),
            _ => None,
        })
    }

    /// Whether the unit declares a class-like of one of `kinds`.
    pub fn declares_any(&self, kinds: &[ClassKind]) -> bool {
        self.declarations().any(|class| kinds.contains(&class.kind))
    }

    /// Array literal returned by the first top-level `return` statement, as
    /// in configuration files.
    pub fn returned_array(&self) -> Option<&ArrayLit> {
        self.unit().iter().find_map(|stmt| match stmt {
            Stmt::Return(ReturnStmt {
                expr: Some(Expr::Array(array)),
                ..
            }) => Some(array),
            _ => None,
        })
    }
}

/// Top-level or namespace-level statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Namespace(Namespace),
    Use(UseDecl),
    ClassLike(ClassLike),
    Return(ReturnStmt),
    Declare(Opaque),
    Other(Opaque),
}

impl crate::Node for Stmt {
    fn origin(&self) -> Option<NodeId> {
        match self {
            Stmt::Namespace(n) => n.origin,
            Stmt::Use(n) => n.origin,
            Stmt::ClassLike(n) => n.origin,
            Stmt::Return(n) => n.origin,
            Stmt::Declare(n) | Stmt::Other(n) => n.origin,
        }
    }

    fn span(&self) -> Span {
        match self {
            Stmt::Namespace(n) => n.span,
            Stmt::Use(n) => n.span,
            Stmt::ClassLike(n) => n.span,
            Stmt::Return(n) => n.span,
            Stmt::Declare(n) | Stmt::Other(n) => n.span,
        }
    }
}

/// `namespace Foo;` followed by its statements, or `namespace Foo { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Namespace {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub name: Option<Name>,
    pub braced: bool,
    /// Region holding `stmts`: inside the braces, or after the `;`.
    pub body: Span,
    pub stmts: Vec<Stmt>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UseKind {
    Normal,
    Function,
    Const,
}

/// An import statement: `use A\B;`, `use A, B as C;`, `use A\{B, C};`.
#[derive(Clone, Debug, PartialEq)]
pub struct UseDecl {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub kind: UseKind,
    /// Shared prefix of a group use.
    pub prefix: Option<Name>,
    /// Region holding the comma-separated items.
    pub items_region: Span,
    pub items: Vec<UseItem>,
}

impl UseDecl {
    /// A fresh `use <name>;` statement.
    pub fn synthetic(name: impl Into<String>) -> Self {
        UseDecl {
            origin: None,
            span: Span::DUMMY,
            kind: UseKind::Normal,
            prefix: None,
            items_region: Span::DUMMY,
            items: vec![UseItem {
                origin: None,
                span: Span::DUMMY,
                kind: None,
                name: Name::synthetic(name),
                alias: None,
            }],
        }
    }

    /// Fully qualified name of `item` (group prefix applied, no leading `\`).
    pub fn qualified(&self, item: &UseItem) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}\\{}", prefix.normalized(), item.name.normalized()),
            None => item.name.normalized().to_owned(),
        }
    }

    /// Whether this statement imports class names (as opposed to functions
    /// or constants).
    pub fn imports_classes(&self) -> bool {
        self.kind == UseKind::Normal
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UseItem {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// Per-item kind inside a mixed group use.
    pub kind: Option<UseKind>,
    pub name: Name,
    pub alias: Option<Ident>,
}

/// `return <expr>;`, at top level or directly inside a method body.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub expr: Option<Expr>,
}

/// A construct outside the structured subset.
#[derive(Clone, Debug, PartialEq)]
pub struct Opaque {
    pub origin: Option<NodeId>,
    pub span: Span,
}

impl_node!(Namespace, UseDecl, UseItem, ReturnStmt, Opaque);
