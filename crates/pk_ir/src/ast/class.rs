use bitflags::bitflags;

use super::expr::{ArrayLit, Expr};
use super::file::{Opaque, ReturnStmt};
use super::name::{Ident, Name};
use crate::node_id::impl_node;
use crate::{NodeId, Span};

bitflags! {
    /// Declaration and member modifiers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const ABSTRACT = 1 << 4;
        const FINAL = 1 << 5;
        const READONLY = 1 << 6;
        const VAR = 1 << 7;
    }
}

impl Modifiers {
    /// Modifier for a keyword, matched case-insensitively.
    pub fn from_keyword(word: &str) -> Option<Modifiers> {
        let flag = match word.to_ascii_lowercase().as_str() {
            "public" => Modifiers::PUBLIC,
            "protected" => Modifiers::PROTECTED,
            "private" => Modifiers::PRIVATE,
            "static" => Modifiers::STATIC,
            "abstract" => Modifiers::ABSTRACT,
            "final" => Modifiers::FINAL,
            "readonly" => Modifiers::READONLY,
            "var" => Modifiers::VAR,
            _ => return None,
        };
        Some(flag)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassKind {
    Class,
    Interface,
    Trait,
    Enum,
}

impl ClassKind {
    pub fn from_keyword(word: &str) -> Option<ClassKind> {
        match word.to_ascii_lowercase().as_str() {
            "class" => Some(ClassKind::Class),
            "interface" => Some(ClassKind::Interface),
            "trait" => Some(ClassKind::Trait),
            "enum" => Some(ClassKind::Enum),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
            ClassKind::Enum => "enum",
        }
    }
}

/// Class, interface, trait or enum declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassLike {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub kind: ClassKind,
    pub modifiers: Modifiers,
    pub name: Ident,
    pub extends: Vec<Name>,
    pub implements: Vec<Name>,
    /// Whole `implements` clause, from the end of the token before the
    /// keyword through the last name.
    pub implements_clause: Option<Span>,
    /// Region covering the implemented names.
    pub implements_region: Span,
    /// Offset where a new `implements` clause is inserted.
    pub implements_anchor: u32,
    /// Region between the braces.
    pub body: Span,
    pub members: Vec<Member>,
}

impl ClassLike {
    /// Trait-use clauses in member order.
    pub fn trait_uses(&self) -> impl Iterator<Item = &TraitUse> {
        self.members.iter().filter_map(|member| match member {
            Member::TraitUse(clause) => Some(clause),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Whether any trait-use clause names `simple` (compared by last segment).
    pub fn uses_trait(&self, simple: &str) -> bool {
        self.trait_uses()
            .flat_map(|clause| clause.names.iter())
            .any(|name| name.simple() == simple)
    }

    pub fn implements_interface(&self, simple: &str) -> bool {
        self.implements.iter().any(|name| name.simple() == simple)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods()
            .any(|method| method.name.text.eq_ignore_ascii_case(name))
    }

    /// Array edited by array operations addressed to `target`.
    ///
    /// Scans direct members in order: a property named `target` with an
    /// array default wins; a method named `target` resolves to the array of
    /// its first `return [...]` statement, or to nothing.
    pub fn target_array_mut(&mut self, target: &str) -> Option<&mut ArrayLit> {
        for member in &mut self.members {
            match member {
                Member::Property(property) => {
                    for item in &mut property.items {
                        if item.name.text == target {
                            if let Some(Expr::Array(array)) = &mut item.default {
                                return Some(array);
                            }
                        }
                    }
                }
                Member::Method(method) if method.name.text == target => {
                    return method.returned_array_mut();
                }
                _ => {}
            }
        }
        None
    }
}

/// Direct member of a class-like body.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    TraitUse(TraitUse),
    Property(Property),
    Method(Method),
    /// Constants, enum cases and anything else kept verbatim.
    Other(Opaque),
}

impl Member {
    pub fn is_method(&self) -> bool {
        matches!(self, Member::Method(_))
    }
}

impl crate::Node for Member {
    fn origin(&self) -> Option<NodeId> {
        match self {
            Member::TraitUse(n) => n.origin,
            Member::Property(n) => n.origin,
            Member::Method(n) => n.origin,
            Member::Other(n) => n.origin,
        }
    }

    fn span(&self) -> Span {
        match self {
            Member::TraitUse(n) => n.span,
            Member::Property(n) => n.span,
            Member::Method(n) => n.span,
            Member::Other(n) => n.span,
        }
    }
}

/// `use A, B;` inside a class body, with an optional adaptation block.
#[derive(Clone, Debug, PartialEq)]
pub struct TraitUse {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// Region covering the trait names.
    pub names_region: Span,
    pub names: Vec<Name>,
    /// `{ ... }` conflict-resolution block, kept verbatim.
    pub adaptations: Option<Span>,
}

impl TraitUse {
    pub fn synthetic(names: Vec<Name>) -> Self {
        TraitUse {
            origin: None,
            span: Span::DUMMY,
            names_region: Span::DUMMY,
            names,
            adaptations: None,
        }
    }
}

/// Property declaration; one statement may declare several properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub modifiers: Modifiers,
    pub items: Vec<PropertyItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyItem {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// Name without the leading `$`.
    pub name: Ident,
    pub default: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub modifiers: Modifiers,
    pub name: Ident,
    /// `None` for abstract and interface methods.
    pub body: Option<Block>,
}

impl Method {
    /// Array of the first direct `return [...]` statement.
    pub fn returned_array_mut(&mut self) -> Option<&mut ArrayLit> {
        self.body.as_mut()?.stmts.iter_mut().find_map(|stmt| match stmt {
            BodyStmt::Return(ReturnStmt {
                expr: Some(Expr::Array(array)),
                ..
            }) => Some(array),
            _ => None,
        })
    }
}

/// Braced method body; only direct statements are parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub body: Span,
    pub stmts: Vec<BodyStmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BodyStmt {
    Return(ReturnStmt),
    Other(Opaque),
}

impl crate::Node for BodyStmt {
    fn origin(&self) -> Option<NodeId> {
        match self {
            BodyStmt::Return(n) => n.origin,
            BodyStmt::Other(n) => n.origin,
        }
    }

    fn span(&self) -> Span {
        match self {
            BodyStmt::Return(n) => n.span,
            BodyStmt::Other(n) => n.span,
        }
    }
}

impl_node!(ClassLike, TraitUse, Property, PropertyItem, Method, Block);
