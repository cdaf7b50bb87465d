use super::file::Opaque;
use super::name::Name;
use crate::node_id::impl_node;
use crate::{NodeId, Span};

/// Expression; only literals the mutations read or write are structured.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Array(ArrayLit),
    String(StringLit),
    Int(IntLit),
    Float(FloatLit),
    /// Constant fetch such as `true`, `null` or `PHP_EOL`.
    Const(Name),
    Other(Opaque),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Expr {
        Expr::String(StringLit::synthetic(value))
    }

    pub fn constant(name: impl Into<String>) -> Expr {
        Expr::Const(Name::synthetic(name))
    }

    /// Decoded value when this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(lit) => Some(&lit.value),
            _ => None,
        }
    }
}

impl crate::Node for Expr {
    fn origin(&self) -> Option<NodeId> {
        match self {
            Expr::Array(n) => n.origin,
            Expr::String(n) => n.origin,
            Expr::Int(n) => n.origin,
            Expr::Float(n) => n.origin,
            Expr::Const(n) => n.origin,
            Expr::Other(n) => n.origin,
        }
    }

    fn span(&self) -> Span {
        match self {
            Expr::Array(n) => n.span,
            Expr::String(n) => n.span,
            Expr::Int(n) => n.span,
            Expr::Float(n) => n.span,
            Expr::Const(n) => n.span,
            Expr::Other(n) => n.span,
        }
    }
}

/// `[...]` or `array(...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLit {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// `[...]` rather than `array(...)`.
    pub short: bool,
    /// Region between the delimiters.
    pub items_region: Span,
    pub items: Vec<ArrayItem>,
}

impl ArrayLit {
    pub fn synthetic(items: Vec<ArrayItem>) -> Self {
        ArrayLit {
            origin: None,
            span: Span::DUMMY,
            short: true,
            items_region: Span::DUMMY,
            items,
        }
    }

    /// Entry whose key is the string literal `key`.
    pub fn entry(&self, key: &str) -> Option<&ArrayItem> {
        self.items.iter().find(|item| item.has_key(key))
    }

    pub fn entry_mut(&mut self, key: &str) -> Option<&mut ArrayItem> {
        self.items.iter_mut().find(|item| item.has_key(key))
    }

    /// Whether an entry without key holds the string literal `value`.
    pub fn contains_value(&self, value: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.key.is_none() && item.value.as_str() == Some(value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayItem {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub key: Option<Expr>,
    pub value: Expr,
    pub by_ref: bool,
    /// `...$spread`.
    pub unpack: bool,
}

impl ArrayItem {
    pub fn synthetic(key: Option<Expr>, value: Expr) -> Self {
        ArrayItem {
            origin: None,
            span: Span::DUMMY,
            key,
            value,
            by_ref: false,
            unpack: false,
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.key.as_ref().and_then(Expr::as_str) == Some(key)
    }
}

/// String literal with its decoded value.
#[derive(Clone, Debug, PartialEq)]
pub struct StringLit {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub value: String,
}

impl StringLit {
    pub fn synthetic(value: impl Into<String>) -> Self {
        StringLit {
            origin: None,
            span: Span::DUMMY,
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntLit {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub value: i64,
}

impl IntLit {
    pub fn synthetic(value: i64) -> Self {
        IntLit {
            origin: None,
            span: Span::DUMMY,
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatLit {
    pub origin: Option<NodeId>,
    pub span: Span,
    pub value: f64,
}

impl FloatLit {
    pub fn synthetic(value: f64) -> Self {
        FloatLit {
            origin: None,
            span: Span::DUMMY,
            value,
        }
    }
}

impl_node!(ArrayLit, ArrayItem, StringLit, IntLit, FloatLit);
