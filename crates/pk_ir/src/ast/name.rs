use crate::node_id::impl_node;
use crate::{NodeId, Span};

/// A possibly-qualified name such as `App\Models\User` or `\Countable`.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub origin: Option<NodeId>,
    pub span: Span,
    /// Source spelling, including any leading `\`.
    pub text: String,
}

impl Name {
    pub fn synthetic(text: impl Into<String>) -> Self {
        Name {
            origin: None,
            span: Span::DUMMY,
            text: text.into(),
        }
    }

    /// Last namespace segment: `User` for `App\Models\User`.
    pub fn simple(&self) -> &str {
        simple_name(&self.text)
    }

    /// Fully qualified spelling without the leading `\`.
    pub fn normalized(&self) -> &str {
        normalize_name(&self.text)
    }
}

impl_node!(Name);

/// A bare identifier: class, method or property name.
#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub span: Span,
    pub text: String,
}

impl Ident {
    pub fn synthetic(text: impl Into<String>) -> Self {
        Ident {
            span: Span::DUMMY,
            text: text.into(),
        }
    }
}

/// Last segment of a qualified name.
pub fn simple_name(text: &str) -> &str {
    text.rsplit('\\').next().unwrap_or(text)
}

/// Qualified name with any leading `\` removed.
pub fn normalize_name(text: &str) -> &str {
    text.trim_start_matches('\\')
}
