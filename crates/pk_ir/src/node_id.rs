//! Node identity shared between the reference tree and its working clone.

use std::fmt;

/// Identity of a parsed node.
///
/// Ids are unique within one [`SourceMap`](crate::SourceMap). Cloning a tree
/// copies them, which is how a working node finds its reference counterpart.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Common accessors for every tree node.
pub trait Node {
    /// Id of the parsed node this one was cloned from; `None` for nodes
    /// built by a mutation.
    fn origin(&self) -> Option<NodeId>;

    /// Source span; [`Span::DUMMY`](crate::Span::DUMMY) for synthetic nodes.
    fn span(&self) -> crate::Span;
}

/// Implement [`Node`] for structs carrying `origin` and `span` fields.
macro_rules! impl_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Node for $ty {
                #[inline]
                fn origin(&self) -> Option<$crate::NodeId> {
                    self.origin
                }

                #[inline]
                fn span(&self) -> $crate::Span {
                    self.span
                }
            }
        )*
    };
}

pub(crate) use impl_node;
