//! Syntax tree for the subset of PHP the mutation engine understands.
//!
//! Declarations, imports, class members, method bodies and array literals are
//! structured; everything else is an [`Opaque`] node that only records its
//! span and prints verbatim.

mod class;
mod expr;
mod file;
mod name;

pub use class::{
    Block, BodyStmt, ClassKind, ClassLike, Member, Method, Modifiers, Property, PropertyItem,
    TraitUse,
};
pub use expr::{ArrayItem, ArrayLit, Expr, FloatLit, IntLit, StringLit};
pub use file::{File, Namespace, Opaque, ReturnStmt, Stmt, UseDecl, UseItem, UseKind};
pub use name::{normalize_name, simple_name, Ident, Name};

#[cfg(test)]
mod tests;
