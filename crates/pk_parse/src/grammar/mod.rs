//! Grammar productions, split by construct.

mod class;
mod expr;
mod file;
mod stmt;

pub(crate) use expr::ExprEnd;
