//! Format-preserving edits of PHP application files.
//!
//! [`apply`] runs a queue of [`Edit`]s over source text:
//!
//! 1. parse the text into the reference tree;
//! 2. run every edit's [`Mutation::before_traverse`] against it, so a failed
//!    precondition aborts before anything changes;
//! 3. clone the reference into a working tree and walk it once per edit;
//! 4. print the working tree against the reference, reusing original text
//!    for every node no edit touched.
//!
//! [`PhpFile`] wraps the same pipeline around a file on disk.

mod error;
mod mutation;
mod ops;
mod php_file;
mod scalar;

use pk_ir::{SourceMap, VisitorMut};

pub use error::EditError;
pub use mutation::{Edit, Mutation};
pub use ops::{
    AddImport, AddInterface, AddMethod, AddToArray, AddTrait, RemoveFromArray, RemoveImport,
    RemoveInterface, RemoveMethod, RemoveTrait, SetConfigValue,
};
pub use php_file::PhpFile;
pub use scalar::Scalar;

/// Apply `edits` in order to `source` and return the new text.
///
/// With no edits the result is `source` unchanged.
pub fn apply(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    let mut sources = SourceMap::new();
    let reference = pk_parse::parse_file(&mut sources, source)?;

    let mut edits = edits.to_vec();
    for edit in &mut edits {
        edit.before_traverse(&reference, &mut sources)?;
    }

    let mut working = reference.clone();
    for edit in &mut edits {
        tracing::debug!(edit = edit.name(), "applying edit");
        edit.visit_file(&mut working);
    }

    Ok(pk_print::print(&working, &reference, &sources))
}
