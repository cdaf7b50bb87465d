//! The mutation contract and the closed set of edits.

use pk_ir::{File, SourceMap, VisitorMut};

use crate::ops::{
    AddImport, AddInterface, AddMethod, AddToArray, AddTrait, RemoveFromArray, RemoveImport,
    RemoveInterface, RemoveMethod, RemoveTrait, SetConfigValue,
};
use crate::{EditError, Scalar};

/// A tree edit.
///
/// [`Mutation::before_traverse`] runs once for every queued edit before any
/// edit touches the tree; a failure there aborts the whole queue. The
/// pipeline then walks the working tree once per edit, in queue order, with
/// the [`VisitorMut`] hooks.
pub trait Mutation: VisitorMut {
    /// Check preconditions against the unmodified tree and prepare state.
    /// Snippets parsed here go into `sources`.
    fn before_traverse(&mut self, _file: &File, _sources: &mut SourceMap) -> Result<(), EditError> {
        Ok(())
    }
}

/// One queued edit.
#[derive(Clone, Debug, PartialEq)]
pub enum Edit {
    AddImport(AddImport),
    RemoveImport(RemoveImport),
    AddTrait(AddTrait),
    RemoveTrait(RemoveTrait),
    AddInterface(AddInterface),
    RemoveInterface(RemoveInterface),
    AddMethod(AddMethod),
    RemoveMethod(RemoveMethod),
    AddToArray(AddToArray),
    RemoveFromArray(RemoveFromArray),
    SetConfigValue(SetConfigValue),
}

macro_rules! each_edit {
    ($edit:expr, $op:ident => $body:expr) => {
        match $edit {
            Edit::AddImport($op) => $body,
            Edit::RemoveImport($op) => $body,
            Edit::AddTrait($op) => $body,
            Edit::RemoveTrait($op) => $body,
            Edit::AddInterface($op) => $body,
            Edit::RemoveInterface($op) => $body,
            Edit::AddMethod($op) => $body,
            Edit::RemoveMethod($op) => $body,
            Edit::AddToArray($op) => $body,
            Edit::RemoveFromArray($op) => $body,
            Edit::SetConfigValue($op) => $body,
        }
    };
}

impl Edit {
    pub fn add_import(name: impl Into<String>) -> Self {
        Edit::AddImport(AddImport::new(name))
    }

    pub fn remove_import(name: impl Into<String>) -> Self {
        Edit::RemoveImport(RemoveImport::new(name))
    }

    pub fn add_trait(name: impl Into<String>) -> Self {
        Edit::AddTrait(AddTrait::new(name))
    }

    pub fn remove_trait(name: impl Into<String>) -> Self {
        Edit::RemoveTrait(RemoveTrait::new(name))
    }

    pub fn add_interface(name: impl Into<String>) -> Self {
        Edit::AddInterface(AddInterface::new(name))
    }

    pub fn remove_interface(name: impl Into<String>) -> Self {
        Edit::RemoveInterface(RemoveInterface::new(name))
    }

    /// `code` is a complete method declaration.
    pub fn add_method(code: impl Into<String>) -> Self {
        Edit::AddMethod(AddMethod::new(code))
    }

    pub fn remove_method(name: impl Into<String>) -> Self {
        Edit::RemoveMethod(RemoveMethod::new(name))
    }

    /// Append `value` without a key to the array named `target`.
    pub fn add_to_array(target: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Edit::AddToArray(AddToArray::new(target, None, value.into()))
    }

    pub fn add_to_array_keyed(
        target: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Self {
        Edit::AddToArray(AddToArray::new(target, Some(key.into()), value.into()))
    }

    /// Drop entries of `target` whose key, or unkeyed string value, is
    /// `search`.
    pub fn remove_from_array(target: impl Into<String>, search: impl Into<String>) -> Self {
        Edit::RemoveFromArray(RemoveFromArray::new(target, search))
    }

    /// Set the dotted `key_path` of a configuration file's returned array.
    pub fn set_config(key_path: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Edit::SetConfigValue(SetConfigValue::new(key_path, value.into()))
    }

    /// Operation name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Edit::AddImport(_) => "add-import",
            Edit::RemoveImport(_) => "remove-import",
            Edit::AddTrait(_) => "add-trait",
            Edit::RemoveTrait(_) => "remove-trait",
            Edit::AddInterface(_) => "add-interface",
            Edit::RemoveInterface(_) => "remove-interface",
            Edit::AddMethod(_) => "add-method",
            Edit::RemoveMethod(_) => "remove-method",
            Edit::AddToArray(_) => "add-to-array",
            Edit::RemoveFromArray(_) => "remove-from-array",
            Edit::SetConfigValue(_) => "set-config",
        }
    }
}

impl VisitorMut for Edit {
    fn visit_file(&mut self, file: &mut File) {
        each_edit!(self, op => op.visit_file(file));
    }
}

impl Mutation for Edit {
    fn before_traverse(&mut self, file: &File, sources: &mut SourceMap) -> Result<(), EditError> {
        each_edit!(self, op => op.before_traverse(file, sources))
    }
}
