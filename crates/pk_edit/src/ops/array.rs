use pk_ir::{ArrayItem, ClassLike, Expr, VisitorMut};

use super::{FirstDeclaration, CLASSES};
use crate::{Mutation, Scalar};

/// Append an entry to a class array: a property default or the array a
/// method returns.
///
/// A keyed entry is skipped when the key exists; an unkeyed one when an
/// unkeyed entry already holds the same literal. An unresolved target is
/// not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct AddToArray {
    target: String,
    key: Option<String>,
    value: Scalar,
    first: FirstDeclaration,
}

impl AddToArray {
    pub fn new(target: impl Into<String>, key: Option<String>, value: Scalar) -> Self {
        AddToArray {
            target: target.into(),
            key,
            value,
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for AddToArray {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let Some(array) = class.target_array_mut(&self.target) else {
            tracing::debug!(array = %self.target, "no array to add to");
            return;
        };

        let present = match &self.key {
            Some(key) => array.entry(key).is_some(),
            None => array
                .items
                .iter()
                .any(|item| item.key.is_none() && self.value.matches(&item.value)),
        };
        if present {
            return;
        }
        let key = self.key.as_deref().map(Expr::string);
        array.items.push(ArrayItem::synthetic(key, self.value.to_expr()));
    }
}

impl Mutation for AddToArray {}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoveFromArray {
    target: String,
    search: String,
    first: FirstDeclaration,
}

impl RemoveFromArray {
    pub fn new(target: impl Into<String>, search: impl Into<String>) -> Self {
        RemoveFromArray {
            target: target.into(),
            search: search.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for RemoveFromArray {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let Some(array) = class.target_array_mut(&self.target) else {
            return;
        };
        let search = self.search.as_str();
        array.items.retain(|item| {
            let keyed_match = item.has_key(search);
            let value_match = item.key.is_none() && item.value.as_str() == Some(search);
            !(keyed_match || value_match)
        });
    }
}

impl Mutation for RemoveFromArray {}
