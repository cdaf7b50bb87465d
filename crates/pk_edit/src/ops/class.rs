use pk_ir::{
    simple_name, ClassKind, ClassLike, File, Member, Name, SourceMap, TraitUse, VisitorMut,
};

use super::{FirstDeclaration, CLASSES};
use crate::{EditError, Mutation};

fn require_class(file: &File) -> Result<(), EditError> {
    if file.declares_any(&[ClassKind::Class]) {
        Ok(())
    } else {
        Err(EditError::MissingDeclaration("Class declaration not found."))
    }
}

/// Use a trait in the class: appended to the first `use` clause, or a new
/// clause as the first member.
#[derive(Clone, Debug, PartialEq)]
pub struct AddTrait {
    name: String,
    first: FirstDeclaration,
}

impl AddTrait {
    pub fn new(name: impl Into<String>) -> Self {
        AddTrait {
            name: name.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for AddTrait {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        if class.uses_trait(simple_name(&self.name)) {
            tracing::debug!(name = %self.name, "trait already used");
            return;
        }

        let name = Name::synthetic(self.name.as_str());
        let clause = class.members.iter_mut().find_map(|member| match member {
            Member::TraitUse(clause) => Some(clause),
            _ => None,
        });
        match clause {
            Some(clause) => clause.names.push(name),
            None => class
                .members
                .insert(0, Member::TraitUse(TraitUse::synthetic(vec![name]))),
        }
    }
}

impl Mutation for AddTrait {
    fn before_traverse(&mut self, file: &File, _sources: &mut SourceMap) -> Result<(), EditError> {
        require_class(file)
    }
}

/// Drop a trait from every `use` clause of the class; clauses left empty go.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveTrait {
    name: String,
    first: FirstDeclaration,
}

impl RemoveTrait {
    pub fn new(name: impl Into<String>) -> Self {
        RemoveTrait {
            name: name.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for RemoveTrait {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let simple = simple_name(&self.name);
        for member in &mut class.members {
            if let Member::TraitUse(clause) = member {
                clause.names.retain(|name| name.simple() != simple);
            }
        }
        class
            .members
            .retain(|member| !matches!(member, Member::TraitUse(clause) if clause.names.is_empty()));
    }
}

impl Mutation for RemoveTrait {}

/// Implement an interface, creating the `implements` clause if needed.
#[derive(Clone, Debug, PartialEq)]
pub struct AddInterface {
    name: String,
    first: FirstDeclaration,
}

impl AddInterface {
    pub fn new(name: impl Into<String>) -> Self {
        AddInterface {
            name: name.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for AddInterface {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        if class.implements_interface(simple_name(&self.name)) {
            tracing::debug!(name = %self.name, "interface already implemented");
            return;
        }
        class.implements.push(Name::synthetic(self.name.as_str()));
    }
}

impl Mutation for AddInterface {
    fn before_traverse(&mut self, file: &File, _sources: &mut SourceMap) -> Result<(), EditError> {
        require_class(file)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoveInterface {
    name: String,
    first: FirstDeclaration,
}

impl RemoveInterface {
    pub fn new(name: impl Into<String>) -> Self {
        RemoveInterface {
            name: name.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for RemoveInterface {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let simple = simple_name(&self.name);
        class.implements.retain(|name| name.simple() != simple);
    }
}

impl Mutation for RemoveInterface {}
