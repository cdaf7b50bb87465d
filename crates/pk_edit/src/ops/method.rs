use pk_ir::{ClassLike, File, Member, Method, SourceMap, VisitorMut};

use super::{FirstDeclaration, CLASSES};
use crate::{EditError, Mutation};

/// Append a method given as source code, unless the class already has a
/// method of that name.
#[derive(Clone, Debug, PartialEq)]
pub struct AddMethod {
    code: String,
    method: Option<Method>,
    first: FirstDeclaration,
}

impl AddMethod {
    pub fn new(code: impl Into<String>) -> Self {
        AddMethod {
            code: code.into(),
            method: None,
            first: FirstDeclaration::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl VisitorMut for AddMethod {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let Some(method) = &self.method else {
            return;
        };
        if class.has_method(&method.name.text) {
            tracing::debug!(name = %method.name.text, "method already declared");
            return;
        }
        class.members.push(Member::Method(method.clone()));
    }
}

impl Mutation for AddMethod {
    fn before_traverse(&mut self, _file: &File, sources: &mut SourceMap) -> Result<(), EditError> {
        let method = pk_parse::parse_method(sources, &self.code)
            .map_err(|err| {
                tracing::debug!(error = %err, "method snippet does not parse");
                EditError::InvalidMethod("Could not parse method code.")
            })?
            .ok_or(EditError::InvalidMethod(
                "Code does not contain a method declaration.",
            ))?;
        sources.register_fragment(Member::Method(method.clone()));
        self.method = Some(method);
        Ok(())
    }
}

/// Drop every method with the name (compared case-insensitively).
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveMethod {
    name: String,
    first: FirstDeclaration,
}

impl RemoveMethod {
    pub fn new(name: impl Into<String>) -> Self {
        RemoveMethod {
            name: name.into(),
            first: FirstDeclaration::default(),
        }
    }
}

impl VisitorMut for RemoveMethod {
    fn visit_class_like(&mut self, class: &mut ClassLike) {
        if !self.first.claim(class, CLASSES) {
            return;
        }
        let name = self.name.as_str();
        class.members.retain(|member| {
            !matches!(member, Member::Method(method) if method.name.text.eq_ignore_ascii_case(name))
        });
    }
}

impl Mutation for RemoveMethod {}
