use pk_ir::visitor::walk_file;
use pk_ir::{
    normalize_name, simple_name, ClassKind, File, SourceMap, Stmt, UseDecl, UseKind, VisitorMut,
};

use crate::{EditError, Mutation};

/// Import a class: `use App\Models\Post;`.
#[derive(Clone, Debug, PartialEq)]
pub struct AddImport {
    name: String,
}

impl AddImport {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        AddImport {
            name: normalize_name(&name).to_owned(),
        }
    }

    /// Fully qualified name, without a leading `\`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl VisitorMut for AddImport {
    fn visit_file(&mut self, file: &mut File) {
        let name = self.name.as_str();
        file.with_unit_mut(|stmts| {
            let present = stmts.iter().any(|stmt| match stmt {
                Stmt::Use(decl) => class_imports(decl).any(|qualified| qualified == name),
                _ => false,
            });
            if present {
                tracing::debug!(name, "import already present");
                return;
            }

            // After the last import, else after any leading `declare`.
            let index = match stmts.iter().rposition(|stmt| matches!(stmt, Stmt::Use(_))) {
                Some(last) => last + 1,
                None => stmts
                    .iter()
                    .take_while(|stmt| matches!(stmt, Stmt::Declare(_)))
                    .count(),
            };
            stmts.insert(index, Stmt::Use(UseDecl::synthetic(name)));
        });
    }
}

impl Mutation for AddImport {
    fn before_traverse(&mut self, file: &File, _sources: &mut SourceMap) -> Result<(), EditError> {
        if file.declares_any(&[ClassKind::Class, ClassKind::Interface, ClassKind::Trait]) {
            Ok(())
        } else {
            Err(EditError::MissingDeclaration(
                "Class, interface, or trait declaration not found.",
            ))
        }
    }
}

/// Remove the imports of a class, given by qualified or simple name.
/// A statement left without items goes too.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveImport {
    name: String,
}

impl RemoveImport {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        RemoveImport {
            name: normalize_name(&name).to_owned(),
        }
    }

    fn matches(&self, qualified: &str) -> bool {
        qualified == self.name || simple_name(qualified) == self.name
    }
}

impl VisitorMut for RemoveImport {
    fn visit_file(&mut self, file: &mut File) {
        walk_file(self, file);
        drop_empty_imports(&mut file.stmts);
    }

    fn visit_use(&mut self, decl: &mut UseDecl) {
        if !decl.imports_classes() {
            return;
        }
        let doomed: Vec<bool> = decl
            .items
            .iter()
            .map(|item| is_class_item(item.kind) && self.matches(&decl.qualified(item)))
            .collect();
        let mut doomed = doomed.into_iter();
        decl.items.retain(|_| !doomed.next().unwrap_or(false));
    }
}

impl Mutation for RemoveImport {}

/// Qualified names of the classes `decl` imports.
fn class_imports(decl: &UseDecl) -> impl Iterator<Item = String> + '_ {
    decl.items
        .iter()
        .filter(move |item| decl.imports_classes() && is_class_item(item.kind))
        .map(move |item| decl.qualified(item))
}

fn is_class_item(kind: Option<UseKind>) -> bool {
    matches!(kind, None | Some(UseKind::Normal))
}

fn drop_empty_imports(stmts: &mut Vec<Stmt>) {
    stmts.retain(|stmt| !matches!(stmt, Stmt::Use(decl) if decl.items.is_empty()));
    for stmt in stmts {
        if let Stmt::Namespace(namespace) = stmt {
            drop_empty_imports(&mut namespace.stmts);
        }
    }
}
