use pk_ir::{ArrayItem, ArrayLit, Expr, File, ReturnStmt, SourceMap, Stmt, VisitorMut};

use crate::{EditError, Mutation, Scalar};

/// Set a dotted key path (`mail.mailers.smtp.port`) in the array a
/// configuration file returns.
///
/// Missing intermediate keys are created as empty arrays; an intermediate
/// value that is not an array literal is replaced by one.
#[derive(Clone, Debug, PartialEq)]
pub struct SetConfigValue {
    key_path: String,
    value: Scalar,
}

impl SetConfigValue {
    pub fn new(key_path: impl Into<String>, value: Scalar) -> Self {
        SetConfigValue {
            key_path: key_path.into(),
            value,
        }
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    fn segments(&self) -> Vec<&str> {
        if self.key_path.is_empty() {
            Vec::new()
        } else {
            self.key_path.split('.').collect()
        }
    }
}

impl VisitorMut for SetConfigValue {
    fn visit_file(&mut self, file: &mut File) {
        let segments = self.segments();
        if segments.is_empty() {
            tracing::warn!("empty configuration key, nothing set");
            return;
        }
        let value = &self.value;
        file.with_unit_mut(|stmts| {
            let array = stmts.iter_mut().find_map(|stmt| match stmt {
                Stmt::Return(ReturnStmt {
                    expr: Some(Expr::Array(array)),
                    ..
                }) => Some(array),
                _ => None,
            });
            if let Some(array) = array {
                set_path(array, &segments, value);
            }
        });
    }
}

impl Mutation for SetConfigValue {
    fn before_traverse(&mut self, file: &File, _sources: &mut SourceMap) -> Result<(), EditError> {
        match file.returned_array() {
            Some(_) => Ok(()),
            None => Err(EditError::MissingDeclaration(
                "Configuration array not found.",
            )),
        }
    }
}

fn set_path(array: &mut ArrayLit, path: &[&str], value: &Scalar) {
    let Some((&head, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        match array.entry_mut(head) {
            Some(item) if value.matches(&item.value) => {}
            Some(item) => item.value = value.to_expr(),
            None => array
                .items
                .push(ArrayItem::synthetic(Some(Expr::string(head)), value.to_expr())),
        }
        return;
    }

    if array.entry(head).is_none() {
        array.items.push(ArrayItem::synthetic(
            Some(Expr::string(head)),
            Expr::Array(ArrayLit::synthetic(Vec::new())),
        ));
    }
    let Some(item) = array.entry_mut(head) else {
        return;
    };
    if !matches!(item.value, Expr::Array(_)) {
        tracing::debug!(key = head, "replacing scalar with nested array");
        item.value = Expr::Array(ArrayLit::synthetic(Vec::new()));
    }
    if let Expr::Array(nested) = &mut item.value {
        set_path(nested, rest, value);
    }
}
