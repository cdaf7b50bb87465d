//! Printing changed nodes against their reference counterparts.

use pk_ir::{
    ArrayItem, ArrayLit, BodyStmt, ClassLike, Expr, Member, Method, Name, Namespace, Node,
    Property, PropertyItem, ReturnStmt, Span, Stmt, TraitUse, UseDecl, UseItem,
};

use crate::fresh;
use crate::layout::{line_indent, reindent, Slot};
use crate::splice::Splice;
use crate::{Item, Line, Printer};

impl Line for Stmt {
    fn slot(&self) -> Slot {
        match self {
            Stmt::Namespace(_) | Stmt::ClassLike(_) => Slot::Block,
            Stmt::Use(_) => Slot::Group(0),
            Stmt::Declare(_) => Slot::Group(1),
            Stmt::Return(_) => Slot::Group(2),
            Stmt::Other(_) => Slot::Group(3),
        }
    }

    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String {
        match (self, reference) {
            (Stmt::Namespace(w), Stmt::Namespace(r)) => printer.namespace(w, r),
            (Stmt::Use(w), Stmt::Use(r)) => printer.use_decl(w, r),
            (Stmt::ClassLike(w), Stmt::ClassLike(r)) => printer.class_like(w, r),
            (Stmt::Return(w), Stmt::Return(r)) => printer.return_stmt(w, r),
            _ => printer.fresh_stmt(self),
        }
    }

    fn inserted(&self, printer: &Printer<'_>, _indent: &str) -> String {
        printer.fresh_stmt(self)
    }
}

impl Line for Member {
    fn slot(&self) -> Slot {
        match self {
            Member::TraitUse(_) => Slot::Group(0),
            Member::Property(_) => Slot::Group(1),
            Member::Method(_) => Slot::Block,
            Member::Other(_) => Slot::Group(2),
        }
    }

    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String {
        match (self, reference) {
            (Member::TraitUse(w), Member::TraitUse(r)) => printer.trait_use(w, r),
            (Member::Property(w), Member::Property(r)) => printer.property(w, r),
            (Member::Method(w), Member::Method(r)) => printer.method(w, r),
            _ => printer.fresh_member(self),
        }
    }

    /// Snippet members are copied from their own text and moved to the
    /// class's member indentation.
    fn inserted(&self, printer: &Printer<'_>, indent: &str) -> String {
        let Some(id) = self.origin() else {
            return printer.fresh_member(self);
        };
        let text = match printer.sources.fragment(id) {
            Some(fragment) if fragment != self => self.changed(fragment, printer),
            _ => printer.slice(self.span()).to_owned(),
        };
        let from = line_indent(printer.text(), self.span().start);
        reindent(&text, from, indent, printer.newline)
    }
}

impl Line for BodyStmt {
    fn slot(&self) -> Slot {
        Slot::Group(0)
    }

    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String {
        match (self, reference) {
            (BodyStmt::Return(w), BodyStmt::Return(r)) => printer.return_stmt(w, r),
            _ => printer.slice(self.span()).to_owned(),
        }
    }

    fn inserted(&self, printer: &Printer<'_>, _indent: &str) -> String {
        match self {
            BodyStmt::Return(ret) if ret.origin.is_none() => printer.fresh_return(ret),
            _ => printer.slice(self.span()).to_owned(),
        }
    }
}

impl Item for UseItem {
    fn changed(&self, _reference: &Self, _printer: &Printer<'_>) -> String {
        fresh::use_item(self)
    }

    fn fresh(&self, _printer: &Printer<'_>) -> String {
        fresh::use_item(self)
    }
}

impl Item for Name {
    fn changed(&self, _reference: &Self, _printer: &Printer<'_>) -> String {
        self.text.clone()
    }

    fn fresh(&self, _printer: &Printer<'_>) -> String {
        self.text.clone()
    }
}

impl Item for ArrayItem {
    fn changed(&self, reference: &Self, printer: &Printer<'_>) -> String {
        printer.array_item(self, reference)
    }

    fn fresh(&self, printer: &Printer<'_>) -> String {
        printer.fresh_array_item(self)
    }
}

impl Printer<'_> {
    fn namespace(&self, working: &Namespace, reference: &Namespace) -> String {
        let (parent, inner) = if reference.braced {
            let parent = line_indent(self.text(), reference.span.start);
            (parent, format!("{parent}    "))
        } else {
            ("", String::new())
        };
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.body,
            self.line_list(reference.body, &working.stmts, &reference.stmts, parent, &inner),
        );
        splice.finish()
    }

    fn use_decl(&self, working: &UseDecl, reference: &UseDecl) -> String {
        if working.kind != reference.kind || working.prefix != reference.prefix {
            return fresh::use_decl(working);
        }
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.items_region,
            self.comma_list(reference.items_region, &working.items, &reference.items),
        );
        splice.finish()
    }

    fn class_like(&self, working: &ClassLike, reference: &ClassLike) -> String {
        let mut splice = Splice::new(self.sources, reference.span);

        match reference.implements_clause {
            Some(clause) if working.implements.is_empty() => splice.replace(clause, String::new()),
            Some(_) if working.implements != reference.implements => splice.replace(
                reference.implements_region,
                self.comma_list(
                    reference.implements_region,
                    &working.implements,
                    &reference.implements,
                ),
            ),
            None if !working.implements.is_empty() => {
                let names: Vec<&str> = working
                    .implements
                    .iter()
                    .map(|name| name.text.as_str())
                    .collect();
                splice.insert(
                    reference.implements_anchor,
                    format!(" implements {}", names.join(", ")),
                );
            }
            _ => {}
        }

        if working.members != reference.members {
            let parent = line_indent(self.text(), reference.span.start);
            splice.replace(
                reference.body,
                self.line_list(
                    reference.body,
                    &working.members,
                    &reference.members,
                    parent,
                    &format!("{parent}    "),
                ),
            );
        }
        splice.finish()
    }

    fn trait_use(&self, working: &TraitUse, reference: &TraitUse) -> String {
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.names_region,
            self.comma_list(reference.names_region, &working.names, &reference.names),
        );
        splice.finish()
    }

    fn property(&self, working: &Property, reference: &Property) -> String {
        let mut splice = Splice::new(self.sources, reference.span);
        for item in &working.items {
            let Some(before) = reference.items.iter().find(|r| r.origin == item.origin) else {
                continue;
            };
            if item != before {
                splice.replace(before.span, self.property_item(item, before));
            }
        }
        splice.finish()
    }

    fn property_item(&self, working: &PropertyItem, reference: &PropertyItem) -> String {
        let mut splice = Splice::new(self.sources, reference.span);
        match (&working.default, &reference.default) {
            (Some(value), Some(before)) => splice.replace(before.span(), self.expr(value, before)),
            (Some(value), None) => {
                splice.insert(reference.span.end, format!(" = {}", self.fresh_expr(value)));
            }
            (None, Some(before)) => splice.replace(
                Span::new(reference.name.span.end, before.span().end),
                String::new(),
            ),
            (None, None) => {}
        }
        splice.finish()
    }

    fn method(&self, working: &Method, reference: &Method) -> String {
        let mut splice = Splice::new(self.sources, reference.span);
        if let (Some(body), Some(before)) = (&working.body, &reference.body) {
            if body != before {
                let parent = line_indent(self.text(), reference.span.start);
                splice.replace(
                    before.body,
                    self.line_list(
                        before.body,
                        &body.stmts,
                        &before.stmts,
                        parent,
                        &format!("{parent}    "),
                    ),
                );
            }
        }
        splice.finish()
    }

    pub(crate) fn return_stmt(&self, working: &ReturnStmt, reference: &ReturnStmt) -> String {
        let (Some(value), Some(before)) = (&working.expr, &reference.expr) else {
            return self.fresh_return(working);
        };
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(before.span(), self.expr(value, before));
        splice.finish()
    }

    pub(crate) fn expr(&self, working: &Expr, reference: &Expr) -> String {
        if working == reference {
            return self.slice(reference.span()).to_owned();
        }
        if working.origin().is_none() || working.origin() != reference.origin() {
            return self.fresh_expr(working);
        }
        match (working, reference) {
            (Expr::Array(w), Expr::Array(r)) => self.array(w, r),
            _ => self.literal(working),
        }
    }

    fn array(&self, working: &ArrayLit, reference: &ArrayLit) -> String {
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.items_region,
            self.comma_list(reference.items_region, &working.items, &reference.items),
        );
        splice.finish()
    }

    fn array_item(&self, working: &ArrayItem, reference: &ArrayItem) -> String {
        let same_shape = working.key == reference.key
            && working.by_ref == reference.by_ref
            && working.unpack == reference.unpack;
        if !same_shape {
            return self.fresh_array_item(working);
        }
        let mut splice = Splice::new(self.sources, reference.span);
        splice.replace(
            reference.value.span(),
            self.expr(&working.value, &reference.value),
        );
        splice.finish()
    }
}
