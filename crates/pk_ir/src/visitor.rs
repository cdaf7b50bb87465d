//! Mutable tree walker.
//!
//! Mutations implement [`VisitorMut`] and override the `visit_*` hooks for
//! the nodes they edit. Default implementations call the matching `walk_*`
//! function, which descends pre-order into the children. An override that
//! does not call `walk_*` stops the descent at that node.
//!
//! # Example
//!
//! ```text
//! struct RenameMethods;
//!
//! impl VisitorMut for RenameMethods {
//!     fn visit_method(&mut self, method: &mut Method) {
//!         method.name.text.make_ascii_lowercase();
//!         walk_method(self, method);
//!     }
//! }
//! ```

use crate::{
    ArrayItem, ArrayLit, BodyStmt, ClassLike, Expr, File, Member, Method, Namespace, Property,
    ReturnStmt, Stmt, UseDecl,
};

pub trait VisitorMut {
    fn visit_file(&mut self, file: &mut File) {
        walk_file(self, file);
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_namespace(&mut self, namespace: &mut Namespace) {
        walk_namespace(self, namespace);
    }

    fn visit_use(&mut self, _decl: &mut UseDecl) {}

    fn visit_class_like(&mut self, class: &mut ClassLike) {
        walk_class_like(self, class);
    }

    fn visit_member(&mut self, member: &mut Member) {
        walk_member(self, member);
    }

    fn visit_property(&mut self, property: &mut Property) {
        walk_property(self, property);
    }

    fn visit_method(&mut self, method: &mut Method) {
        walk_method(self, method);
    }

    fn visit_return(&mut self, ret: &mut ReturnStmt) {
        walk_return(self, ret);
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
    }

    fn visit_array(&mut self, array: &mut ArrayLit) {
        walk_array(self, array);
    }

    fn visit_array_item(&mut self, item: &mut ArrayItem) {
        walk_array_item(self, item);
    }
}

pub fn walk_file<V: VisitorMut + ?Sized>(visitor: &mut V, file: &mut File) {
    for stmt in &mut file.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: VisitorMut + ?Sized>(visitor: &mut V, stmt: &mut Stmt) {
    match stmt {
        Stmt::Namespace(namespace) => visitor.visit_namespace(namespace),
        Stmt::Use(decl) => visitor.visit_use(decl),
        Stmt::ClassLike(class) => visitor.visit_class_like(class),
        Stmt::Return(ret) => visitor.visit_return(ret),
        Stmt::Declare(_) | Stmt::Other(_) => {}
    }
}

pub fn walk_namespace<V: VisitorMut + ?Sized>(visitor: &mut V, namespace: &mut Namespace) {
    for stmt in &mut namespace.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_class_like<V: VisitorMut + ?Sized>(visitor: &mut V, class: &mut ClassLike) {
    for member in &mut class.members {
        visitor.visit_member(member);
    }
}

pub fn walk_member<V: VisitorMut + ?Sized>(visitor: &mut V, member: &mut Member) {
    match member {
        Member::Property(property) => visitor.visit_property(property),
        Member::Method(method) => visitor.visit_method(method),
        Member::TraitUse(_) | Member::Other(_) => {}
    }
}

pub fn walk_property<V: VisitorMut + ?Sized>(visitor: &mut V, property: &mut Property) {
    for item in &mut property.items {
        if let Some(default) = &mut item.default {
            visitor.visit_expr(default);
        }
    }
}

pub fn walk_method<V: VisitorMut + ?Sized>(visitor: &mut V, method: &mut Method) {
    let Some(block) = &mut method.body else {
        return;
    };
    for stmt in &mut block.stmts {
        if let BodyStmt::Return(ret) = stmt {
            visitor.visit_return(ret);
        }
    }
}

pub fn walk_return<V: VisitorMut + ?Sized>(visitor: &mut V, ret: &mut ReturnStmt) {
    if let Some(expr) = &mut ret.expr {
        visitor.visit_expr(expr);
    }
}

pub fn walk_expr<V: VisitorMut + ?Sized>(visitor: &mut V, expr: &mut Expr) {
    if let Expr::Array(array) = expr {
        visitor.visit_array(array);
    }
}

pub fn walk_array<V: VisitorMut + ?Sized>(visitor: &mut V, array: &mut ArrayLit) {
    for item in &mut array.items {
        visitor.visit_array_item(item);
    }
}

pub fn walk_array_item<V: VisitorMut + ?Sized>(visitor: &mut V, item: &mut ArrayItem) {
    if let Some(key) = &mut item.key {
        visitor.visit_expr(key);
    }
    visitor.visit_expr(&mut item.value);
}
