//! Printing nodes built by mutations, in the conventional style: one
//! statement per line, single-quoted strings, short array syntax.

use pk_ir::{
    ArrayItem, ArrayLit, Expr, Member, Node, ReturnStmt, Stmt, TraitUse, UseDecl, UseItem,
    UseKind,
};

use crate::emitter::{Emitter, StringEmitter};
use crate::Printer;

impl Printer<'_> {
    /// A statement without a counterpart. Parsed statements are copied.
    pub(crate) fn fresh_stmt(&self, stmt: &Stmt) -> String {
        if stmt.origin().is_some() {
            return self.slice(stmt.span()).to_owned();
        }
        match stmt {
            Stmt::Use(decl) => use_decl(decl),
            Stmt::Return(ret) => self.fresh_return(ret),
            Stmt::Namespace(_) | Stmt::ClassLike(_) | Stmt::Declare(_) | Stmt::Other(_) => {
                tracing::debug!("statement kind has no fresh form");
                String::new()
            }
        }
    }

    pub(crate) fn fresh_return(&self, ret: &ReturnStmt) -> String {
        match &ret.expr {
            Some(expr) => format!("return {};", self.fresh_expr(expr)),
            None => "return;".to_owned(),
        }
    }

    pub(crate) fn fresh_member(&self, member: &Member) -> String {
        if member.origin().is_some() {
            return self.slice(member.span()).to_owned();
        }
        match member {
            Member::TraitUse(clause) => trait_use(clause),
            Member::Property(_) | Member::Method(_) | Member::Other(_) => {
                tracing::debug!("member kind has no fresh form");
                String::new()
            }
        }
    }

    /// An expression without a counterpart. Parsed expressions are copied.
    pub(crate) fn fresh_expr(&self, expr: &Expr) -> String {
        if expr.origin().is_some() {
            return self.slice(expr.span()).to_owned();
        }
        self.literal(expr)
    }

    /// Source form of `expr` built from its value alone.
    pub(crate) fn literal(&self, expr: &Expr) -> String {
        match expr {
            Expr::Array(array) => self.fresh_array(array),
            Expr::String(lit) => quote_string(&lit.value),
            Expr::Int(lit) => lit.value.to_string(),
            Expr::Float(lit) => format_float(lit.value),
            Expr::Const(name) => name.text.clone(),
            Expr::Other(opaque) => self.slice(opaque.span).to_owned(),
        }
    }

    fn fresh_array(&self, array: &ArrayLit) -> String {
        let mut out = StringEmitter::new();
        out.emit(if array.short { "[" } else { "array(" });
        for (i, item) in array.items.iter().enumerate() {
            if i > 0 {
                out.emit(", ");
            }
            out.emit(&self.fresh_array_item(item));
        }
        out.emit(if array.short { "]" } else { ")" });
        out.output()
    }

    pub(crate) fn fresh_array_item(&self, item: &ArrayItem) -> String {
        let mut out = StringEmitter::new();
        if let Some(key) = &item.key {
            out.emit(&self.fresh_expr(key));
            out.emit(" => ");
        }
        if item.unpack {
            out.emit("...");
        }
        if item.by_ref {
            out.emit("&");
        }
        out.emit(&self.fresh_expr(&item.value));
        out.output()
    }
}

pub(crate) fn use_decl(decl: &UseDecl) -> String {
    let mut out = StringEmitter::new();
    out.emit("use ");
    out.emit(use_kind_prefix(decl.kind));
    if let Some(prefix) = &decl.prefix {
        out.emit(&prefix.text);
        out.emit("\\{");
    }
    for (i, item) in decl.items.iter().enumerate() {
        if i > 0 {
            out.emit(", ");
        }
        out.emit(&use_item(item));
    }
    if decl.prefix.is_some() {
        out.emit("}");
    }
    out.emit(";");
    out.output()
}

pub(crate) fn use_item(item: &UseItem) -> String {
    let mut out = StringEmitter::new();
    if let Some(kind) = item.kind {
        out.emit(use_kind_prefix(kind));
    }
    out.emit(&item.name.text);
    if let Some(alias) = &item.alias {
        out.emit(" as ");
        out.emit(&alias.text);
    }
    out.output()
}

fn trait_use(clause: &TraitUse) -> String {
    let names: Vec<&str> = clause.names.iter().map(|name| name.text.as_str()).collect();
    format!("use {};", names.join(", "))
}

fn use_kind_prefix(kind: UseKind) -> &'static str {
    match kind {
        UseKind::Normal => "",
        UseKind::Function => "function ",
        UseKind::Const => "const ",
    }
}

/// Single-quoted string literal for `value`.
pub(crate) fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Float literal that reads back as a float: `1.0`, `0.5`, `1e300`.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_owned();
    }
    format!("{value:?}")
}
