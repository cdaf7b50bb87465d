//! Debug commands: `parse` and `lex` for inspecting how a file is read.

use std::path::Path;

use pk_ir::{ClassLike, Expr, File, Member, SourceMap, Stmt};

use super::read_file;
use crate::CliError;

/// Parse a file and print its outline.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let text = read_file(Path::new(path))?;
    let mut sources = SourceMap::new();
    let file = pk_parse::parse_file(&mut sources, &text).map_err(|err| CliError::Parse {
        path: path.to_owned(),
        message: err.describe(&sources),
    })?;

    println!("Outline of '{path}':");
    print!("{}", outline(&file));
    Ok(())
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let text = read_file(Path::new(path))?;
    let tokens = pk_lexer::lex(&text);

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {:?} @ {}", token.kind, token.span);
    }
    Ok(())
}

/// One line per structured node, indented by nesting.
pub fn outline(file: &File) -> String {
    let mut out = String::new();
    outline_stmts(&file.stmts, 1, &mut out);
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(text);
    out.push('\n');
}

fn outline_stmts(stmts: &[Stmt], depth: usize, out: &mut String) {
    for stmt in stmts {
        match stmt {
            Stmt::Namespace(namespace) => {
                let name = namespace.name.as_ref().map_or("(global)", |n| n.text.as_str());
                line(out, depth, &format!("namespace {name}"));
                outline_stmts(&namespace.stmts, depth + 1, out);
            }
            Stmt::Use(decl) => {
                let names: Vec<String> = decl.items.iter().map(|item| decl.qualified(item)).collect();
                line(out, depth, &format!("use {}", names.join(", ")));
            }
            Stmt::ClassLike(class) => outline_class(class, depth, out),
            Stmt::Return(ret) => line(out, depth, &format!("return {}", describe(ret.expr.as_ref()))),
            Stmt::Declare(_) => line(out, depth, "declare"),
            Stmt::Other(_) => line(out, depth, "statement"),
        }
    }
}

fn outline_class(class: &ClassLike, depth: usize, out: &mut String) {
    let mut header = format!("{} {}", class.kind.keyword(), class.name.text);
    if !class.implements.is_empty() {
        let names: Vec<&str> = class.implements.iter().map(|n| n.text.as_str()).collect();
        header.push_str(&format!(" implements {}", names.join(", ")));
    }
    line(out, depth, &header);

    for member in &class.members {
        let text = match member {
            Member::TraitUse(clause) => {
                let names: Vec<&str> = clause.names.iter().map(|n| n.text.as_str()).collect();
                format!("use {}", names.join(", "))
            }
            Member::Property(property) => {
                let items: Vec<String> = property
                    .items
                    .iter()
                    .map(|item| match &item.default {
                        Some(value) => format!("${} = {}", item.name.text, describe(Some(value))),
                        None => format!("${}", item.name.text),
                    })
                    .collect();
                format!("property {}", items.join(", "))
            }
            Member::Method(method) => format!("method {}", method.name.text),
            Member::Other(_) => "member".to_owned(),
        };
        line(out, depth + 1, &text);
    }
}

fn describe(expr: Option<&Expr>) -> String {
    match expr {
        None => "(nothing)".to_owned(),
        Some(Expr::Array(array)) => format!("array of {}", array.items.len()),
        Some(Expr::String(lit)) => format!("{:?}", lit.value),
        Some(Expr::Int(lit)) => lit.value.to_string(),
        Some(Expr::Float(lit)) => lit.value.to_string(),
        Some(Expr::Const(name)) => name.text.clone(),
        Some(Expr::Other(_)) => "expression".to_owned(),
    }
}
