//! Default-export locator.

use swc_ecma_ast::{DefaultDecl, Expr, Module, ModuleDecl, ModuleItem};

/// The payload of an `export default` statement.
#[derive(Debug, Clone, Copy)]
pub enum DefaultExport<'a> {
    /// `export default class ...`, `export default function ...`, `export default interface ...`
    Decl(&'a DefaultDecl),
    /// `export default <expression>`
    Expr(&'a Expr),
}

/// Find the first `export default` statement at the top level of `module`.
pub fn find_default_export(module: &Module) -> Option<DefaultExport<'_>> {
    module.body.iter().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
            Some(DefaultExport::Decl(&export.decl))
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
            Some(DefaultExport::Expr(&export.expr))
        }
        _ => None,
    })
}
