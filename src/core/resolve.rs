//! Export-value resolution and shape classification.
//!
//! Turns the located `export default` payload into an [`ExportTarget`]. An
//! identifier is followed exactly one hop to a top-level class declaration or
//! variable initializer; whatever that initializer is gets classified as-is.

use swc_ecma_ast::{Class, Decl, DefaultDecl, Expr, Module, ModuleItem, ObjectLit, Pat, Stmt};
use tracing::debug;

use crate::core::locate::DefaultExport;
use crate::error::{ExtractError, Result};

/// What the default export resolved to.
#[derive(Debug, Clone, Copy)]
pub enum ExportTarget<'a> {
    Class(&'a Class),
    Object(&'a ObjectLit),
    /// A value that is neither a class nor an object literal.
    Other,
}

/// Strip parentheses and TypeScript-only wrappers around an expression.
pub fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsNonNull(ts_non_null) => unwrap_ts_expr(&ts_non_null.expr),
        _ => expr,
    }
}

/// Classify an arbitrary expression without resolving identifiers.
pub fn classify(expr: &Expr) -> ExportTarget<'_> {
    match unwrap_ts_expr(expr) {
        Expr::Class(class_expr) => ExportTarget::Class(&class_expr.class),
        Expr::Object(object) => ExportTarget::Object(object),
        _ => ExportTarget::Other,
    }
}

/// Values that are concretely present but can never hold methods.
fn is_plain_value(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Lit(_) | Expr::Tpl(_) | Expr::Array(_) | Expr::Fn(_) | Expr::Arrow(_)
    )
}

/// Resolve the payload of `export default` to its target.
pub fn resolve_export<'a>(
    module: &'a Module,
    export: DefaultExport<'a>,
) -> Result<ExportTarget<'a>> {
    match export {
        DefaultExport::Decl(DefaultDecl::Class(class_expr)) => {
            Ok(ExportTarget::Class(&class_expr.class))
        }
        DefaultExport::Decl(DefaultDecl::Fn(_)) => Ok(ExportTarget::Other),
        DefaultExport::Decl(DefaultDecl::TsInterfaceDecl(_)) => {
            Err(ExtractError::InvalidExport)
        }
        DefaultExport::Expr(expr) => match unwrap_ts_expr(expr) {
            Expr::Ident(ident) => resolve_identifier(module, ident.sym.as_str()),
            expr @ (Expr::Class(_) | Expr::Object(_)) => Ok(classify(expr)),
            expr if is_plain_value(expr) => Ok(ExportTarget::Other),
            _ => Err(ExtractError::InvalidExport),
        },
    }
}

/// Find the top-level class or variable binding named `name`.
///
/// Single linear pass over the module body; the first statement that declares
/// `name` wins. A variable without initializer resolves to [`ExportTarget::Other`].
pub fn resolve_identifier<'a>(module: &'a Module, name: &str) -> Result<ExportTarget<'a>> {
    for item in &module.body {
        let ModuleItem::Stmt(Stmt::Decl(decl)) = item else {
            continue;
        };

        match decl {
            Decl::Class(class_decl) if class_decl.ident.sym.as_str() == name => {
                debug!(identifier = name, "resolved to class declaration");
                return Ok(ExportTarget::Class(&class_decl.class));
            }
            Decl::Var(var_decl) => {
                let declarator = var_decl.decls.iter().find(|declarator| {
                    matches!(
                        &declarator.name,
                        Pat::Ident(binding) if binding.id.sym.as_str() == name
                    )
                });

                if let Some(declarator) = declarator {
                    debug!(identifier = name, "resolved to variable initializer");
                    return Ok(declarator
                        .init
                        .as_deref()
                        .map_or(ExportTarget::Other, classify));
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::UnresolvedIdentifier(name.to_string()))
}
