//! Member extraction for class and object containers.

use swc_common::Spanned;
use swc_ecma_ast::{Accessibility, Class, ClassMember, ObjectLit, Prop, PropName, PropOrSpread};

use crate::core::parser::ParsedSource;
use crate::core::types::{ContainerKind, ExtractorOutput, MethodEntry};

/// Method-like class member with a body: methods, accessors, constructors.
///
/// Bodiless signatures (overloads, `abstract` methods) are declarations only.
pub fn is_class_method(member: &ClassMember) -> bool {
    match member {
        ClassMember::Method(method) => method.function.body.is_some(),
        ClassMember::PrivateMethod(method) => method.function.body.is_some(),
        ClassMember::Constructor(ctor) => ctor.body.is_some(),
        _ => false,
    }
}

/// `#name()` methods.
pub fn is_private_name(member: &ClassMember) -> bool {
    matches!(member, ClassMember::PrivateMethod(_))
}

/// Members declared with the `private` accessibility modifier.
pub fn has_private_modifier(member: &ClassMember) -> bool {
    let accessibility = match member {
        ClassMember::Method(method) => method.accessibility,
        ClassMember::PrivateMethod(method) => method.accessibility,
        ClassMember::Constructor(ctor) => ctor.accessibility,
        _ => None,
    };
    accessibility == Some(Accessibility::Private)
}

pub fn is_public_class_method(member: &ClassMember) -> bool {
    is_class_method(member) && !is_private_name(member) && !has_private_modifier(member)
}

fn class_member_key(member: &ClassMember) -> Option<&PropName> {
    match member {
        ClassMember::Method(method) => Some(&method.key),
        ClassMember::Constructor(ctor) => Some(&ctor.key),
        _ => None,
    }
}

/// Method-shorthand properties (`foo() {}`, `get foo() {}`, `set foo(v) {}`).
fn object_method_key(prop: &PropOrSpread) -> Option<&PropName> {
    let PropOrSpread::Prop(prop) = prop else {
        return None;
    };
    match &**prop {
        Prop::Method(method) => Some(&method.key),
        Prop::Getter(getter) => Some(&getter.key),
        Prop::Setter(setter) => Some(&setter.key),
        _ => None,
    }
}

/// Identifier text of a key, or an empty string for computed and literal keys.
pub fn key_name(key: &PropName) -> String {
    match key {
        PropName::Ident(ident) => ident.sym.to_string(),
        _ => String::new(),
    }
}

/// Line of the key token; for `[expr]` keys that is the inner expression.
fn key_line(parsed: &ParsedSource, key: &PropName) -> usize {
    let span = match key {
        PropName::Computed(computed) => computed.expr.span(),
        _ => key.span(),
    };
    parsed.line_of(span)
}

fn entry(parsed: &ParsedSource, key: &PropName) -> MethodEntry {
    MethodEntry::new(key_name(key), key_line(parsed, key))
}

pub fn extract_class_methods(parsed: &ParsedSource, class: &Class) -> ExtractorOutput {
    let methods = class
        .body
        .iter()
        .filter(|member| is_public_class_method(member))
        .filter_map(class_member_key)
        .map(|key| entry(parsed, key))
        .collect();

    ExtractorOutput {
        kind: ContainerKind::Class,
        methods,
    }
}

pub fn extract_object_methods(parsed: &ParsedSource, object: &ObjectLit) -> ExtractorOutput {
    let methods = object
        .props
        .iter()
        .filter_map(object_method_key)
        .map(|key| entry(parsed, key))
        .collect();

    ExtractorOutput {
        kind: ContainerKind::Object,
        methods,
    }
}
