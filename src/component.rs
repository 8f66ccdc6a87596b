//! Component detection and object-literal helpers.
//!
//! A component literal is any object expression whose direct key set contains
//! at least one of `extend`, `props`, `style`, `on`. Only static identifier
//! or string keys count; computed keys and spread elements contribute nothing
//! anywhere in this crate.

use oxc_ast::ast::{Expression, ObjectExpression, ObjectProperty, ObjectPropertyKind, PropertyKey};
use oxc_span::Span;

const COMPONENT_KEYS: &[&str] = &["extend", "props", "style", "on"];

/// Static key name of a property, or `None` for computed and non-literal keys.
pub(crate) fn static_property_name<'a>(prop: &ObjectProperty<'a>) -> Option<&'a str> {
    if prop.computed {
        return None;
    }
    match &prop.key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// The statically-named fields of an object literal, in declaration order,
/// each with its property's own span.
pub(crate) fn static_fields<'a>(obj: &ObjectExpression<'a>) -> Vec<(&'a str, Span)> {
    obj.properties
        .iter()
        .filter_map(|entry| match entry {
            ObjectPropertyKind::ObjectProperty(prop) => {
                static_property_name(prop).map(|name| (name, prop.span))
            }
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

/// Intentionally permissive: an object with only `extend` is still a
/// component, even though it then passes structural validation trivially.
pub fn is_component(obj: &ObjectExpression) -> bool {
    static_fields(obj)
        .iter()
        .any(|(name, _)| COMPONENT_KEYS.contains(name))
}

/// Direct child keyed `key` whose value is itself an object literal.
/// Array, call, identifier and other values are not descended into.
pub(crate) fn object_child<'a, 'b>(
    obj: &'b ObjectExpression<'a>,
    key: &str,
) -> Option<&'b ObjectExpression<'a>> {
    obj.properties.iter().find_map(|entry| match entry {
        ObjectPropertyKind::ObjectProperty(prop) if static_property_name(prop) == Some(key) => {
            match &prop.value {
                Expression::ObjectExpression(inner) => Some(inner.as_ref()),
                _ => None,
            }
        }
        _ => None,
    })
}
