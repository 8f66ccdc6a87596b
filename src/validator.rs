//! Structural validation of a detected component literal.
//!
//! The three sub-objects are checked in fixed order: props, style, on.
//! Diagnostics are appended in property declaration order within each step,
//! so the overall sequence is deterministic for a given input.

use oxc_ast::ast::ObjectExpression;
use oxc_span::Span;

use crate::classify::{
    is_attribute_name, is_event_name, is_prefixed_attribute, is_style_name, looks_like_event_name,
};
use crate::component::{object_child, static_fields};
use crate::diagnostics::Diagnostic;
use crate::walker::FileContext;

/// Validate one component literal, appending any placement warnings.
pub(crate) fn validate_component(
    component: &ObjectExpression<'_>,
    ctx: &FileContext<'_>,
    out: &mut Vec<Diagnostic>,
) {
    // A missing sub-object (or one whose value is not an object literal) is
    // simply skipped; only literal objects are inspected.
    if let Some(props) = object_child(component, "props") {
        check_props(props, component.span, ctx, out);
    }
    if let Some(style) = object_child(component, "style") {
        check_style(style, component.span, ctx, out);
    }
    if let Some(on) = object_child(component, "on") {
        check_on(on, component.span, ctx, out);
    }
}

fn check_props(
    props: &ObjectExpression<'_>,
    component_span: Span,
    ctx: &FileContext<'_>,
    out: &mut Vec<Diagnostic>,
) {
    for (name, span) in static_fields(props) {
        let (line, column) = ctx.resolve(Some(span), Some(component_span));
        if is_style_name(name) {
            out.push(Diagnostic::warning(
                ctx.file,
                line,
                column,
                format!("Style property '{name}' should be in 'style' object, not 'props'"),
                format!("Move '{name}' to the 'style' object"),
            ));
        }
        if is_event_name(name) {
            out.push(Diagnostic::warning(
                ctx.file,
                line,
                column,
                format!("Event handler '{name}' should be in 'on' object, not 'props'"),
                format!("Move '{name}' to the 'on' object"),
            ));
        }
        if is_prefixed_attribute(name) {
            // data-* and aria-* belong in props. This is a separate, later
            // check and does not suppress the table lookups above.
            continue;
        }
    }
}

fn check_style(
    style: &ObjectExpression<'_>,
    component_span: Span,
    ctx: &FileContext<'_>,
    out: &mut Vec<Diagnostic>,
) {
    for (name, span) in static_fields(style) {
        if is_attribute_name(name) || is_prefixed_attribute(name) {
            let (line, column) = ctx.resolve(Some(span), Some(component_span));
            out.push(Diagnostic::warning(
                ctx.file,
                line,
                column,
                format!("HTML attribute '{name}' should be in 'props' object, not 'style'"),
                format!("Move '{name}' to the 'props' object"),
            ));
        }
    }
}

fn check_on(
    on: &ObjectExpression<'_>,
    component_span: Span,
    ctx: &FileContext<'_>,
    out: &mut Vec<Diagnostic>,
) {
    for (name, span) in static_fields(on) {
        if !looks_like_event_name(name) {
            let (line, column) = ctx.resolve(Some(span), Some(component_span));
            out.push(Diagnostic::warning(
                ctx.file,
                line,
                column,
                format!("'{name}' doesn't look like an event handler and should probably be in 'props'"),
                format!("Consider moving '{name}' to the 'props' object"),
            ));
        }
    }
}
