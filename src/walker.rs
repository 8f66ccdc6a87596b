//! Per-file parse and traversal.
//!
//! Each file is parsed once with oxc (module + JSX + TypeScript syntax) and
//! every object-literal node is visited in document (pre-order) order. A
//! parse failure yields exactly one error diagnostic at line 1, column 1 and
//! the file is skipped; it never aborts the run.

use oxc_allocator::Allocator;
use oxc_ast::ast::ObjectExpression;
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};

use crate::component::is_component;
use crate::diagnostics::Diagnostic;
use crate::validator::validate_component;

/// Byte-offset to 1-based line/column mapping for one source text.
pub(crate) struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        LineIndex { line_starts }
    }

    pub(crate) fn position(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1] as usize;
        let offset = (offset as usize).min(source.len());
        let column = source[line_start..offset].chars().count() as u32 + 1;
        (line as u32, column)
    }
}

/// File name plus location resolution for one traversal.
pub(crate) struct FileContext<'s> {
    pub(crate) file: &'s str,
    source: &'s str,
    lines: LineIndex,
}

impl<'s> FileContext<'s> {
    pub(crate) fn new(file: &'s str, source: &'s str) -> Self {
        FileContext {
            file,
            source,
            lines: LineIndex::new(source),
        }
    }

    /// Three-tier location contract: the property's own position, else the
    /// enclosing component literal's position, else line 1 column 1.
    pub(crate) fn resolve(&self, own: Option<Span>, enclosing: Option<Span>) -> (u32, u32) {
        own.or(enclosing)
            .map(|span| self.lines.position(self.source, span.start))
            .unwrap_or((1, 1))
    }
}

struct ObjectLiteralWalker<'s, 'ctx> {
    ctx: &'ctx FileContext<'s>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Visit<'a> for ObjectLiteralWalker<'_, '_> {
    fn visit_object_expression(&mut self, expr: &ObjectExpression<'a>) {
        if is_component(expr) {
            validate_component(expr, self.ctx, &mut self.diagnostics);
        }
        // Descent is never pruned: a component nested inside another
        // component's field is re-tested on its own.
        walk::walk_object_expression(self, expr);
    }
}

/// Lint a single source text, returning its diagnostics in discovery order.
pub fn lint_source(file: &str, source: &str) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_typescript(true)
        .with_module(true)
        .with_jsx(true);

    let ret = Parser::new(&allocator, source, source_type).parse();
    if ret.panicked || !ret.errors.is_empty() {
        let reason = ret
            .errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown syntax error".to_string());
        return vec![Diagnostic::error(
            file,
            1,
            1,
            format!("Parse error: {reason}"),
        )];
    }

    let ctx = FileContext::new(file, source);
    let mut walker = ObjectLiteralWalker {
        ctx: &ctx,
        diagnostics: Vec::new(),
    };
    walker.visit_program(&ret.program);
    walker.diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    #[test]
    fn test_line_index_positions() {
        let source = "ab\ncd\n\nef";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 0), (1, 1));
        assert_eq!(index.position(source, 1), (1, 2));
        assert_eq!(index.position(source, 3), (2, 1));
        assert_eq!(index.position(source, 6), (3, 1));
        assert_eq!(index.position(source, 7), (4, 1));
    }

    #[test]
    fn test_line_index_counts_chars_not_bytes() {
        let source = "let é = 1;\nx";
        let index = LineIndex::new(source);
        // 'é' is two bytes; byte offset 11 is the start of line two.
        let line_two = source.find('x').unwrap() as u32;
        assert_eq!(index.position(source, line_two), (2, 1));
    }

    #[test]
    fn test_location_fallback_tiers() {
        let ctx = FileContext::new("a.js", "const x = 1;\n");
        assert_eq!(ctx.resolve(Some(Span::new(6, 7)), None), (1, 7));
        assert_eq!(ctx.resolve(None, Some(Span::new(6, 7))), (1, 7));
        assert_eq!(ctx.resolve(None, None), (1, 1));
    }

    #[test]
    fn test_parse_failure_single_error_at_origin() {
        let diags = lint_source("broken.js", "const = {;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!((diags[0].line, diags[0].column), (1, 1));
        assert!(diags[0].message.starts_with("Parse error: "));
        assert!(diags[0].suggestion.is_none());
    }

    #[test]
    fn test_non_component_object_is_ignored() {
        // `width` would be misplaced in a component's props, but this
        // literal declares none of the recognized top-level keys.
        let diags = lint_source("a.js", "const o = { width: '10px', onClick: 1 };");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_typescript_and_jsx_parse() {
        let source = r#"
            const C: Component = {
                props: { width: '100px' },
            };
            export const view = () => <div>{C}</div>;
        "#;
        let diags = lint_source("c.tsx", source);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'width'"));
    }
}
