//! Diagnostic records and the run-level result accumulator.
//!
//! Diagnostics are append-only and ordered by discovery: file order, then
//! tree-traversal order, then sub-object order (props, style, on), then
//! property declaration order. Nothing mutates a diagnostic after creation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reserved for per-file parse failure. One per failing file.
    Error,
    /// Every placement-rule violation.
    Warning,
}

/// A single reported finding with location and remediation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(file: &str, line: u32, column: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            file: file.to_string(),
            line,
            column,
            message: message.into(),
            severity: Severity::Error,
            suggestion: None,
        }
    }

    pub fn warning(
        file: &str,
        line: u32,
        column: u32,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Diagnostic {
            file: file.to_string(),
            line,
            column,
            message: message.into(),
            severity: Severity::Warning,
            suggestion: Some(suggestion.into()),
        }
    }
}

/// The diagnostics of one lint run, partitioned by severity on demand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    pub files_checked: usize,
}

impl LintResult {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// True iff zero error-severity diagnostics exist. Warnings never
    /// affect the flag.
    pub fn success(&self) -> bool {
        self.errors().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_ignores_warnings() {
        let result = LintResult {
            diagnostics: vec![Diagnostic::warning(
                "a.js",
                3,
                5,
                "Style property 'width' should be in 'style' object, not 'props'",
                "Move 'width' to the 'style' object",
            )],
            files_checked: 1,
        };
        assert!(result.success());
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_success_false_on_error() {
        let result = LintResult {
            diagnostics: vec![Diagnostic::error("a.js", 1, 1, "Parse error: oops")],
            files_checked: 1,
        };
        assert!(!result.success());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let d = Diagnostic::error("a.js", 1, 1, "Parse error: oops");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], "error");
        // Errors carry no suggestion, and the field is omitted entirely.
        assert!(json.get("suggestion").is_none());
    }
}
