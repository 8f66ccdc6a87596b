//! Console rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! full diagnostic list plus a summary with the success flag.

use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

use crate::diagnostics::{LintResult, Severity};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print lint results in the requested format.
pub fn print_results(res: &LintResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_json(res)).unwrap_or_default()
        ),
        _ => {
            let color = use_colors(output);
            for d in &res.diagnostics {
                let (icon, tag) = match d.severity {
                    Severity::Error => {
                        if color {
                            ("✖".red().to_string(), "[error]".red().bold().to_string())
                        } else {
                            ("✖".to_string(), "[error]".to_string())
                        }
                    }
                    Severity::Warning => {
                        if color {
                            ("▲".yellow().to_string(), "[warn]".yellow().bold().to_string())
                        } else {
                            ("▲".to_string(), "[warn]".to_string())
                        }
                    }
                };
                let loc = format!("{}:{}:{}", d.file, d.line, d.column);
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {} {} {}", icon, tag, loc, d.message);
                if let Some(suggestion) = &d.suggestion {
                    if color {
                        println!("    ↳ {}", suggestion.bright_black());
                    } else {
                        println!("    ↳ {}", suggestion);
                    }
                }
            }
            let summary = format!(
                "— Summary — errors={} warnings={} files={}",
                res.errors().count(),
                res.warnings().count(),
                res.files_checked
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the JSON payload (pure, for testing).
pub fn compose_json(res: &LintResult) -> JsonVal {
    json!({
        "diagnostics": &res.diagnostics,
        "summary": {
            "errors": res.errors().count(),
            "warnings": res.warnings().count(),
            "files": res.files_checked,
            "success": res.success(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;

    #[test]
    fn test_compose_json_shape() {
        let res = LintResult {
            diagnostics: vec![
                Diagnostic::warning(
                    "a.js",
                    2,
                    7,
                    "Style property 'width' should be in 'style' object, not 'props'",
                    "Move 'width' to the 'style' object",
                ),
                Diagnostic::error("b.js", 1, 1, "Parse error: Unexpected token"),
            ],
            files_checked: 2,
        };
        let out = compose_json(&res);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["success"], false);
        assert_eq!(out["diagnostics"][0]["severity"], "warning");
        assert_eq!(out["diagnostics"][0]["line"], 2);
        assert_eq!(out["diagnostics"][0]["column"], 7);
        assert_eq!(
            out["diagnostics"][0]["suggestion"],
            "Move 'width' to the 'style' object"
        );
    }
}
