//! Lint driver: runs the per-file walker over a resolved file list.
//!
//! Files are independent, so the per-file work runs on a rayon parallel
//! iterator. `collect` preserves input order, which keeps the flattened
//! diagnostic sequence in file-list order for reproducible output.

use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, LintResult};
use crate::walker::lint_source;

/// Lint already-loaded (file identifier, source text) pairs.
pub fn run_lint_sources(sources: &[(String, String)]) -> LintResult {
    let per_file: Vec<Vec<Diagnostic>> = sources
        .par_iter()
        .map(|(file, text)| lint_source(file, text))
        .collect();
    LintResult {
        diagnostics: per_file.into_iter().flatten().collect(),
        files_checked: sources.len(),
    }
}

/// Lint files on disk. A file that cannot be read is reported through the
/// same per-file error channel as a parse failure and the run continues.
pub fn run_lint(paths: &[PathBuf]) -> LintResult {
    let per_file: Vec<Vec<Diagnostic>> = paths
        .par_iter()
        .map(|path| {
            let file = path.to_string_lossy().to_string();
            match fs::read_to_string(path) {
                Ok(text) => lint_source(&file, &text),
                Err(e) => vec![Diagnostic::error(&file, 1, 1, format!("Parse error: {e}"))],
            }
        })
        .collect();
    LintResult {
        diagnostics: per_file.into_iter().flatten().collect(),
        files_checked: paths.len(),
    }
}
