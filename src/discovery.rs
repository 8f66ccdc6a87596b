//! File discovery: expand include globs and filter through ignore patterns.
//!
//! Discovery is a collaborator of the core lint loop; it hands over an
//! already-resolved, ordered list of paths. Include patterns are expanded in
//! configuration order (each glob yields sorted paths), ignores are matched
//! per path, and duplicates keep their first position.

use glob::{glob, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn default_files() -> Vec<String> {
    ["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_ignore() -> Vec<String> {
    ["node_modules/**", "dist/**"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The configuration surface the CLI must supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            files: default_files(),
            ignore: default_ignore(),
        }
    }
}

/// Resolve the file list for a run. Unparseable patterns are skipped.
pub fn resolve_files(root: &Path, config: &LintConfig) -> Vec<PathBuf> {
    let ignore: Vec<Pattern> = config
        .ignore
        .iter()
        .filter_map(|pat| Pattern::new(&root.join(pat).to_string_lossy()).ok())
        .collect();

    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for pat in &config.files {
        let pattern = root.join(pat).to_string_lossy().to_string();
        let Ok(entries) = glob(&pattern) else {
            continue;
        };
        for path in entries.flatten() {
            if !path.is_file() {
                continue;
            }
            if ignore.iter().any(|ig| ig.matches_path(&path)) {
                continue;
            }
            if seen.insert(path.clone()) {
                targets.push(path);
            }
        }
    }
    targets
}
