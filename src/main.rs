//! placelint binary entry point.
//! Resolves the file list, runs the lint core, prints, and maps the success
//! flag to the process exit code.

use clap::Parser;
use std::path::PathBuf;

use placelint::cli::Cli;
use placelint::{discovery, lint, output, LintConfig};

fn main() {
    let cli = Cli::parse();

    let mut config = LintConfig::default();
    if !cli.files.is_empty() {
        config.files = cli.files;
    }
    if !cli.ignore.is_empty() {
        config.ignore = cli.ignore;
    }
    let root = PathBuf::from(cli.root.unwrap_or_else(|| ".".to_string()));
    let output_mode = cli.output.unwrap_or_else(|| "human".to_string());

    let targets = discovery::resolve_files(&root, &config);
    let result = lint::run_lint(&targets);
    output::print_results(&result, &output_mode);

    // Warnings alone still exit 0; only parse failures fail the run.
    if !result.success() {
        std::process::exit(1);
    }
}
