//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "placelint",
    version,
    about = "Check that component fields live in the right bucket: style, props, or on",
    long_about = "placelint walks JS/TS/JSX/TSX sources, finds object-literal component \
definitions (any literal declaring extend, props, style, or on), and warns when a field \
sits in the wrong sub-object.\n\nExit code is 0 unless a file fails to parse; placement \
warnings never fail the run.",
    after_help = "Examples:\n  placelint\n  placelint --files 'src/**/*.ts,src/**/*.tsx'\n  placelint --ignore 'node_modules/**,dist/**,gen/**' --output json"
)]
pub struct Cli {
    /// Comma-separated glob patterns of files to lint
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated glob patterns (default: **/*.js,**/*.jsx,**/*.ts,**/*.tsx)"
    )]
    pub files: Vec<String>,

    /// Comma-separated glob patterns to skip
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated glob patterns to skip (default: node_modules/**,dist/**)"
    )]
    pub ignore: Vec<String>,

    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,

    #[arg(long, help = "Directory to resolve patterns from (default: current dir)")]
    pub root: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_patterns() {
        let cli = Cli::parse_from(["placelint", "--files", "src/**/*.ts,src/**/*.tsx"]);
        assert_eq!(cli.files, vec!["src/**/*.ts", "src/**/*.tsx"]);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_no_args_means_defaults() {
        let cli = Cli::parse_from(["placelint"]);
        assert!(cli.files.is_empty());
        assert!(cli.output.is_none());
    }
}
