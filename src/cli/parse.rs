//! CLI parse: clap types for tfctl. No behavior; definitions only.

use crate::config::ValidateMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// tfctl - address remote organizations, workspaces and runs by path
#[derive(Parser, Debug)]
#[command(name = "tfctl", version)]
#[command(about = "Address remote organizations, workspaces and runs by path")]
#[command(
    after_help = "Examples:\n  tfctl acme                      organization show -name=acme\n  tfctl acme teams                team list -org=acme\n  tfctl acme prod                 workspace read -org=acme -name=prod\n  tfctl acme prod run-123 apply   run apply -id=run-123\n  tfctl acme prod -h              short-syntax help for a workspace"
)]
pub struct Cli {
    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Check that the addressed organization or workspace exists
    #[arg(long, value_enum)]
    pub validate: Option<ValidateMode>,

    /// Command or resource address, followed by its flags
    #[arg(
        value_name = "ADDRESS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_tokens_after_first_positional_are_captured() {
        let cli = Cli::try_parse_from(["tfctl", "--format", "json", "acme", "prod", "-h"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.args, vec!["acme", "prod", "-h"]);
    }

    #[test]
    fn test_validate_mode_flag() {
        let cli = Cli::try_parse_from(["tfctl", "--validate", "strict", "acme"]).unwrap();
        assert_eq!(cli.validate, Some(ValidateMode::Strict));
        let cli = Cli::try_parse_from(["tfctl", "acme"]).unwrap();
        assert_eq!(cli.validate, None);
    }

    #[test]
    fn test_canonical_flags_pass_through() {
        let cli = Cli::try_parse_from(["tfctl", "run", "apply", "-id=run-1"]).unwrap();
        assert_eq!(cli.args, vec!["run", "apply", "-id=run-1"]);
    }
}
