//! CLI output: invocation rendering and error mapping.

use crate::cli::OutputFormat;
use crate::dispatch::Invocation;
use crate::error::CliError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Render a resolved invocation as text or JSON.
pub fn format_invocation(invocation: &Invocation, format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(invocation)
            .map_err(|e| CliError::Dispatch(format!("Failed to serialize invocation: {}", e)));
    }

    let mut out = format!("{} {}\n", "Command:".bold(), invocation.command_line());
    if !invocation.flags.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Flag", "Value"]);
        for (name, value) in &invocation.flags {
            table.add_row(vec![name.as_str(), value.as_str()]);
        }
        out.push_str(&format!("{}\n", table));
    }
    if !invocation.args.is_empty() {
        out.push_str(&format!("{} {}\n", "Arguments:".bold(), invocation.args.join(" ")));
    }
    Ok(out.trim_end().to_string())
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::Dispatch(msg) => format!("{}\nRun `tfctl` with no arguments to list commands.", msg),
        other => other.to_string(),
    }
}
