//! CLI domain: parse, route, help, and output only.
//! Address routing lives in the router; this layer wires it to the process.

mod help;
mod output;
mod parse;
mod route;

pub use help::{
    format_catalog, format_noun_help, format_organization_context, format_workspace_context,
};
pub use output::{format_invocation, map_error};
pub use parse::{Cli, OutputFormat};
pub use route::RunContext;
