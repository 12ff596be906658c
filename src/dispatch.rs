//! Dispatch: parse a canonical argument vector into an invocation.
//!
//! Accepts both the flags the router synthesizes (`-org=`, `-workspace=`,
//! `-name=`, `-id=`, `-run-id=`) and flags the user passed directly. Flag
//! values are carried as given.

use crate::catalog::{ORGANIZATION_CONTEXT, WORKSPACE_CONTEXT};
use crate::error::CliError;
use crate::registry::CommandRegistry;
use crate::router::KeywordTable;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Registered command path, or a bare noun when only help was requested.
    pub command: Vec<String>,
    pub flags: BTreeMap<String, String>,
    /// Positional tokens that followed the command path.
    pub args: Vec<String>,
    pub help: bool,
}

impl Invocation {
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }

    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    fn is(&self, path: &[&str]) -> bool {
        self.command.iter().map(String::as_str).eq(path.iter().copied())
    }

    pub fn is_context(&self) -> bool {
        matches!(
            self.command.first().map(String::as_str),
            Some(ORGANIZATION_CONTEXT) | Some(WORKSPACE_CONTEXT)
        )
    }

    /// Organization the invocation addresses, if any.
    pub fn organization(&self) -> Option<&str> {
        if self.is(&["organization", "show"]) {
            return self.flag("name");
        }
        self.flag("org")
    }

    /// Workspace the invocation addresses, if any.
    pub fn workspace(&self) -> Option<&str> {
        if self.is(&["workspace", "read"]) {
            return self.flag("name");
        }
        self.flag("workspace")
    }
}

/// Parse `argv` against the registry. The longest registered prefix of the
/// leading positional tokens is the command path.
pub fn parse_invocation(
    argv: &[String],
    registry: &CommandRegistry,
    keywords: &KeywordTable,
) -> Result<Invocation, CliError> {
    let split = argv
        .iter()
        .position(|t| t.starts_with('-'))
        .unwrap_or(argv.len());
    let (positionals, rest) = argv.split_at(split);

    let mut flags = BTreeMap::new();
    let mut args = Vec::new();
    let mut help = false;
    for token in rest {
        if keywords.is_help(token) {
            help = true;
        } else if let Some(flag) = token.strip_prefix('-') {
            let flag = flag.strip_prefix('-').unwrap_or(flag);
            match flag.split_once('=') {
                Some((name, value)) => flags.insert(name.to_string(), value.to_string()),
                None => flags.insert(flag.to_string(), "true".to_string()),
            };
        } else {
            args.push(token.clone());
        }
    }

    let command_len = (1..=positionals.len())
        .rev()
        .find(|&len| registry.contains_path(&positionals[..len]));

    let command_len = match command_len {
        Some(len) => len,
        None if help && positionals.first().is_some_and(|t| registry.has_root(t)) => 1,
        None => {
            return Err(CliError::Dispatch(format!(
                "unknown command: {}",
                if argv.is_empty() {
                    "(none)".to_string()
                } else {
                    argv.join(" ")
                }
            )));
        }
    };

    let (command, leading_args) = positionals.split_at(command_len);
    let mut all_args = leading_args.to_vec();
    all_args.extend(args);

    Ok(Invocation {
        command: command.to_vec(),
        flags,
        args: all_args,
        help,
    })
}
