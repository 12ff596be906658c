//! CLI help: catalog listings and short-syntax help for an address.
//!
//! Context help is generated by routing sample addresses, so every example
//! shown is exactly what the router would produce.

use crate::catalog::Catalog;
use crate::router::ArgumentRouter;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

const RUN_PLACEHOLDER: &str = "<run-id>";
const WORKSPACE_PLACEHOLDER: &str = "<workspace>";

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn commands_table<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Command", "Description"]);
    for (path, summary) in entries {
        table.add_row(vec![path, summary]);
    }
    table
}

/// Every documented command, excluding the context pseudo-commands.
pub fn format_catalog(catalog: &Catalog) -> String {
    let table = commands_table(
        catalog
            .entries()
            .iter()
            .filter(|e| !e.path.contains(':'))
            .map(|e| (e.path.as_str(), e.summary.as_str())),
    );
    format!(
        "{}\n\n{}\n\nAny other first token is read as an organization; run `tfctl <org> -h` for its short syntax.\n",
        format_section_heading("Commands"),
        table
    )
}

/// Commands under a noun or command prefix, e.g. `team` or `run apply`.
pub fn format_noun_help(catalog: &Catalog, prefix: &[String]) -> String {
    let table = commands_table(
        catalog
            .entries()
            .iter()
            .filter(|e| {
                let tokens: Vec<&str> = e.path.split_whitespace().collect();
                tokens.len() >= prefix.len()
                    && tokens.iter().zip(prefix).all(|(a, b)| *a == b.as_str())
            })
            .map(|e| (e.path.as_str(), e.summary.as_str())),
    );
    format!(
        "{}\n\n{}\n",
        format_section_heading(&format!("Usage: tfctl {}", prefix.join(" "))),
        table
    )
}

fn address_table(router: &ArgumentRouter, addresses: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Address", "Runs"]);
    for address in addresses {
        let routed = router.translate(address.as_slice());
        if routed == address {
            continue;
        }
        table.add_row(vec![
            format!("tfctl {}", address.join(" ")),
            routed.join(" "),
        ]);
    }
    table
}

fn addr(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Short-syntax forms available below an organization.
pub fn format_organization_context(router: &ArgumentRouter, org: &str) -> String {
    let keywords = router.keywords();
    let mut addresses = vec![addr(&[org])];
    for keyword in keywords.organization_collections.keys() {
        addresses.push(addr(&[org, keyword.as_str()]));
    }
    if let Some(keyword) = keywords.organization_collections.keys().next() {
        for verb in &keywords.collection_verbs {
            addresses.push(addr(&[org, keyword.as_str(), verb.as_str()]));
        }
    }
    addresses.push(addr(&[org, WORKSPACE_PLACEHOLDER]));

    format!(
        "{}\n\n{}\n",
        format_section_heading(&format!("Organization {}", org)),
        address_table(router, addresses)
    )
}

/// Short-syntax forms available below a workspace.
pub fn format_workspace_context(router: &ArgumentRouter, org: &str, workspace: &str) -> String {
    let keywords = router.keywords();
    let mut addresses = vec![addr(&[org, workspace])];
    for (keyword, collection) in &keywords.workspace_collections {
        addresses.push(addr(&[org, workspace, keyword.as_str()]));
        for verb in &collection.verbs {
            addresses.push(addr(&[org, workspace, keyword.as_str(), verb.as_str()]));
        }
    }
    addresses.push(addr(&[org, workspace, RUN_PLACEHOLDER]));
    for action in keywords.run_actions.keys() {
        addresses.push(addr(&[org, workspace, RUN_PLACEHOLDER, action.as_str()]));
    }

    format!(
        "{}\n\n{}\n",
        format_section_heading(&format!("Workspace {}/{}", org, workspace)),
        address_table(router, addresses)
    )
}
