//! Command catalog: canonical command paths and their one-line summaries.
//!
//! The same catalog builds the command registry and renders help, so the set
//! of routable roots and the set of documented commands cannot drift apart.

use crate::registry::CommandRegistry;

/// Pseudo-command for contextual help on an organization address.
pub const ORGANIZATION_CONTEXT: &str = "organization:context";
/// Pseudo-command for contextual help on a workspace address.
pub const WORKSPACE_CONTEXT: &str = "workspace:context";

const DEFAULT_COMMANDS: &[(&str, &str)] = &[
    ("organization list", "List organizations"),
    ("organization show", "Show an organization"),
    ("organization create", "Create an organization"),
    ("organization update", "Update an organization"),
    ("organization delete", "Delete an organization"),
    ("organization token create", "Create an organization token"),
    ("organization token delete", "Delete an organization token"),
    (ORGANIZATION_CONTEXT, "Show short-syntax help for an organization"),
    ("workspace list", "List workspaces"),
    ("workspace read", "Show a workspace"),
    ("workspace create", "Create a workspace"),
    ("workspace update", "Update a workspace"),
    ("workspace delete", "Delete a workspace"),
    ("workspace lock", "Lock a workspace"),
    ("workspace unlock", "Unlock a workspace"),
    (WORKSPACE_CONTEXT, "Show short-syntax help for a workspace"),
    ("project list", "List projects"),
    ("project show", "Show a project"),
    ("project create", "Create a project"),
    ("project delete", "Delete a project"),
    ("team list", "List teams"),
    ("team show", "Show a team"),
    ("team create", "Create a team"),
    ("team delete", "Delete a team"),
    ("policy list", "List policies"),
    ("policy show", "Show a policy"),
    ("policy create", "Create a policy"),
    ("policy delete", "Delete a policy"),
    ("policyset list", "List policy sets"),
    ("policyset show", "Show a policy set"),
    ("policyset create", "Create a policy set"),
    ("policyset delete", "Delete a policy set"),
    ("varset list", "List variable sets"),
    ("varset show", "Show a variable set"),
    ("varset create", "Create a variable set"),
    ("varset delete", "Delete a variable set"),
    ("variable list", "List variables"),
    ("variable create", "Create a variable"),
    ("variable update", "Update a variable"),
    ("variable delete", "Delete a variable"),
    ("agentpool list", "List agent pools"),
    ("agentpool show", "Show an agent pool"),
    ("run list", "List runs"),
    ("run show", "Show a run"),
    ("run create", "Queue a run"),
    ("run apply", "Apply a run"),
    ("run discard", "Discard a run"),
    ("run cancel", "Cancel a run"),
    ("plan read", "Show the plan of a run"),
    ("plan logs", "Show plan logs of a run"),
    ("state list", "List state versions"),
    ("state outputs", "Show state outputs"),
    ("resource list", "List managed resources"),
    ("tag list", "List workspace tags"),
    ("configversion list", "List configuration versions"),
    ("configversion read", "Show a configuration version"),
    ("assessment list", "List health assessments"),
    ("changerequest list", "List change requests"),
    ("comment list", "List run comments"),
    ("comment create", "Comment on a run"),
    ("policycheck list", "List policy checks of a run"),
    ("policycheck override", "Override a soft-failed policy check"),
    ("whoami", "Show the authenticated user"),
    ("version", "Show the client version"),
];

/// One registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: String,
    pub summary: String,
}

impl CatalogEntry {
    pub fn noun(&self) -> &str {
        self.path.split_whitespace().next().unwrap_or_default()
    }
}

/// Flat list of canonical commands.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COMMANDS
                .iter()
                .map(|(path, summary)| CatalogEntry {
                    path: (*path).to_string(),
                    summary: (*summary).to_string(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Default catalog plus extra paths from configuration. Duplicates and blanks are skipped.
    pub fn with_extra_commands<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();
        for path in extra {
            let normalized = path
                .as_ref()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if normalized.is_empty() || catalog.entries.iter().any(|e| e.path == normalized) {
                continue;
            }
            catalog.entries.push(CatalogEntry {
                path: normalized,
                summary: String::new(),
            });
        }
        catalog
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    /// Entries whose first token is `noun`.
    pub fn entries_for_noun<'a>(&'a self, noun: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.iter().filter(move |e| e.noun() == noun)
    }

    pub fn registry(&self) -> CommandRegistry {
        CommandRegistry::from_paths(self.paths())
    }
}
