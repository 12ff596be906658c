//! Keyword table: the reserved tokens that name collections and run actions.
//!
//! Supplied to the router at construction. Configuration may replace any
//! section; omitted sections keep their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a run action addresses its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunScope {
    /// `-id=<run-id>`
    Id,
    /// `-run-id=<run-id>`
    RunId,
    /// `-org=<org> -workspace=<workspace>`; the run id is dropped.
    Workspace,
}

/// Canonical command a run action rewrites to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAction {
    pub noun: String,
    pub verb: String,
    pub scope: RunScope,
}

impl RunAction {
    fn new(noun: &str, verb: &str, scope: RunScope) -> Self {
        Self {
            noun: noun.to_string(),
            verb: verb.to_string(),
            scope,
        }
    }
}

/// Collection addressable below a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    pub noun: String,
    /// Verbs accepted after the keyword besides `list`.
    #[serde(default)]
    pub verbs: Vec<String>,
}

impl WorkspaceCollection {
    fn new(noun: &str, verbs: &[&str]) -> Self {
        Self {
            noun: noun.to_string(),
            verbs: verbs.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTable {
    /// Plural keyword after an organization -> singular noun.
    pub organization_collections: BTreeMap<String, String>,
    /// Keyword after an organization and workspace -> collection.
    pub workspace_collections: BTreeMap<String, WorkspaceCollection>,
    /// Verbs that may follow an organization collection keyword.
    pub collection_verbs: Vec<String>,
    /// Workspace collection keyword that introduces the long run syntax.
    pub run_collection: String,
    /// Action token after a run id -> canonical command.
    pub run_actions: BTreeMap<String, RunAction>,
    /// Action assumed when a run id has no action token.
    pub default_run_action: String,
    pub help_markers: Vec<String>,
    /// First tokens that always pass through unchanged.
    pub pass_through: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let organization_collections = [
            ("workspaces", "workspace"),
            ("projects", "project"),
            ("teams", "team"),
            ("policies", "policy"),
            ("policysets", "policyset"),
            ("varsets", "varset"),
            ("variables", "variable"),
            ("runs", "run"),
            ("state", "state"),
            ("agentpools", "agentpool"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let workspace_collections = [
            ("runs", WorkspaceCollection::new("run", &[])),
            ("variables", WorkspaceCollection::new("variable", &[])),
            ("state", WorkspaceCollection::new("state", &["outputs"])),
            ("resources", WorkspaceCollection::new("resource", &[])),
            ("tags", WorkspaceCollection::new("tag", &[])),
            ("configversions", WorkspaceCollection::new("configversion", &[])),
            ("assessments", WorkspaceCollection::new("assessment", &[])),
            ("changerequests", WorkspaceCollection::new("changerequest", &[])),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let run_actions = [
            ("show", RunAction::new("run", "show", RunScope::Id)),
            ("apply", RunAction::new("run", "apply", RunScope::Id)),
            ("plan", RunAction::new("plan", "read", RunScope::Id)),
            ("logs", RunAction::new("plan", "logs", RunScope::Id)),
            ("comments", RunAction::new("comment", "list", RunScope::RunId)),
            ("policychecks", RunAction::new("policycheck", "list", RunScope::RunId)),
            ("configversion", RunAction::new("configversion", "read", RunScope::RunId)),
            // Outputs and state belong to the workspace, not the run.
            ("outputs", RunAction::new("state", "outputs", RunScope::Workspace)),
            ("state", RunAction::new("state", "list", RunScope::Workspace)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            organization_collections,
            workspace_collections,
            collection_verbs: ["create", "list", "show", "read", "update", "delete"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            run_collection: "runs".to_string(),
            run_actions,
            default_run_action: "show".to_string(),
            help_markers: ["-h", "-help", "--help"].iter().map(|v| v.to_string()).collect(),
            pass_through: ["help"].iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl KeywordTable {
    pub fn is_help(&self, token: &str) -> bool {
        self.help_markers.iter().any(|m| m == token)
    }

    pub fn is_pass_through(&self, token: &str) -> bool {
        self.pass_through.iter().any(|t| t == token)
    }

    pub fn is_collection_verb(&self, token: &str) -> bool {
        self.collection_verbs.iter().any(|v| v == token)
    }

    pub fn organization_collection(&self, token: &str) -> Option<&str> {
        self.organization_collections.get(token).map(String::as_str)
    }

    pub fn workspace_collection(&self, token: &str) -> Option<&WorkspaceCollection> {
        self.workspace_collections.get(token)
    }

    /// Resolve an optional action token, falling back to the default action.
    pub fn run_action(&self, action: Option<&str>) -> Option<&RunAction> {
        self.run_actions
            .get(action.unwrap_or(self.default_run_action.as_str()))
    }

    /// Every noun a rewrite can produce. Used to check the table against a catalog.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.organization_collections
            .values()
            .map(String::as_str)
            .chain(self.workspace_collections.values().map(|c| c.noun.as_str()))
            .chain(self.run_actions.values().map(|a| a.noun.as_str()))
    }
}
