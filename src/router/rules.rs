//! Ordered rewrite rules for resource addresses.
//!
//! Each rule inspects an `Address` and either declines (`None`) or decides the
//! route. The first rule that decides wins, so keyword rules sit ahead of the
//! rules that read a token as a literal workspace name.

use crate::catalog::{ORGANIZATION_CONTEXT, WORKSPACE_CONTEXT};
use crate::router::keywords::{KeywordTable, RunScope};
use crate::router::RouteDecision;

/// Argument vector whose first token was taken as an organization name.
///
/// Help markers that appear among the positionals are lifted out, so
/// `acme -h prod` addresses the same workspace as `acme prod -h`.
#[derive(Debug, Clone)]
pub(crate) struct Address<'a> {
    pub org: &'a str,
    /// Positional tokens after the organization, up to the first non-help flag.
    pub path: Vec<String>,
    /// Help markers found before the first non-help flag.
    pub help: Vec<String>,
    /// Everything from the first non-help flag onward, verbatim.
    pub extras: &'a [String],
}

impl<'a> Address<'a> {
    pub fn parse(args: &'a [String], keywords: &KeywordTable) -> Option<Self> {
        let (org, rest) = args.split_first()?;
        let split = rest
            .iter()
            .position(|t| t.starts_with('-') && !keywords.is_help(t))
            .unwrap_or(rest.len());
        let (leading, extras) = rest.split_at(split);
        let (help, path): (Vec<String>, Vec<String>) =
            leading.iter().cloned().partition(|t| keywords.is_help(t));
        Some(Self {
            org: org.as_str(),
            path,
            help,
            extras,
        })
    }

    /// Tokens appended after the synthesized flags: lifted help markers, then extras.
    fn tail(&self) -> Vec<String> {
        let mut tail = self.help.clone();
        tail.extend(self.extras.iter().cloned());
        tail
    }

    /// The only token beyond the positionals is a help marker.
    fn help_only(&self) -> bool {
        self.help.len() == 1 && self.extras.is_empty()
    }

    fn org_flag(&self) -> String {
        format!("-org={}", self.org)
    }
}

pub(crate) type RuleFn = fn(&Address<'_>, &KeywordTable) -> Option<RouteDecision>;

pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "organization_context",
        apply: organization_context,
    },
    Rule {
        name: "organization_show",
        apply: organization_show,
    },
    Rule {
        name: "organization_collection",
        apply: organization_collection,
    },
    Rule {
        name: "workspace_context",
        apply: workspace_context,
    },
    Rule {
        name: "workspace_read",
        apply: workspace_read,
    },
    Rule {
        name: "workspace_collection",
        apply: workspace_collection,
    },
    Rule {
        name: "run_short_syntax",
        apply: run_short_syntax,
    },
];

fn rewrite<I, S>(head: I, extras: &[String]) -> RouteDecision
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = head.into_iter().map(Into::into).collect();
    out.extend(extras.iter().cloned());
    RouteDecision::Rewrite(out)
}

fn organization_context(addr: &Address<'_>, kw: &KeywordTable) -> Option<RouteDecision> {
    if !addr.path.is_empty() || !addr.help_only() {
        return None;
    }
    Some(rewrite([ORGANIZATION_CONTEXT.to_string(), addr.org_flag()], &[]))
}

fn organization_show(addr: &Address<'_>, _kw: &KeywordTable) -> Option<RouteDecision> {
    if !addr.path.is_empty() {
        return None;
    }
    Some(rewrite(
        [
            "organization".to_string(),
            "show".to_string(),
            format!("-name={}", addr.org),
        ],
        &addr.tail(),
    ))
}

fn organization_collection(addr: &Address<'_>, kw: &KeywordTable) -> Option<RouteDecision> {
    let (keyword, rest) = addr.path.split_first()?;
    let noun = kw.organization_collection(keyword)?;

    let decision = match rest.split_first() {
        None if addr.help_only() => rewrite([noun], &addr.tail()),
        None => rewrite([noun.to_string(), "list".to_string(), addr.org_flag()], &addr.tail()),
        Some((verb, trailing)) if kw.is_collection_verb(verb) => {
            let mut head = vec![noun.to_string(), verb.clone(), addr.org_flag()];
            head.extend(trailing.iter().cloned());
            rewrite(head, &addr.tail())
        }
        Some(_) => RouteDecision::PassThrough,
    };
    Some(decision)
}

fn workspace_context(addr: &Address<'_>, _kw: &KeywordTable) -> Option<RouteDecision> {
    let [workspace] = addr.path.as_slice() else {
        return None;
    };
    if !addr.help_only() {
        return None;
    }
    Some(rewrite(
        [
            WORKSPACE_CONTEXT.to_string(),
            addr.org_flag(),
            format!("-workspace={workspace}"),
        ],
        &[],
    ))
}

fn workspace_read(addr: &Address<'_>, _kw: &KeywordTable) -> Option<RouteDecision> {
    let [workspace] = addr.path.as_slice() else {
        return None;
    };
    Some(rewrite(
        [
            "workspace".to_string(),
            "read".to_string(),
            addr.org_flag(),
            format!("-name={workspace}"),
        ],
        &addr.tail(),
    ))
}

fn workspace_collection(addr: &Address<'_>, kw: &KeywordTable) -> Option<RouteDecision> {
    let [workspace, keyword, rest @ ..] = addr.path.as_slice() else {
        return None;
    };
    let collection = kw.workspace_collection(keyword)?;
    let workspace_flag = format!("-workspace={workspace}");

    let decision = match rest {
        [] => rewrite(
            [collection.noun.clone(), "list".to_string(), addr.org_flag(), workspace_flag],
            &addr.tail(),
        ),
        [verb] if verb == "list" || collection.verbs.contains(verb) => rewrite(
            [collection.noun.clone(), verb.clone(), addr.org_flag(), workspace_flag],
            &addr.tail(),
        ),
        [run_id] | [run_id, _] if *keyword == kw.run_collection => {
            resolve_run(addr, kw, workspace, run_id, rest.get(1))
        }
        _ => RouteDecision::PassThrough,
    };
    Some(decision)
}

fn run_short_syntax(addr: &Address<'_>, kw: &KeywordTable) -> Option<RouteDecision> {
    // An organization keyword in run position is never a run identifier.
    if let [_, token, ..] = addr.path.as_slice() {
        if kw.organization_collection(token).is_some() {
            return Some(RouteDecision::PassThrough);
        }
    }
    match addr.path.as_slice() {
        [workspace, run_id] => Some(resolve_run(addr, kw, workspace, run_id, None)),
        [workspace, run_id, action] => Some(resolve_run(addr, kw, workspace, run_id, Some(action))),
        _ => None,
    }
}

fn resolve_run(
    addr: &Address<'_>,
    kw: &KeywordTable,
    workspace: &str,
    run_id: &str,
    action: Option<&String>,
) -> RouteDecision {
    let Some(action) = kw.run_action(action.map(String::as_str)) else {
        return RouteDecision::PassThrough;
    };
    let mut head = vec![action.noun.clone(), action.verb.clone()];
    match action.scope {
        RunScope::Id => head.push(format!("-id={run_id}")),
        RunScope::RunId => head.push(format!("-run-id={run_id}")),
        RunScope::Workspace => {
            head.push(addr.org_flag());
            head.push(format!("-workspace={workspace}"));
        }
    }
    rewrite(head, &addr.tail())
}
