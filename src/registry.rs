//! Command registry: a token trie over canonical command paths.
//!
//! Built once from the command catalog and read-only afterwards. Routing only
//! asks whether a token is a known command root; the full trie also answers
//! whole-path membership for the dispatch layer and help rendering.

use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default, Clone)]
struct CommandNode {
    children: BTreeMap<String, CommandNode>,
    terminal: bool,
}

/// Registry of canonical command paths.
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    root: CommandNode,
    roots: HashSet<String>,
}

impl CommandRegistry {
    /// Build a registry from whitespace-separated command paths. Blank paths are ignored.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for path in paths {
            registry.insert(path.as_ref());
        }
        registry
    }

    fn insert(&mut self, path: &str) {
        let mut tokens = path.split_whitespace().peekable();
        let Some(first) = tokens.peek() else {
            return;
        };
        self.roots.insert((*first).to_string());

        let mut node = &mut self.root;
        for token in tokens {
            node = node.children.entry(token.to_string()).or_default();
        }
        node.terminal = true;
    }

    /// True iff `token` is the first token of at least one registered path.
    pub fn has_root(&self, token: &str) -> bool {
        self.roots.contains(token)
    }

    /// True iff the full token sequence was registered as a command.
    pub fn contains_path<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.lookup(tokens).is_some_and(|node| node.terminal)
    }

    /// Tokens directly below `prefix`, in sorted order.
    pub fn children<S: AsRef<str>>(&self, prefix: &[S]) -> Vec<&str> {
        self.lookup(prefix)
            .map(|node| node.children.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of distinct command roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    fn lookup<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&CommandNode> {
        if tokens.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for token in tokens {
            node = node.children.get(token.as_ref())?;
        }
        Some(node)
    }
}

/// Root membership on a registry that may not have been supplied.
pub fn has_root(registry: Option<&CommandRegistry>, token: &str) -> bool {
    registry.is_some_and(|r| r.has_root(token))
}
