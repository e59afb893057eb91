// Alias tables and cycle-detecting resolution
//
// A model name may be symbolic: an alias pointing at another name, possibly
// through a chain of further aliases. Each run resolves against a merged
// view of the process-wide static table and a run-scoped overlay supplied
// with the workflow input; overlay entries shadow static ones name-by-name.
// Resolution follows the chain until a name has no entry (concrete) and
// fails on the first revisited name instead of looping.

use std::collections::HashMap;

use crate::error::{ConfigError, Result};

/// Resolves symbolic model names against an immutable merged alias table
///
/// Construction merges the tables once; after that, `resolve` is a pure
/// function of (name, table) with no interior state, so one resolver can be
/// shared freely within a run and separate runs never interfere.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    table: HashMap<String, String>,
}

impl AliasResolver {
    /// Resolver over a single table
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Resolver over a static table with a run-scoped overlay on top
    ///
    /// The static table is copied, not borrowed: the merged snapshot belongs
    /// to this run and outlives nothing shared.
    pub fn merged(statics: &HashMap<String, String>, overlay: &HashMap<String, String>) -> Self {
        let mut table = statics.clone();
        table.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { table }
    }

    /// Whether the name has an alias entry (i.e. is symbolic, not concrete)
    pub fn is_symbolic(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Follow alias indirections until a concrete identifier is reached
    ///
    /// Matching is exact and case-sensitive. A name with no entry resolves
    /// to itself. There is no chain-length cap: any acyclic chain resolves.
    /// A chain that revisits a name fails with the full traversal path,
    /// including the repeated closing name; a self-alias `a -> a` is a
    /// cycle of length one, not a concrete identifier.
    pub fn resolve(&self, name: &str) -> Result<String> {
        let mut current = name.to_string();
        let mut path = vec![current.clone()];

        while let Some(target) = self.table.get(&current) {
            if path.iter().any(|seen| seen == target) {
                path.push(target.clone());
                return Err(ConfigError::circular(path));
            }
            path.push(target.clone());
            current = target.clone();
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unknown_name_is_already_concrete() {
        let resolver = AliasResolver::new(table(&[("fast", "gpt-4o-mini")]));
        assert_eq!(resolver.resolve("gpt-4o").unwrap(), "gpt-4o");
    }

    #[test]
    fn symbolic_and_concrete_names_are_distinguished() {
        let resolver = AliasResolver::new(table(&[("fast", "gpt-4o-mini")]));
        assert!(resolver.is_symbolic("fast"));
        assert!(!resolver.is_symbolic("gpt-4o-mini"));
        assert!(!resolver.is_symbolic("gpt-4o"));
    }

    #[test]
    fn single_hop_alias_resolves() {
        let resolver = AliasResolver::new(table(&[("fast", "gpt-4o-mini")]));
        assert_eq!(resolver.resolve("fast").unwrap(), "gpt-4o-mini");
    }

    #[test]
    fn chains_resolve_to_the_terminal_name() {
        let resolver = AliasResolver::new(table(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "anthropic/claude-3-opus"),
        ]));
        assert_eq!(resolver.resolve("a").unwrap(), "anthropic/claude-3-opus");
    }

    #[test]
    fn self_alias_is_a_cycle_of_length_one() {
        let resolver = AliasResolver::new(table(&[("a", "a")]));
        let err = resolver.resolve("a").unwrap_err();
        assert_eq!(err.to_string(), "circular alias reference: a -> a");
        assert_eq!(err.cycle_path().unwrap(), ["a", "a"]);
    }

    #[test]
    fn cycle_reports_exact_traversal_order() {
        let resolver = AliasResolver::new(table(&[("a", "b"), ("b", "c"), ("c", "a")]));
        let err = resolver.resolve("a").unwrap_err();
        assert_eq!(err.to_string(), "circular alias reference: a -> b -> c -> a");
    }

    #[test]
    fn cycle_entered_mid_chain_keeps_the_entry_prefix() {
        // d is not part of the cycle but is part of the traversal
        let resolver = AliasResolver::new(table(&[("d", "a"), ("a", "b"), ("b", "a")]));
        let err = resolver.resolve("d").unwrap_err();
        assert_eq!(
            err.to_string(),
            "circular alias reference: d -> a -> b -> a"
        );
    }

    #[test]
    fn overlay_shadows_static_entries() {
        let statics = table(&[("fast", "gpt-3.5-turbo"), ("smart", "gpt-4o")]);
        let overlay = table(&[("fast", "groq/llama-3-8b")]);
        let resolver = AliasResolver::merged(&statics, &overlay);
        assert_eq!(resolver.resolve("fast").unwrap(), "groq/llama-3-8b");
        assert_eq!(resolver.resolve("smart").unwrap(), "gpt-4o");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let resolver = AliasResolver::new(table(&[("fast", "gpt-4o-mini")]));
        assert_eq!(resolver.resolve("Fast").unwrap(), "Fast");
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = AliasResolver::new(table(&[("a", "b"), ("b", "final-model")]));
        let first = resolver.resolve("a").unwrap();
        let second = resolver.resolve("a").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn long_acyclic_chain_resolves() {
        let mut entries = HashMap::new();
        for i in 0..200 {
            entries.insert(format!("n{}", i), format!("n{}", i + 1));
        }
        let resolver = AliasResolver::new(entries);
        assert_eq!(resolver.resolve("n0").unwrap(), "n200");
    }
}
