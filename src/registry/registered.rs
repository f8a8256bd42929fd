//! Insert-only record of extensions the host already has

use std::collections::BTreeSet;

/// Extensions already handed to the host during this process.
///
/// There is no removal operation: the host cannot forget an extension, so
/// neither can this set. It starts empty at process start and is never
/// persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisteredSet {
    extensions: BTreeSet<String>,
}

impl RegisteredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Sorted, `", "`-joined listing for display.
    pub fn pretty(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }

    /// Tokens of `desired` not yet registered, ascending.
    pub(crate) fn missing_from(&self, desired: &BTreeSet<String>) -> BTreeSet<String> {
        desired.difference(&self.extensions).cloned().collect()
    }

    /// Record a batch the host has accepted.
    pub(crate) fn commit(&mut self, batch: &BTreeSet<String>) {
        self.extensions.extend(batch.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_from() {
        let mut registered = RegisteredSet::new();
        registered.commit(&set(&["a", "b"]));

        let missing = registered.missing_from(&set(&["b", "c", "a", "d"]));
        assert_eq!(missing, set(&["c", "d"]));
    }

    #[test]
    fn test_commit_only_grows() {
        let mut registered = RegisteredSet::new();
        registered.commit(&set(&["b", "a"]));
        registered.commit(&set(&[]));
        registered.commit(&set(&["a"]));

        assert_eq!(registered.len(), 2);
        assert!(registered.contains("a"));
        assert!(registered.contains("b"));
    }

    #[test]
    fn test_pretty() {
        let mut registered = RegisteredSet::new();
        assert_eq!(registered.pretty(), "");

        registered.commit(&set(&["c", "a", "b"]));
        assert_eq!(registered.pretty(), "a, b, c");
    }
}
