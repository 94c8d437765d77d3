//! Prefix table: normalized prefix → ordered base directories.
//!
//! The table stores values exactly as given; callers normalize before
//! inserting (see [`crate::normalize_prefix`] and
//! [`crate::normalize_base_dir`]). Directory order within a prefix is
//! lookup precedence, and duplicates are kept.

use rustc_hash::FxHashMap;

/// Mapping from normalized namespace prefix to its candidate base directories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: FxHashMap<String, Vec<String>>,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `base_dir` to the directories for `prefix`.
    pub fn push(&mut self, prefix: String, base_dir: String) {
        self.entries.entry(prefix).or_default().push(base_dir);
    }

    /// Insert `base_dir` ahead of every directory already registered for `prefix`.
    pub fn push_front(&mut self, prefix: String, base_dir: String) {
        self.entries.entry(prefix).or_default().insert(0, base_dir);
    }

    /// Base directories for an exact (already normalized) prefix key.
    pub fn base_dirs(&self, prefix: &str) -> Option<&[String]> {
        self.entries.get(prefix).map(Vec::as_slice)
    }

    /// Drop a prefix and return its directories.
    pub fn remove(&mut self, prefix: &str) -> Option<Vec<String>> {
        self.entries.remove(prefix)
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered prefixes, sorted for stable output.
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }
}
