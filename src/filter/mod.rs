//! Destination-name filtering.
//!
//! Deliberately simple: case-insensitive substring containment against a
//! list of entries, no regex or glob semantics. An empty filter matches
//! every destination.

#![warn(missing_docs)]

/// Ordered list of substrings a destination name must contain one of.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    entries: Vec<String>,
}

impl NameFilter {
    /// Builds a filter, trimming and lower-casing every entry up front.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether `name` passes the filter.
    ///
    /// Always true for an empty filter; otherwise true iff the trimmed,
    /// lower-cased name contains at least one entry.
    pub fn matches(&self, name: &str) -> bool {
        if self.entries.is_empty() {
            return true;
        }
        let name = name.trim().to_lowercase();
        self.entries.iter().any(|entry| name.contains(entry))
    }
}
