//! Ordered label-to-target mapping for index pages.

/// Ordered mapping from display label to link target.
///
/// Inserting a label that is already present replaces its target in place,
/// keeping the position of the first insertion. The walker relies on this
/// when it overlays directory links on top of file links: a directory entry
/// wins any label collision with a file entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    entries: Vec<(String, String)>,
}

impl LinkMap {
    pub fn new() -> Self {
        LinkMap::default()
    }

    /// Insert or overwrite a label.
    pub fn insert(&mut self, label: impl Into<String>, target: impl Into<String>) {
        let label = label.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((label, target)),
        }
    }

    /// Look up the target for a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, t)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by label, case-insensitively.
    ///
    /// The sort is stable: labels that compare equal after lowercasing keep
    /// their insertion order.
    pub fn sorted_by_label(&self) -> Vec<(&str, &str)> {
        let mut sorted: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(label, target)| (label.as_str(), target.as_str()))
            .collect();
        sorted.sort_by_key(|(label, _)| label.to_lowercase());
        sorted
    }
}
