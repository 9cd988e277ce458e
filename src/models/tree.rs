use super::{EntryKind, Stats};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub label: String,
    pub kind: EntryKind,
    pub error: Option<String>,
    /// Filtered entry count of a directory that was over the entry-count limit.
    pub skipped: Option<usize>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            label: label.into(),
            kind,
            error: None,
            skipped: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub error: Option<String>,
    pub skipped: Option<usize>,
    pub children: Vec<TreeNode>,
}

impl DirTree {
    /// Count every listed node below the root.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        let mut pending: Vec<&TreeNode> = self.children.iter().collect();
        while let Some(node) = pending.pop() {
            stats.record(node.kind);
            pending.extend(node.children.iter());
        }
        stats
    }
}
