mod entry;
mod mode;
mod stats;
mod tree;

pub use entry::{EntryKind, FsEntry};
pub use mode::FileMode;
pub use stats::Stats;
pub use tree::{DirTree, TreeNode};
