use std::cmp::Ordering;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::filter::{EntryFilter, IgnorePatterns};
use crate::fs::FileSystem;
use crate::models::{DirTree, FsEntry, TreeNode};

/// What goes into each printed label besides the entry name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelStyle {
    /// Print the path as reached from the root argument instead of the base name (`-f`)
    pub full_path: bool,
    /// Prefix the `ls -l` style mode, e.g. `[drwxr-xr-x]  src` (`-p`)
    pub permissions: bool,
    /// Append `/` to directory names (`-F`)
    pub classify: bool,
}

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Deepest level to list; directories at this level are not opened.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Directories with more than this many (filtered) entries are not opened.
    pub file_limit: Option<usize>,
    /// Pipe-separated names or globs to leave out (e.g. `target|*.log`)
    pub ignore_pattern: Option<String>,
    /// Include names starting with '.'
    pub show_hidden: bool,
    /// List directories only
    pub dirs_only: bool,
    /// Sort directories before everything else
    pub dirs_first: bool,
    pub label: LabelStyle,
}

struct Walker<'a, F> {
    fs: &'a F,
    options: &'a WalkOptions,
    filter: EntryFilter,
}

/// Walk a directory tree depth-first, starting at depth 0.
///
/// Unreadable directories are recorded on their node and the walk carries on.
/// Fails only when the ignore pattern does not compile.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
) -> anyhow::Result<DirTree> {
    let ignore = options
        .ignore_pattern
        .as_deref()
        .map(IgnorePatterns::parse)
        .transpose()?;

    let walker = Walker {
        fs,
        options,
        filter: EntryFilter {
            show_hidden: options.show_hidden,
            dirs_only: options.dirs_only,
            ignore,
        },
    };

    Ok(walker.visit(dir, 0).await)
}

impl<F: FileSystem> Walker<'_, F> {
    async fn visit(&self, dir: &Path, depth: usize) -> DirTree {
        debug!(dir = %dir.display(), depth, "reading directory");

        let entries = match self.fs.read_dir(dir).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), "cannot open directory: {err:#}");
                return DirTree {
                    error: Some(err.to_string()),
                    ..DirTree::default()
                };
            }
        };

        let mut entries: Vec<FsEntry> = entries
            .into_iter()
            .filter(|entry| self.filter.accepts(entry))
            .collect();

        if let Some(limit) = self.options.file_limit
            && entries.len() > limit
        {
            debug!(dir = %dir.display(), count = entries.len(), limit, "over file limit");
            return DirTree {
                skipped: Some(entries.len()),
                ..DirTree::default()
            };
        }

        let dirs_first = self.options.dirs_first;
        entries.sort_by(|a, b| compare_entries(a, b, dirs_first));

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut node = TreeNode::leaf(self.label(&entry), entry.kind);

            // -L 1 lists the root's children without opening any of them.
            let within_depth = self
                .options
                .max_depth
                .is_none_or(|max| depth + 1 < max);

            if entry.kind.is_dir() && within_depth {
                let subtree = Box::pin(self.visit(&entry.path, depth + 1)).await;
                node.error = subtree.error;
                node.skipped = subtree.skipped;
                node.children = subtree.children;
            }

            children.push(node);
        }

        DirTree {
            error: None,
            skipped: None,
            children,
        }
    }

    fn label(&self, entry: &FsEntry) -> String {
        let style = self.options.label;
        let mut label = if style.full_path {
            entry.path.display().to_string()
        } else {
            entry.name.clone()
        };
        if style.classify && entry.kind.is_dir() {
            label.push('/');
        }
        if style.permissions {
            label = format!("[{}]  {label}", entry.mode);
        }
        label
    }
}

fn compare_entries(a: &FsEntry, b: &FsEntry, dirs_first: bool) -> Ordering {
    if dirs_first {
        match (a.kind.is_dir(), b.kind.is_dir()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.name.cmp(&b.name)
}
