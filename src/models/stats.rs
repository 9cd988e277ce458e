use std::fmt;

use super::EntryKind;

/// Directory and file totals for the trailing summary line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub directories: usize,
    pub files: usize,
}

impl Stats {
    /// Symlinks and special files count as files.
    pub fn record(&mut self, kind: EntryKind) {
        if kind.is_dir() {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }

    /// Summary line; `include_files` is false in directories-only mode.
    pub fn summary(&self, include_files: bool) -> String {
        let dirs = plural(self.directories, "directory", "directories");
        if include_files {
            format!("{dirs}, {}", plural(self.files, "file", "files"))
        } else {
            dirs
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(true))
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
