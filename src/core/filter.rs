use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

use crate::models::FsEntry;

/// Names excluded by `-I`. Segments are separated by `|`; a segment with
/// `*` or `?` is a glob over the whole name, anything else matches exactly.
#[derive(Debug)]
pub struct IgnorePatterns {
    literals: HashSet<String>,
    globs: Option<RegexSet>,
}

impl IgnorePatterns {
    pub fn parse(pattern: &str) -> anyhow::Result<Self> {
        let mut literals = HashSet::new();
        let mut globs = Vec::new();

        for segment in pattern.split('|').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(['*', '?']) {
                globs.push(glob_to_regex(segment));
            } else {
                literals.insert(segment.to_owned());
            }
        }

        let globs = if globs.is_empty() {
            None
        } else {
            let set = RegexSet::new(&globs)
                .with_context(|| format!("invalid ignore pattern: {pattern}"))?;
            Some(set)
        };

        Ok(Self { literals, globs })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.literals.contains(name)
            || self
                .globs
                .as_ref()
                .is_some_and(|globs| globs.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2 + 2);
    out.push('^');
    for c in glob.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');
    out
}

/// The per-entry inclusion rules, applied hidden, ignore, dirs-only.
#[derive(Debug, Default)]
pub struct EntryFilter {
    pub show_hidden: bool,
    pub dirs_only: bool,
    pub ignore: Option<IgnorePatterns>,
}

impl EntryFilter {
    pub fn accepts(&self, entry: &FsEntry) -> bool {
        if !self.show_hidden && entry.name.starts_with('.') {
            return false;
        }
        if self
            .ignore
            .as_ref()
            .is_some_and(|ignore| ignore.matches(&entry.name))
        {
            return false;
        }
        !(self.dirs_only && !entry.kind.is_dir())
    }
}
