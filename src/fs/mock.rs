use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FileMode, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Listing {
    Ok(Vec<FsEntry>),
    Err(String),
}

/// Scripted filesystem for walker tests.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Listing>,
    entries: HashMap<PathBuf, FsEntry>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Register `entries` as the listing of `dir`. Each entry also becomes
    /// answerable through `metadata`.
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        for entry in &entries {
            inner.entries.insert(entry.path.clone(), entry.clone());
        }
        inner.listings.insert(dir.into(), Listing::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Listing::Err(message.into()));
    }

    pub fn set_metadata(&self, entry: FsEntry) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.entries.insert(entry.path.clone(), entry);
    }

    /// Directories listed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Listing::Ok(entries)) => Ok(entries.clone()),
            Some(Listing::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn metadata(&self, path: &Path) -> Result<FsEntry> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .entries
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("No such file or directory: {}", path.display()))
    }
}

pub fn entry(path: &str, kind: EntryKind) -> FsEntry {
    let path = PathBuf::from(path);
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mode = match kind {
        EntryKind::Directory => FileMode::from_raw(0o040_755),
        EntryKind::Symlink => FileMode::from_raw(0o120_777),
        EntryKind::File | EntryKind::Other => FileMode::from_raw(0o100_644),
    };
    FsEntry {
        path,
        name,
        kind,
        mode,
    }
}

pub fn dir(path: &str) -> FsEntry {
    entry(path, EntryKind::Directory)
}

pub fn file(path: &str) -> FsEntry {
    entry(path, EntryKind::File)
}
