use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::{FileType, Metadata};
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FileMode, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)?.filter_map(|e| e.ok()) {
                let path = entry.path();
                let metadata = match std::fs::symlink_metadata(&path) {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        tracing::debug!(path = %path.display(), %err, "skipping unreadable entry");
                        continue;
                    }
                };

                entries.push(FsEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    kind: entry_kind(metadata.file_type()),
                    mode: file_mode(&metadata),
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn metadata(&self, path: &Path) -> Result<FsEntry> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::metadata(&path)?;
            Ok(FsEntry {
                name: display_name(&path),
                kind: entry_kind(metadata.file_type()),
                mode: file_mode(&metadata),
                path,
            })
        })
        .await
        .context("metadata task failed")?
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[cfg(unix)]
fn file_mode(metadata: &Metadata) -> FileMode {
    use std::os::unix::fs::MetadataExt;
    FileMode::from_raw(metadata.mode())
}

#[cfg(not(unix))]
fn file_mode(metadata: &Metadata) -> FileMode {
    FileMode::synthesize(metadata.is_dir(), metadata.permissions().readonly())
}
