mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, dir, entry, file};

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List a directory without following symlinks. Order is unspecified.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Describe a single path, following symlinks.
    async fn metadata(&self, path: &Path) -> Result<FsEntry>;
}
