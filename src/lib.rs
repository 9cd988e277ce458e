pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod models;

use anyhow::Context;
use std::io::Write;
use std::path::Path;

use crate::core::render::{self, RenderOptions};
use crate::core::walk::{self, WalkOptions};
use crate::fs::FileSystem;
use crate::models::Stats;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub walk: WalkOptions,
    pub render: RenderOptions,
}

pub fn root_display_name(root_path: &Path, is_current_dir: bool) -> String {
    if is_current_dir {
        return ".".to_owned();
    }

    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}

/// Walk `root` and write the full report (tree plus summary) to `writer`.
///
/// Fails when `root` does not exist or the ignore pattern is invalid.
/// A root that is not a directory is printed on its own and counted as one file.
pub async fn write_report<F: FileSystem, W: Write>(
    fs: &F,
    root: &Path,
    options: &ReportOptions,
    writer: &mut W,
) -> anyhow::Result<()> {
    let root_entry = fs
        .metadata(root)
        .await
        .with_context(|| root.display().to_string())?;

    let is_current_dir = root == Path::new(".");
    let root_label = if options.walk.label.full_path {
        root.display().to_string()
    } else {
        root_display_name(root, is_current_dir)
    };

    if !root_entry.kind.is_dir() {
        tracing::debug!(root = %root.display(), "root is not a directory");
        writeln!(writer, "{root_label}")?;
        writeln!(writer)?;
        let stats = Stats {
            directories: 0,
            files: 1,
        };
        render::write_summary(writer, &stats, &options.render)?;
        return Ok(());
    }

    let tree = walk::walk_dir(fs, root, &options.walk).await?;
    render::write_report(writer, &root_label, &tree, &options.render)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, dir, file};

    async fn report(fs: &MockFileSystem, root: &str, options: &ReportOptions) -> String {
        let mut out = Vec::new();
        write_report(fs, Path::new(root), options, &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn root_name_is_dot_for_current_dir() {
        assert_eq!(root_display_name(Path::new("."), true), ".");
        assert_eq!(root_display_name(Path::new("/srv/app"), false), "app");
        assert_eq!(root_display_name(Path::new("/"), false), "/");
    }

    #[tokio::test]
    async fn writes_tree_and_summary_for_directory() {
        let fs = MockFileSystem::default();
        fs.set_metadata(dir("/srv/app"));
        fs.set_dir_entries("/srv/app", vec![dir("/srv/app/bin"), file("/srv/app/run.sh")]);
        fs.set_dir_entries("/srv/app/bin", vec![file("/srv/app/bin/tool")]);

        let out = report(&fs, "/srv/app", &ReportOptions::default()).await;
        assert_eq!(
            out,
            "app\n├── bin\n│   └── tool\n└── run.sh\n\n1 directory, 2 files\n"
        );
    }

    #[tokio::test]
    async fn full_path_labels_the_root_as_given() {
        let fs = MockFileSystem::default();
        fs.set_metadata(dir("/srv/app"));
        fs.set_dir_entries("/srv/app", vec![file("/srv/app/run.sh")]);

        let mut options = ReportOptions::default();
        options.walk.label.full_path = true;
        let out = report(&fs, "/srv/app", &options).await;
        assert!(out.starts_with("/srv/app\n└── /srv/app/run.sh\n"));
    }

    #[tokio::test]
    async fn single_file_root_counts_as_one_file() {
        let fs = MockFileSystem::default();
        fs.set_metadata(file("/srv/notes.txt"));

        let out = report(&fs, "/srv/notes.txt", &ReportOptions::default()).await;
        assert_eq!(out, "notes.txt\n\n0 directories, 1 file\n");
        assert!(fs.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_root_is_an_error_naming_the_path() {
        let fs = MockFileSystem::default();
        let mut out = Vec::new();
        let err = write_report(&fs, Path::new("/nope"), &ReportOptions::default(), &mut out)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("/nope: "));
        assert!(out.is_empty());
    }
}
