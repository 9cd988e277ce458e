use std::io::{self, Write};

use crate::models::{DirTree, Stats, TreeNode};

/// Line-drawing glyphs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

struct Glyphs {
    branch: &'static str,
    last: &'static str,
    pipe: &'static str,
    blank: &'static str,
}

impl Charset {
    fn glyphs(self) -> Glyphs {
        match self {
            Charset::Unicode => Glyphs {
                branch: "├── ",
                last: "└── ",
                pipe: "│   ",
                blank: "    ",
            },
            Charset::Ascii => Glyphs {
                branch: "|-- ",
                last: "`-- ",
                pipe: "|   ",
                blank: "    ",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub charset: Charset,
    /// Leave the file count out of the summary line (`-d`).
    pub dirs_only: bool,
}

/// Write the root line, the tree, a blank line and the summary line.
pub fn write_report<W: Write>(
    writer: &mut W,
    root_label: &str,
    tree: &DirTree,
    options: &RenderOptions,
) -> io::Result<()> {
    write_tree(writer, root_label, tree, options.charset)?;
    writeln!(writer)?;
    write_summary(writer, &tree.stats(), options)
}

pub fn write_summary<W: Write>(
    writer: &mut W,
    stats: &Stats,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(writer, "{}", stats.summary(!options.dirs_only))
}

pub fn write_tree<W: Write>(
    writer: &mut W,
    root_label: &str,
    tree: &DirTree,
    charset: Charset,
) -> io::Result<()> {
    writer.write_all(root_label.as_bytes())?;
    write_annotations(writer, tree.error.as_deref(), tree.skipped)?;
    writer.write_all(b"\n")?;

    let glyphs = charset.glyphs();
    let mut prefix = String::new();
    write_children(writer, &tree.children, &glyphs, &mut prefix)
}

fn write_children<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    glyphs: &Glyphs,
    prefix: &mut String,
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let connector = if is_last { glyphs.last } else { glyphs.branch };

        write!(writer, "{prefix}{connector}{}", node.label)?;
        write_annotations(writer, node.error.as_deref(), node.skipped)?;
        writer.write_all(b"\n")?;

        if !node.children.is_empty() {
            let restore = prefix.len();
            prefix.push_str(if is_last { glyphs.blank } else { glyphs.pipe });
            write_children(writer, &node.children, glyphs, prefix)?;
            prefix.truncate(restore);
        }
    }

    Ok(())
}

fn write_annotations<W: Write>(
    writer: &mut W,
    error: Option<&str>,
    skipped: Option<usize>,
) -> io::Result<()> {
    if let Some(error) = error {
        write!(writer, " [error opening dir: {error}]")?;
    }
    if let Some(count) = skipped {
        write!(writer, " [{count} entries exceeds filelimit, not opening dir]")?;
    }
    Ok(())
}
