use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::ReportOptions;
use crate::core::render::{Charset, RenderOptions};
use crate::core::walk::{LabelStyle, WalkOptions};

#[derive(Parser, Debug)]
#[command(name = "fstree", version)]
#[command(about = "List the contents of a directory as a tree", long_about = None)]
pub struct Cli {
    /// Root path to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Print all files, including hidden ones
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    pub dirs_only: bool,

    /// Print the full path prefix for each entry
    #[arg(short = 'f', long = "full-path")]
    pub full_path: bool,

    /// Append '/' to directory names
    #[arg(short = 'F', long = "classify")]
    pub classify: bool,

    /// Print the file type and permissions for each entry
    #[arg(short = 'p', long = "perms")]
    pub perms: bool,

    /// Max display depth of the directory tree
    #[arg(short = 'L', long = "level", value_name = "LEVEL")]
    pub level: Option<usize>,

    /// Do not descend directories that contain more than N entries
    #[arg(long = "filelimit", value_name = "N")]
    pub file_limit: Option<usize>,

    /// Leave out entries matching PATTERN ('|'-separated names, '*' and '?' wildcards)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Option<String>,

    /// List directories before files
    #[arg(long = "dirsfirst")]
    pub dirs_first: bool,

    /// Line-drawing characters
    #[arg(long, value_enum, default_value_t = CharsetArg::Unicode)]
    pub charset: CharsetArg,

    /// Send output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CharsetArg {
    Unicode,
    Ascii,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Unicode => Charset::Unicode,
            CharsetArg::Ascii => Charset::Ascii,
        }
    }
}

impl Cli {
    /// Reject flag values clap cannot rule out on its own.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.level != Some(0),
            "Invalid level, must be greater than 0."
        );
        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            walk: WalkOptions {
                max_depth: self.level,
                file_limit: self.file_limit,
                ignore_pattern: self.ignore.clone(),
                show_hidden: self.all,
                dirs_only: self.dirs_only,
                dirs_first: self.dirs_first,
                label: LabelStyle {
                    full_path: self.full_path,
                    permissions: self.perms,
                    classify: self.classify,
                },
            },
            render: RenderOptions {
                charset: self.charset.into(),
                dirs_only: self.dirs_only,
            },
        }
    }
}
