use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xatag")]
#[command(about = "Tag files with key:value tags stored in extended attributes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recurse into directories
    #[arg(short = 'R', long, global = true)]
    pub recursive: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add tags to files
    #[command(alias = "a")]
    Add {
        /// Tag expression, `key:value1;value2` or `value` (repeatable)
        #[arg(short, long = "tag", value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Files to tag
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Replace the listed tag groups
    #[command(alias = "s")]
    Set {
        /// Tag expression, `key:value1;value2` or `value` (repeatable)
        #[arg(short, long = "tag", value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Also remove every group not listed in the request
        #[arg(long)]
        all: bool,

        /// Files to retag
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Delete tags from files
    #[command(alias = "rm")]
    Delete {
        /// Tag expression to delete; `key:` deletes the whole group
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Delete everything except the listed tags
        #[arg(long, conflicts_with = "all")]
        other: bool,

        /// Delete every xatag attribute
        #[arg(long, conflicts_with = "tags")]
        all: bool,

        /// Files to untag
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Copy tags from one file to others
    #[command(alias = "cp")]
    Copy {
        /// Only copy tags matching these expressions
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Copy everything except the matching tags
        #[arg(long, requires = "tags")]
        complement: bool,

        /// Source file
        source: PathBuf,

        /// Destination files
        #[arg(required = true, num_args = 1..)]
        destinations: Vec<PathBuf>,
    },

    /// List the tags on files
    #[command(alias = "ls")]
    List {
        /// Only show group keys
        #[arg(long)]
        keys: bool,

        /// Files to list
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (omit-default-key, one-line)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
