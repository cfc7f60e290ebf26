//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Case;
use crate::config::RenderStyle;

/// Generic N-ary tree: depth-first, breadth-first, map and filter on a sample tree
#[derive(Parser, Debug)]
#[command(name = "ntree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored headers
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output style, overrides the configured one
    #[arg(short, long, value_enum, global = true)]
    pub render: Option<RenderStyle>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every demonstration (default)
    Demo,

    /// List values depth-first (pre-order)
    Dfs,

    /// List values breadth-first (level-order)
    Bfs,

    /// Change the case of every value
    Map {
        /// Target case
        #[arg(long, value_enum, default_value_t = Case::Lower)]
        case: Case,
    },

    /// Keep nodes whose value passes; a rejected node drops its subtree
    Filter {
        /// Reject this value (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Reject values not matching this regex
        #[arg(short, long)]
        matching: Option<String>,
    },

    /// Print the sample tree as an outline
    Show,

    /// Print effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
