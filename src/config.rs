//! Command line configuration of the `avl` binary

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Default file the tree is seeded from
pub const DEFAULT_INPUT: &str = "entrada.txt";

/// Interactive AVL tree of names: seeds the tree from a file, then adds, removes and shows names
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "avl")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// File of whitespace-separated names inserted before the menu starts
    #[arg(short, long, env = "AVL_INPUT", default_value = DEFAULT_INPUT, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Insert the seed names without printing the tree around every insertion
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the seeded tree and exit instead of opening the menu
    #[arg(long)]
    pub no_menu: bool,
}
