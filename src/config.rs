// src/config.rs
use crate::components::grid::DEFAULT_COLUMNS;
use clap::Parser;
use std::path::PathBuf;

/// Browse a podcast catalog as a grid of cards in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "podshelf", version, about)]
pub struct Cli {
    /// Dataset JSON file; the built-in sample is used when omitted
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Number of card columns in the grid
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Where log output goes (the terminal is busy drawing the UI)
    #[arg(long, value_name = "PATH", default_value = "podshelf.log")]
    pub log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Print every card as plain text and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }
}
