use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "vidcat",
    version,
    about = "Browse a video catalogue, control playback and manage playlists"
)]
pub struct Cli {
    /// Catalogue file (`title | id | #tag , #tag` lines, or `.json`)
    #[arg(short, long, env = "VIDCAT_LIBRARY", global = true)]
    pub library: Option<PathBuf>,

    /// Diagnostics written to stderr; `RUST_LOG` takes precedence
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive command prompt (default)
    Shell,
    /// Execute the commands in a file, one per line
    Run { script: PathBuf },
    /// List every video in the catalogue
    Videos,
}
