mod command;
mod error;
mod playback;
mod player;
mod playlist;
mod search;
mod shell;


use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::library::{VideoCatalogue, VideoLibrary};
use crate::paths::default_library_path;

use self::command::PlayerCommand;
use self::player::VideoPlayer;
use self::shell::Shell;

const SHELL_PROMPT: &str = "> ";

pub fn run(cli: Cli) -> Result<()> {
    let library = open_library(cli.library.as_deref())?;

    match cli.command {
        Some(Command::Run { script }) => run_script(library, &script, &mut io::stdout())?,
        Some(Command::Videos) => run_videos(library)?,
        Some(Command::Shell) | None => run_shell(library)?,
    }

    Ok(())
}

fn run_shell(library: VideoLibrary) -> Result<()> {
    println!("Hello and welcome to vidcat, what would you like to do?");
    println!("Enter HELP for list of available commands or EXIT to terminate.");

    let stdin = io::stdin();
    let mut shell =
        Shell::new(VideoPlayer::new(library), stdin.lock(), io::stdout()).with_prompt(SHELL_PROMPT);
    shell.run()?;

    println!("Goodbye!");
    Ok(())
}

fn run_script<W: Write>(library: VideoLibrary, script: &Path, output: &mut W) -> Result<()> {
    let file = File::open(script)
        .with_context(|| format!("failed to open command script {}", script.display()))?;
    let mut shell = Shell::new(VideoPlayer::new(library), BufReader::new(file), output);
    shell.run()
}

fn run_videos(library: VideoLibrary) -> Result<()> {
    let mut shell = Shell::new(VideoPlayer::new(library), io::empty(), io::stdout());
    shell.execute(PlayerCommand::ShowAllVideos)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LibrarySource {
    File(PathBuf),
    Bundled,
}

/// An explicit path always wins; the default data-dir file is only used when
/// it actually exists.
pub(crate) fn resolve_library_source(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> LibrarySource {
    if let Some(path) = explicit {
        return LibrarySource::File(path.to_path_buf());
    }
    match default_path {
        Some(path) if path.is_file() => LibrarySource::File(path),
        _ => LibrarySource::Bundled,
    }
}

fn open_library(explicit: Option<&Path>) -> Result<VideoLibrary> {
    let default_path = match default_library_path() {
        Ok(path) => Some(path),
        Err(err) => {
            warn!("{err:#}");
            None
        }
    };

    let library = match resolve_library_source(explicit, default_path) {
        LibrarySource::File(path) => VideoLibrary::open(&path)?,
        LibrarySource::Bundled => VideoLibrary::bundled(),
    };
    info!(videos = library.len(), "video catalogue ready");
    Ok(library)
}
