use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::library::VideoCatalogue;

use super::command::{HELP_TEXT, ParsedLine, PlayerCommand, parse_command_line};
use super::error::PlayerResult;
use super::playback::{PauseOutcome, PlayOutcome};
use super::player::VideoPlayer;
use super::search::SearchResults;

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Line-oriented command loop over any reader/writer pair. Domain errors are
/// reported as status lines; only I/O failures on the boundary are returned.
pub(crate) struct Shell<C, R, W> {
    player: VideoPlayer<C>,
    input: R,
    output: W,
    prompt: Option<&'static str>,
}

impl<C, R, W> Shell<C, R, W>
where
    C: VideoCatalogue,
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(player: VideoPlayer<C>, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
            prompt: None,
        }
    }

    pub(crate) fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    #[cfg(test)]
    pub(crate) fn player(&self) -> &VideoPlayer<C> {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Runs until `EXIT` or end of input.
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            if let Some(prompt) = self.prompt {
                write!(self.output, "{prompt}")?;
                self.output.flush().context("failed to flush output")?;
            }
            let Some(line) = self.read_line()? else {
                debug!("input closed");
                return Ok(());
            };
            if !self.execute_line(&line)? {
                return Ok(());
            }
        }
    }

    /// Returns `false` once the session should end.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<bool> {
        match parse_command_line(line) {
            ParsedLine::Blank => Ok(true),
            ParsedLine::Invalid => {
                debug!(line, "rejected command");
                self.say(INVALID_COMMAND)?;
                Ok(true)
            }
            ParsedLine::Command(command) => self.execute(command),
        }
    }

    pub(crate) fn execute(&mut self, command: PlayerCommand) -> Result<bool> {
        debug!(?command, "executing");
        match command {
            PlayerCommand::NumberOfVideos => {
                let count = self.player.catalogue().len();
                self.say(&format!("{count} videos in the library"))?;
            }
            PlayerCommand::ShowAllVideos => self.show_all_videos()?,
            PlayerCommand::Play { video_id } => {
                let outcome = self.player.play(&video_id);
                self.report_play(outcome)?;
            }
            PlayerCommand::PlayRandom => {
                let outcome = self.player.play_random();
                self.report_play(outcome)?;
            }
            PlayerCommand::Stop => match self.player.stop() {
                Ok(video) => self.say(&format!("Stopping video: {}", video.title))?,
                Err(err) => self.say(&format!("Cannot stop video: {err}"))?,
            },
            PlayerCommand::Pause => match self.player.pause() {
                Ok(PauseOutcome::Paused(video)) => {
                    self.say(&format!("Pausing video: {}", video.title))?;
                }
                Ok(PauseOutcome::AlreadyPaused(video)) => {
                    self.say(&format!("Video already paused: {}", video.title))?;
                }
                Err(err) => self.say(&format!("Cannot pause video: {err}"))?,
            },
            PlayerCommand::Continue => match self.player.continue_playback() {
                Ok(video) => self.say(&format!("Continuing video: {}", video.title))?,
                Err(err) => self.say(&format!("Cannot continue video: {err}"))?,
            },
            PlayerCommand::ShowPlaying => {
                let line = self.player.session().describe_current().to_string();
                self.say(&line)?;
            }
            PlayerCommand::CreatePlaylist { name } => {
                let line = match self.player.create_playlist(&name) {
                    Ok(_) => format!("Successfully created new playlist: {name}"),
                    Err(err) => format!("Cannot create playlist: {err}"),
                };
                self.say(&line)?;
            }
            PlayerCommand::AddToPlaylist { name, video_id } => {
                let line = match self.player.add_to_playlist(&name, &video_id) {
                    Ok(video) => format!("Added video to {name}: {}", video.title),
                    Err(err) => format!("Cannot add video to {name}: {err}"),
                };
                self.say(&line)?;
            }
            PlayerCommand::RemoveFromPlaylist { name, video_id } => {
                let line = match self.player.remove_from_playlist(&name, &video_id) {
                    Ok(video) => format!("Removed video from {name}: {}", video.title),
                    Err(err) => format!("Cannot remove video from {name}: {err}"),
                };
                self.say(&line)?;
            }
            PlayerCommand::ClearPlaylist { name } => {
                let line = match self.player.clear_playlist(&name) {
                    Ok(()) => format!("Successfully removed all videos from {name}"),
                    Err(err) => format!("Cannot clear playlist {name}: {err}"),
                };
                self.say(&line)?;
            }
            PlayerCommand::DeletePlaylist { name } => {
                let line = match self.player.delete_playlist(&name) {
                    Ok(_) => format!("Deleted playlist: {name}"),
                    Err(err) => format!("Cannot delete playlist {name}: {err}"),
                };
                self.say(&line)?;
            }
            PlayerCommand::ShowAllPlaylists => self.show_all_playlists()?,
            PlayerCommand::ShowPlaylist { name } => self.show_playlist(&name)?,
            PlayerCommand::SearchVideos { term } => {
                let results = self.player.search_videos(&term);
                self.present_results(&results)?;
            }
            PlayerCommand::SearchVideosWithTag { tag } => {
                let results = self.player.search_videos_with_tag(&tag);
                self.present_results(&results)?;
            }
            PlayerCommand::FlagVideo { video_id, reason } => {
                if let Err(err) = self.player.flag_video(&video_id, reason.as_deref()) {
                    self.say(&err.to_string())?;
                }
            }
            PlayerCommand::AllowVideo { video_id } => {
                if let Err(err) = self.player.allow_video(&video_id) {
                    self.say(&err.to_string())?;
                }
            }
            PlayerCommand::Help => self.say(HELP_TEXT)?,
            PlayerCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn show_all_videos(&mut self) -> Result<()> {
        self.say("Here's a list of all available videos:")?;
        for video in self.player.all_videos() {
            self.say(&format!(" {video}"))?;
        }
        Ok(())
    }

    fn show_all_playlists(&mut self) -> Result<()> {
        let names: Vec<String> = self
            .player
            .playlists()
            .list_all()
            .map(|playlist| playlist.name().to_string())
            .collect();
        if names.is_empty() {
            return self.say("No playlists exist yet");
        }
        self.say("Showing all playlists:")?;
        for name in names {
            self.say(&name)?;
        }
        Ok(())
    }

    fn show_playlist(&mut self, name: &str) -> Result<()> {
        let lines = match self.player.playlists().show(name) {
            Ok(playlist) if playlist.is_empty() => vec![
                format!("Showing playlist: {name}"),
                "No videos here yet".to_string(),
            ],
            Ok(playlist) => std::iter::once(format!("Showing playlist: {name}"))
                .chain(playlist.videos().iter().map(|video| video.to_string()))
                .collect(),
            Err(err) => vec![format!("Cannot show playlist {name}: {err}")],
        };
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    fn present_results(&mut self, results: &SearchResults) -> Result<()> {
        if results.is_empty() {
            return self.say(&format!("No search results for {}", results.term()));
        }
        self.say(&format!("Here are the results for {}:", results.term()))?;
        for (idx, video) in results.videos().iter().enumerate() {
            self.say(&format!("  {}) {video}", idx + 1))?;
        }
        self.say(
            "Would you like to play any of the above? If yes, specify the number of the video.",
        )?;
        self.say("If your answer is not a valid number, we will assume it's a no.")?;
        self.output.flush().context("failed to flush output")?;

        let answer = self.read_line()?.unwrap_or_default();
        match self.player.play_selection(results, &answer) {
            Some(outcome) => self.report_play(outcome),
            None => {
                debug!(answer = answer.trim(), "no video selected");
                Ok(())
            }
        }
    }

    fn report_play(&mut self, outcome: PlayerResult<PlayOutcome>) -> Result<()> {
        match outcome {
            Ok(PlayOutcome { stopped, playing }) => {
                if let Some(stopped) = stopped {
                    self.say(&format!("Stopping video: {}", stopped.title))?;
                }
                self.say(&format!("Playing video: {}", playing.title))
            }
            Err(err) => self.say(&format!("Cannot play video: {err}")),
        }
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line is just an invalid command or a "no".
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }
}
