use std::fmt;
use std::rc::Rc;

use rand::Rng;
use tracing::{debug, info};

use crate::library::{VideoCatalogue, VideoRef};

use super::error::{InvalidState, Missing, PlayerError, PlayerResult};

/// Paused can only exist with a current video, so it is a state of its own
/// rather than a flag next to an optional video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    #[default]
    Idle,
    Playing(VideoRef),
    Paused(VideoRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayOutcome {
    /// Video that was implicitly stopped to make room, if any.
    pub(crate) stopped: Option<VideoRef>,
    pub(crate) playing: VideoRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PauseOutcome {
    Paused(VideoRef),
    AlreadyPaused(VideoRef),
}

#[derive(Debug, Default)]
pub(crate) struct PlaybackSession {
    state: PlaybackState,
}

impl PlaybackSession {
    #[cfg(test)]
    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<&VideoRef> {
        match &self.state {
            PlaybackState::Idle => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_paused(&self) -> bool {
        matches!(self.state, PlaybackState::Paused(_))
    }

    pub(crate) fn play(
        &mut self,
        catalogue: &impl VideoCatalogue,
        video_id: &str,
    ) -> PlayerResult<PlayOutcome> {
        let video = catalogue
            .get(video_id)
            .ok_or(PlayerError::NotFound(Missing::Video))?;
        Ok(self.start(video))
    }

    /// May pick the video that is already playing.
    pub(crate) fn play_random<R>(
        &mut self,
        catalogue: &impl VideoCatalogue,
        rng: &mut R,
    ) -> PlayerResult<PlayOutcome>
    where
        R: Rng + ?Sized,
    {
        let videos = catalogue.all();
        if videos.is_empty() {
            return Err(PlayerError::EmptyLibrary);
        }
        let idx = rng.random_range(0..videos.len());
        debug!(idx, total = videos.len(), "picked random video");
        Ok(self.start(Rc::clone(&videos[idx])))
    }

    pub(crate) fn stop(&mut self) -> PlayerResult<VideoRef> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(PlayerError::InvalidState(InvalidState::NothingPlaying)),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                info!(id = %video.id, "stopped");
                Ok(video)
            }
        }
    }

    pub(crate) fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        let video = match &self.state {
            PlaybackState::Idle => {
                return Err(PlayerError::InvalidState(InvalidState::NothingPlaying));
            }
            PlaybackState::Paused(video) => {
                return Ok(PauseOutcome::AlreadyPaused(Rc::clone(video)));
            }
            PlaybackState::Playing(video) => Rc::clone(video),
        };
        info!(id = %video.id, "paused");
        self.state = PlaybackState::Paused(Rc::clone(&video));
        Ok(PauseOutcome::Paused(video))
    }

    pub(crate) fn continue_playback(&mut self) -> PlayerResult<VideoRef> {
        let video = match &self.state {
            PlaybackState::Idle => {
                return Err(PlayerError::InvalidState(InvalidState::NothingPlaying));
            }
            PlaybackState::Playing(_) => {
                return Err(PlayerError::InvalidState(InvalidState::NotPaused));
            }
            PlaybackState::Paused(video) => Rc::clone(video),
        };
        info!(id = %video.id, "continued");
        self.state = PlaybackState::Playing(Rc::clone(&video));
        Ok(video)
    }

    pub(crate) fn describe_current(&self) -> NowPlaying<'_> {
        NowPlaying(&self.state)
    }

    fn start(&mut self, video: VideoRef) -> PlayOutcome {
        let stopped = self.stop().ok();
        info!(id = %video.id, "playing");
        self.state = PlaybackState::Playing(Rc::clone(&video));
        PlayOutcome {
            stopped,
            playing: video,
        }
    }
}

/// Read-only view rendering the `SHOW_PLAYING` line.
pub(crate) struct NowPlaying<'a>(&'a PlaybackState);

impl fmt::Display for NowPlaying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            PlaybackState::Idle => f.write_str("No video is currently playing"),
            PlaybackState::Playing(video) => write!(f, "Currently playing: {video}"),
            PlaybackState::Paused(video) => write!(f, "Currently playing: {video} - PAUSED"),
        }
    }
}
