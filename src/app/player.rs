use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::library::{VideoCatalogue, VideoLibrary, VideoRef};

use super::error::{PlayerError, PlayerResult};
use super::playback::{PauseOutcome, PlayOutcome, PlaybackSession};
use super::playlist::{Playlist, PlaylistRegistry};
use super::search::{self, SearchResults};

/// Everything one run of the player owns: the catalogue, the single playback
/// slot and the playlists.
pub(crate) struct VideoPlayer<C = VideoLibrary> {
    catalogue: C,
    session: PlaybackSession,
    playlists: PlaylistRegistry,
    rng: StdRng,
}

impl<C: VideoCatalogue> VideoPlayer<C> {
    pub(crate) fn new(catalogue: C) -> Self {
        Self::with_rng(catalogue, StdRng::from_os_rng())
    }

    pub(crate) fn with_rng(catalogue: C, rng: StdRng) -> Self {
        Self {
            catalogue,
            session: PlaybackSession::default(),
            playlists: PlaylistRegistry::default(),
            rng,
        }
    }

    pub(crate) fn catalogue(&self) -> &C {
        &self.catalogue
    }

    pub(crate) fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub(crate) fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    /// Catalogue sorted by title.
    pub(crate) fn all_videos(&self) -> Vec<VideoRef> {
        let mut videos = self.catalogue.all().to_vec();
        videos.sort_by(|left, right| left.title.cmp(&right.title));
        videos
    }

    pub(crate) fn play(&mut self, video_id: &str) -> PlayerResult<PlayOutcome> {
        self.session.play(&self.catalogue, video_id)
    }

    pub(crate) fn play_random(&mut self) -> PlayerResult<PlayOutcome> {
        self.session.play_random(&self.catalogue, &mut self.rng)
    }

    pub(crate) fn stop(&mut self) -> PlayerResult<VideoRef> {
        self.session.stop()
    }

    pub(crate) fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        self.session.pause()
    }

    pub(crate) fn continue_playback(&mut self) -> PlayerResult<VideoRef> {
        self.session.continue_playback()
    }

    pub(crate) fn create_playlist(&mut self, name: &str) -> PlayerResult<&Playlist> {
        self.playlists.create(name)
    }

    pub(crate) fn add_to_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<VideoRef> {
        self.playlists.add_video(&self.catalogue, name, video_id)
    }

    pub(crate) fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<VideoRef> {
        self.playlists.remove_video(&self.catalogue, name, video_id)
    }

    pub(crate) fn clear_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.playlists.clear(name)
    }

    pub(crate) fn delete_playlist(&mut self, name: &str) -> PlayerResult<Playlist> {
        self.playlists.delete(name)
    }

    pub(crate) fn search_videos(&self, term: &str) -> SearchResults {
        search::by_title(&self.catalogue, term)
    }

    pub(crate) fn search_videos_with_tag(&self, tag: &str) -> SearchResults {
        search::by_tag(&self.catalogue, tag)
    }

    /// Plays the result picked by `answer`; `None` when the answer is a "no".
    pub(crate) fn play_selection(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Option<PlayerResult<PlayOutcome>> {
        let video = results.select(answer)?;
        Some(self.play(&video.id))
    }

    pub(crate) fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> PlayerResult<()> {
        warn!(id = video_id, reason, "flag_video is not implemented");
        Err(PlayerError::NotImplemented("flag_video"))
    }

    pub(crate) fn allow_video(&mut self, video_id: &str) -> PlayerResult<()> {
        warn!(id = video_id, "allow_video is not implemented");
        Err(PlayerError::NotImplemented("allow_video"))
    }
}
