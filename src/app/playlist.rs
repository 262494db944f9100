use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::info;

use crate::library::{VideoCatalogue, VideoRef};

use super::error::{Missing, PlayerError, PlayerResult};

#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    name: String,
    videos: Vec<VideoRef>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            videos: Vec::new(),
        }
    }

    /// Name as it was typed at creation.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn videos(&self) -> &[VideoRef] {
        &self.videos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn position(&self, video_id: &str) -> Option<usize> {
        self.videos.iter().position(|video| video.id == video_id)
    }
}

/// Registry key for a playlist name. Every insert and lookup goes through
/// this, so names compare case-insensitively.
pub(crate) fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

/// All playlists, keyed by [`playlist_key`]. The ordered map gives
/// `list_all` its sorted-by-key order.
#[derive(Debug, Default)]
pub(crate) struct PlaylistRegistry {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub(crate) fn create(&mut self, name: &str) -> PlayerResult<&Playlist> {
        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::AlreadyExists);
        }
        info!(playlist = name, "created playlist");
        Ok(self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    pub(crate) fn add_video(
        &mut self,
        catalogue: &impl VideoCatalogue,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<VideoRef> {
        let playlist = self.get_mut(name)?;
        let video = catalogue
            .get(video_id)
            .ok_or(PlayerError::NotFound(Missing::Video))?;
        if playlist.position(&video.id).is_some() {
            return Err(PlayerError::Duplicate);
        }
        playlist.videos.push(Rc::clone(&video));
        info!(playlist = %playlist.name, id = %video.id, "added video to playlist");
        Ok(video)
    }

    pub(crate) fn remove_video(
        &mut self,
        catalogue: &impl VideoCatalogue,
        name: &str,
        video_id: &str,
    ) -> PlayerResult<VideoRef> {
        let playlist = self.get_mut(name)?;
        let video = catalogue
            .get(video_id)
            .ok_or(PlayerError::NotFound(Missing::Video))?;
        let idx = playlist
            .position(&video.id)
            .ok_or(PlayerError::NotPresent)?;
        let removed = playlist.videos.remove(idx);
        info!(playlist = %playlist.name, id = %removed.id, "removed video from playlist");
        Ok(removed)
    }

    pub(crate) fn clear(&mut self, name: &str) -> PlayerResult<()> {
        let playlist = self.get_mut(name)?;
        playlist.videos.clear();
        info!(playlist = %playlist.name, "cleared playlist");
        Ok(())
    }

    /// Removes only the named playlist; every other playlist is kept.
    pub(crate) fn delete(&mut self, name: &str) -> PlayerResult<Playlist> {
        let removed = self
            .playlists
            .remove(&playlist_key(name))
            .ok_or(PlayerError::NotFound(Missing::Playlist))?;
        info!(playlist = %removed.name, remaining = self.playlists.len(), "deleted playlist");
        Ok(removed)
    }

    /// Playlists sorted by their lowercased key.
    pub(crate) fn list_all(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub(crate) fn show(&self, name: &str) -> PlayerResult<&Playlist> {
        self.playlists
            .get(&playlist_key(name))
            .ok_or(PlayerError::NotFound(Missing::Playlist))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.playlists.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> PlayerResult<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or(PlayerError::NotFound(Missing::Playlist))
    }
}
