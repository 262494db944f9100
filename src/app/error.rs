use std::fmt;

/// Failure of a single player command. The display text is the reason shown
/// after the command-specific `Cannot ...:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum PlayerError {
    #[error("{0} does not exist")]
    NotFound(Missing),

    #[error("A playlist with the same name already exists")]
    AlreadyExists,

    #[error("Video already added")]
    Duplicate,

    #[error("Video is not in playlist")]
    NotPresent,

    #[error("{0}")]
    InvalidState(InvalidState),

    #[error("No videos available")]
    EmptyLibrary,

    #[error("{0} needs implementation")]
    NotImplemented(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Missing {
    Video,
    Playlist,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => f.write_str("Video"),
            Self::Playlist => f.write_str("Playlist"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InvalidState {
    NothingPlaying,
    NotPaused,
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingPlaying => f.write_str("No video is currently playing"),
            Self::NotPaused => f.write_str("Video is not paused"),
        }
    }
}

pub(crate) type PlayerResult<T> = Result<T, PlayerError>;
