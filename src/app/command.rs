#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedLine {
    Blank,
    Command(PlayerCommand),
    Invalid,
}

/// Splits a line on whitespace and matches the keyword case-insensitively.
/// Each command takes a fixed number of arguments, except `FLAG_VIDEO`
/// whose trailing words form the reason.
pub(crate) fn parse_command_line(line: &str) -> ParsedLine {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return ParsedLine::Blank;
    };
    let args: Vec<&str> = words.collect();
    let owned = |idx: usize| args[idx].to_string();

    let command = match (keyword.to_uppercase().as_str(), args.len()) {
        ("NUMBER_OF_VIDEOS", 0) => PlayerCommand::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", 0) => PlayerCommand::ShowAllVideos,
        ("PLAY", 1) => PlayerCommand::Play {
            video_id: owned(0),
        },
        ("PLAY_RANDOM", 0) => PlayerCommand::PlayRandom,
        ("STOP", 0) => PlayerCommand::Stop,
        ("PAUSE", 0) => PlayerCommand::Pause,
        ("CONTINUE", 0) => PlayerCommand::Continue,
        ("SHOW_PLAYING", 0) => PlayerCommand::ShowPlaying,
        ("CREATE_PLAYLIST", 1) => PlayerCommand::CreatePlaylist { name: owned(0) },
        ("ADD_TO_PLAYLIST", 2) => PlayerCommand::AddToPlaylist {
            name: owned(0),
            video_id: owned(1),
        },
        ("REMOVE_FROM_PLAYLIST", 2) => PlayerCommand::RemoveFromPlaylist {
            name: owned(0),
            video_id: owned(1),
        },
        ("CLEAR_PLAYLIST", 1) => PlayerCommand::ClearPlaylist { name: owned(0) },
        ("DELETE_PLAYLIST", 1) => PlayerCommand::DeletePlaylist { name: owned(0) },
        ("SHOW_ALL_PLAYLISTS", 0) => PlayerCommand::ShowAllPlaylists,
        ("SHOW_PLAYLIST", 1) => PlayerCommand::ShowPlaylist { name: owned(0) },
        ("SEARCH_VIDEOS", 1) => PlayerCommand::SearchVideos { term: owned(0) },
        ("SEARCH_VIDEOS_WITH_TAG", 1) => PlayerCommand::SearchVideosWithTag { tag: owned(0) },
        ("FLAG_VIDEO", n) if n >= 1 => PlayerCommand::FlagVideo {
            video_id: owned(0),
            reason: (n > 1).then(|| args[1..].join(" ")),
        },
        ("ALLOW_VIDEO", 1) => PlayerCommand::AllowVideo {
            video_id: owned(0),
        },
        ("HELP", 0) => PlayerCommand::Help,
        ("EXIT", 0) => PlayerCommand::Exit,
        _ => return ParsedLine::Invalid,
    };
    ParsedLine::Command(command)
}

pub(crate) const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
