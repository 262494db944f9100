use std::rc::Rc;

use tracing::debug;

use crate::library::{VideoCatalogue, VideoRef};

#[derive(Debug, Clone)]
pub(crate) struct SearchResults {
    term: String,
    videos: Vec<VideoRef>,
}

impl SearchResults {
    fn new(term: &str, mut videos: Vec<VideoRef>) -> Self {
        videos.sort_by(|left, right| left.title.cmp(&right.title));
        debug!(term, hits = videos.len(), "search finished");
        Self {
            term: term.to_string(),
            videos,
        }
    }

    pub(crate) fn term(&self) -> &str {
        &self.term
    }

    /// Matches sorted by title.
    pub(crate) fn videos(&self) -> &[VideoRef] {
        &self.videos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Maps the user's answer to a result. Anything but a number in
    /// `1..=len` is a "no".
    pub(crate) fn select(&self, raw: &str) -> Option<&VideoRef> {
        let idx = parse_selection(raw, self.videos.len())?;
        self.videos.get(idx)
    }
}

/// Case-insensitive substring match on titles.
pub(crate) fn by_title(catalogue: &impl VideoCatalogue, term: &str) -> SearchResults {
    let needle = term.to_lowercase();
    let hits = catalogue
        .all()
        .iter()
        .filter(|video| video.title.to_lowercase().contains(&needle))
        .map(Rc::clone)
        .collect();
    SearchResults::new(term, hits)
}

/// Exact tag match; the query is lowercased before comparing.
pub(crate) fn by_tag(catalogue: &impl VideoCatalogue, tag: &str) -> SearchResults {
    let hits = catalogue
        .all()
        .iter()
        .filter(|video| video.has_tag(tag))
        .map(Rc::clone)
        .collect();
    SearchResults::new(tag, hits)
}

/// Returns the zero-based index for a 1-based answer within `count`. Only the
/// line terminator is stripped; any other whitespace makes it a "no".
pub(crate) fn parse_selection(raw: &str, count: usize) -> Option<usize> {
    let answer = raw.trim_end_matches(['\r', '\n']);
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let picked = answer.parse::<usize>().ok()?;
    (1..=count).contains(&picked).then(|| picked - 1)
}
