use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

const BUNDLED_CATALOGUE: &str = include_str!("../data/videos.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) tags: Vec<String>,
}

/// Shared handle to a catalogue entry. Playlists and the playback session hold
/// these instead of copies.
pub(crate) type VideoRef = Rc<Video>;

impl Video {
    pub(crate) fn new<I, S>(id: impl Into<String>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim().to_lowercase();
            if !tag.is_empty() && !normalized.contains(&tag) {
                normalized.push(tag);
            }
        }
        Self {
            id: id.into(),
            title: title.into(),
            tags: normalized,
        }
    }

    /// `tag` is compared lowercased; stored tags are already lowercase.
    pub(crate) fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| *t == wanted)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Read-only source of videos.
pub(crate) trait VideoCatalogue {
    fn all(&self) -> &[VideoRef];

    fn get(&self, id: &str) -> Option<VideoRef>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct VideoLibrary {
    videos: Vec<VideoRef>,
    by_id: HashMap<String, usize>,
}

impl VideoLibrary {
    /// Builds a library, keeping the first entry when an id repeats.
    pub(crate) fn new(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut library = Self::default();
        for video in videos {
            if library.by_id.contains_key(&video.id) {
                warn!(id = %video.id, "duplicate video id in catalogue, keeping first entry");
                continue;
            }
            library.by_id.insert(video.id.clone(), library.videos.len());
            library.videos.push(Rc::new(video));
        }
        library
    }

    pub(crate) fn bundled() -> Self {
        let (videos, warnings) = parse_catalogue_text(BUNDLED_CATALOGUE);
        emit_warnings("bundled catalogue", &warnings);
        Self::new(videos)
    }

    pub(crate) fn open(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read video catalogue at {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let (videos, warnings) = if is_json {
            parse_catalogue_json(&raw)
                .with_context(|| format!("failed to parse video catalogue {}", path.display()))?
        } else {
            parse_catalogue_text(&raw)
        };

        emit_warnings(&path.display().to_string(), &warnings);
        let library = Self::new(videos);
        debug!(path = %path.display(), videos = library.len(), "loaded video catalogue");
        Ok(library)
    }
}

impl VideoCatalogue for VideoLibrary {
    fn all(&self) -> &[VideoRef] {
        &self.videos
    }

    fn get(&self, id: &str) -> Option<VideoRef> {
        self.by_id.get(id).map(|&idx| Rc::clone(&self.videos[idx]))
    }
}

fn emit_warnings(source: &str, warnings: &[String]) {
    for warning in warnings {
        warn!(source, "{warning}");
    }
}

/// Parses `title | id | #tag1 , #tag2` lines. Malformed lines are skipped and
/// reported in the returned warnings.
pub(crate) fn parse_catalogue_text(raw: &str) -> (Vec<Video>, Vec<String>) {
    let mut videos = Vec::new();
    let mut warnings = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_catalogue_line(line) {
            Some(video) => videos.push(video),
            None => warnings.push(format!("ignored malformed catalogue line {}", idx + 1)),
        }
    }
    (videos, warnings)
}

pub(crate) fn parse_catalogue_line(line: &str) -> Option<Video> {
    let mut parts = line.splitn(3, '|');
    let title = parts.next()?.trim();
    let id = parts.next()?.trim();
    if title.is_empty() || id.is_empty() {
        return None;
    }
    let tags = parts
        .next()
        .map(|raw| raw.split(',').map(str::trim).collect::<Vec<_>>())
        .unwrap_or_default();
    Some(Video::new(id, title, tags))
}

/// Accepts either a top-level array of videos or `{ "videos": [...] }`.
pub(crate) fn parse_catalogue_json(raw: &str) -> Result<(Vec<Video>, Vec<String>)> {
    let value: Value = serde_json::from_str(raw).context("catalogue is not valid JSON")?;
    let items = match &value {
        Value::Array(items) => items,
        Value::Object(_) => match value.get("videos").and_then(Value::as_array) {
            Some(items) => items,
            None => bail!("expected a `videos` array"),
        },
        _ => bail!("expected an array of videos"),
    };

    let mut videos = Vec::new();
    let mut warnings = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let id = item.get("id").and_then(Value::as_str).map(str::trim);
        let title = item.get("title").and_then(Value::as_str).map(str::trim);
        let (Some(id), Some(title)) = (id, title) else {
            warnings.push(format!("ignored catalogue entry {idx} without id/title"));
            continue;
        };
        if id.is_empty() || title.is_empty() {
            warnings.push(format!("ignored catalogue entry {idx} with empty id/title"));
            continue;
        }
        let tags = item
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect::<Vec<_>>())
            .unwrap_or_default();
        videos.push(Video::new(id, title, tags));
    }
    Ok((videos, warnings))
}
