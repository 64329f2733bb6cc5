use serde::{Deserialize, Serialize};

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv"];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Classifies a file name by its extension, `None` if it isn't media
    pub fn classify(name: &str) -> Option<Self> {
        let ext = extension(name);
        if VIDEO_EXTENSIONS.contains(&&*ext) {
            return Some(Self::Video);
        }
        if IMAGE_EXTENSIONS.contains(&&*ext) {
            return Some(Self::Image);
        }
        None
    }
}

/// Lowercased text after the last `.`, or the whole name if there isn't one
pub fn extension(name: &str) -> String {
    name.rsplit('.')
        .next()
        .unwrap_or(name)
        .to_ascii_lowercase()
}

/// One entry of a github contents listing
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub sha: Option<String>,
    pub download_url: Option<String>,
    pub size: Option<u64>,
}

impl RemoteEntry {
    fn media_kind(&self) -> Option<MediaKind> {
        if self.kind.as_deref() != Some("file") {
            return None;
        }
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => MediaKind::classify(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: Option<String>,
    pub title: String,
    pub path: Option<String>,
    pub date: String,
    pub size: Option<u64>,
}

/// Keeps the media files, in listing order, stamping each with `date`
pub fn collect(entries: Vec<RemoteEntry>, date: &str) -> Vec<MediaItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let kind = entry.media_kind()?;
            Some(MediaItem {
                id: entry.sha,
                kind,
                url: entry.download_url,
                title: entry.name.unwrap_or_default(),
                path: entry.path,
                date: date.to_string(),
                size: entry.size,
            })
        })
        .collect()
}

/// Today's UTC calendar date, as `YYYY-MM-DD`
pub fn today() -> String {
    time::OffsetDateTime::now_utc().date().format("%F")
}
