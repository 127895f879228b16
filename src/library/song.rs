use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single song in the library.
///
/// Identity is the file path: two songs with the same path are the same song,
/// whatever their tags say. Fields are private so a song can't change after
/// it's been handed to a library or playlist.
#[derive(Clone, Serialize, Deserialize)]
pub struct Song {
    title: String,
    artist: String,
    album: String,
    duration: u32, // in seconds
    filepath: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: u32,
        filepath: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration,
            filepath: filepath.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    /// `"Title" by Artist (MM:SS)` - what the library and playlist panes show
    pub fn display_text(&self) -> String {
        let minutes = self.duration / 60;
        let seconds = self.duration % 60;
        format!(
            "\"{}\" by {} ({:02}:{:02})",
            self.title, self.artist, minutes, seconds
        )
    }

    /// `Artist - Title`, the label written into `#EXTINF` lines
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl fmt::Debug for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Song")
            .field("title", &self.title)
            .field("artist", &self.artist)
            .field("filepath", &self.filepath)
            .finish()
    }
}

// Equality and hashing only look at the path - playlist dedup depends on it
impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.filepath == other.filepath
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.filepath.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_text_pads_minutes_and_seconds() {
        let song = Song::new("Song A", "Artist 1", "Album X", 185, "/path/a.mp3");
        assert_eq!(song.display_text(), "\"Song A\" by Artist 1 (03:05)");
        assert_eq!(song.to_string(), song.display_text());

        let short = Song::new("Intro", "Band", "EP", 7, "/path/intro.mp3");
        assert_eq!(short.display_text(), "\"Intro\" by Band (00:07)");

        let long = Song::new("Suite", "Orchestra", "Live", 6005, "/path/suite.flac");
        assert_eq!(long.display_text(), "\"Suite\" by Orchestra (100:05)");
    }

    #[test]
    fn equality_ignores_everything_but_the_path() {
        let a = Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3");
        let retagged = Song::new("Other", "Someone", "Elsewhere", 1, "/path/a.mp3");
        let b = Song::new("Song A", "Artist 1", "Album X", 180, "/path/b.mp3");

        assert_eq!(a, retagged);
        assert_ne!(a, b);
    }

    #[test]
    fn path_comparison_is_case_sensitive() {
        let lower = Song::new("Song", "Artist", "Album", 100, "/music/song.mp3");
        let upper = Song::new("Song", "Artist", "Album", 100, "/music/Song.mp3");
        assert_ne!(lower, upper);
    }

    #[test]
    fn hash_is_keyed_on_path() {
        let mut seen = HashSet::new();
        seen.insert(Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3"));
        seen.insert(Song::new("Retitled", "Artist 9", "Album Z", 999, "/path/a.mp3"));
        seen.insert(Song::new("Song B", "Artist 2", "Album Y", 200, "/path/b.mp3"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn debug_shows_identity_fields() {
        let song = Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3");
        let debug = format!("{:?}", song);
        assert!(debug.contains("Song A"));
        assert!(debug.contains("/path/a.mp3"));
        assert!(!debug.contains("Album X"));
    }
}
