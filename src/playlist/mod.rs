// Playlist - the ordered, path-deduplicated list the user is building
// Index-based mutations quietly ignore bad indices so the UI can pass its
// selection straight through without guarding every call

use std::ops::Index;
use std::slice::Iter;
use tracing::debug;

use crate::library::Song;

/// A named playlist. No two entries share a file path.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a song unless one with the same path is already in the playlist.
    /// Returns whether it was added.
    pub fn add_song(&mut self, song: Song) -> bool {
        if self.songs.contains(&song) {
            return false;
        }
        debug!("Added '{}' to playlist '{}'", song.filepath(), self.name);
        self.songs.push(song);
        true
    }

    /// Remove the song at `index`, shifting later songs left.
    /// Out-of-range indices are a no-op.
    pub fn remove_song(&mut self, index: usize) -> bool {
        if index >= self.songs.len() {
            return false;
        }
        let removed = self.songs.remove(index);
        debug!("Removed '{}' from playlist '{}'", removed.filepath(), self.name);
        true
    }

    /// Move the song at `old_index` so it ends up at `new_index`.
    ///
    /// The song is taken out first and then inserted at `new_index` in the
    /// shortened list, so `(0, 2)` on `[A, B, C, D]` gives `[B, C, A, D]`.
    /// Nothing changes unless both indices are in range.
    pub fn reorder_song(&mut self, old_index: usize, new_index: usize) -> bool {
        let len = self.songs.len();
        if old_index >= len || new_index >= len {
            return false;
        }
        let song = self.songs.remove(old_index);
        self.songs.insert(new_index, song);
        debug!(
            "Moved song from position {} to {} in playlist '{}'",
            old_index, new_index, self.name
        );
        true
    }

    pub fn contains(&self, song: &Song) -> bool {
        self.songs.contains(song)
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> Iter<'_, Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Total length of all songs, in seconds
    pub fn total_duration(&self) -> u64 {
        self.songs.iter().map(|song| u64::from(song.duration())).sum()
    }

    /// Get formatted duration string
    pub fn duration_string(&self) -> String {
        let duration = self.total_duration();
        let hours = duration / 3600;
        let minutes = (duration % 3600) / 60;
        let seconds = duration % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

impl Index<usize> for Playlist {
    type Output = Song;

    fn index(&self, index: usize) -> &Song {
        &self.songs[index]
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
