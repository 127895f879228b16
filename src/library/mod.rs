// Music library - the read-only catalog the playlist gets built from
// Songs come in once at startup and never change after that

pub mod seed;
pub mod song;

pub use seed::{load_library, load_songs, sample_songs, LibraryError};
pub use song::Song;

use regex::RegexBuilder;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Library {
    songs: Vec<Song>,
}

impl Library {
    /// Build a library from songs in display order. Duplicate paths are kept as-is.
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Find songs whose title, artist or album matches `query`.
    ///
    /// The query is a case-insensitive regex that may match anywhere in a field.
    /// An empty query returns the whole library. A query that doesn't compile
    /// returns nothing, since it's usually a half-typed pattern.
    pub fn search(&self, query: &str) -> Vec<&Song> {
        if query.is_empty() {
            return self.songs.iter().collect();
        }

        let pattern = match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(pattern) => pattern,
            Err(e) => {
                debug!("Ignoring invalid search pattern {:?}: {}", query, e);
                return Vec::new();
            }
        };

        self.songs
            .iter()
            .filter(|song| {
                pattern.is_match(song.title())
                    || pattern.is_match(song.artist())
                    || pattern.is_match(song.album())
            })
            .collect()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        Library::new(vec![
            Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3"),
            Song::new("Song B", "Artist 2", "Album Y", 200, "/path/b.mp3"),
            Song::new("Song C", "Artist 1", "Album Z", 220, "/path/c.mp3"),
            Song::new("Song D", "Artist 3", "Album X", 240, "/path/d.mp3"),
        ])
    }

    fn paths(songs: &[&Song]) -> Vec<String> {
        songs.iter().map(|s| s.filepath().to_string()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let library = library();
        let results = library.search("");
        assert_eq!(
            paths(&results),
            vec!["/path/a.mp3", "/path/b.mp3", "/path/c.mp3", "/path/d.mp3"]
        );
    }

    #[test]
    fn artist_pattern_returns_only_that_artist() {
        let library = library();
        let results = library.search("artist 1");
        assert_eq!(paths(&results), vec!["/path/a.mp3", "/path/c.mp3"]);
    }

    #[test]
    fn search_matches_album_and_is_case_insensitive() {
        let library = library();
        let results = library.search("ALBUM X");
        assert_eq!(paths(&results), vec!["/path/a.mp3", "/path/d.mp3"]);
    }

    #[test]
    fn search_uses_regex_and_matches_anywhere() {
        let library = library();
        assert_eq!(paths(&library.search("song [bc]")), vec!["/path/b.mp3", "/path/c.mp3"]);
        assert_eq!(paths(&library.search("ong")).len(), 4);
        assert_eq!(paths(&library.search("^B")), Vec::<String>::new());
    }

    #[test]
    fn filepath_is_not_searched() {
        let library = library();
        assert!(library.search("mp3").is_empty());
    }

    #[test]
    fn invalid_pattern_returns_empty() {
        let library = library();
        assert!(library.search("(").is_empty());
        assert!(library.search("Song [").is_empty());
    }

    #[test]
    fn duplicate_paths_are_kept() {
        let song = Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3");
        let library = Library::new(vec![song.clone(), song]);
        assert_eq!(library.len(), 2);
        assert_eq!(library.search("song a").len(), 2);
    }
}
