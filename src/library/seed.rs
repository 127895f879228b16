// Seed data - where the library's songs come from
// Either the built-in sample catalog or a TOML/JSON file the user points us at

use super::{Library, Song};
use crate::config::Config;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read seed file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML seed file {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON seed file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `[[songs]]` tables in TOML, or `{ "songs": [...] }` in JSON
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    songs: Vec<Song>,
}

/// JSON seed files may also be a bare array of songs
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSeed {
    Bare(Vec<Song>),
    Wrapped(SeedFile),
}

/// Load songs from a seed file. `.json` is parsed as JSON, anything else as TOML.
pub fn load_songs<P: AsRef<Path>>(path: P) -> Result<Vec<Song>, LibraryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LibraryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let songs = if is_json {
        match serde_json::from_str::<JsonSeed>(&content) {
            Ok(JsonSeed::Bare(songs)) => songs,
            Ok(JsonSeed::Wrapped(seed)) => seed.songs,
            Err(source) => {
                return Err(LibraryError::Json {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    } else {
        toml::from_str::<SeedFile>(&content)
            .map_err(|source| LibraryError::Toml {
                path: path.to_path_buf(),
                source,
            })?
            .songs
    };

    info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Build the session's library from config - the seed file if one is set,
/// the sample catalog otherwise.
pub fn load_library(config: &Config) -> Result<Library, LibraryError> {
    let songs = match &config.library.seed_file {
        Some(path) => load_songs(path)?,
        None => {
            info!("No seed file configured, using the sample catalog");
            sample_songs()
        }
    };
    Ok(Library::new(songs))
}

/// Small built-in catalog so the app has something to show out of the box
pub fn sample_songs() -> Vec<Song> {
    const SAMPLES: &[(&str, &str, &str, u32, &str)] = &[
        ("Bohemian Rhapsody", "Queen", "A Night at the Opera", 355, "/music/queen/bohemian_rhapsody.mp3"),
        ("Love of My Life", "Queen", "A Night at the Opera", 219, "/music/queen/love_of_my_life.mp3"),
        ("Don't Stop Me Now", "Queen", "Jazz", 209, "/music/queen/dont_stop_me_now.mp3"),
        ("Stairway to Heaven", "Led Zeppelin", "Led Zeppelin IV", 482, "/music/led_zeppelin/stairway_to_heaven.mp3"),
        ("Black Dog", "Led Zeppelin", "Led Zeppelin IV", 296, "/music/led_zeppelin/black_dog.mp3"),
        ("Hotel California", "Eagles", "Hotel California", 391, "/music/eagles/hotel_california.mp3"),
        ("Imagine", "John Lennon", "Imagine", 183, "/music/john_lennon/imagine.mp3"),
        ("Smells Like Teen Spirit", "Nirvana", "Nevermind", 301, "/music/nirvana/smells_like_teen_spirit.mp3"),
        ("Come as You Are", "Nirvana", "Nevermind", 219, "/music/nirvana/come_as_you_are.mp3"),
        ("Billie Jean", "Michael Jackson", "Thriller", 294, "/music/michael_jackson/billie_jean.mp3"),
        ("Beat It", "Michael Jackson", "Thriller", 258, "/music/michael_jackson/beat_it.mp3"),
        ("Like a Rolling Stone", "Bob Dylan", "Highway 61 Revisited", 369, "/music/bob_dylan/like_a_rolling_stone.mp3"),
        ("Paranoid Android", "Radiohead", "OK Computer", 387, "/music/radiohead/paranoid_android.mp3"),
        ("Karma Police", "Radiohead", "OK Computer", 264, "/music/radiohead/karma_police.mp3"),
        ("Hey Jude", "The Beatles", "Hey Jude", 431, "/music/the_beatles/hey_jude.mp3"),
        ("Come Together", "The Beatles", "Abbey Road", 259, "/music/the_beatles/come_together.mp3"),
    ];

    SAMPLES
        .iter()
        .map(|&(title, artist, album, duration, filepath)| {
            Song::new(title, artist, album, duration, filepath)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn sample_catalog_has_unique_paths() {
        let songs = sample_songs();
        assert!(!songs.is_empty());
        let unique: HashSet<&Song> = songs.iter().collect();
        assert_eq!(unique.len(), songs.len());
    }

    #[test]
    fn loads_toml_seed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");
        fs::write(
            &path,
            r#"
[[songs]]
title = "Song A"
artist = "Artist 1"
album = "Album X"
duration = 180
filepath = "/path/a.mp3"

[[songs]]
title = "Song B"
artist = "Artist 2"
album = "Album Y"
duration = 200
filepath = "/path/b.mp3"
"#,
        )
        .unwrap();

        let songs = load_songs(&path).unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title(), "Song A");
        assert_eq!(songs[1].duration(), 200);
    }

    #[test]
    fn loads_bare_and_wrapped_json() {
        let dir = tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        fs::write(
            &bare,
            r#"[{"title":"Song A","artist":"Artist 1","album":"Album X","duration":180,"filepath":"/path/a.mp3"}]"#,
        )
        .unwrap();
        let wrapped = dir.path().join("wrapped.JSON");
        fs::write(
            &wrapped,
            r#"{"songs":[{"title":"Song B","artist":"Artist 2","album":"Album Y","duration":200,"filepath":"/path/b.mp3"}]}"#,
        )
        .unwrap();

        assert_eq!(load_songs(&bare).unwrap()[0].filepath(), "/path/a.mp3");
        assert_eq!(load_songs(&wrapped).unwrap()[0].filepath(), "/path/b.mp3");
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(load_songs(&missing), Err(LibraryError::Read { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_songs(&broken), Err(LibraryError::Json { .. })));

        let negative = dir.path().join("negative.toml");
        fs::write(
            &negative,
            "[[songs]]\ntitle = \"x\"\nartist = \"y\"\nalbum = \"z\"\nduration = -5\nfilepath = \"/p\"\n",
        )
        .unwrap();
        assert!(matches!(load_songs(&negative), Err(LibraryError::Toml { .. })));
    }

    #[test]
    fn load_library_falls_back_to_samples() {
        let config = Config::default();
        let library = load_library(&config).unwrap();
        assert_eq!(library.len(), sample_songs().len());
    }
}
