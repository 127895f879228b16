// Export module - writes the playlist out as an extended M3U file
// Formatting is kept separate from the file handling so it can be tested in memory

use crate::playlist::Playlist;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const M3U_EXTENSION: &str = ".m3u";
pub const M3U_HEADER: &str = "#EXTM3U";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write playlist to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append `.m3u` unless the name already ends with it (any case)
pub fn normalize_destination<P: AsRef<Path>>(destination: P) -> PathBuf {
    let destination = destination.as_ref();
    let has_extension = destination
        .as_os_str()
        .to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(M3U_EXTENSION);

    if has_extension {
        destination.to_path_buf()
    } else {
        let mut name = OsString::from(destination.as_os_str());
        name.push(M3U_EXTENSION);
        PathBuf::from(name)
    }
}

/// Write the header, then an `#EXTINF` line and the file path for every song
pub fn write_m3u<W: Write>(playlist: &Playlist, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", M3U_HEADER)?;
    for song in playlist {
        writeln!(writer, "#EXTINF:{},{}", song.duration(), song.label())?;
        writeln!(writer, "{}", song.filepath())?;
    }
    Ok(())
}

pub fn render_m3u(playlist: &Playlist) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec can't fail
    let _ = write_m3u(playlist, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Export `playlist` to `destination` and return the path actually written.
///
/// The file is opened once and closed when this returns, error or not.
/// A failed write can leave a partial file behind.
pub fn export_to_m3u<P: AsRef<Path>>(
    playlist: &Playlist,
    destination: P,
) -> Result<PathBuf, ExportError> {
    let path = normalize_destination(destination);
    let write_err = |source| ExportError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_m3u(playlist, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(
        "Playlist '{}' exported to '{}'",
        playlist.name(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Song;

    fn playlist() -> Playlist {
        let mut playlist = Playlist::new("Road Trip");
        playlist.add_song(Song::new("Song A", "Artist 1", "Album X", 180, "/path/a.mp3"));
        playlist.add_song(Song::new("Song B", "Artist 2", "Album Y", 200, "/path/b.mp3"));
        playlist
    }

    #[test]
    fn appends_extension_when_missing() {
        assert_eq!(normalize_destination("mix"), PathBuf::from("mix.m3u"));
        assert_eq!(normalize_destination("/tmp/mix.txt"), PathBuf::from("/tmp/mix.txt.m3u"));
        assert_eq!(normalize_destination("mix.m3u8"), PathBuf::from("mix.m3u8.m3u"));
    }

    #[test]
    fn keeps_existing_extension_in_any_case() {
        assert_eq!(normalize_destination("mix.m3u"), PathBuf::from("mix.m3u"));
        assert_eq!(normalize_destination("/tmp/MIX.M3U"), PathBuf::from("/tmp/MIX.M3U"));
        assert_eq!(normalize_destination("mix.M3u"), PathBuf::from("mix.M3u"));
    }

    #[test]
    fn renders_extended_m3u() {
        assert_eq!(
            render_m3u(&playlist()),
            "#EXTM3U\n\
             #EXTINF:180,Artist 1 - Song A\n\
             /path/a.mp3\n\
             #EXTINF:200,Artist 2 - Song B\n\
             /path/b.mp3\n"
        );
    }

    #[test]
    fn empty_playlist_is_just_the_header() {
        assert_eq!(render_m3u(&Playlist::new("Empty")), "#EXTM3U\n");
    }

    #[test]
    fn follows_playlist_order() {
        let mut playlist = playlist();
        playlist.reorder_song(1, 0);
        let rendered = render_m3u(&playlist);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "/path/b.mp3");
        assert_eq!(lines[4], "/path/a.mp3");
    }

    #[test]
    fn keeps_unicode_as_utf8() {
        let mut playlist = Playlist::new("Unicode");
        playlist.add_song(Song::new("Für Elise", "Beethoven", "Klavier", 175, "/music/für_elise.flac"));
        let rendered = render_m3u(&playlist);
        assert!(rendered.contains("#EXTINF:175,Beethoven - Für Elise\n"));
        assert!(rendered.ends_with("/music/für_elise.flac\n"));
    }

    #[test]
    fn writer_errors_are_propagated() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(write_m3u(&playlist(), Broken).is_err());
    }
}
