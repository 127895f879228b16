// tunelist library - core modules for the terminal playlist builder
// The core (library, playlist, export) has no idea a terminal exists

pub mod config;   // settings and preferences
pub mod export;   // M3U playlist export
pub mod library;  // songs, search, seed data
pub mod logging;  // tracing subscriber setup
pub mod playlist; // the playlist being built
#[cfg(feature = "tui")]
pub mod ui;       // terminal interface

// Export the stuff other modules actually use
pub use config::Config;
pub use export::{export_to_m3u, ExportError};
pub use library::{Library, LibraryError, Song};
pub use playlist::Playlist;
