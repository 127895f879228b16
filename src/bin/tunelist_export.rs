// Headless export - build a playlist from a search and write it out, no terminal UI
// Handy for scripting: every library match goes into the playlist in library order

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tunelist::{
    config::Config,
    export::export_to_m3u,
    library::load_library,
    logging::init_logging,
    playlist::Playlist,
};

#[derive(Parser)]
#[command(name = "tunelist_export")]
#[command(about = "Export every library song matching a search as an M3U playlist")]
struct Args {
    /// Case-insensitive regex matched against title, artist and album (empty = everything)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Destination file; `.m3u` is appended when missing
    #[arg(short, long)]
    output: PathBuf,

    /// Seed file (TOML or JSON) listing the library's songs
    #[arg(long)]
    library: Option<PathBuf>,

    /// Playlist name, only used in logs
    #[arg(long)]
    name: Option<String>,

    /// Config file; built-in defaults are used otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also log to stderr
    #[arg(long)]
    dev: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    if let Some(library) = args.library {
        config.library.seed_file = Some(library);
    }
    if let Some(name) = args.name {
        config.playlist.name = name;
    }

    let _log_guard = init_logging(&config.logging, args.dev)?;

    let library = load_library(&config).context("Failed to load the music library")?;
    let mut playlist = Playlist::new(config.playlist.name.clone());
    for song in library.search(&args.query) {
        playlist.add_song(song.clone());
    }

    if playlist.is_empty() {
        warn!("No songs matched {:?}, writing an empty playlist", args.query);
    }
    info!(
        "Matched {} songs ({}) for {:?}",
        playlist.len(),
        playlist.duration_string(),
        args.query
    );

    let path = export_to_m3u(&playlist, &args.output)
        .with_context(|| format!("Failed to export playlist '{}'", playlist.name()))?;
    println!("{}", path.display());

    Ok(())
}
