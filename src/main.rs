// tunelist - terminal playlist builder
// Search the library on the left, build the playlist on the right, export as M3U

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tunelist::{
    config::Config,
    library::load_library,
    logging::init_logging,
    ui::{App, EventHandler, TerminalManager},
};

#[derive(Parser)]
#[command(name = "tunelist")]
#[command(about = "Build a playlist from your music library and export it as M3U")]
struct Args {
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed file (TOML or JSON) listing the library's songs
    #[arg(long)]
    library: Option<PathBuf>,

    /// Name of the playlist being built
    #[arg(long)]
    name: Option<String>,

    /// Enable developer logging (debug level in the log file)
    #[arg(long)]
    dev: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load config - falls back to defaults if missing
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(library) = args.library {
        config.library.seed_file = Some(library);
    }
    if let Some(name) = args.name {
        config.playlist.name = name;
    }
    if args.dev {
        config.logging.filter = "debug".to_string();
    }

    // stderr belongs to the terminal UI, so file logging only
    let _log_guard = init_logging(&config.logging, false)?;
    info!("tunelist starting up");

    let library = load_library(&config)?;
    let mut app = App::new(config, library);

    let mut terminal = TerminalManager::new()?;
    let events = EventHandler::default();
    app.run(&mut terminal, &events)?;

    Ok(())
}
