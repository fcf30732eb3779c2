//! tis - Text-mode Interface for Subversion
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use tis::app::App;
use tis::config::Config;
use tis::logging;
use tis::persist::StateStore;
use tis::svn::Session;

/// How long to wait for a key before draining the svn process
const TICK: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "tis")]
#[command(about = "Browse and act on the status of an svn working copy")]
#[command(version)]
struct Cli {
    /// Working-copy root (defaults to the current directory)
    path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Ask the repository for out-of-date items (`svn status -u`)
    #[arg(short = 'u', long)]
    show_updates: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match logging::default_log_path().and_then(|path| logging::init_logging(&path, cli.debug)) {
        Ok(_) => {}
        Err(e) => eprintln!("tis: logging disabled: {e}"),
    }

    let mut config = Config::load_default().wrap_err("failed to load configuration")?;
    if cli.show_updates {
        config.show_updates = true;
    }

    let root = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let root = root
        .canonicalize()
        .wrap_err_with(|| format!("cannot open working copy {}", root.display()))?;
    log::info!("starting in {}", root.display());

    let state_store = match StateStore::default_path().and_then(StateStore::open) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("saved state unavailable: {}", e);
            None
        }
    };

    let session = Session::new(config.session_config(&root));
    let app = App::new(session, config, state_store);

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a short timeout so svn output keeps flowing while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(TICK)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.on_tick();
    Ok(())
}
