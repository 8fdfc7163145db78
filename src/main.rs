//! Signup TUI - terminal registration and early-access signup forms
//!
//! A Ratatui-based TUI that validates a student registration or a
//! "coming soon" early-access form and inserts the result into a hosted table.

mod app;
mod config;
mod events;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::SignupConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::FormVariant;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use store::RestStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Input poll interval; background events are applied at least this often
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "signup-tui", version, about)]
struct Args {
    /// Form to show
    #[arg(long, value_enum)]
    variant: Option<FormVariant>,
    /// Config file to read instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Resolve configuration before touching the terminal
    let config = match &args.config {
        Some(path) => SignupConfig::load_from(path)?,
        None => SignupConfig::load()?,
    }
    .with_env();
    let (store_url, store_key) = config.store_credentials()?;
    let store = Arc::new(RestStore::new(store_url, store_key)?);
    let variant = args.variant.or(config.variant).unwrap_or_default();
    tracing::info!(?variant, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(variant, store);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply ticks and finished inserts before drawing
        app.drain_events();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
