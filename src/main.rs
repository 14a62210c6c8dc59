//! AlgoRhythm Auth - terminal sign-in and registration screen
//!
//! A Ratatui-based TUI around a host-agnostic validation and
//! submission core, backed by a simulated authentication gateway.

mod app;
mod auth;
mod config;
mod gateway;
mod presenter;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AuthConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "auth.log";

/// Log to a file so output does not tear the alternate screen;
/// stderr if the data directory is unusable
fn log_writer() -> BoxMakeWriter {
    let file = AuthConfig::data_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algorhythm_auth=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let config = AuthConfig::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable config: {err:#}");
        AuthConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    tracing::info!(app = %app.app_name, "auth screen started");
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
        let terminal_height = terminal.size()?.height;
        app.tick(Instant::now(), terminal_height);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while something is animating
        let animating = app.in_splash()
            || app.state.transition.is_some()
            || !app.state.loading.is_empty();
        let poll_duration = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
