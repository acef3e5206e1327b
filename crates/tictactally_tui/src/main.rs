//! Tictactally - terminal front end
//!
//! Two players share one keyboard (or mouse). The game is saved after every
//! change and picked up again on the next launch.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactally::{FileStore, GameConfig, GameEngine, StatePersistence, SystemClock};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Control};
use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Status { json } => {
            init_stderr_tracing();
            print_status(&config, json)
        }
        Command::Reset { wipe } => {
            init_stderr_tracing();
            reset(&config, wipe)
        }
    }
}

/// Builds the engine over the configured file store.
#[instrument(skip(config), fields(data_dir = %config.data_dir().display()))]
fn open_engine(config: &GameConfig) -> GameEngine<FileStore> {
    let store = FileStore::new(config.data_dir());
    let persistence = StatePersistence::new(store, config.storage_key());
    GameEngine::new(persistence, SystemClock, config.round_end_delay())
}

/// Run the terminal UI
fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Tictactally TUI");
    let app = App::new(open_engine(config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tictactally TUI exited");
    res
}

/// Draw, wait for one event or the round-end deadline, dispatch, repeat.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<FileStore>,
) -> Result<()> {
    loop {
        let view = app.view();
        let cursor = app.cursor();
        let mut cells = None;
        terminal.draw(|f| cells = Some(ui::draw(f, &view, cursor)))?;
        if let Some(cells) = cells {
            app.set_cell_areas(cells);
        }

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick();
    }
}

/// Print the saved game without entering the UI.
#[instrument(skip(config))]
fn print_status(config: &GameConfig, json: bool) -> Result<()> {
    let engine = open_engine(config);
    let view = engine.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", engine.board().display());
        println!();
        println!("{}", view.status_text());
        println!(
            "{}   {}",
            view.scores.label(tictactally::Mark::X),
            view.scores.label(tictactally::Mark::O)
        );
    }
    Ok(())
}

/// Reset the scoreboard, or delete the saved game with `wipe`.
#[instrument(skip(config))]
fn reset(config: &GameConfig, wipe: bool) -> Result<()> {
    let mut engine = open_engine(config);
    if wipe {
        engine
            .persistence()
            .clear()
            .context("Failed to delete saved game")?;
        println!("Saved game deleted.");
    } else {
        engine.reset_scores();
        println!("Scores reset. Player X starts.");
    }
    Ok(())
}

#[instrument]
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}
