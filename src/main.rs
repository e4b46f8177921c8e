mod app;
mod cli;
mod config;
mod csv;
mod download;
mod error;
mod form;
mod input;
mod logging;
mod models;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use crate::app::App;
use crate::error::AppError;
use crate::models::RegistrationRecord;

fn main() -> Result<(), AppError> {
    let cli = cli::parse_args().inspect_err(|_| cli::print_usage())?;
    let (config, config_path) = config::load_config(cli.config_path.as_deref())?;
    let _log_guard = logging::init_logging(&config.resolved_log_dir(), &config.log_level)?;

    let prefill = match &cli.prefill_path {
        Some(path) => Some(
            RegistrationRecord::load(path).map_err(|source| AppError::Prefill {
                path: path.clone(),
                source,
            })?,
        ),
        None => None,
    };
    let output_dir = cli.output_dir.unwrap_or(config.output_dir);
    info!(
        config = ?config_path,
        output_dir = %output_dir.display(),
        prefilled = prefill.is_some(),
        "regform starting"
    );

    let mut app = App::new(output_dir, prefill.as_ref());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("regform exiting");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| ui::draw(app, frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = input::map_key(key.code, key.modifiers, app.focus) {
                        app.handle_action(action, Instant::now());
                    }
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
