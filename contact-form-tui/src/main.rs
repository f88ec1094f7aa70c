mod paths;
mod terminal;

use std::fs::File;
use std::io;
use std::time::Duration;

use contact_form::{Control, FormApp, Key, Modifiers};
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use crate::terminal::Terminal;

/// Environment variable holding the log level (`off`, `error`, ... `trace`).
const LOG_LEVEL_ENV: &str = "CONTACT_FORM_LOG";

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn log_level() -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

/// Log to the cache dir; without one, run unlogged rather than write to the
/// terminal the form is drawn on.
fn init_logging() -> Result<(), AppError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(log_level(), Config::default(), log_file)?;
    info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), AppError> {
    let mut app = FormApp::new();
    let mut term = Terminal::new()?;
    term.render(&app.element())?;

    loop {
        for event in term.poll(POLL_INTERVAL)? {
            match event {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let control =
                        app.handle_key(Key::from(key.code), Modifiers::from(key.modifiers));
                    if control == Control::Quit {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                CrosstermEvent::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        term.render(&app.element())?;
    }
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
