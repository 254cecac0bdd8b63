//! Swipe List Entry Point
//!
//! Reads one gesture command per line from stdin and prints the list after each.
//!
//! Environment:
//! - `SWIPE_LIST_CONFIG`: optional JSON store config
//! - `SWIPE_LIST_LOG_DIR`: log directory (default `./logs`)

mod commands;
mod screen;
mod view;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use list_core::{ItemStore, StoreConfig};

use commands::Command;
use screen::ListScreen;

const APP_NAME: &str = "SwipeList";

fn load_config() -> anyhow::Result<StoreConfig> {
    match std::env::var_os("SWIPE_LIST_CONFIG") {
        Some(path) => StoreConfig::load(&path)
            .with_context(|| format!("loading config from {}", PathBuf::from(&path).display())),
        None => Ok(StoreConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let log_dir = std::env::var_os("SWIPE_LIST_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("logs"));
    rolling_logger::init_logger(&log_dir, APP_NAME).context("failed to init rolling logger")?;
    log::info!("Logging to {}", rolling_logger::log_path()?.display());

    let config = load_config()?;
    let store = ItemStore::from_config(&config).context("failed to seed store")?;
    let mut screen = ListScreen::new(store);
    log::info!("Session started with {} items", screen.store().len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", screen.render())?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = line
            .parse::<Command>()
            .map_err(anyhow::Error::from)
            .and_then(|command| command.apply(&mut screen));
        if let Err(e) = result {
            let _ = rolling_logger::error(&format!("Command `{}` failed: {}", line, e));
            writeln!(stdout, "error: {}", e)?;
        }
        write!(stdout, "{}", screen.render())?;
        stdout.flush()?;
    }

    let _ = rolling_logger::info("Session ended");
    Ok(())
}
