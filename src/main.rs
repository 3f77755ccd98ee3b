//! netspeed: live network throughput monitor for the terminal.
//!
//! Polls the OS interface counters every refresh interval and shows
//! upload/download rates per interface, optionally with packet, error
//! and drop counters and a combined "All" row.
//!
//! Press Ctrl+C, q or Esc to quit.

#![allow(dead_code)]

mod app;
mod cli;
mod color_scheme;
mod config;
mod error;
mod format;
mod input;
mod monitor;
mod signal;
mod system;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cli::Args;
use color_scheme::ColorScheme;
use config::DisplayConfig;
use input::EventTicker;
use signal::ShutdownFlag;
use system::collector::Collector;
use ui::TerminalRenderer;

/// Pause after the goodbye line before the process exits
const GOODBYE_PAUSE: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse_from_env();
    let scheme = ColorScheme::default();

    let config = match DisplayConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", ColorScheme::ansi(scheme.warning, "Error:"), e);
            std::process::exit(2);
        }
    };
    log::info!("starting with {:?}", config);

    let mut collector = match Collector::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let shutdown = ShutdownFlag::with_ctrlc_handler().unwrap_or_else(|e| {
        log::warn!("failed to set ctrlc handler {e}");
        ShutdownFlag::new()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    let mut renderer = TerminalRenderer::new(terminal, scheme.clone());

    let result = monitor::run(&config, &mut collector, &mut renderer, &mut EventTicker, &shutdown);

    // Restore terminal
    disable_raw_mode()?;
    execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen, Show)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    ui::footer::write_farewell(&mut io::stdout(), &scheme)?;
    std::thread::sleep(GOODBYE_PAUSE);
    Ok(())
}
