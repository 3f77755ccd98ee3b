use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::Result;
use crate::monitor::Ticker;
use crate::signal::ShutdownFlag;

/// Upper bound on one poll, so a SIGINT raised flag is seen quickly
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Keys that end the session. In raw mode Ctrl+C arrives as a key, not a signal.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Waits on the terminal event queue, turning quit keys into a shutdown request
#[derive(Debug, Default)]
pub struct EventTicker;

impl Ticker for EventTicker {
    fn wait(&mut self, period: Duration, shutdown: &ShutdownFlag) -> Result<()> {
        let deadline = Instant::now() + period;

        while !shutdown.should_stop() {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            if !event::poll(left.min(POLL_SLICE))? {
                continue;
            }
            // On Windows, crossterm fires Press and Release; only handle Press
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(&key) && shutdown.trigger() {
                    log::info!("quit key pressed");
                }
            }
            // Resize and other events fall through; the next frame redraws
        }
        Ok(())
    }
}
