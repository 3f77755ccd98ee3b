//! Shutdown flag shared between the SIGINT handler, the key-event wait and
//! the display loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    flag: Arc<AtomicBool>,
}

impl ShutdownFlag {
    /// A flag with no handler attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag that is raised by SIGINT (Ctrl+C outside raw mode).
    pub fn with_ctrlc_handler() -> Result<Self, ctrlc::Error> {
        let flag = Self::new();
        let handler_flag = flag.clone();
        ctrlc::set_handler(move || {
            if handler_flag.trigger() {
                log::info!("interrupt received");
            }
        })?;
        Ok(flag)
    }

    /// Request shutdown. Returns `true` only for the call that raised the flag.
    pub fn trigger(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    pub fn should_stop(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
