//! The refresh loop: snapshot, derive rates, draw, wait, repeat.

use std::time::Duration;

use crate::app::RateView;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::signal::ShutdownFlag;
use crate::system::collector::StatsSource;

/// Draws one frame
pub trait Renderer {
    fn render(&mut self, view: &RateView) -> Result<()>;
}

/// Sleeps between iterations. Implementations return early once
/// `shutdown` is raised.
pub trait Ticker {
    fn wait(&mut self, period: Duration, shutdown: &ShutdownFlag) -> Result<()>;
}

/// Run until `shutdown` is raised. Returns the number of frames drawn.
pub fn run<S, R, T>(
    config: &DisplayConfig,
    source: &mut S,
    renderer: &mut R,
    ticker: &mut T,
    shutdown: &ShutdownFlag,
) -> Result<u64>
where
    S: StatsSource,
    R: Renderer,
    T: Ticker,
{
    let mut previous = source.snapshot(&config.filter)?;
    let mut frames = 0u64;

    while !shutdown.should_stop() {
        let current = source.snapshot(&config.filter)?;
        let view = RateView::build(config, &previous, &current);
        renderer.render(&view)?;
        frames += 1;
        log::debug!("frame {}: {} row(s)", frames, view.rows.len());

        previous = current;
        ticker.wait(config.refresh, shutdown)?;
    }

    log::info!("stopping after {} frame(s)", frames);
    Ok(frames)
}
