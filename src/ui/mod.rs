pub mod banner;
pub mod footer;
pub mod rate_table;

use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};

use crate::app::RateView;
use crate::color_scheme::ColorScheme;
use crate::error::Result;
use crate::monitor::Renderer;

/// Render one complete frame: banner, table, exit hint
pub fn draw(f: &mut Frame, view: &RateView, cs: &ColorScheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner::banner_height()),       // banner + headings
            Constraint::Length(rate_table::table_height(view)), // table
            Constraint::Length(1),                              // exit hint
            Constraint::Min(0),
        ])
        .split(f.area());

    banner::draw_banner(f, view, cs, chunks[0]);
    rate_table::draw_rate_table(f, view, cs, chunks[1]);
    footer::draw_footer(f, cs, chunks[2]);
}

/// Draws frames onto a ratatui terminal; every frame replaces the last
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    scheme: ColorScheme,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, scheme: ColorScheme) -> Self {
        Self { terminal, scheme }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, view: &RateView) -> Result<()> {
        let scheme = &self.scheme;
        self.terminal.draw(|f| draw(f, view, scheme))?;
        Ok(())
    }
}
