use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::RateView;
use crate::color_scheme::ColorScheme;

pub const BANNER: &str = r#".----------------------------------------------.
|  _   _      _   _____                     _  |
| | \ | |    | | /  ___|                   | | |
| |  \| | ___| |_\ `--. _ __   ___  ___  __| | |
| | . ` |/ _ \ __|`--. \ '_ \ / _ \/ _ \/ _` | |
| | |\  |  __/ |_/\__/ / |_) |  __/  __/ (_| | |
| \_| \_/\___|\__\____/| .__/ \___|\___|\__,_| |
|                      | |                     |
|                      |_|                     |
'----------------------------------------------'"#;

pub const TITLE: &str = "NetSpeed - Live Network Monitoring";
pub const SECTION: &str = "INTERFACE MONITORING:";

/// Banner plus the two heading lines
pub fn banner_height() -> u16 {
    BANNER.lines().count() as u16 + 2
}

/// Draw the banner, title (with last-update time) and section label
pub fn draw_banner(f: &mut Frame, view: &RateView, cs: &ColorScheme, area: Rect) {
    let banner_style = ColorScheme::bold(cs.banner);
    let mut lines: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l, banner_style)))
        .collect();

    lines.push(Line::from(vec![
        Span::styled(TITLE, ColorScheme::bold(cs.title)),
        Span::styled(
            format!("  {}", view.updated_at.format("%H:%M:%S")),
            ratatui::style::Style::default().fg(cs.timestamp),
        ),
    ]));
    lines.push(Line::from(Span::styled(SECTION, ColorScheme::bold(cs.section))));

    f.render_widget(Paragraph::new(lines), area);
}
