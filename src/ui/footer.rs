use std::io::{self, Write};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::color_scheme::ColorScheme;

pub const EXIT_HINT: &str = "Press CTRL+C to close";
pub const FAREWELL: &str = "Closing NetSpeed... Goodbye!";

/// Draw the exit hint under the table
pub fn draw_footer(f: &mut Frame, cs: &ColorScheme, area: Rect) {
    let line = Line::from(Span::styled(EXIT_HINT, ColorScheme::bold(cs.footer)));
    f.render_widget(Paragraph::new(line), area);
}

/// Print the goodbye line once the terminal is back to normal
pub fn write_farewell<W: Write>(out: &mut W, cs: &ColorScheme) -> io::Result<()> {
    writeln!(out, "\n{}", ColorScheme::ansi(cs.farewell, FAREWELL))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell() {
        let mut out = Vec::new();
        write_farewell(&mut out, &ColorScheme::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(FAREWELL).count(), 1);
        assert!(text.starts_with('\n'));
    }
}
