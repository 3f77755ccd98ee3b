use ratatui::style::{Color, Modifier, Style};

/// Colors by role. One scheme per process, passed to every draw call.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Banner and headings
    pub banner: Color,
    pub title: Color,
    pub section: Color,
    pub timestamp: Color,

    // Table
    pub border: Color,
    pub col_interface: Color,
    pub col_upload: Color,
    pub col_download: Color,
    pub col_packets: Color,
    pub col_errors: Color,
    pub col_dropped: Color,
    pub interface_name: Color,
    pub combined_name: Color,
    pub value: Color,

    // Messages
    pub footer: Color,
    pub warning: Color,
    pub farewell: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            banner: Color::LightMagenta,
            title: Color::LightCyan,
            section: Color::LightGreen,
            timestamp: Color::DarkGray,

            border: Color::White,
            col_interface: Color::LightCyan,
            col_upload: Color::LightGreen,
            col_download: Color::LightRed,
            col_packets: Color::LightGreen,
            col_errors: Color::LightRed,
            col_dropped: Color::LightGreen,
            interface_name: Color::LightMagenta,
            combined_name: Color::LightMagenta,
            value: Color::Reset,

            footer: Color::LightCyan,
            warning: Color::LightRed,
            farewell: Color::LightBlue,
        }
    }
}

impl ColorScheme {
    pub fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Header color for a column label
    pub fn header_color(&self, header: &str) -> Color {
        match header {
            "Interface" => self.col_interface,
            "Upload Speed" => self.col_upload,
            "Download Speed" => self.col_download,
            "Packets Sent/Received" => self.col_packets,
            "Errors In/Out" => self.col_errors,
            "Dropped In/Out" => self.col_dropped,
            _ => self.value,
        }
    }

    /// Wrap `text` in ANSI escapes for output outside the TUI
    pub fn ansi(color: Color, text: &str) -> String {
        let code = match color {
            Color::Red | Color::LightRed => "91",
            Color::Green | Color::LightGreen => "92",
            Color::Yellow | Color::LightYellow => "93",
            Color::Blue | Color::LightBlue => "94",
            Color::Magenta | Color::LightMagenta => "95",
            Color::Cyan | Color::LightCyan => "96",
            _ => return text.to_string(),
        };
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_colors() {
        let cs = ColorScheme::default();
        assert_eq!(cs.header_color("Upload Speed"), cs.col_upload);
        assert_eq!(cs.header_color("Errors In/Out"), cs.col_errors);
        assert_eq!(cs.header_color("???"), cs.value);
    }

    #[test]
    fn test_ansi() {
        assert_eq!(ColorScheme::ansi(Color::LightRed, "Error:"), "\x1b[91mError:\x1b[0m");
        assert_eq!(ColorScheme::ansi(Color::Reset, "plain"), "plain");
    }
}
