use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

use crate::app::{RateRow, RateView};
use crate::color_scheme::ColorScheme;

/// Fixed width of the name and speed columns
const COL_WIDTH: u16 = 20;
/// Width of the optional counter columns
const COUNTER_WIDTH: u16 = 23;

/// Rows the table needs: borders, header, separators
pub fn table_height(view: &RateView) -> u16 {
    // top + header + header separator + rows + bottom
    view.rows.len() as u16 + 4
}

fn row_cells<'a>(row: &'a RateRow, cs: &ColorScheme) -> Vec<Cell<'a>> {
    let name_color = if row.combined { cs.combined_name } else { cs.interface_name };
    let value = Style::default().fg(cs.value);

    let mut cells = vec![
        Cell::from(Span::styled(row.label.as_str(), Style::default().fg(name_color))),
        Cell::from(Span::styled(row.upload.as_str(), value)),
        Cell::from(Span::styled(row.download.as_str(), value)),
    ];
    for optional in [&row.packets, &row.errors, &row.dropped] {
        if let Some(text) = optional {
            cells.push(Cell::from(Span::styled(text.as_str(), value)));
        }
    }
    cells
}

/// Draw the bordered per-interface table
pub fn draw_rate_table(f: &mut Frame, view: &RateView, cs: &ColorScheme, area: Rect) {
    let headers = view.headers();

    let header = Row::new(
        headers
            .iter()
            .map(|h| Cell::from(Span::styled(*h, ColorScheme::bold(cs.header_color(h))))),
    )
    .bottom_margin(1);

    let column_count = headers.len();
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|r| {
            // Combined row has no counter cells; pad so borders line up
            let mut cells = row_cells(r, cs);
            while cells.len() < column_count {
                cells.push(Cell::from(""));
            }
            let row = Row::new(cells);
            if r.combined {
                row.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let widths: Vec<Constraint> = (0..column_count)
        .map(|i| Constraint::Length(if i < 3 { COL_WIDTH } else { COUNTER_WIDTH }))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(cs.border)),
        );

    f.render_widget(table, area);
}
