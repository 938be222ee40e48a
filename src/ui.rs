use crate::app::{Field, FormState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const RESULTS_HEADER: &str = "Estimated Monthly Payments:\n\
    Interest Rate | Monthly Payment\n\
    -----------------------------\n";

fn cursor(active: bool) -> &'static str {
    if active {
        " █"
    } else {
        ""
    }
}

/// The whole form as plain text, one line per field followed by the results
/// table.
pub fn render_view(state: &FormState) -> String {
    let mut view = String::new();
    for field in Field::ALL {
        view.push_str(field.prompt());
        view.push_str(state.text(field));
        view.push_str(cursor(state.focus == field));
        view.push('\n');
    }
    view.push('\n');
    view.push_str(RESULTS_HEADER);
    for line in &state.results {
        view.push_str(line);
        view.push('\n');
    }
    view
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Home Buyer Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let focused = state.focus.index();
    let lines: Vec<Line> = render_view(state)
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let line = Line::from(text.to_string());
            if i == focused {
                line.style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                line
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[1]);

    let help = Paragraph::new("↑/↓ or j/k: move | Tab/Shift+Tab: cycle | Enter: calculate | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}
