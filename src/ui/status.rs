use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::centered_box;

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("Fetching questions...".fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, centered_box(area, 5));
}

pub fn render_unavailable(frame: &mut Frame, area: Rect, error: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUESTIONS UNAVAILABLE",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(error.fg(Color::Gray)),
        Line::from(""),
        Line::from("r retry  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, centered_box(area, 10));
}
