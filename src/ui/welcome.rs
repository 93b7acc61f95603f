use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

use super::centered_box;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let config = app.config();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} Questions · {}s each · answers open after {}s",
                app.total_questions(),
                config.question_duration_seconds(),
                config.answer_lock_seconds()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    if let Some(error) = app.start_error() {
        content.push(Line::from(""));
        content.push(Line::from(error.fg(Color::Red)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, centered_box(area, 12));
}
