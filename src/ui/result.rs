use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::report::Report;

const QUESTION_PREVIEW_LENGTH: usize = 45;
const ANSWER_PREVIEW_LENGTH: usize = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let report = app.report();
    let grade_color = get_grade_color(report.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &report, app.skipped_count(), grade_color);
    render_answer_review(frame, chunks[2], &report, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    report: &Report,
    skipped: usize,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                report.correct,
                report.total,
                report.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(format!("{} skipped", skipped).fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_answer_review(frame: &mut Frame, area: Rect, report: &Report, scroll: usize) {
    let lines: Vec<Line> = if report.rows.is_empty() {
        vec![Line::from("No answers were recorded.".fg(Color::DarkGray))]
    } else {
        report
            .rows
            .iter()
            .map(|row| {
                let (symbol, color) = if row.is_correct {
                    ("+", Color::Green)
                } else {
                    ("-", Color::Red)
                };

                Line::from(vec![
                    Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                    Span::styled(
                        truncate(&row.prompt, QUESTION_PREVIEW_LENGTH),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled("  →  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        truncate(&row.selected_text, ANSWER_PREVIEW_LENGTH),
                        Style::default().fg(color),
                    ),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() > max_chars {
        let truncated: String = single_line.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        single_line
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
        assert_eq!(truncate("two\nlines", 20), "two lines");
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(get_grade_color(100.0), Color::Green);
        assert_eq!(get_grade_color(75.0), Color::Cyan);
        assert_eq!(get_grade_color(50.0), Color::Yellow);
        assert_eq!(get_grade_color(0.0), Color::Red);
    }
}
