use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AnswerOption;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
/// The countdown turns red at or below this many seconds.
const LOW_TIME_SECONDS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .spacing(1)
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_countdown(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &question.prompt);
    render_options(
        frame,
        chunks[3],
        &question.options,
        app.selected_option(),
        app.is_answering_enabled(),
    );
    render_timer_text(frame, chunks[4], app);
    render_controls(frame, chunks[5], app.is_answering_enabled());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Question {}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let remaining = app.seconds_remaining();
    let duration = app.config().question_duration_seconds();
    let color = if remaining <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Blue
    };

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(remaining) / f64::from(duration))
        .label(format!("{}s", remaining));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[AnswerOption; 4],
    selected: usize,
    enabled: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = match (enabled, is_selected) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default().fg(Color::Cyan).bold(),
            (true, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}-) ", OPTION_LABELS[index]), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn render_timer_text(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Paragraph::new(format!("Time left: {} seconds", app.seconds_remaining()))
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, enabled: bool) {
    let text = if enabled {
        "j/k navigate  ·  enter or a-d answer  ·  q quit"
    } else {
        "answers locked  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
