mod quiz;
mod result;
mod status;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, AppState};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state() {
        AppState::Loading => status::render_loading(frame, area),
        AppState::Unavailable => status::render_unavailable(frame, area, app.load_error().unwrap_or_default()),
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// A bordered box of `height` lines centered vertically in `area`.
fn centered_box(area: Rect, height: u16) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    chunks[1]
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::SessionConfig;
    use crate::error::SessionError;
    use crate::models::{AnswerOption, Question};

    fn bank() -> Vec<Question> {
        vec![Question {
            id: 1,
            prompt: "Question 1: sunt aut facere".to_string(),
            options: [
                AnswerOption::new("sunt aut facere", true),
                AnswerOption::new("quia et suscipit", false),
                AnswerOption::new("aut facere", false),
                AnswerOption::new("nostrum rerum", false),
            ],
        }]
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_every_screen() {
        let mut app = App::new(SessionConfig::default());
        assert!(screen(&app).contains("Fetching questions"));

        app.finish_loading(Err(SessionError::EmptyBank.into()));
        assert!(screen(&app).contains("QUESTIONS UNAVAILABLE"));

        app.begin_retry();
        app.finish_loading(Ok(bank()));
        assert!(screen(&app).contains("TIMED QUIZ"));

        app.start_quiz();
        let quiz = screen(&app);
        assert!(quiz.contains("Question 1/1"));
        assert!(quiz.contains("answers locked"));
        assert!(quiz.contains("Time left: 30 seconds"));

        for _ in 0..10 {
            app.tick();
        }
        app.answer_with(0);
        let result = screen(&app);
        assert!(result.contains("RESULTS"));
        assert!(result.contains("1 / 1"));
    }
}
