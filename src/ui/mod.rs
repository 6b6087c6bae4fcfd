mod game_over;
mod home;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Home => home::render(frame, area, app),
        Screen::Quiz => {
            quiz::render(frame, area, app);
            if app.is_game_over() {
                game_over::render(frame, area, app);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::QuizConfig;
    use crate::data::LessonRepository;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(LessonRepository::builtin().unwrap(), QuizConfig::default())
    }

    #[test]
    fn renders_home() {
        let text = screen_text(&app());
        assert!(text.contains("NIHONGO QUIZ"));
        assert!(text.contains("3 lessons"));
    }

    #[test]
    fn renders_quiz_header_and_options() {
        let mut app = app();
        app.start_quiz();
        let text = screen_text(&app);

        assert!(text.contains("Lesson 1/3"));
        assert!(text.contains("Question 1/3"));
        assert!(text.contains("Score 0"));
        assert!(text.contains("A."));
        assert!(text.contains("D."));
    }

    #[test]
    fn renders_verdict_after_reveal() {
        let mut app = app();
        app.start_quiz();
        app.pick(0);
        let text = screen_text(&app);

        assert!(text.contains("Correct!"));
        assert!(text.contains("Score 10"));
    }

    #[test]
    fn renders_word_order_bank() {
        let mut app = app();
        app.start_quiz();
        app.pick(0);
        app.continue_quiz();
        let text = screen_text(&app);

        assert!(text.contains("Word bank"));
        assert!(text.contains("Your sentence"));
    }

    #[test]
    fn playback_key_listed_only_with_media() {
        let mut app = app();
        app.start_quiz();
        assert!(screen_text(&app).contains("p play"));

        // 自己紹介 Q2 has no audio.
        app.pick(0);
        app.continue_quiz();
        assert!(!screen_text(&app).contains("p play"));

        // 買い物 Q3 is a word-order question with audio.
        app.continue_quiz();
        app.pick(0);
        app.continue_quiz();
        app.pick(2);
        app.continue_quiz();
        app.pick(0);
        app.continue_quiz();
        assert!(app.session().current_question().unwrap().is_word_order());
        let text = screen_text(&app);
        assert!(text.contains("c check"));
        assert!(text.contains("p play"));
    }

    #[test]
    fn renders_game_over_overlay() {
        let mut app = app();
        app.start_quiz();
        app.pick(1);
        app.continue_quiz();
        app.continue_quiz();
        app.pick(1);
        app.continue_quiz();
        app.pick(0);
        let text = screen_text(&app);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("r retry"));
    }
}
