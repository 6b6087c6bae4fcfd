use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Choices, Question, Word};
use crate::session::{QuizSession, SessionState};

const BLANK: &str = "＿＿＿";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };
    let state = session.state();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], session);
    render_prompt(frame, chunks[1], &question.question);
    render_media(frame, chunks[2], question, state);

    if let Some(choices) = question.choices() {
        render_choices(frame, chunks[3], choices, state, app.cursor());
    } else if let Some(words) = question.words() {
        render_word_order(frame, chunks[3], session, words, app.cursor());
    }

    render_feedback(frame, chunks[4], question, state);
    render_controls(frame, chunks[5], question, state);
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let state = session.state();
    let repo = session.repository();
    let (title, question_count) = session
        .current_lesson()
        .map(|lesson| (lesson.title.as_str(), lesson.question_count()))
        .unwrap_or_default();

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).areas(area);

    let progress = Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(
                "  Lesson {}/{}  ·  Question {}/{}",
                state.lesson_index + 1,
                repo.lesson_count(),
                state.question_index + 1,
                question_count
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(progress), left);

    let max_lives = session.config().starting_lives.max(state.lives);
    let hearts: String = (0..max_lives)
        .map(|i| if i < state.lives { '♥' } else { '♡' })
        .collect();
    let status = Line::from(vec![
        Span::styled(hearts, Style::default().fg(Color::Red)),
        Span::styled(
            format!("  Score {}", state.score),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), right);
}

fn render_prompt(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_media(frame: &mut Frame, area: Rect, question: &Question, state: &SessionState) {
    let Some(media) = question.media() else {
        return;
    };

    let line = if state.is_playing {
        Line::from(vec![
            Span::styled("▶ playing ", Style::default().fg(Color::Green).bold()),
            Span::styled(media, Style::default().fg(Color::Gray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(Color::DarkGray)),
            Span::styled(media, Style::default().fg(Color::Gray)),
            Span::styled("  (p to play)", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_choices(
    frame: &mut Frame,
    area: Rect,
    choices: &Choices,
    state: &SessionState,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.options.len() * 2 + 2);

    if choices.sentence.prefix.is_some() || choices.sentence.suffix.is_some() {
        let filler = if state.answer_revealed {
            choices.options[choices.correct].as_str()
        } else {
            BLANK
        };
        lines.push(Line::from(vec![
            Span::raw(choices.sentence.prefix.as_deref().unwrap_or_default()),
            Span::styled(filler, Style::default().fg(Color::Cyan).underlined()),
            Span::raw(choices.sentence.suffix.as_deref().unwrap_or_default()),
        ]));
        lines.push(Line::from(""));
    }

    for (index, option) in choices.options.iter().enumerate() {
        let (marker, style) = option_style(index, choices, state, cursor);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn option_style(
    index: usize,
    choices: &Choices,
    state: &SessionState,
    cursor: usize,
) -> (&'static str, Style) {
    if state.answer_revealed {
        if index == choices.correct {
            return ("✓", Style::default().fg(Color::Green).bold());
        }
        if state.selected_answer == Some(index) {
            return ("✗", Style::default().fg(Color::Red).bold());
        }
        return (" ", Style::default().fg(Color::DarkGray));
    }

    if index == cursor {
        (">", Style::default().fg(Color::Cyan).bold())
    } else {
        (" ", Style::default().fg(Color::Gray))
    }
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

fn render_word_order(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    words: &[Word],
    cursor: usize,
) {
    let [sentence_area, bank_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    let picked: Vec<Span> = session
        .ordered_words()
        .into_iter()
        .map(|word| Span::styled(format!("{} ", word.text), Style::default().fg(Color::Cyan)))
        .collect();
    let sentence = if picked.is_empty() {
        Line::from(Span::styled(BLANK, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(picked)
    };
    frame.render_widget(
        Paragraph::new(sentence).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Your sentence ")
                .padding(Padding::horizontal(1)),
        ),
        sentence_area,
    );

    let revealed = session.state().answer_revealed;
    let lines: Vec<Line> = words
        .iter()
        .enumerate()
        .map(|(slot, word)| {
            let used = session.is_word_picked(slot);
            let style = match (used, slot == cursor && !revealed) {
                (true, _) => Style::default().fg(Color::DarkGray).crossed_out(),
                (false, true) => Style::default().fg(Color::Cyan).bold(),
                (false, false) => Style::default().fg(Color::Gray),
            };
            let marker = if slot == cursor && !revealed { ">" } else { " " };
            Line::from(vec![
                Span::styled(format!(" {} {}. ", marker, slot + 1), style),
                Span::styled(word.text.as_str(), style),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Word bank ")
                .padding(Padding::horizontal(1)),
        ),
        bank_area,
    );
}

fn render_feedback(frame: &mut Frame, area: Rect, question: &Question, state: &SessionState) {
    let mut lines = Vec::new();

    match state.was_correct {
        Some(true) => lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        ))),
        Some(false) => lines.push(Line::from(Span::styled(
            "Not quite.",
            Style::default().fg(Color::Red).bold(),
        ))),
        None => {}
    }

    if state.answer_revealed {
        lines.push(Line::from(Span::styled(
            question.explanation.as_str(),
            Style::default().fg(Color::White),
        )));
    } else if state.hint_visible {
        let hint = question.hint.as_deref().unwrap_or("No hint for this one.");
        lines.push(Line::from(vec![
            Span::styled("Hint: ", Style::default().fg(Color::Yellow).bold()),
            Span::styled(hint, Style::default().fg(Color::Yellow)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, question: &Question, state: &SessionState) {
    let keys: &[&str] = if state.answer_revealed {
        &["n continue"]
    } else if question.is_word_order() {
        &["j/k move", "enter pick", "⌫ undo", "x clear", "c check", "n skip", "h hint"]
    } else {
        &["j/k navigate", "enter answer", "h hint"]
    };

    let mut keys = keys.to_vec();
    if question.media().is_some() {
        keys.push("p play");
    }
    keys.push("q quit");
    let text = keys.join(" · ");

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
