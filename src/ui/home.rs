use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, RunSummary};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let repo = app.repository();
    let height = box_height(repo.lesson_count());

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "NIHONGO QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} lessons · {} questions",
                repo.lesson_count(),
                repo.question_count()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
    ];

    for (index, lesson) in repo.lessons().iter().enumerate() {
        content.push(Line::from(vec![
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(lesson.title.as_str(), Style::default().fg(Color::White)),
        ]));
    }

    content.push(Line::from(""));
    content.push(last_run_line(app.last_run()));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "ENTER",
        Style::default().fg(Color::Green).bold(),
    )));
    content.push(Line::from("to start  ·  q quit".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn box_height(lesson_count: usize) -> u16 {
    u16::try_from(lesson_count)
        .unwrap_or(u16::MAX)
        .saturating_add(11)
}

fn last_run_line(summary: Option<RunSummary>) -> Line<'static> {
    match summary {
        None => Line::from(""),
        Some(RunSummary {
            score,
            completed: true,
            ..
        }) => Line::from(Span::styled(
            format!("All lessons complete! Final score {}", score),
            Style::default().fg(Color::Green).bold(),
        )),
        Some(RunSummary { score, .. }) => Line::from(Span::styled(
            format!("Last run ended with score {}", score),
            Style::default().fg(Color::Yellow),
        )),
    }
}
