use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the title + search field row, with a separator line below
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + field
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let mut spans = vec![
        Span::styled(" \u{25B6} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "tasks",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
    ];

    let cursor = Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)); // ▌
    match app.mode {
        Mode::Search => {
            spans.push(Span::styled(
                format!("/{}", app.board.query()),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(cursor);
        }
        Mode::Scan => {
            spans.push(Span::styled(
                "QR ",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                app.scan_input.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(cursor);
        }
        Mode::Navigate => {
            if app.board.is_searching() {
                spans.push(Span::styled(
                    format!("/{}", app.board.query()),
                    Style::default().fg(app.theme.text).bg(bg),
                ));
            } else {
                spans.push(Span::styled(
                    "/ to search",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        chunks[1],
    );
}
