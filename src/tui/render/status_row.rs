use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    if app.list.loading {
        spans.push(Span::styled(
            format!("\u{25CC} {}\u{2026}", app.board.phase()),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            count_label(app),
            Style::default().fg(app.theme.text).bg(bg),
        ));
        if let Some(at) = app.loaded_at {
            spans.push(Span::styled(
                format!("  loaded {}", at.format("%H:%M")),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    if let Some(err) = app.board.last_error() {
        spans.push(Span::styled(
            format!("  {err}"),
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => "/ search  s scan  r reload  ? help",
            Mode::Search => "Enter keep  Esc clear",
            Mode::Scan => "Enter apply  Esc cancel",
        };
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width + 1 < width {
            let padding = width - content_width - hint_width - 1;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn count_label(app: &App) -> String {
    let total = app.board.all().len();
    let noun = if total == 1 { "task" } else { "tasks" };
    if app.board.is_searching() {
        format!("{} of {} {}", app.board.visible().len(), total, noun)
    } else {
        format!("{} {}", total, noun)
    }
}
