use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Terminal rows per task (title line + detail line)
pub const ROW_HEIGHT: usize = 2;

/// Render the task list, one colored two-line row per task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let message = if app.list.loading {
            " Loading tasks\u{2026}".to_string()
        } else if app.board.is_searching() {
            format!(" No tasks match \"{}\"", app.board.query())
        } else {
            " No tasks".to_string()
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen
    let visible_rows = (area.height as usize / ROW_HEIGHT).max(1);
    let cursor = app.list.cursor.min(tasks.len() - 1);
    let mut scroll = app.list.scroll_offset.min(cursor);
    if cursor >= scroll + visible_rows {
        scroll = cursor + 1 - visible_rows;
    }

    let search_re = app.active_search_re();
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (idx, task) in tasks.iter().enumerate().skip(scroll).take(visible_rows) {
        lines.extend(task_lines(app, task, idx == cursor, width, search_re.as_ref()));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );

    app.list.cursor = cursor;
    app.list.scroll_offset = scroll;
}

fn task_lines(
    app: &App,
    task: &Task,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> [Line<'static>; ROW_HEIGHT] {
    let (bg, fg) = app.theme.task_colors(task);
    let base = Style::default().fg(fg).bg(bg);
    let highlight = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let detail = match (task.task.is_empty(), task.description.is_empty()) {
        (false, false) => format!("{}  {}", task.task, task.description),
        (false, true) => task.task.clone(),
        (true, _) => task.description.clone(),
    };

    [
        row_line(app, &task.title, base.add_modifier(Modifier::BOLD), highlight, is_cursor, width, search_re),
        row_line(app, &detail, base, highlight, is_cursor, width, search_re),
    ]
}

/// One full-width line: selection marker, padding, highlighted text, fill
fn row_line(
    app: &App,
    text: &str,
    base: Style,
    highlight: Style,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    // Column 0 reservation
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default()
                .fg(app.theme.selection_border)
                .bg(app.theme.background),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(app.theme.background)));
    }
    spans.push(Span::styled(" ", base));

    let available = width.saturating_sub(3);
    let shown = unicode::truncate_to_width(text, available);
    push_highlighted_spans(&mut spans, &shown, base, highlight, search_re);

    let used = 2 + unicode::display_width(&shown);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), base));
    }
    Line::from(spans)
}
