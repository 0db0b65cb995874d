use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::loader::LoadEvent;
use crate::model::config::AppConfig;
use crate::model::task::Task;
use crate::ops::load::LoadOutcome;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Three tasks covering a light, a dark and a short color code.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("T1", "Paint wall", "", "#fff"),
        Task::new("T2", "Fix door", "Hinge is loose", "#8B0000"),
        Task::new("T3", "Order paint", "Two buckets", "0f0"),
    ]
}

/// Build an App whose first load already finished with `tasks`.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    let mut app = App::new(&AppConfig::default(), None);
    app.request_load();
    let generation = app.board.generation();
    app.apply_load_event(LoadEvent::Finished {
        generation,
        outcome: LoadOutcome::Loaded(tasks),
    });
    app
}
