use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::api_client::HttpTaskApi;
use crate::io::loader::{LoadEvent, LoadWorker};
use crate::io::logging;
use crate::model::config::AppConfig;
use crate::model::task::Task;
use crate::ops::board::{Presenter, TaskBoard};
use crate::ops::load::{Credentials, LoadPhase};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing in the search field; the list filters on every keystroke
    Search,
    /// Waiting for a QR payload (scanner keystrokes or a paste)
    Scan,
}

/// Cursor, scroll and loading indicator for the task list.
///
/// This is the TUI's `Presenter`: the board tells it what to show, and the
/// next frame draws it.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Index of the selected row in the visible list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Number of rows last rendered
    pub row_count: usize,
    /// Loading indicator visible
    pub loading: bool,
}

impl Presenter for ListState {
    fn render(&mut self, tasks: &[Task]) {
        self.row_count = tasks.len();
        self.cursor = self.cursor.min(tasks.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Main application state
pub struct App {
    pub board: TaskBoard,
    pub list: ListState,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// QR payload being received in Scan mode
    pub scan_input: String,
    /// When the last successful load finished
    pub loaded_at: Option<DateTime<Local>>,
    /// Runs network loads; `None` in tests, where outcomes are fed directly
    pub loader: Option<LoadWorker>,
}

impl App {
    pub fn new(config: &AppConfig, loader: Option<LoadWorker>) -> Self {
        App {
            board: TaskBoard::new(),
            list: ListState::default(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            scan_input: String::new(),
            loaded_at: None,
            loader,
        }
    }

    /// Start a fresh load. A load already in flight keeps running but its
    /// result will be ignored.
    pub fn request_load(&mut self) {
        let generation = self.board.begin_load(&mut self.list);
        if let Some(loader) = &self.loader {
            loader.spawn(generation);
        }
    }

    /// Drain pending loader events into the board
    pub fn poll_loader(&mut self) {
        let events = match &self.loader {
            Some(loader) => loader.poll(),
            None => return,
        };
        for event in events {
            self.apply_load_event(event);
        }
    }

    pub fn apply_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Phase { generation, phase } => {
                self.board.advance(generation, phase);
            }
            LoadEvent::Finished {
                generation,
                outcome,
            } => {
                if self.board.finish_load(generation, outcome, &mut self.list)
                    && self.board.phase() == LoadPhase::Loaded
                {
                    self.loaded_at = Some(Local::now());
                }
            }
        }
    }

    /// Search text changed (typed or cleared)
    pub fn set_query(&mut self, text: &str) {
        self.list.cursor = 0;
        self.list.scroll_offset = 0;
        self.board.set_query(text, &mut self.list);
    }

    /// A QR payload arrived
    pub fn apply_scan(&mut self, payload: &str) {
        if !payload.is_empty() {
            self.list.cursor = 0;
            self.list.scroll_offset = 0;
        }
        self.board.apply_scan(payload, &mut self.list);
    }

    pub fn visible_tasks(&self) -> &[Task] {
        self.board.visible()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.board.visible().get(self.list.cursor)
    }

    /// Case-insensitive literal regex for highlighting the active query
    pub fn active_search_re(&self) -> Option<Regex> {
        if !self.board.is_searching() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(self.board.query()))).ok()
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tui(config.ui.log_file.as_deref())?;

    let api = HttpTaskApi::new(&config.api)?;
    let loader = LoadWorker::new(Arc::new(api), Credentials::from(&config.api));
    let mut app = App::new(config, Some(loader));
    app.request_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        prev_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.poll_loader();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
