use crate::model::task::Task;
use crate::ops::filter::filter_tasks;
use crate::ops::load::{LoadError, LoadOutcome, LoadPhase};

/// What the task list needs from whatever draws it.
pub trait Presenter {
    /// Show this sequence of tasks, in order
    fn render(&mut self, tasks: &[Task]);
    /// Show or hide the loading indicator
    fn set_loading(&mut self, loading: bool);
}

/// The task list screen's state: the full task set, the filtered view, the
/// current query, and the generation of the most recent load.
///
/// Both task collections are replaced wholesale, never edited in place.
/// Load results carry the generation that started them; anything older than
/// the latest `begin_load` is discarded.
#[derive(Debug, Default)]
pub struct TaskBoard {
    all: Vec<Task>,
    filtered: Vec<Task>,
    query: String,
    searching: bool,
    generation: u64,
    phase: LoadPhase,
    last_error: Option<LoadError>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. Returns the generation its results must carry.
    pub fn begin_load(&mut self, presenter: &mut impl Presenter) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Authenticating;
        presenter.set_loading(true);
        tracing::info!(generation = self.generation, "load started");
        self.generation
    }

    /// Record progress of an in-flight load. Returns false for stale results.
    pub fn advance(&mut self, generation: u64, phase: LoadPhase) -> bool {
        if generation != self.generation || phase.is_terminal() {
            return false;
        }
        tracing::debug!(generation, %phase, "load progress");
        self.phase = phase;
        true
    }

    /// Apply the terminal outcome of a load. Returns false (and changes
    /// nothing) when a newer load has been started since.
    ///
    /// A successful load replaces the full set and re-applies the current
    /// query. A failed load keeps whatever was loaded before.
    pub fn finish_load(
        &mut self,
        generation: u64,
        outcome: LoadOutcome,
        presenter: &mut impl Presenter,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale load result");
            return false;
        }

        self.phase = outcome.phase();
        match outcome {
            LoadOutcome::Loaded(tasks) => {
                self.all = tasks;
                self.last_error = None;
                if self.searching {
                    self.filtered = filter_tasks(&self.all, &self.query);
                } else {
                    self.filtered = self.all.clone();
                }
            }
            LoadOutcome::Failed(err) => {
                tracing::warn!(error = %err, "load failed; keeping previous tasks");
                self.last_error = Some(err);
            }
        }

        presenter.set_loading(false);
        presenter.render(self.visible());
        true
    }

    /// The search text changed. Empty text resets to the full set without
    /// going through the filter.
    pub fn set_query(&mut self, text: &str, presenter: &mut impl Presenter) {
        self.query = text.to_string();
        if text.is_empty() {
            self.searching = false;
        } else {
            self.searching = true;
            self.filtered = filter_tasks(&self.all, text);
        }
        presenter.render(self.visible());
    }

    /// A QR code was scanned. The payload becomes the query text.
    ///
    /// An empty payload is ignored, so a failed scan never clears a search.
    pub fn apply_scan(&mut self, payload: &str, presenter: &mut impl Presenter) {
        if payload.is_empty() {
            tracing::debug!("ignoring empty QR payload");
            return;
        }
        tracing::debug!(payload, "applying QR payload as query");
        self.set_query(payload, presenter);
    }

    /// The tasks the list should currently show
    pub fn visible(&self) -> &[Task] {
        if self.searching {
            &self.filtered
        } else {
            &self.all
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.all
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_in_flight()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
}
