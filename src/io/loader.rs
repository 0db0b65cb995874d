use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::io::api_client::{AuthError, TaskApi};
use crate::ops::load::{Credentials, LoadOutcome, LoadPhase, load_tasks};

/// Events sent from a load thread to the TUI event loop.
#[derive(Debug)]
pub enum LoadEvent {
    /// The load with this generation moved to a new non-terminal phase.
    Phase { generation: u64, phase: LoadPhase },
    /// The load with this generation is done.
    Finished { generation: u64, outcome: LoadOutcome },
}

/// Runs loads off the UI thread and hands their events back through a channel.
pub struct LoadWorker {
    api: Arc<dyn TaskApi>,
    credentials: Credentials,
    tx: mpsc::Sender<LoadEvent>,
    rx: mpsc::Receiver<LoadEvent>,
}

impl LoadWorker {
    pub fn new(api: Arc<dyn TaskApi>, credentials: Credentials) -> Self {
        let (tx, rx) = mpsc::channel();
        LoadWorker {
            api,
            credentials,
            tx,
            rx,
        }
    }

    /// Start a load tagged with `generation` on a new thread.
    ///
    /// Earlier loads are not cancelled; their events still arrive and the
    /// receiver decides whether they are stale.
    pub fn spawn(&self, generation: u64) {
        let api = Arc::clone(&self.api);
        let credentials = self.credentials.clone();
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name(format!("taskscan-load-{generation}"))
            .spawn(move || {
                let outcome = load_tasks(api.as_ref(), &credentials, |phase| {
                    if !phase.is_terminal() {
                        let _ = tx.send(LoadEvent::Phase { generation, phase });
                    }
                });
                let _ = tx.send(LoadEvent::Finished {
                    generation,
                    outcome,
                });
            });

        if let Err(err) = spawned {
            tracing::warn!(error = %err, "could not start load thread");
            let _ = self.tx.send(LoadEvent::Finished {
                generation,
                outcome: LoadOutcome::Failed(
                    AuthError::TransportFailure {
                        status: None,
                        message: format!("could not start load thread: {err}"),
                    }
                    .into(),
                ),
            });
        }
    }

    /// Non-blocking poll for pending load events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }

    /// Block until the next event arrives.
    pub fn wait(&self) -> Option<LoadEvent> {
        self.rx.recv().ok()
    }
}
