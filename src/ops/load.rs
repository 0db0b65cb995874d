use std::fmt;

use crate::io::api_client::{AuthError, FetchError, TaskApi};
use crate::model::config::ApiConfig;
use crate::model::task::{Task, tasks_from_payload};

/// Where a single load invocation currently stands.
///
/// `Idle -> Authenticating -> Fetching -> Loaded` on success; either network
/// step may end in `Failed`. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Authenticating,
    Fetching,
    Loaded,
    Failed,
}

impl LoadPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, LoadPhase::Loaded | LoadPhase::Failed)
    }

    /// Whether the loading indicator should be showing
    pub fn is_in_flight(self) -> bool {
        matches!(self, LoadPhase::Authenticating | LoadPhase::Fetching)
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadPhase::Idle => "idle",
            LoadPhase::Authenticating => "signing in",
            LoadPhase::Fetching => "fetching tasks",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Error type for a failed load
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Terminal result of one load invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Task>),
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn phase(&self) -> LoadPhase {
        match self {
            LoadOutcome::Loaded(_) => LoadPhase::Loaded,
            LoadOutcome::Failed(_) => LoadPhase::Failed,
        }
    }

    pub fn into_result(self) -> Result<Vec<Task>, LoadError> {
        match self {
            LoadOutcome::Loaded(tasks) => Ok(tasks),
            LoadOutcome::Failed(err) => Err(err),
        }
    }
}

/// Username and password sent to the login endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&ApiConfig> for Credentials {
    fn from(api: &ApiConfig) -> Self {
        Credentials::new(&api.username, &api.password)
    }
}

/// Sign in, fetch, and parse the task list.
///
/// `on_phase` sees every transition, ending with `Loaded` or `Failed`. The
/// token never outlives this call. If login fails the fetch is not attempted.
pub fn load_tasks<A>(
    api: &A,
    credentials: &Credentials,
    mut on_phase: impl FnMut(LoadPhase),
) -> LoadOutcome
where
    A: TaskApi + ?Sized,
{
    on_phase(LoadPhase::Authenticating);
    let token = match api.login(&credentials.username, &credentials.password) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            on_phase(LoadPhase::Failed);
            return LoadOutcome::Failed(err.into());
        }
    };

    on_phase(LoadPhase::Fetching);
    let items = match api.fetch_tasks(&token) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "task fetch failed");
            on_phase(LoadPhase::Failed);
            return LoadOutcome::Failed(err.into());
        }
    };

    let tasks = tasks_from_payload(&items);
    tracing::info!(count = tasks.len(), "tasks loaded");
    on_phase(LoadPhase::Loaded);
    LoadOutcome::Loaded(tasks)
}
