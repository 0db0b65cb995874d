use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::Value;

use crate::model::config::ApiConfig;

/// Failure of the login call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("login request failed{}: {message}", status_suffix(.status))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },
    #[error("login response did not contain a token")]
    MissingToken,
}

/// Failure of the authenticated task fetch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("task fetch failed{}: {message}", status_suffix(.status))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },
    #[error("task payload is not a list: {0}")]
    MalformedPayload(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// The two-call contract of the task service.
pub trait TaskApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// `TransportFailure` on network errors, non-2xx responses or a body that
    /// is not JSON; `MissingToken` when the JSON has no string `token`.
    fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Fetch the raw task objects with a bearer token.
    ///
    /// # Errors
    ///
    /// `TransportFailure` on network errors or non-2xx responses;
    /// `MalformedPayload` when the body is not a JSON array or object.
    fn fetch_tasks(&self, token: &str) -> Result<Vec<Value>, FetchError>;
}

/// `TaskApi` over HTTPS with a blocking reqwest client.
pub struct HttpTaskApi {
    login_url: String,
    tasks_url: String,
    basic_auth: String,
    http_client: Client,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl HttpTaskApi {
    /// # Errors
    ///
    /// Returns the underlying reqwest error if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().build()?;
        Ok(HttpTaskApi {
            login_url: config.login_url(),
            tasks_url: config.tasks_url(),
            basic_auth: config.basic_auth.clone(),
            http_client,
        })
    }
}

fn user_agent() -> &'static str {
    concat!("taskscan/", env!("CARGO_PKG_VERSION"))
}

/// Pass a 2xx response through; otherwise return its status and body text.
fn successful(response: Response) -> Result<Response, (Option<u16>, String)> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        body
    };
    Err((Some(status.as_u16()), message))
}

impl TaskApi for HttpTaskApi {
    fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        tracing::debug!(url = %self.login_url, "logging in");

        let response = self
            .http_client
            .post(&self.login_url)
            .header(AUTHORIZATION, format!("Basic {}", self.basic_auth))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, user_agent())
            .json(&LoginRequest { username, password })
            .send()
            .map_err(|error| AuthError::TransportFailure {
                status: None,
                message: error.to_string(),
            })?;

        let response = successful(response)
            .map_err(|(status, message)| AuthError::TransportFailure { status, message })?;

        let body: Value = response
            .json()
            .map_err(|error| AuthError::TransportFailure {
                status: None,
                message: error.to_string(),
            })?;

        token_from_login_body(&body)
    }

    fn fetch_tasks(&self, token: &str) -> Result<Vec<Value>, FetchError> {
        tracing::debug!(url = %self.tasks_url, "fetching tasks");

        let response = self
            .http_client
            .get(&self.tasks_url)
            .bearer_auth(token)
            .header(USER_AGENT, user_agent())
            .send()
            .map_err(|error| FetchError::TransportFailure {
                status: None,
                message: error.to_string(),
            })?;

        let response = successful(response)
            .map_err(|(status, message)| FetchError::TransportFailure { status, message })?;

        let text = response.text().map_err(|error| FetchError::TransportFailure {
            status: None,
            message: error.to_string(),
        })?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|error| FetchError::MalformedPayload(error.to_string()))?;

        task_items(body)
    }
}

/// Pull the bearer token out of a decoded login response.
pub fn token_from_login_body(body: &Value) -> Result<String, AuthError> {
    body.get("token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(AuthError::MissingToken)
}

/// Accept a JSON array, or an object whose values are taken in document order.
pub fn task_items(body: Value) -> Result<Vec<Value>, FetchError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(map) => Ok(map.into_iter().map(|(_, v)| v).collect()),
        other => Err(FetchError::MalformedPayload(format!(
            "expected an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
