use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from taskscan.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how to reach the task service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_tasks_path")]
    pub tasks_path: String,
    /// Base64 value for the fixed `Authorization: Basic` header on login
    #[serde(default = "default_basic_auth")]
    pub basic_auth: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            login_path: default_login_path(),
            tasks_path: default_tasks_path(),
            basic_auth: default_basic_auth(),
            username: default_username(),
            password: default_password(),
        }
    }
}

impl ApiConfig {
    pub fn login_url(&self) -> String {
        join_url(&self.base_url, &self.login_path)
    }

    pub fn tasks_url(&self) -> String {
        join_url(&self.base_url, &self.tasks_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_base_url() -> String {
    "https://api.example.com".into()
}

fn default_login_path() -> String {
    "/login".into()
}

fn default_tasks_path() -> String {
    "/v1/tasks/select".into()
}

fn default_basic_auth() -> String {
    "QVBJX0V4cGxvcmVyOjEyMzQ1NmlzQUxhbWVQYXNz".into()
}

fn default_username() -> String {
    "365".into()
}

fn default_password() -> String {
    "1".into()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Where TUI logs go. Without it, TUI logging is discarded.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            log_file: None,
        }
    }
}
