use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One work item as delivered by the tasks endpoint.
///
/// Every field is always a string; anything missing or non-string in the
/// source payload becomes `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Internal category / id string (e.g. `T1`)
    pub task: String,
    /// Task title text
    pub title: String,
    /// Free-form description, often empty
    pub description: String,
    /// Hex color string, with or without a leading `#`, 3 or 6 digits
    #[serde(rename = "colorCode")]
    pub color_code: String,
}

impl Task {
    pub fn new(
        task: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        color_code: impl Into<String>,
    ) -> Self {
        Task {
            task: task.into(),
            title: title.into(),
            description: description.into(),
            color_code: color_code.into(),
        }
    }

    /// Build a task from one element of the fetched JSON payload.
    pub fn from_json(value: &Value) -> Self {
        Task {
            task: string_field(value, "task"),
            title: string_field(value, "title"),
            description: string_field(value, "description"),
            color_code: string_field(value, "colorCode"),
        }
    }

    /// Case-insensitive substring match against all four fields.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.task, &self.color_code]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse every element of a fetched payload, keeping source order.
pub fn tasks_from_payload(items: &[Value]) -> Vec<Task> {
    items.iter().map(Task::from_json).collect()
}
