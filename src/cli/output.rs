use serde::Serialize;

use crate::model::color::{Rgba, decode_color};
use crate::model::task::Task;
use crate::util::unicode;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub task: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "colorCode")]
    pub color_code: String,
    pub rgba: Rgba,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        task: task.task.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        color_code: task.color_code.clone(),
        rgba: decode_color(&task.color_code),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Widest task-id column before truncation
const MAX_ID_WIDTH: usize = 16;
/// Widest title column before truncation
const MAX_TITLE_WIDTH: usize = 40;

/// `#rrggbb` for a decoded color
pub fn hex(rgba: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// One line per task: id, title, decoded color, description.
pub fn format_task_table(tasks: &[Task]) -> String {
    let id_width = column_width(tasks.iter().map(|t| t.task.as_str()), MAX_ID_WIDTH);
    let title_width = column_width(tasks.iter().map(|t| t.title.as_str()), MAX_TITLE_WIDTH);

    let mut out = String::new();
    for task in tasks {
        let mut line = format!(
            "{}  {}  {}",
            unicode::fit_to_width(&task.task, id_width),
            unicode::fit_to_width(&task.title, title_width),
            hex(decode_color(&task.color_code)),
        );
        if !task.description.is_empty() {
            line.push_str("  ");
            line.push_str(&task.description.replace('\n', " "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values
        .map(unicode::display_width)
        .max()
        .unwrap_or(0)
        .min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_includes_decoded_color() {
        let json = serde_json::to_value(task_to_json(&Task::new("T1", "Paint wall", "", "#fff")))
            .unwrap();
        assert_eq!(json["colorCode"], "#fff");
        assert_eq!(json["rgba"]["r"], 255);
        assert_eq!(json["rgba"]["a"], 255);
    }

    #[test]
    fn hex_is_lowercase_six_digits() {
        assert_eq!(hex(Rgba::opaque(0xAB, 0x01, 0xFF)), "#ab01ff");
    }

    #[test]
    fn table_aligns_columns() {
        let tasks = vec![
            Task::new("T1", "Paint wall", "", "#fff"),
            Task::new("T22", "Fix door", "Hinge is loose", "zz"),
        ];
        assert_eq!(
            format_task_table(&tasks),
            "T1   Paint wall  #ffffff\nT22  Fix door    #000000  Hinge is loose\n"
        );
    }

    #[test]
    fn table_of_nothing_is_empty() {
        assert_eq!(format_task_table(&[]), "");
    }

    #[test]
    fn long_titles_truncate() {
        let title = "x".repeat(60);
        let out = format_task_table(&[Task::new("T1", title, "", "#000")]);
        assert!(out.contains('\u{2026}'));
        assert!(out.lines().next().unwrap().chars().count() < 60);
    }
}
