use crate::model::task::Task;

/// Select the tasks whose title, description, task id or color code contains
/// `query`, ignoring case. Source order is preserved.
///
/// Callers treat an empty query as "show everything" and do not route it
/// through here; see `TaskBoard::set_query`.
pub fn filter_tasks(all: &[Task], query: &str) -> Vec<Task> {
    let needle = query.to_lowercase();
    all.iter().filter(|t| t.matches(&needle)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("T1", "Paint wall", "", "#fff"),
            Task::new("T2", "Fix door", "Hinge is loose", "#ff0000"),
            Task::new("10 Aufbau", "Scaffold", "Wall side, north", "#00f"),
            Task::new("T4", "Order paint", "Two buckets", "ABCDEF"),
        ]
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn matches_title_case_insensitively() {
        let result = filter_tasks(&sample(), "WALL");
        assert_eq!(titles(&result), vec!["Paint wall", "Scaffold"]);
    }

    #[test]
    fn matches_description() {
        let result = filter_tasks(&sample(), "hinge");
        assert_eq!(titles(&result), vec!["Fix door"]);
    }

    #[test]
    fn matches_task_field() {
        let result = filter_tasks(&sample(), "aufbau");
        assert_eq!(titles(&result), vec!["Scaffold"]);
    }

    #[test]
    fn matches_color_code() {
        let result = filter_tasks(&sample(), "abcdef");
        assert_eq!(titles(&result), vec!["Order paint"]);
        let result = filter_tasks(&sample(), "#ff");
        assert_eq!(titles(&result), vec!["Paint wall", "Fix door"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_tasks(&sample(), "ZZZ").is_empty());
    }

    #[test]
    fn empty_input_set() {
        assert!(filter_tasks(&[], "wall").is_empty());
    }

    #[test]
    fn result_is_ordered_subsequence_of_matches() {
        let all = sample();
        for query in ["a", "T", "paint", "#", "o", "north", "x"] {
            let result = filter_tasks(&all, query);
            let needle = query.to_lowercase();

            // Every returned task matches in at least one field
            for task in &result {
                let fields = [&task.title, &task.description, &task.task, &task.color_code];
                assert!(
                    fields.iter().any(|f| f.to_lowercase().contains(&needle)),
                    "{query:?} returned non-matching {task:?}"
                );
            }

            // Result is a subsequence of the input, in input order
            let mut pos = 0;
            for task in &result {
                let found = all[pos..].iter().position(|t| t == task);
                assert!(found.is_some(), "{query:?} broke source order");
                pos += found.unwrap_or(0) + 1;
            }

            // Nothing matching was dropped
            let expected = all.iter().filter(|t| t.matches(&needle)).count();
            assert_eq!(result.len(), expected, "{query:?}");
        }
    }
}
