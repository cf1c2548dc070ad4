use crate::core::models::Task;

/// Board filters applied before grouping. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: String,
    pub sprint_id: Option<String>,
    pub assignee_id: Option<String>,
}

/// Sentinel for the assignee select meaning "tasks nobody owns".
pub const UNASSIGNED_FILTER: &str = "__unassigned__";

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.sprint_id.is_none() && self.assignee_id.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.matches_sprint(task) && self.matches_assignee(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    fn matches_sprint(&self, task: &Task) -> bool {
        match &self.sprint_id {
            Some(id) => task.sprint_id.as_deref() == Some(id.as_str()),
            None => true,
        }
    }

    fn matches_assignee(&self, task: &Task) -> bool {
        match self.assignee_id.as_deref() {
            Some(UNASSIGNED_FILTER) => task.assignee_id.is_none(),
            Some(id) => task.assignee_id.as_deref() == Some(id),
            None => true,
        }
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        if self.is_empty() {
            return tasks.to_vec();
        }
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Maps an empty `<select>` value to `None`.
pub fn select_value(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::task::fixtures::task;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Task> {
        let mut a = task("a", "TODO");
        a.title = "Corrigir login".into();
        a.sprint_id = Some("s1".into());
        a.assignee_id = Some("u1".into());
        let mut b = task("b", "DONE");
        b.title = "Deploy".into();
        b.description = Some("Ajustar LOGIN no proxy".into());
        let c = task("c", "TODO");
        vec![a, b, c]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        assert_eq!(ids(&TaskFilter::default().apply(&sample())), vec!["a", "b", "c"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let filter = TaskFilter { search: " login ".into(), ..TaskFilter::default() };
        assert_eq!(ids(&filter.apply(&sample())), vec!["a", "b"]);
    }

    #[test]
    fn sprint_and_assignee_combine() {
        let filter = TaskFilter {
            sprint_id: Some("s1".into()),
            assignee_id: Some("u1".into()),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec!["a"]);
    }

    #[test]
    fn unassigned_sentinel_selects_tasks_without_owner() {
        let filter = TaskFilter { assignee_id: Some(UNASSIGNED_FILTER.into()), ..TaskFilter::default() };
        assert_eq!(ids(&filter.apply(&sample())), vec!["b", "c"]);
    }

    #[test]
    fn select_value_treats_empty_as_none() {
        assert_eq!(select_value(String::new()), None);
        assert_eq!(select_value("s1".into()), Some("s1".to_string()));
    }
}
