use chrono::NaiveDate;

use super::priority::PriorityIndicator;
use crate::core::models::{label_for, Project, Sprint, Status, StatusKey, Task, User};

pub const PROJECT_FALLBACK: &str = "Projeto";
pub const SPRINT_FALLBACK: &str = "Sprint";
pub const UNASSIGNED: &str = "Não atribuído";
pub const DESCRIPTION_LIMIT: usize = 100;

/// Reference lists a card resolves ids against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lookups<'a> {
    pub projects: &'a [Project],
    pub sprints: &'a [Sprint],
    pub users: &'a [User],
}

/// `actual / estimated * 100`, deliberately not clamped. `None` unless both
/// hours are known and the estimate is positive.
pub fn progress_percent(estimated: Option<f64>, actual: Option<f64>) -> Option<f64> {
    match (estimated, actual) {
        (Some(estimated), Some(actual)) if estimated > 0.0 => Some(actual / estimated * 100.0),
        _ => None,
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

pub fn is_overdue(due: Option<NaiveDate>, status: &StatusKey, today: NaiveDate) -> bool {
    match due {
        Some(due) => due < today && !Status::is_done(status),
        None => false,
    }
}

/// Cuts `text` to `limit` characters, appending an ellipsis when shortened.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub label: String,
    /// Bar width in percent, clamped to `0..=100` for layout only.
    pub width: f64,
    pub over_budget: bool,
}

/// Everything a task card renders, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: PriorityIndicator,
    pub project_label: String,
    pub sprint_label: Option<String>,
    pub assignee: String,
    pub due_label: Option<String>,
    pub overdue: bool,
    pub progress: Option<Progress>,
}

impl CardView {
    pub fn build(task: &Task, lookups: Lookups<'_>, today: NaiveDate) -> Self {
        let progress = progress_percent(task.estimated_hours, task.actual_hours).map(|percent| Progress {
            label: format_percent(percent),
            width: percent.clamp(0.0, 100.0),
            over_budget: percent > 100.0,
        });

        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            description: task
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(|d| truncate(d, DESCRIPTION_LIMIT)),
            priority: PriorityIndicator::for_task(task.priority),
            project_label: label_for(lookups.projects, Some(task.project_id.as_str()), PROJECT_FALLBACK).to_string(),
            sprint_label: task
                .sprint_id
                .as_deref()
                .map(|id| label_for(lookups.sprints, Some(id), SPRINT_FALLBACK).to_string()),
            assignee: label_for(lookups.users, task.assignee_id.as_deref(), UNASSIGNED).to_string(),
            due_label: task.due_date.map(|d| d.format("%d/%m/%Y").to_string()),
            overdue: is_overdue(task.due_date, &task.status_id, today),
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::task::fixtures::task;
    use crate::core::models::NamedRef;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn progress_is_not_clamped() {
        let percent = progress_percent(Some(10.0), Some(12.0)).unwrap();
        assert_eq!(format_percent(percent), "120%");
    }

    #[test]
    fn progress_needs_both_hours_and_a_positive_estimate() {
        assert_eq!(progress_percent(Some(10.0), None), None);
        assert_eq!(progress_percent(None, Some(3.0)), None);
        assert_eq!(progress_percent(Some(0.0), Some(3.0)), None);
        assert_eq!(progress_percent(Some(8.0), Some(2.0)), Some(25.0));
    }

    #[test]
    fn overdue_only_when_past_and_not_done() {
        let today = day(2024, 6, 10);
        let todo = StatusKey::from("TODO");
        assert!(is_overdue(Some(day(2024, 6, 9)), &todo, today));
        assert!(!is_overdue(Some(day(2024, 6, 10)), &todo, today));
        assert!(!is_overdue(Some(day(2024, 6, 1)), &StatusKey::from("DONE"), today));
        assert!(!is_overdue(None, &todo, today));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("curto", 10), "curto");
        assert_eq!(truncate("ação rápida demais", 4), "ação…");
    }

    #[test]
    fn card_uses_fallback_labels_for_misses() {
        let mut t = task("t1", "TODO");
        t.project_id = "gone".into();
        t.sprint_id = Some("s-gone".into());
        t.assignee_id = Some("u-gone".into());

        let card = CardView::build(&t, Lookups::default(), day(2024, 1, 1));

        assert_eq!(card.project_label, PROJECT_FALLBACK);
        assert_eq!(card.sprint_label.as_deref(), Some(SPRINT_FALLBACK));
        assert_eq!(card.assignee, UNASSIGNED);
        assert_eq!(card.progress, None);
    }

    #[test]
    fn card_resolves_labels_and_progress() {
        let projects = vec![NamedRef { id: "p1".into(), name: "Portal".into() }];
        let sprints = vec![NamedRef { id: "s4".into(), name: "Sprint 4".into() }];
        let users = vec![NamedRef { id: "u7".into(), name: "Bruno".into() }];
        let mut t = task("t1", "IN_PROGRESS");
        t.sprint_id = Some("s4".into());
        t.assignee_id = Some("u7".into());
        t.estimated_hours = Some(10.0);
        t.actual_hours = Some(12.0);
        t.due_date = Some(day(2024, 2, 1));
        t.description = Some("   ".into());

        let lookups = Lookups { projects: &projects, sprints: &sprints, users: &users };
        let card = CardView::build(&t, lookups, day(2024, 3, 1));

        assert_eq!(card.project_label, "Portal");
        assert_eq!(card.sprint_label.as_deref(), Some("Sprint 4"));
        assert_eq!(card.assignee, "Bruno");
        assert_eq!(card.description, None);
        assert_eq!(card.due_label.as_deref(), Some("01/02/2024"));
        assert!(card.overdue);
        let progress = card.progress.unwrap();
        assert_eq!(progress.label, "120%");
        assert_eq!(progress.width, 100.0);
        assert!(progress.over_budget);
    }

    #[test]
    fn task_without_sprint_has_no_sprint_badge() {
        let card = CardView::build(&task("t1", "TODO"), Lookups::default(), day(2024, 1, 1));
        assert_eq!(card.sprint_label, None);
        assert_eq!(card.priority.label, "Média");
    }
}
