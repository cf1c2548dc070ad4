use crate::core::models::{StatusKey, Task};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Task),
}

/// Request to move a task to another column, produced by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignIntent {
    pub task_id: String,
    pub from: StatusKey,
    pub to: StatusKey,
}

/// Drag-and-drop between columns: `Idle -> Dragging(task) -> Idle`.
///
/// Only the drop transition can emit an intent; persisting it is up to
/// whoever owns the task list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragMachine {
    state: DragState,
    hovered: Option<StatusKey>,
}

impl DragMachine {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragging_task_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging(task) => Some(task.id.as_str()),
            DragState::Idle => None,
        }
    }

    pub fn is_hovered(&self, column: &StatusKey) -> bool {
        self.hovered.as_ref() == Some(column)
    }

    pub fn drag_start(&mut self, task: Task) {
        tracing::debug!(task_id = %task.id, from = %task.status_id, "drag started");
        self.state = DragState::Dragging(task);
        self.hovered = None;
    }

    /// Always accepts; the caller must `prevent_default` the event so the
    /// browser allows the drop.
    pub fn drag_over(&mut self, column: &StatusKey) -> bool {
        if !self.is_hovered(column) {
            self.hovered = Some(column.clone());
        }
        true
    }

    pub fn drag_leave(&mut self, column: &StatusKey) {
        if self.is_hovered(column) {
            self.hovered = None;
        }
    }

    /// Returns to `Idle` in every case. Emits an intent only when a task is
    /// being dragged and `column` differs from its current status.
    pub fn drop(&mut self, column: &StatusKey) -> Option<ReassignIntent> {
        self.hovered = None;
        match std::mem::take(&mut self.state) {
            DragState::Dragging(task) if task.status_id != *column => {
                tracing::debug!(task_id = %task.id, to = %column, "drop accepted");
                Some(ReassignIntent { task_id: task.id, from: task.status_id, to: column.clone() })
            }
            DragState::Dragging(task) => {
                tracing::debug!(task_id = %task.id, "dropped on its own column");
                None
            }
            DragState::Idle => None,
        }
    }

    /// `dragend` without a drop (released outside a column, or Escape).
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::task::fixtures::task;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> StatusKey {
        StatusKey::from(s)
    }

    #[test]
    fn drop_on_other_column_emits_intent() {
        let mut machine = DragMachine::default();
        machine.drag_start(task("t1", "TODO"));
        assert_eq!(machine.dragging_task_id(), Some("t1"));

        let intent = machine.drop(&key("DONE"));

        assert_eq!(
            intent,
            Some(ReassignIntent { task_id: "t1".into(), from: key("TODO"), to: key("DONE") })
        );
        assert_eq!(machine.state(), &DragState::Idle);
    }

    #[test]
    fn drop_on_origin_column_is_a_no_op_that_still_resets() {
        let mut machine = DragMachine::default();
        machine.drag_start(task("t1", "TODO"));
        machine.drag_over(&key("TODO"));

        assert_eq!(machine.drop(&key("TODO")), None);
        assert_eq!(machine, DragMachine::default());
    }

    #[test]
    fn drop_while_idle_emits_nothing() {
        let mut machine = DragMachine::default();
        assert_eq!(machine.drop(&key("DONE")), None);
        assert_eq!(machine.state(), &DragState::Idle);
    }

    #[test]
    fn drag_over_tracks_hover_without_changing_state() {
        let mut machine = DragMachine::default();
        machine.drag_start(task("t1", "TODO"));

        assert!(machine.drag_over(&key("DONE")));
        assert!(machine.is_hovered(&key("DONE")));
        assert!(matches!(machine.state(), DragState::Dragging(_)));

        machine.drag_leave(&key("TODO"));
        assert!(machine.is_hovered(&key("DONE")));
        machine.drag_leave(&key("DONE"));
        assert!(!machine.is_hovered(&key("DONE")));
    }

    #[test]
    fn drag_end_cancels_without_intent() {
        let mut machine = DragMachine::default();
        machine.drag_start(task("t1", "TODO"));
        machine.drag_end();
        assert_eq!(machine.drop(&key("DONE")), None);
    }

    #[test]
    fn second_drag_start_replaces_the_task() {
        let mut machine = DragMachine::default();
        machine.drag_start(task("t1", "TODO"));
        machine.drag_start(task("t2", "DOING"));
        let intent = machine.drop(&key("DONE")).unwrap();
        assert_eq!(intent.task_id, "t2");
        assert_eq!(intent.from, key("DOING"));
    }
}
