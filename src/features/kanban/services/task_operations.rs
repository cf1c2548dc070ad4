use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::ErrorReporter;
use crate::core::models::{NewTask, StatusKey, Task, TaskPatch};
use crate::core::services::ApiClient;
use crate::features::kanban::drag::ReassignIntent;

// Moves a task in place, returning its previous status when it was found.
pub fn apply_status_change(tasks: &mut [Task], task_id: &str, status: &StatusKey) -> Option<StatusKey> {
    let task = tasks.iter_mut().find(|t| t.id == task_id)?;
    let previous = task.status_id.clone();
    task.update_status(status.clone());
    Some(previous)
}

// Swaps the task with the same id for `task`; false when it is gone.
pub fn replace_task(tasks: &mut [Task], id: &str, task: Task) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(slot) => {
            *slot = task;
            true
        }
        None => false,
    }
}

fn still_at(tasks: &[Task], intent: &ReassignIntent) -> bool {
    tasks.iter().any(|t| t.id == intent.task_id && t.status_id == intent.to)
}

/// Takes the server copy of a moved task, unless a later move already
/// changed its status. Returns whether the copy was applied.
pub fn reconcile_status_change(tasks: &mut [Task], intent: &ReassignIntent, updated: Task) -> bool {
    still_at(tasks, intent) && replace_task(tasks, &intent.task_id, updated)
}

/// Puts a rejected move back to `intent.from`, unless a later move already
/// changed the task's status. Returns whether it rolled back.
pub fn rollback_status_change(tasks: &mut [Task], intent: &ReassignIntent) -> bool {
    still_at(tasks, intent) && apply_status_change(tasks, &intent.task_id, &intent.from).is_some()
}

/// What happened to a local draft when its `POST /tasks` came back.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftSettled {
    /// The draft was swapped for the server copy as is.
    Replaced,
    /// The draft was moved while in flight; the server copy keeps the local
    /// status and the move still has to be persisted.
    Moved(ReassignIntent),
    /// The draft was deleted while in flight; the server copy is orphaned.
    Gone(Task),
}

pub fn settle_draft(tasks: &mut [Task], draft_id: &str, mut created: Task) -> DraftSettled {
    let Some(slot) = tasks.iter_mut().find(|t| t.id == draft_id) else {
        return DraftSettled::Gone(created);
    };
    let local_status = slot.status_id.clone();
    if local_status == created.status_id {
        *slot = created;
        return DraftSettled::Replaced;
    }
    let intent = ReassignIntent {
        task_id: created.id.clone(),
        from: created.status_id.clone(),
        to: local_status.clone(),
    };
    created.update_status(local_status);
    *slot = created;
    DraftSettled::Moved(intent)
}

// Drops a draft whose creation failed.
pub fn discard_draft(tasks: &mut Vec<Task>, draft_id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != draft_id);
    tasks.len() != before
}

/// Puts a task whose deletion failed back at `index`, or at the end when the
/// list shrank meanwhile. A reload that already brought it back wins.
pub fn restore_task(tasks: &mut Vec<Task>, index: usize, task: Task) -> bool {
    if tasks.iter().any(|t| t.id == task.id) {
        return false;
    }
    let at = index.min(tasks.len());
    tasks.insert(at, task);
    true
}

/// Optimistically moves the task, then `PUT /tasks/:id`. On failure the task
/// goes back to `intent.from` unless something else moved it meanwhile.
/// Drafts only move locally; their status is sent once they are created.
pub fn change_task_status(
    api: ApiClient,
    tasks_signal: RwSignal<Vec<Task>>,
    reporter: ErrorReporter,
    intent: ReassignIntent,
) {
    let mut moved = None;
    tasks_signal.update(|tasks| {
        moved = tasks.iter().position(|t| t.id == intent.task_id).map(|i| {
            tasks[i].update_status(intent.to.clone());
            tasks[i].is_local()
        });
    });
    match moved {
        None => tracing::warn!(task_id = %intent.task_id, "status change for a task that is no longer loaded"),
        Some(true) => tracing::debug!(task_id = %intent.task_id, to = %intent.to, "draft moved, waiting for creation"),
        Some(false) => persist_status_change(api, tasks_signal, reporter, intent),
    }
}

fn persist_status_change(
    api: ApiClient,
    tasks_signal: RwSignal<Vec<Task>>,
    reporter: ErrorReporter,
    intent: ReassignIntent,
) {
    spawn_local(async move {
        match api.update_task(&intent.task_id, &TaskPatch::status(intent.to.clone())).await {
            Ok(updated) => {
                let mut applied = false;
                tasks_signal.update(|tasks| applied = reconcile_status_change(tasks, &intent, updated));
                if applied {
                    tracing::info!(task_id = %intent.task_id, to = %intent.to, "task status updated");
                } else {
                    tracing::debug!(task_id = %intent.task_id, "stale status reply ignored");
                }
            }
            Err(e) => {
                tracing::error!(task_id = %intent.task_id, error = %e, "status change rejected, rolling back");
                tasks_signal.update(|tasks| {
                    rollback_status_change(tasks, &intent);
                });
                reporter.report(e);
            }
        }
    });
}

/// Inserts a local draft right away and swaps it for the server copy.
pub fn create_task(
    api: ApiClient,
    tasks_signal: RwSignal<Vec<Task>>,
    reporter: ErrorReporter,
    new_task: NewTask,
) {
    let draft = Task::draft(&new_task);
    let draft_id = draft.id.clone();
    tasks_signal.update(|tasks| tasks.push(draft));

    spawn_local(async move {
        match api.create_task(&new_task).await {
            Ok(created) => {
                let mut settled = DraftSettled::Replaced;
                tasks_signal.update(|tasks| settled = settle_draft(tasks, &draft_id, created));
                match settled {
                    DraftSettled::Replaced => tracing::info!("task created"),
                    DraftSettled::Moved(intent) => persist_status_change(api, tasks_signal, reporter, intent),
                    DraftSettled::Gone(created) => {
                        tracing::info!(task_id = %created.id, "draft deleted before creation finished, deleting server copy");
                        if let Err(e) = api.delete_task(&created.id).await {
                            tracing::error!(task_id = %created.id, error = %e, "could not delete orphaned task");
                            tasks_signal.update(|tasks| tasks.push(created));
                            reporter.report(e);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "task creation failed");
                tasks_signal.update(|tasks| {
                    discard_draft(tasks, &draft_id);
                });
                reporter.report(e);
            }
        }
    });
}

/// Removes the task locally, restoring it at its old position on failure.
pub fn delete_task(
    api: ApiClient,
    tasks_signal: RwSignal<Vec<Task>>,
    reporter: ErrorReporter,
    task_id: String,
) {
    let mut removed: Option<(usize, Task)> = None;
    tasks_signal.update(|tasks| {
        if let Some(index) = tasks.iter().position(|t| t.id == task_id) {
            removed = Some((index, tasks.remove(index)));
        }
    });
    let Some((index, task)) = removed else {
        return;
    };
    if task.is_local() {
        // create_task deletes the server copy once the POST answers
        return;
    }

    spawn_local(async move {
        match api.delete_task(&task_id).await {
            Ok(()) => tracing::info!(task_id = %task_id, "task deleted"),
            Err(e) => {
                tracing::error!(task_id = %task_id, error = %e, "delete failed, restoring task");
                tasks_signal.update(|tasks| {
                    restore_task(tasks, index, task);
                });
                reporter.report(e);
            }
        }
    });
}
