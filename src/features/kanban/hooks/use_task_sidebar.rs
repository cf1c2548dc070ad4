use leptos::prelude::*;

use super::BoardHook;
use crate::core::models::Task;
use crate::features::kanban::components::TaskSidebar;

/// The selected task, and its id while it is still loaded. The id memo only
/// changes when the selection does, not when the task or its neighbours do.
fn track_selection(
    tasks: RwSignal<Vec<Task>>,
    selected_task: RwSignal<Option<String>>,
) -> (Memo<Option<Task>>, Memo<Option<String>>) {
    let selected = Memo::new(move |_| {
        let task_id = selected_task.get()?;
        tasks.with(|tasks| tasks.iter().find(|t| t.id == task_id).cloned())
    });
    let open_id = Memo::new(move |_| selected.with(|task| task.as_ref().map(|t| t.id.clone())));
    (selected, open_id)
}

// Renders the detail sidebar for the selected task, if it is still loaded.
// The sidebar is only rebuilt when the selection changes; edits to the
// selected task flow through `selected`.
pub fn use_task_sidebar(board: &BoardHook, selected_task: RwSignal<Option<String>>) -> impl IntoView {
    let state = board.state;
    let change_status = board.change_status;
    let delete_task = board.delete_task;

    let (selected, open_id) = track_selection(state.tasks, selected_task);

    let on_close = Callback::new(move |_: ()| selected_task.set(None));
    let on_delete = Callback::new(move |task_id: String| {
        selected_task.set(None);
        delete_task.run(task_id);
    });
    let projects = Signal::derive(move || state.project.get().into_iter().collect::<Vec<_>>());

    move || {
        let task_id = open_id.get()?;
        Some(view! {
            <TaskSidebar
                task_id=task_id
                task=selected
                statuses=state.statuses
                projects=projects
                sprints=state.sprints
                users=state.users
                on_close=on_close
                on_change_status=change_status
                on_delete=on_delete
            />
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::core::models::task::fixtures::task;
    use crate::core::models::StatusKey;
    use crate::features::kanban::services::apply_status_change;
    use pretty_assertions::assert_eq;

    #[test]
    fn board_edits_do_not_reopen_the_sidebar() {
        Owner::new().with(|| {
            let tasks = RwSignal::new(vec![task("t1", "TODO"), task("t2", "TODO")]);
            let selected_task = RwSignal::new(Some("t1".to_string()));
            let (selected, open_id) = track_selection(tasks, selected_task);

            let mounts = Arc::new(AtomicUsize::new(0));
            let sidebar = {
                let mounts = Arc::clone(&mounts);
                Memo::new(move |_| {
                    mounts.fetch_add(1, Ordering::SeqCst);
                    open_id.get()
                })
            };
            assert_eq!(sidebar.get_untracked().as_deref(), Some("t1"));

            tasks.update(|tasks| {
                apply_status_change(tasks, "t2", &StatusKey::from("DONE"));
            });
            tasks.update(|tasks| {
                apply_status_change(tasks, "t1", &StatusKey::from("DOING"));
            });
            assert_eq!(sidebar.get_untracked().as_deref(), Some("t1"));
            assert_eq!(mounts.load(Ordering::SeqCst), 1);
            assert_eq!(
                selected.get_untracked().map(|t| t.status_id),
                Some(StatusKey::from("DOING"))
            );

            selected_task.set(Some("t2".to_string()));
            assert_eq!(sidebar.get_untracked().as_deref(), Some("t2"));
            assert_eq!(mounts.load(Ordering::SeqCst), 2);
        });
    }
}
