use leptos::html::Dialog;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::CurrentUser;
use crate::components::ErrorBanner;
use crate::core::models::StatusKey;
use crate::core::services::SessionStore;
use crate::features::kanban::filters::TaskFilter;
use crate::features::kanban::{use_board, use_task_sidebar, FilterBar, KanbanBoard, KanbanHeader, TaskModal};

#[component]
pub fn Kanban() -> impl IntoView {
    let params = use_params_map();
    let project_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let session = expect_context::<SessionStore>();
    let current_user = expect_context::<CurrentUser>().0;

    let board = use_board(project_id.clone());
    let state = board.state;

    let filter = RwSignal::new(TaskFilter::default());
    let visible_tasks = Signal::derive(move || state.tasks.with(|tasks| filter.with(|f| f.apply(tasks))));
    let projects = Signal::derive(move || state.project.get().into_iter().collect::<Vec<_>>());
    let project_name = Signal::derive(move || {
        if state.loading.get() && state.project.with(Option::is_none) {
            "Carregando...".to_string()
        } else {
            state.project.with(|p| p.as_ref().map(|p| p.name.clone())).unwrap_or_else(|| "Projeto".to_string())
        }
    });

    let selected_task = RwSignal::new(None::<String>);
    let create_status = RwSignal::new(None::<StatusKey>);
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_dialog = move || {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(e) = dialog.show_modal() {
                tracing::warn!(error = ?e, "could not open the task dialog");
            }
        }
    };
    let open_create = Callback::new(move |status: StatusKey| {
        create_status.set(Some(status));
        open_dialog();
    });
    let open_create_default = Callback::new(move |_: ()| {
        create_status.set(None);
        open_dialog();
    });
    let select_task = Callback::new(move |task_id: String| selected_task.set(Some(task_id)));
    let logout = Callback::new(move |_: ()| {
        if let Err(e) = session.clear() {
            tracing::error!(error = %e, "failed to clear session");
        }
        current_user.set(None);
    });

    let sidebar = use_task_sidebar(&board, selected_task);

    view! {
        <div class="kanban-page" class:with-sidebar=move || selected_task.with(Option::is_some)>
            <div class="main-content">
                <KanbanHeader
                    project_name=project_name
                    user_name=current_user
                    on_refresh=board.refresh
                    on_new_task=open_create_default
                    on_logout=logout
                />
                <ErrorBanner error=state.error on_retry=board.refresh />
                <FilterBar filter=filter sprints=state.sprints users=state.users />
                <KanbanBoard
                    tasks=visible_tasks
                    statuses=state.statuses
                    projects=projects
                    sprints=state.sprints
                    users=state.users
                    loading=state.loading
                    on_create_task=open_create
                    on_task_status_changed=board.change_status
                    on_select_task=select_task
                />
            </div>
            {sidebar}
            <TaskModal
                project_id=project_id
                initial_status=create_status
                statuses=state.statuses
                sprints=state.sprints
                users=state.users
                on_create=board.create_task
                dialog_ref=dialog_ref
            />
        </div>
    }
}
