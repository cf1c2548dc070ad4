use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::ErrorReporter;
use crate::core::error::AppError;
use crate::core::models::{NewTask, Project, Sprint, Status, StatusKey, Task, User};
use crate::core::services::ApiClient;
use crate::features::kanban::drag::ReassignIntent;
use crate::features::kanban::services::{change_task_status, create_task, delete_task};

/// Reactive snapshot of one project's board.
#[derive(Clone, Copy)]
pub struct BoardState {
    pub project: RwSignal<Option<Project>>,
    pub statuses: RwSignal<Vec<Status>>,
    pub sprints: RwSignal<Vec<Sprint>>,
    pub users: RwSignal<Vec<User>>,
    pub tasks: RwSignal<Vec<Task>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<AppError>>,
}

impl BoardState {
    fn new() -> Self {
        Self {
            project: RwSignal::new(None),
            statuses: RwSignal::new(Vec::new()),
            sprints: RwSignal::new(Vec::new()),
            users: RwSignal::new(Vec::new()),
            tasks: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }
}

pub struct BoardHook {
    pub state: BoardState,
    pub refresh: Callback<()>,
    /// `(task_id, new_status)`; persists through `PUT /tasks/:id`.
    pub change_status: Callback<(String, StatusKey)>,
    pub create_task: Callback<NewTask>,
    pub delete_task: Callback<String>,
}

fn load(api: ApiClient, project_id: String, state: BoardState, reporter: ErrorReporter) {
    state.loading.set(true);
    state.error.set(None);
    spawn_local(async move {
        match api.load_board(&project_id).await {
            Ok(data) => {
                state.project.set(data.project);
                state.statuses.set(data.statuses);
                state.sprints.set(data.sprints);
                state.users.set(data.users);
                state.tasks.set(data.tasks);
            }
            Err(e) => {
                tracing::error!(project_id = %project_id, error = %e, "failed to load board");
                state.tasks.set(Vec::new());
                reporter.report(e);
            }
        }
        state.loading.set(false);
    });
}

pub fn use_board(project_id: String) -> BoardHook {
    let api = expect_context::<ApiClient>();
    let state = BoardState::new();
    let reporter = ErrorReporter::from_context(state.error);

    let refresh = {
        let api = api.clone();
        let project_id = project_id.clone();
        let reporter = reporter.clone();
        Callback::new(move |_: ()| load(api.clone(), project_id.clone(), state, reporter.clone()))
    };

    // Load on mount
    refresh.run(());

    let change_status = {
        let api = api.clone();
        let reporter = reporter.clone();
        Callback::new(move |(task_id, to): (String, StatusKey)| {
            let from = state
                .tasks
                .with_untracked(|tasks| tasks.iter().find(|t| t.id == task_id).map(|t| t.status_id.clone()));
            match from {
                Some(from) if from != to => {
                    change_task_status(api.clone(), state.tasks, reporter.clone(), ReassignIntent { task_id, from, to });
                }
                Some(_) => {}
                None => tracing::warn!(task_id = %task_id, "unknown task in status change"),
            }
        })
    };

    let create = {
        let api = api.clone();
        let reporter = reporter.clone();
        Callback::new(move |new_task: NewTask| create_task(api.clone(), state.tasks, reporter.clone(), new_task))
    };

    let delete = Callback::new(move |task_id: String| delete_task(api.clone(), state.tasks, reporter.clone(), task_id));

    BoardHook { state, refresh, change_status, create_task: create, delete_task: delete }
}
