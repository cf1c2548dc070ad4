use chrono::Local;
use leptos::prelude::*;

use super::KanbanColumn;
use crate::core::models::{Project, Sprint, Status, StatusKey, Task, User};
use crate::features::kanban::card::{CardView, Lookups};
use crate::features::kanban::drag::DragMachine;
use crate::features::kanban::grouping::group_by_status;

/// Groups `tasks` by status and renders one column per status, in the order
/// `statuses` arrive. Drops are reported through `on_task_status_changed`;
/// the board itself never persists anything.
#[component]
pub fn KanbanBoard(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] statuses: Signal<Vec<Status>>,
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(into)] sprints: Signal<Vec<Sprint>>,
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] loading: Signal<bool>,
    on_create_task: Callback<StatusKey>,
    on_task_status_changed: Callback<(String, StatusKey)>,
    on_select_task: Callback<String>,
) -> impl IntoView {
    let drag = RwSignal::new(DragMachine::default());
    let buckets = Memo::new(move |_| tasks.with(|tasks| statuses.with(|statuses| group_by_status(tasks, statuses))));

    let columns = move || {
        let today = Local::now().date_naive();
        let buckets = buckets.get();
        projects.with(|projects| {
            sprints.with(|sprints| {
                users.with(|users| {
                    let lookups = Lookups { projects, sprints, users };
                    buckets
                        .into_iter()
                        .map(|bucket| {
                            let cards: Vec<CardView> =
                                bucket.tasks.iter().map(|task| CardView::build(task, lookups, today)).collect();
                            view! {
                                <KanbanColumn
                                    bucket=bucket
                                    cards=cards
                                    drag=drag
                                    on_create_task=on_create_task
                                    on_task_status_changed=on_task_status_changed
                                    on_select_task=on_select_task
                                />
                            }
                        })
                        .collect_view()
                })
            })
        })
    };

    view! {
        {move || {
            if loading.get() {
                view! { <div class="board-loading">"Carregando tarefas..."</div> }.into_any()
            } else if statuses.with(Vec::is_empty) {
                view! { <div class="board-empty">"Este projeto ainda não tem status configurados."</div> }.into_any()
            } else {
                view! { <div class="kanban-board">{columns}</div> }.into_any()
            }
        }}
    }
}
