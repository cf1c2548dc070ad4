use leptos::prelude::*;

use super::TaskCard;
use crate::core::models::StatusKey;
use crate::features::kanban::card::CardView;
use crate::features::kanban::drag::DragMachine;
use crate::features::kanban::grouping::StatusBucket;

#[component]
pub fn KanbanColumn(
    bucket: StatusBucket,
    cards: Vec<CardView>,
    drag: RwSignal<DragMachine>,
    on_create_task: Callback<StatusKey>,
    on_task_status_changed: Callback<(String, StatusKey)>,
    on_select_task: Callback<String>,
) -> impl IntoView {
    let key = bucket.key();
    let count = bucket.count();

    let create = {
        let key = key.clone();
        move |_: leptos::ev::MouseEvent| on_create_task.run(key.clone())
    };

    let hovered = {
        let key = key.clone();
        move || drag.with(|d| d.is_hovered(&key))
    };

    let on_drag_over = {
        let key = key.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            if !drag.with_untracked(|d| d.is_hovered(&key)) {
                drag.update(|d| {
                    d.drag_over(&key);
                });
            }
        }
    };

    let on_drag_leave = {
        let key = key.clone();
        move |_: leptos::ev::DragEvent| drag.update(|d| d.drag_leave(&key))
    };

    let on_drop = {
        let key = key.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            let mut intent = None;
            drag.update(|d| intent = d.drop(&key));
            if let Some(intent) = intent {
                on_task_status_changed.run((intent.task_id, intent.to));
            }
        }
    };

    let body = if bucket.is_empty() {
        view! {
            <div class="column-empty">
                <p>"Nenhuma tarefa"</p>
                <button class="btn-secondary column-empty-create" on:click=create.clone()>"+ Criar tarefa"</button>
            </div>
        }
        .into_any()
    } else {
        bucket
            .tasks
            .into_iter()
            .zip(cards)
            .map(|(task, card)| {
                let task_id = task.id.clone();
                let priority = task.priority;
                let dragging = Signal::derive(move || drag.with(|d| d.dragging_task_id() == Some(task_id.as_str())));
                let on_drag_start = Callback::new(move |_: ()| {
                    let task = task.clone();
                    drag.update(|d| d.drag_start(task));
                });
                let on_drag_end = Callback::new(move |_: ()| drag.update(DragMachine::drag_end));
                view! {
                    <TaskCard
                        card=card
                        priority=priority
                        dragging=dragging
                        on_drag_start=on_drag_start
                        on_drag_end=on_drag_end
                        on_click=on_select_task
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div
            class="kanban-column"
            class:drag-over=hovered
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="column-header">
                <h3>{bucket.status.name.clone()}</h3>
                <span class="task-count">{count}</span>
                <button class="column-add" title="Adicionar tarefa neste status" on:click=create>"+"</button>
            </div>
            <div class="column-content">{body}</div>
        </div>
    }
}
