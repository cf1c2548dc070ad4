use leptos::prelude::*;

use super::PriorityBadge;
use crate::features::kanban::card::CardView;

#[component]
pub fn TaskCard(
    card: CardView,
    priority: Option<i32>,
    #[prop(into)] dragging: Signal<bool>,
    on_drag_start: Callback<()>,
    on_drag_end: Callback<()>,
    on_click: Callback<String>,
) -> impl IntoView {
    let task_id = card.task_id.clone();
    let drag_id = card.task_id.clone();

    view! {
        <div
            class="task-card clickable"
            class:dragging=move || dragging.get()
            draggable="true"
            on:dragstart=move |ev| {
                if let Some(transfer) = ev.data_transfer() {
                    if let Err(e) = transfer.set_data("text/plain", &drag_id) {
                        tracing::warn!(task_id = %drag_id, error = ?e, "could not set drag payload");
                    }
                    transfer.set_effect_allowed("move");
                }
                on_drag_start.run(());
            }
            on:dragend=move |_| on_drag_end.run(())
            on:click=move |_| on_click.run(task_id.clone())
        >
            <div class="task-card-top">
                <PriorityBadge priority=priority />
                {card.due_label.clone().map(|due| view! {
                    <span class="task-due" class:overdue=card.overdue title="Prazo">{due}</span>
                })}
            </div>
            <div class="task-content">
                <h4>{card.title.clone()}</h4>
                {card.description.clone().map(|d| view! { <p>{d}</p> })}
            </div>
            <div class="task-badges">
                <span class="badge badge-project">{card.project_label.clone()}</span>
                {card.sprint_label.clone().map(|s| view! { <span class="badge badge-sprint">{s}</span> })}
            </div>
            {card.progress.clone().map(|p| view! {
                <div class="task-progress" class:over-budget=p.over_budget>
                    <div class="task-progress-bar">
                        <div class="task-progress-fill" style=format!("width: {}%", p.width)></div>
                    </div>
                    <span class="task-progress-label">{p.label}</span>
                </div>
            })}
            <div class="task-assignee">{card.assignee.clone()}</div>
        </div>
    }
}
