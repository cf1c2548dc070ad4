use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{EntitySummary, PriorityBadge};
use crate::core::models::{label_for, Entity, Project, Sprint, Status, StatusKey, Task, User};
use crate::core::services::ApiClient;
use crate::features::kanban::card::{format_percent, progress_percent, PROJECT_FALLBACK, SPRINT_FALLBACK, UNASSIGNED};

#[component]
pub fn TaskSidebar(
    /// Fixed for the lifetime of the sidebar; relations are loaded once for it.
    task_id: String,
    #[prop(into)] task: Signal<Option<Task>>,
    #[prop(into)] statuses: Signal<Vec<Status>>,
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(into)] sprints: Signal<Vec<Sprint>>,
    #[prop(into)] users: Signal<Vec<User>>,
    on_close: Callback<()>,
    on_change_status: Callback<(String, StatusKey)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let relations = RwSignal::new(Vec::<Entity>::new());
    let (relations_loading, set_relations_loading) = signal(true);

    {
        let task_id = task_id.clone();
        spawn_local(async move {
            if !Task::is_local_id(&task_id) {
                match api.list_task_relations(&task_id).await {
                    Ok(entities) => relations.set(entities),
                    Err(e) => tracing::warn!(task_id = %task_id, error = %e, "could not load task relations"),
                }
            }
            set_relations_loading.set(false);
        });
    }

    let task_id_status = task_id.clone();
    let task_id_delete = task_id;

    let details = move || {
        let task = task.get()?;
        let project = projects.with(|p| label_for(p, Some(task.project_id.as_str()), PROJECT_FALLBACK).to_string());
        let sprint = task
            .sprint_id
            .as_deref()
            .map(|id| sprints.with(|s| label_for(s, Some(id), SPRINT_FALLBACK).to_string()));
        let assignee = users.with(|u| label_for(u, task.assignee_id.as_deref(), UNASSIGNED).to_string());
        let reporter = users.with(|u| label_for(u, Some(task.reporter_id.as_str()), "—").to_string());
        let hours = match (task.estimated_hours, task.actual_hours) {
            (Some(est), actual) => Some(format!(
                "{}h / {}h{}",
                actual.unwrap_or(0.0),
                est,
                progress_percent(Some(est), actual).map(|p| format!(" ({})", format_percent(p))).unwrap_or_default()
            )),
            (None, Some(actual)) => Some(format!("{actual}h")),
            (None, None) => None,
        };
        let task_id_status = task_id_status.clone();

        Some(view! {
            <PriorityBadge priority=task.priority />
            <h2>{task.title.clone()}</h2>
            <p class="task-description">{task.description.clone().unwrap_or_else(|| "Sem descrição".to_string())}</p>

            <div class="form-group">
                <label>"STATUS"</label>
                <select
                    prop:value=task.status_id.to_string()
                    on:change=move |ev| {
                        let next = StatusKey::from(event_target_value(&ev));
                        on_change_status.run((task_id_status.clone(), next));
                    }
                >
                    {move || statuses.get().into_iter().map(|s| view! {
                        <option value=s.name.clone()>{s.name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <dl class="task-fields">
                <dt>"Projeto"</dt><dd>{project}</dd>
                <dt>"Sprint"</dt><dd>{sprint.unwrap_or_else(|| "—".to_string())}</dd>
                <dt>"Responsável"</dt><dd>{assignee}</dd>
                <dt>"Relator"</dt><dd>{reporter}</dd>
                <dt>"Prazo"</dt><dd>{task.due_date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_else(|| "—".to_string())}</dd>
                <dt>"Horas"</dt><dd>{hours.unwrap_or_else(|| "—".to_string())}</dd>
                <dt>"Atualizada"</dt><dd>{task.updated_at.format("%d/%m/%Y %H:%M").to_string()}</dd>
            </dl>
        })
    };

    view! {
        <aside class="task-sidebar">
            <div class="sidebar-header">
                <button class="modal-close" title="Fechar" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            {details}

            <section class="task-relations">
                <h3>"Relacionados"</h3>
                {move || {
                    if relations_loading.get() {
                        view! { <p class="muted">"Carregando..."</p> }.into_any()
                    } else if relations.with(Vec::is_empty) {
                        view! { <p class="muted">"Nenhum item relacionado"</p> }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || relations.get()
                                key=|entity: &Entity| entity.id().to_string()
                                children=|entity: Entity| view! { <EntitySummary entity=entity /> }
                            />
                        }.into_any()
                    }
                }}
            </section>

            <div class="sidebar-actions">
                <button
                    class="btn-danger"
                    on:click=move |_| {
                        let confirmed = web_sys::window()
                            .and_then(|w| w.confirm_with_message("Excluir esta tarefa? Esta ação não pode ser desfeita.").ok())
                            .unwrap_or(false);
                        if confirmed {
                            on_delete.run(task_id_delete.clone());
                        }
                    }
                >"Excluir"</button>
            </div>
        </aside>
    }
}
