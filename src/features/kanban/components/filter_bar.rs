use leptos::prelude::*;

use crate::core::models::{Sprint, User};
use crate::features::kanban::filters::{select_value, TaskFilter, UNASSIGNED_FILTER};

#[component]
pub fn FilterBar(
    filter: RwSignal<TaskFilter>,
    #[prop(into)] sprints: Signal<Vec<Sprint>>,
    #[prop(into)] users: Signal<Vec<User>>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="search"
                placeholder="Buscar tarefas..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                }
            />
            <select
                prop:value=move || filter.with(|f| f.sprint_id.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = select_value(event_target_value(&ev));
                    filter.update(|f| f.sprint_id = value);
                }
            >
                <option value="">"Todas as sprints"</option>
                {move || sprints.get().into_iter().map(|s| view! {
                    <option value=s.id>{s.name}</option>
                }).collect_view()}
            </select>
            <select
                prop:value=move || filter.with(|f| f.assignee_id.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = select_value(event_target_value(&ev));
                    filter.update(|f| f.assignee_id = value);
                }
            >
                <option value="">"Todos os responsáveis"</option>
                <option value=UNASSIGNED_FILTER>"Não atribuído"</option>
                {move || users.get().into_iter().map(|u| view! {
                    <option value=u.id>{u.name}</option>
                }).collect_view()}
            </select>
            <button
                class="btn-secondary"
                disabled=move || filter.with(TaskFilter::is_empty)
                on:click=move |_| filter.set(TaskFilter::default())
            >"Limpar"</button>
        </div>
    }
}
