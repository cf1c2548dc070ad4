use leptos::prelude::*;

#[component]
pub fn KanbanHeader(
    #[prop(into)] project_name: Signal<String>,
    #[prop(into)] user_name: Signal<Option<String>>,
    on_refresh: Callback<()>,
    on_new_task: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{move || format!("Projeto: {}", project_name.get())}</h1>
            </div>
            <div class="kanban-actions">
                <a class="btn-secondary kanban-header-btn" title="Voltar" href="/">"🡄"</a>
                <button class="btn-secondary kanban-header-btn" title="Atualizar" on:click=move |_| on_refresh.run(())>"⟳"</button>
                <button class="btn-primary kanban-header-btn" title="Nova tarefa" on:click=move |_| on_new_task.run(())>"🞦"</button>
                {move || user_name.get().map(|name| view! {
                    <span class="kanban-user">{name}</span>
                    <button class="btn-secondary kanban-header-btn" title="Sair" on:click=move |_| on_logout.run(())>"⏻"</button>
                })}
            </div>
        </header>
    }
}
