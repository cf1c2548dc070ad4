use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::core::error::AppError;
use crate::core::models::Project;
use crate::app::{board_href, ErrorReporter};
use crate::core::services::ApiClient;

#[component]
pub fn Projects() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<AppError>);
    let reporter = ErrorReporter::from_context(error);

    let load = Callback::new(move |_: ()| {
        let api = api.clone();
        let reporter = reporter.clone();
        loading.set(true);
        spawn_local(async move {
            match api.list_projects().await {
                Ok(list) => projects.set(list),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load projects");
                    reporter.report(e);
                }
            }
            loading.set(false);
        });
    });
    load.run(());

    view! {
        <div class="projects-page">
            <header class="projects-header">
                <h1>"Projetos"</h1>
            </header>
            <ErrorBanner error=error on_retry=load />
            {move || {
                if loading.get() {
                    view! { <p class="muted">"Carregando projetos..."</p> }.into_any()
                } else if projects.with(Vec::is_empty) {
                    view! { <p class="muted">"Nenhum projeto encontrado."</p> }.into_any()
                } else {
                    view! {
                        <div class="projects-grid">
                            {projects.get().into_iter().map(|project| view! {
                                <a class="project-card" href=board_href(&project.id)>
                                    <h3>{project.name}</h3>
                                    <p>"Abrir quadro"</p>
                                </a>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
