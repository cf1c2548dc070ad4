use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::error::AppError;
use crate::core::services::{ApiClient, SessionStore};
use crate::pages::{Kanban, Projects};

/// Display name of the signed-in user, `None` after logout.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub RwSignal<Option<String>>);

/// Routes a failed request to a page's error banner. An expired or rejected
/// token also signs the user out.
#[derive(Clone)]
pub struct ErrorReporter {
    error: RwSignal<Option<AppError>>,
    session: SessionStore,
    user: CurrentUser,
}

impl ErrorReporter {
    pub fn new(error: RwSignal<Option<AppError>>, session: SessionStore, user: CurrentUser) -> Self {
        Self { error, session, user }
    }

    /// Builds a reporter for `error` from the session and user `App` provides.
    pub fn from_context(error: RwSignal<Option<AppError>>) -> Self {
        Self::new(error, expect_context::<SessionStore>(), expect_context::<CurrentUser>())
    }

    pub fn report(&self, e: AppError) {
        if e.is_unauthorized() {
            tracing::warn!(error = %e, "session rejected by the server, signing out");
            if let Err(clear_err) = self.session.clear() {
                tracing::error!(error = %clear_err, "failed to clear expired session");
            }
            self.user.0.set(None);
        }
        self.error.set(Some(e));
    }
}

pub fn board_href(project_id: &str) -> String {
    format!("/projects/{}", urlencoding::encode(project_id))
}

#[component]
pub fn App(api: ApiClient, session: SessionStore) -> impl IntoView {
    let current_user = CurrentUser(RwSignal::new(session.get().map(|s| s.user.name)));

    provide_context(api);
    provide_context(session);
    provide_context(current_user);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                    <Route path=path!("/") view=Projects />
                    <Route path=path!("/projects/:id") view=Kanban />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::services::{MemoryBackend, SessionBackend};
    use pretty_assertions::assert_eq;

    const KEY: &str = "test.session";

    fn signed_in() -> (Arc<MemoryBackend>, SessionStore) {
        let backend = Arc::new(MemoryBackend::default());
        backend
            .set(KEY, r#"{"token":"abc","user":{"id":"u1","name":"Ana"}}"#)
            .unwrap();
        let session = SessionStore::new(backend.clone(), KEY);
        session.init().unwrap();
        (backend, session)
    }

    #[test]
    fn unauthorized_error_signs_out() {
        Owner::new().with(|| {
            let (backend, session) = signed_in();
            let error = RwSignal::new(None);
            let user = CurrentUser(RwSignal::new(Some("Ana".to_string())));
            let reporter = ErrorReporter::new(error, session.clone(), user);

            let expired = AppError::Http { status: 401, url: "/api/tasks".into() };
            reporter.report(expired.clone());

            assert_eq!(error.get_untracked(), Some(expired));
            assert_eq!(user.0.get_untracked(), None);
            assert_eq!(session.get(), None);
            assert_eq!(backend.get(KEY).unwrap(), None);
        });
    }

    #[test]
    fn other_errors_keep_the_session() {
        Owner::new().with(|| {
            let (_backend, session) = signed_in();
            let error = RwSignal::new(None);
            let user = CurrentUser(RwSignal::new(Some("Ana".to_string())));
            let reporter = ErrorReporter::new(error, session.clone(), user);

            reporter.report(AppError::Network("offline".into()));

            assert_eq!(error.get_untracked(), Some(AppError::Network("offline".into())));
            assert_eq!(user.0.get_untracked().as_deref(), Some("Ana"));
            assert_eq!(session.token().as_deref(), Some("abc"));
        });
    }
}
