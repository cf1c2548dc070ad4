use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::error::AppError;

const AUTO_DISMISS_MS: u32 = 8_000;

#[component]
pub fn ErrorBanner(
    error: RwSignal<Option<AppError>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    // Hide after a while unless a newer error replaced this one
    Effect::new(move |_| {
        if let Some(shown) = error.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                if error.with_untracked(|current| current.as_ref() == Some(&shown)) {
                    error.set(None);
                }
            });
        }
    });

    move || {
        error.get().map(|e| {
            view! {
                <div class="error-banner" role="alert" title=e.to_string()>
                    <span>{e.user_message()}</span>
                    {on_retry.map(|retry| view! {
                        <button class="btn-secondary" on:click=move |_| { error.set(None); retry.run(()); }>"Tentar novamente"</button>
                    })}
                    <button class="modal-close" on:click=move |_| error.set(None)>"×"</button>
                </div>
            }
        })
    }
}
