mod app;
mod components;
mod core;
mod features;
mod pages;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::App;
use crate::core::config::Config;
use crate::core::logging;
use crate::core::services::{ApiClient, LocalStorageBackend, MemoryBackend, SessionBackend, SessionStore};

fn main() {
    console_error_panic_hook::set_once();

    let backend: Arc<dyn SessionBackend> = if LocalStorageBackend::available() {
        Arc::new(LocalStorageBackend)
    } else {
        Arc::new(MemoryBackend::default())
    };

    let config = Config::load(backend.as_ref());
    logging::init(&config);
    tracing::info!(api = %config.api_base_url, "starting sprint board");

    let session = SessionStore::new(backend, config.session_key.clone());
    match session.init() {
        Ok(Some(s)) => tracing::debug!(user = %s.user.name, "session restored"),
        Ok(None) => tracing::debug!("no stored session"),
        Err(e) => tracing::error!(error = %e, "failed to restore session"),
    }
    let api = ApiClient::new(config, session.clone());

    mount_to_body(move || view! { <App api=api session=session /> });
}
