use leptos::prelude::*;

use crate::core::models::{Describe, Entity};

/// Renders any related entity through its [`Describe`] surface.
#[component]
pub fn EntitySummary(entity: Entity) -> impl IntoView {
    let kind = entity.kind_label();
    let title = entity.title().to_string();
    let description = entity.description().map(str::to_string);
    let status = entity.status().map(str::to_string);

    view! {
        <div class="entity-summary">
            <span class="entity-kind">{kind}</span>
            <span class="entity-title">{title}</span>
            {status.map(|s| view! { <span class="entity-status">{s}</span> })}
            {description.map(|d| view! { <p class="entity-description">{d}</p> })}
        </div>
    }
}
