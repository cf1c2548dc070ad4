use leptos::prelude::*;

use crate::features::kanban::priority::PriorityIndicator;

#[component]
pub fn PriorityBadge(priority: Option<i32>) -> impl IntoView {
    let indicator = PriorityIndicator::for_task(priority);
    view! {
        <span class=indicator.css_class() title=format!("Prioridade: {}", indicator.label)>
            <span class="priority-dot"></span>
            {indicator.label}
        </span>
    }
}
