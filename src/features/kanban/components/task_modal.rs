use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::{NewTask, Sprint, Status, StatusKey, User};
use crate::core::services::SessionStore;
use crate::features::kanban::filters::select_value;
use crate::features::kanban::priority::LEVELS;

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub sprint_id: String,
    pub assignee_id: String,
    pub estimated_hours: String,
    pub due_date: String,
}

impl TaskForm {
    /// `None` when the title is blank or no status is chosen. Unparseable
    /// numbers and dates are dropped rather than rejected.
    pub fn to_new_task(&self, project_id: &str, reporter_id: &str) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() || self.status.is_empty() {
            return None;
        }
        let description = self.description.trim();
        Some(NewTask {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status_id: StatusKey::from(self.status.as_str()),
            priority: self.priority.parse().ok().filter(|p| (1..=5).contains(p)).unwrap_or(2),
            project_id: project_id.to_string(),
            sprint_id: select_value(self.sprint_id.clone()),
            assignee_id: select_value(self.assignee_id.clone()),
            reporter_id: reporter_id.to_string(),
            estimated_hours: self.estimated_hours.trim().replace(',', ".").parse().ok().filter(|h: &f64| *h > 0.0),
            due_date: NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok(),
        })
    }
}

#[component]
pub fn TaskModal(
    #[prop(into)] project_id: String,
    /// Status chosen by the column that opened the modal.
    initial_status: RwSignal<Option<StatusKey>>,
    #[prop(into)] statuses: Signal<Vec<Status>>,
    #[prop(into)] sprints: Signal<Vec<Sprint>>,
    #[prop(into)] users: Signal<Vec<User>>,
    on_create: Callback<NewTask>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let session = use_context::<SessionStore>();
    let form = RwSignal::new(TaskForm::default());
    let (invalid, set_invalid) = signal(false);

    // Pre-fill status whenever a column asks for a new task
    Effect::new(move |_| {
        let status = initial_status
            .get()
            .map(|k| k.to_string())
            .or_else(|| statuses.with(|s| s.first().map(|s| s.name.clone())))
            .unwrap_or_default();
        form.update(|f| {
            *f = TaskForm { status, priority: "2".to_string(), ..TaskForm::default() };
        });
        set_invalid.set(false);
    });

    let close = move || {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let reporter = session
            .as_ref()
            .and_then(|s| s.get())
            .map(|s| s.user.id)
            .unwrap_or_default();
        match form.with_untracked(|f| f.to_new_task(&project_id, &reporter)) {
            Some(new_task) => {
                on_create.run(new_task);
                form.set(TaskForm::default());
                close();
            }
            None => set_invalid.set(true),
        }
    };

    let bind = move |set: fn(&mut TaskForm, String)| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| set(f, value));
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"NOVA TAREFA"</h3>
                    <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TÍTULO"</label>
                        <input
                            type="text"
                            placeholder="Título da tarefa..."
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=bind(|f, v| f.title = v)
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIÇÃO"</label>
                        <textarea
                            rows="4"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=bind(|f, v| f.description = v)
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"STATUS"</label>
                            <select prop:value=move || form.with(|f| f.status.clone()) on:change=bind(|f, v| f.status = v)>
                                {move || statuses.get().into_iter().map(|s| view! {
                                    <option value=s.name.clone()>{s.name.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"PRIORIDADE"</label>
                            <select prop:value=move || form.with(|f| f.priority.clone()) on:change=bind(|f, v| f.priority = v)>
                                {LEVELS.iter().map(|(level, indicator)| view! {
                                    <option value=level.to_string()>{indicator.label}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"SPRINT"</label>
                            <select prop:value=move || form.with(|f| f.sprint_id.clone()) on:change=bind(|f, v| f.sprint_id = v)>
                                <option value="">"Sem sprint"</option>
                                {move || sprints.get().into_iter().map(|s| view! {
                                    <option value=s.id>{s.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"RESPONSÁVEL"</label>
                            <select prop:value=move || form.with(|f| f.assignee_id.clone()) on:change=bind(|f, v| f.assignee_id = v)>
                                <option value="">"Não atribuído"</option>
                                {move || users.get().into_iter().map(|u| view! {
                                    <option value=u.id>{u.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"ESTIMATIVA (H)"</label>
                            <input
                                type="number"
                                min="0"
                                step="0.5"
                                prop:value=move || form.with(|f| f.estimated_hours.clone())
                                on:input=bind(|f, v| f.estimated_hours = v)
                            />
                        </div>
                        <div class="form-group">
                            <label>"PRAZO"</label>
                            <input
                                type="date"
                                prop:value=move || form.with(|f| f.due_date.clone())
                                on:input=bind(|f, v| f.due_date = v)
                            />
                        </div>
                    </div>
                    <Show when=move || invalid.get()>
                        <p class="form-error">"Informe um título e um status."</p>
                    </Show>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close()>"CANCELAR"</button>
                        <button type="submit" class="btn-primary">"CRIAR"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> TaskForm {
        TaskForm {
            title: "  Revisar PR ".into(),
            status: "DOING".into(),
            priority: "4".into(),
            ..TaskForm::default()
        }
    }

    #[test]
    fn builds_task_in_the_chosen_status() {
        let task = form().to_new_task("p1", "u1").unwrap();
        assert_eq!(task.title, "Revisar PR");
        assert_eq!(task.status_id, StatusKey::from("DOING"));
        assert_eq!(task.priority, 4);
        assert_eq!(task.description, None);
        assert_eq!(task.sprint_id, None);
        assert_eq!(task.reporter_id, "u1");
    }

    #[test]
    fn blank_title_or_status_is_rejected() {
        assert_eq!(TaskForm { title: "   ".into(), ..form() }.to_new_task("p1", "u1"), None);
        assert_eq!(TaskForm { status: String::new(), ..form() }.to_new_task("p1", "u1"), None);
    }

    #[test]
    fn parses_optional_numbers_and_dates_leniently() {
        let task = TaskForm {
            priority: "9".into(),
            estimated_hours: "2,5".into(),
            due_date: "2024-07-01".into(),
            sprint_id: "s1".into(),
            ..form()
        }
        .to_new_task("p1", "u1")
        .unwrap();
        assert_eq!(task.priority, 2);
        assert_eq!(task.estimated_hours, Some(2.5));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(task.sprint_id.as_deref(), Some("s1"));

        let sloppy = TaskForm { estimated_hours: "abc".into(), due_date: "01/07/2024".into(), ..form() }
            .to_new_task("p1", "u1")
            .unwrap();
        assert_eq!(sloppy.estimated_hours, None);
        assert_eq!(sloppy.due_date, None);
    }
}
