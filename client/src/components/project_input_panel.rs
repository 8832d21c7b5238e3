//! Project input form.

use leptos::prelude::*;
use projects::binder::{Binder, ProjectForm};
use projects::config::BoardConfig;

use crate::state::board::use_store;
use crate::util::alert::alert;

/// Title / description / people form. A valid submit creates an active
/// project and clears the fields; an invalid one alerts and changes nothing.
#[component]
pub fn ProjectInputPanel(form: ProjectForm) -> impl IntoView {
    let store = use_store();
    let rules = StoredValue::new(expect_context::<BoardConfig>().rules);
    let mount = form.mount();

    let title = RwSignal::new(form.title.clone());
    let description = RwSignal::new(form.description.clone());
    let people = RwSignal::new(form.people.clone());
    let form = StoredValue::new(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut current = form.get_value();
        current.title = title.get_untracked();
        current.description = description.get_untracked();
        current.people = people.get_untracked();

        let outcome = rules.with_value(|rules| store.try_update_value(|s| current.submit(rules, s)));
        match outcome {
            Some(Ok(id)) => {
                log::debug!("project {id} added from form");
                title.set(current.title.clone());
                description.set(current.description.clone());
                people.set(current.people.clone());
            }
            Some(Err(e)) => alert(&e.to_string()),
            None => log::error!("project store is gone; submit dropped"),
        }
        form.set_value(current);
    };

    view! {
        <form id=mount.element_id class=mount.template_id on:submit=on_submit>
            <div class="form-control">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-control">
                <label for="people">"People"</label>
                <input
                    type="number"
                    id="people"
                    step="1"
                    prop:value=move || people.get()
                    on:input=move |ev| people.set(event_target_value(&ev))
                />
            </div>
            <button type="submit">"ADD PROJECT"</button>
        </form>
    }
}
