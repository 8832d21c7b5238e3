//! Status list with its drop zone.

#[cfg(test)]
#[path = "project_list_panel_test.rs"]
mod project_list_panel_test;

use leptos::prelude::*;
use projects::binder::{Binder, ProjectItem, ProjectList};

use crate::components::project_card::ProjectCard;
use crate::state::board::use_store;
use crate::util::drag;

/// CSS classes for the list section.
pub fn section_class(droppable: bool) -> &'static str {
    if droppable { "projects droppable" } else { "projects" }
}

/// One status list. Subscribes to the store on mount, re-renders every item
/// on each change, and moves dropped projects into its own status.
#[component]
pub fn ProjectListPanel(list: ProjectList) -> impl IntoView {
    let store = use_store();
    let mount = list.mount();
    let heading = list.heading();
    let list_id = list.list_id();
    let category = list.category();

    let list = StoredValue::new(list);
    let items = RwSignal::new(Vec::<ProjectItem>::new());
    let droppable = RwSignal::new(false);

    let render = move |snapshot: &[projects::project::Project]| {
        list.update_value(|l| l.apply_snapshot(snapshot));
        items.set(list.with_value(|l| l.render_content()));
    };

    // Catch up with anything created before this list mounted, then follow changes.
    if let Some(snapshot) = store.try_with_value(projects::store::ProjectStore::snapshot) {
        render(&snapshot);
    }
    let listener = store.try_update_value(|s| s.add_listener(move |snapshot| render(&snapshot)));
    on_cleanup(move || {
        if let Some(id) = listener {
            store.try_update_value(|s| s.remove_listener(id));
        }
    });

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        let types = drag::payload_types(&ev);
        if list.try_update_value(|l| l.drag_over(&types)).unwrap_or(false) {
            ev.prevent_default();
        }
        droppable.set(list.with_value(ProjectList::is_droppable));
    };

    let on_drag_leave = move |_: leptos::ev::DragEvent| {
        list.update_value(ProjectList::drag_leave);
        droppable.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        let payload = drag::read_payload(&ev).unwrap_or_default();
        let dropped = list.try_update_value(|l| l.accept_drop(&payload)).flatten();
        droppable.set(false);
        if let Some(id) = dropped {
            store.try_update_value(|s| s.move_to(&id, category));
        }
    };

    view! {
        <section
            id=mount.element_id
            class=move || section_class(droppable.get())
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <header>
                <h2>{heading}</h2>
            </header>
            <ul id=list_id>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| view! { <ProjectCard item=item/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
