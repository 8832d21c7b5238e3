//! Draggable card for a single project.

use leptos::prelude::*;
use projects::binder::{Binder, ProjectItem};

use crate::util::drag;

/// A project inside a status list. Dragging it carries the project id.
#[component]
pub fn ProjectCard(item: ProjectItem) -> impl IntoView {
    let mount = item.mount();
    let content = item.render_content();
    let payload = item.drag_payload();

    let on_drag_start = move |ev: leptos::ev::DragEvent| drag::set_payload(&ev, &payload);
    let on_drag_end = move |_: leptos::ev::DragEvent| log::debug!("drag ended");

    view! {
        <li
            id=mount.element_id
            class=mount.template_id
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <h2>{content.title}</h2>
            <h3>{content.assigned}</h3>
            <p>{content.description}</p>
        </li>
    }
}
