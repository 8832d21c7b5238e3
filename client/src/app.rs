//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use projects::binder::{Binder, ProjectForm, ProjectList, arrange};
use projects::config::BoardConfig;
use projects::project::ProjectStatus;

use crate::components::project_input_panel::ProjectInputPanel;
use crate::components::project_list_panel::ProjectListPanel;
use crate::state::board::provide_store;

/// Root application component.
///
/// Creates the board's single project store, provides it and the config as
/// context, and places the form and both lists in their host.
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();
    provide_store();
    provide_context(config.clone());

    let host = config.host_id;
    let form = ProjectForm::new(host.clone());
    let active = ProjectList::new(ProjectStatus::Active, host.clone());
    let finished = ProjectList::new(ProjectStatus::Finished, host);

    let children = arrange([
        (form.mount().position, view! { <ProjectInputPanel form=form/> }.into_any()),
        (active.mount().position, view! { <ProjectListPanel list=active/> }.into_any()),
        (finished.mount().position, view! { <ProjectListPanel list=finished/> }.into_any()),
    ]);

    view! {
        <Title text="Project Board"/>
        {children}
    }
}
