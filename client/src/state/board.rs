//! Context handle for the board's project store.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use projects::store::ProjectStore;

/// Handle to the board's store. The store holds non-`Send` listeners, so it
/// lives in local arena storage; the handle itself is `Copy`.
pub type StoreHandle = StoredValue<ProjectStore, LocalStorage>;

/// Create the board's store and provide it to every descendant.
pub fn provide_store() -> StoreHandle {
    let store = StoredValue::new_local(ProjectStore::new());
    provide_context(store);
    store
}

/// The store provided by [`provide_store`].
///
/// # Panics
///
/// Panics when called outside the root component's tree.
pub fn use_store() -> StoreHandle {
    expect_context::<StoreHandle>()
}
