use crate::{api::ApiClient, state::message::MessageSlot};
use leptos::*;
use std::time::Duration;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` with resource loading suppressed, so no request leaves the test.
pub fn without_resource_loads<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    without_resource_loads(|| view().into_view().render_to_string().to_string())
}

/// Same contexts as the app root, with the client pinned to `base_url`.
pub fn provide_test_context(base_url: &str) -> MessageSlot {
    provide_context(ApiClient::new_with_base_url(base_url));
    let slot = MessageSlot::new(Duration::from_secs(3));
    provide_context(slot);
    slot
}
