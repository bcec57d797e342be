use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use rust_i18n::t;

use crate::{
    api::ApiClient,
    config,
    pages::check_in::CheckInPage,
    state::{admin::use_admin_state, message::MessageSlot},
};

pub const ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Shared contexts first, then the single check-in screen.
pub fn provide_app_context() {
    provide_context(ApiClient::new());
    provide_context(MessageSlot::new(config::message_ttl()));
    use_admin_state();
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_app_context();
    view! {
        <Title text=t!("app.title").to_string() />
        <Router>
            <Routes>
                <Route path="/" view=CheckInPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn root_route_serves_check_in() {
        assert_eq!(ROUTE_PATHS, &["/"]);
    }
}
