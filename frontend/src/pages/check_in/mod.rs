use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::CheckInPanel;

#[component]
pub fn CheckInPage() -> impl IntoView {
    view! { <CheckInPanel /> }
}
