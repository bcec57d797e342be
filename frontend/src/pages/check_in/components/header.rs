use crate::components::clock::Clock;
use leptos::*;
use rust_i18n::t;

pub const LOGO_PATH: &str = "/assets/iu_tip_logo.png";

#[component]
pub fn PageHeader() -> impl IntoView {
    let institution = t!("app.institution").to_string();
    view! {
        <div class="text-center space-y-4">
            <div class="flex justify-center">
                <img src=LOGO_PATH alt=institution.clone() class="w-24 h-24 object-contain" />
            </div>
            <div>
                <h1 class="text-2xl font-bold text-gray-800 mb-2">{t!("app.title").to_string()}</h1>
                <p class="text-sm text-gray-600 mb-1">{institution}</p>
                <Clock />
            </div>
        </div>
    }
}
