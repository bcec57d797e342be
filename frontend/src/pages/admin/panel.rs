use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::Card,
    },
    pages::admin::{
        components::{login_form::AdminLoginForm, roster::DailyRoster, stats::StatsGrid},
        view_model::use_admin_view_model,
    },
};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let is_authenticated = vm.is_authenticated();
    let state = vm.state;
    let form = vm.form;
    let pending = vm.login_action.pending();
    let on_login = Callback::new(vm.on_login());
    let on_logout = vm.on_logout();

    let roster = Signal::derive(move || state.with(|s| s.roster.clone()));
    let stats = Signal::derive(move || state.with(|s| s.stats.clone()));

    view! {
        <Card title=t!("admin.heading").to_string() icon="fa-shield-alt">
            <Show
                when=move || is_authenticated.get()
                fallback=move || {
                    view! { <AdminLoginForm form=form pending=pending.into() on_submit=on_login /> }
                }
            >
                <div class="space-y-4">
                    <div class="flex justify-between items-center">
                        <span class="text-sm font-medium text-green-600">
                            {t!("admin.signed_in").to_string()}
                        </span>
                        <Button
                            variant=ButtonVariant::Outline
                            class="text-sm px-3 py-1"
                            attr:type="button"
                            on:click=move |_| on_logout.call(())
                        >
                            {t!("admin.logout").to_string()}
                        </Button>
                    </div>
                    <DailyRoster roster=roster />
                    <StatsGrid stats=stats />
                </div>
            </Show>
        </Card>
    }
}
