use crate::{
    components::layout::{Card, PageFrame},
    pages::{
        admin::AdminPanel,
        check_in::{
            components::{
                form::{AttendanceForm, SessionBadge},
                header::PageHeader,
            },
            view_model::use_check_in_view_model,
        },
    },
};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn CheckInPanel() -> impl IntoView {
    let vm = use_check_in_view_model();
    let session = vm.active_session();
    let has_session = Signal::derive(move || session.with(Option::is_some));
    let pending = vm.submit_action.pending();

    view! {
        <PageFrame>
            <PageHeader />
            <Card
                title=t!("attendance.heading").to_string()
                icon="fa-user"
                header_extra=view! { <SessionBadge session=session /> }.into_view()
            >
                <AttendanceForm
                    name=vm.form.name
                    has_session=has_session
                    can_submit=vm.can_submit()
                    pending=pending.into()
                    message=vm.messages.current()
                    on_submit=Callback::new(vm.on_submit())
                />
            </Card>
            <AdminPanel />
        </PageFrame>
    }
}
