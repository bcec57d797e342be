use crate::{
    api::ActiveSession,
    components::{
        common::Button,
        layout::{Badge, BadgeTone},
        message::FlashBanner,
    },
    state::message::FlashMessage,
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

#[component]
pub fn SessionBadge(session: Signal<Option<ActiveSession>>) -> impl IntoView {
    view! {
        {move || match session.get() {
            Some(active) => view! {
                <Badge tone=BadgeTone::Positive>
                    {t!("attendance.active_session", date = active.label()).to_string()}
                </Badge>
            }
            .into_view(),
            None => view! {
                <Badge tone=BadgeTone::Destructive>
                    {t!("attendance.no_active_session").to_string()}
                </Badge>
            }
            .into_view(),
        }}
    }
}

#[component]
pub fn AttendanceForm(
    name: RwSignal<String>,
    has_session: Signal<bool>,
    can_submit: Signal<bool>,
    pending: Signal<bool>,
    message: Signal<Option<FlashMessage>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <div>
                <label for="studentName" class="text-base font-medium text-gray-800">
                    {t!("attendance.name_label").to_string()}
                </label>
                <input
                    id="studentName"
                    type="text"
                    autocomplete="name"
                    class="mt-1 block w-full rounded-md border border-gray-300 px-3 text-lg h-12 disabled:bg-gray-100"
                    placeholder=t!("attendance.name_placeholder").to_string()
                    prop:value=move || name.get()
                    disabled=move || !has_session.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <Button
                class="w-full h-12 text-lg"
                disabled=Signal::derive(move || !can_submit.get())
                loading=pending
                attr:type="submit"
            >
                <i class="fas fa-check-circle mr-2"></i>
                {move || {
                    if pending.get() {
                        t!("attendance.submitting").to_string()
                    } else {
                        t!("attendance.submit").to_string()
                    }
                }}
            </Button>
        </form>
        <FlashBanner message=message />
    }
}
