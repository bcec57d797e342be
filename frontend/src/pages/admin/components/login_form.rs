use crate::{
    components::common::Button,
    pages::admin::utils::{password_input_type, CredentialsForm},
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

#[component]
pub fn AdminLoginForm(
    form: CredentialsForm,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let show_password = form.show_password;
    let toggle_label = move || {
        if show_password.get() {
            t!("admin.hide_password").to_string()
        } else {
            t!("admin.show_password").to_string()
        }
    };

    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <div>
                <label for="username" class="text-sm font-medium text-gray-800">
                    {t!("admin.username_label").to_string()}
                </label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2"
                    placeholder=t!("admin.username_placeholder").to_string()
                    prop:value=move || form.username.get()
                    on:input=move |ev| form.username.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password" class="text-sm font-medium text-gray-800">
                    {t!("admin.password_label").to_string()}
                </label>
                <div class="relative">
                    <input
                        id="password"
                        type=move || password_input_type(show_password.get())
                        autocomplete="current-password"
                        class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 pr-10"
                        placeholder=t!("admin.password_placeholder").to_string()
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500"
                        aria-label=toggle_label
                        on:click=move |_| form.toggle_password_visibility()
                    >
                        <i class=move || {
                            if show_password.get() { "fas fa-eye-slash" } else { "fas fa-eye" }
                        }></i>
                    </button>
                </div>
            </div>
            <Button class="w-full" loading=pending attr:type="submit">
                {move || {
                    if pending.get() {
                        t!("admin.logging_in").to_string()
                    } else {
                        t!("admin.login").to_string()
                    }
                }}
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_with(show: bool) -> String {
        render_to_string(move || {
            let form = CredentialsForm::new();
            form.password.set("admin123".into());
            form.show_password.set(show);
            view! {
                <AdminLoginForm
                    form=form
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn password_is_masked_by_default() {
        let html = render_with(false);
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("fa-eye"));
        assert!(html.contains(&t!("admin.login").to_string()));
    }

    #[test]
    fn visible_password_uses_text_input() {
        let html = render_with(true);
        assert!(!html.contains("type=\"password\""));
        assert!(html.contains("fa-eye-slash"));
        assert!(html.contains(&t!("admin.hide_password").to_string()));
    }
}
