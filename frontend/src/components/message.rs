use crate::state::message::FlashMessage;
use leptos::*;

#[component]
pub fn FlashBanner(message: Signal<Option<FlashMessage>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|msg| {
                    let (classes, icon) = if msg.is_success() {
                        ("bg-green-100 text-green-800 border border-green-200", "fa-check-circle")
                    } else {
                        ("bg-red-100 text-red-800 border border-red-200", "fa-exclamation-circle")
                    };
                    view! {
                        <div
                            role="status"
                            class=format!("mt-4 p-3 rounded-lg text-center font-medium {}", classes)
                        >
                            <i class=format!("fas {} mr-2", icon)></i>
                            {msg.text}
                        </div>
                    }
                })
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_nothing_without_message() {
        let html = render_to_string(|| {
            let message = create_rw_signal(None::<FlashMessage>);
            view! { <FlashBanner message=message.into() /> }
        });
        assert!(!html.contains("role=\"status\""));
    }

    #[test]
    fn success_and_error_use_different_styles() {
        let html = render_to_string(|| {
            let message = create_rw_signal(Some(FlashMessage::success("Yoklama başarıyla kaydedildi!")));
            view! { <FlashBanner message=message.into() /> }
        });
        assert!(html.contains("bg-green-100"));
        assert!(html.contains("Yoklama başarıyla kaydedildi!"));

        let html = render_to_string(|| {
            let message = create_rw_signal(Some(FlashMessage::error("Bağlantı hatası oluştu")));
            view! { <FlashBanner message=message.into() /> }
        });
        assert!(html.contains("bg-red-100"));
        assert!(html.contains("fa-exclamation-circle"));
    }
}
