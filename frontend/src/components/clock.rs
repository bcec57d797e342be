use leptos::*;

use crate::utils::time::{format_clock_time, format_long_date, now_in_app_tz};

#[component]
pub fn Clock() -> impl IntoView {
    let (now, set_now) = create_signal(now_in_app_tz());

    // One tick per second while mounted; the interval is cancelled with the owner.
    #[cfg(target_arch = "wasm32")]
    {
        let ticker = gloo_timers::callback::Interval::new(1_000, move || {
            set_now.set(now_in_app_tz());
        });
        on_cleanup(move || ticker.cancel());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    let date_str = move || format_long_date(now.get().date_naive());
    let time_str = move || format_clock_time(&now.get());

    view! {
        <div class="bg-white rounded-lg p-3 shadow-sm border">
            <div class="text-lg font-semibold text-gray-800">{date_str}</div>
            <div class="text-xl font-mono text-blue-600">{time_str}</div>
        </div>
    }
}
