use crate::{api::OverallStats, pages::admin::utils::format_average_rate};
use leptos::*;
use rust_i18n::t;

#[component]
fn StatTile(
    value: Signal<String>,
    #[prop(into)] label: String,
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("{} p-2 rounded text-center", tone)>
            <div class="font-semibold">{move || value.get()}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    }
}

#[component]
pub fn StatsGrid(stats: Signal<OverallStats>) -> impl IntoView {
    let students = Signal::derive(move || stats.with(|s| s.total_students.to_string()));
    let sessions = Signal::derive(move || stats.with(|s| s.total_sessions.to_string()));
    let attendances = Signal::derive(move || stats.with(|s| s.total_attendances.to_string()));
    let rate = Signal::derive(move || stats.with(|s| format_average_rate(s.average_attendance_rate)));

    view! {
        <div class="space-y-2">
            <h3 class="font-semibold text-gray-800 flex items-center gap-2">
                <i class="fas fa-users"></i>
                {t!("admin.stats_heading").to_string()}
            </h3>
            <div class="grid grid-cols-2 gap-2 text-sm">
                <StatTile value=students label=t!("admin.total_students") tone="bg-blue-50 text-blue-600" />
                <StatTile value=sessions label=t!("admin.total_sessions") tone="bg-green-50 text-green-600" />
                <StatTile value=attendances label=t!("admin.total_attendances") tone="bg-indigo-50 text-indigo-600" />
                <StatTile value=rate label=t!("admin.average_rate") tone="bg-amber-50 text-amber-600" />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::stats, ssr::render_to_string};

    #[test]
    fn missing_stats_render_as_zero() {
        let html = render_to_string(|| {
            let stats = create_rw_signal(OverallStats::default());
            view! { <StatsGrid stats=stats.into() /> }
        });
        assert!(html.contains("%0.0"));
        assert!(html.contains(&t!("admin.total_students").to_string()));
    }

    #[test]
    fn renders_all_four_values() {
        let html = render_to_string(|| {
            let stats = create_rw_signal(stats(40, 6));
            view! { <StatsGrid stats=stats.into() /> }
        });
        assert!(html.contains("40"));
        assert!(html.contains("120"));
        assert!(html.contains("%50.0"));
    }
}
