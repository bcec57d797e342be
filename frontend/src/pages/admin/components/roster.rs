use crate::{api::DailyListResponse, utils::time::format_record_time};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn DailyRoster(roster: Signal<Option<DailyListResponse>>) -> impl IntoView {
    let records = Signal::derive(move || {
        roster.with(|r| r.as_ref().map(|r| r.attendances.clone()).unwrap_or_default())
    });
    let summary = move || {
        roster.with(|r| {
            r.as_ref().map(|r| {
                let count = t!("admin.roster_count", count = r.record_count()).to_string();
                match &r.session {
                    Some(session) => format!(
                        "{} · {}",
                        t!("admin.roster_session", date = session.session_date.as_str()),
                        count
                    ),
                    None => count,
                }
            })
        })
    };
    let empty_text = move || {
        roster
            .with(|r| r.as_ref().and_then(|r| r.message.clone()))
            .unwrap_or_else(|| t!("admin.roster_empty").to_string())
    };

    view! {
        <div class="space-y-2">
            <h3 class="font-semibold text-gray-800 flex items-center gap-2">
                <i class="fas fa-calendar"></i>
                {t!("admin.roster_heading").to_string()}
            </h3>
            {move || summary().map(|text| view! { <p class="text-xs text-gray-500">{text}</p> })}
            <div class="bg-gray-50 rounded-lg p-3 max-h-40 overflow-y-auto">
                <Show
                    when=move || records.with(|r| !r.is_empty())
                    fallback=move || {
                        view! { <p class="text-sm text-gray-500 text-center py-2">{empty_text}</p> }
                    }
                >
                    <ul class="space-y-1">
                        <For
                            each=move || records.get().into_iter().enumerate()
                            key=|(index, record)| (*index, record.id)
                            children=move |(_, record)| {
                                view! {
                                    <li class="text-sm bg-white p-2 rounded border">
                                        <div class="font-medium">{record.student_name().to_string()}</div>
                                        <div class="text-gray-500 text-xs">
                                            {format_record_time(record.timestamp.as_deref())}
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
