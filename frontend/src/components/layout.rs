use leptos::*;

#[component]
pub fn PageFrame(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="max-w-md mx-auto space-y-6">{children()}</div>
        </div>
    }
}

#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] header_extra: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg shadow-lg">
            <header class="text-center px-6 pt-6 pb-4 space-y-2">
                <h2 class="flex items-center justify-center gap-2 text-xl font-semibold text-gray-900">
                    {icon.map(|icon| view! { <i class=format!("fas {}", icon)></i> })}
                    {title}
                </h2>
                {header_extra}
            </header>
            <div class="px-6 pb-6">{children()}</div>
        </section>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Destructive,
}

impl BadgeTone {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Positive => "bg-green-500 text-white",
            BadgeTone::Destructive => "bg-red-600 text-white",
        }
    }
}

#[component]
pub fn Badge(#[prop(into)] tone: MaybeSignal<BadgeTone>, children: Children) -> impl IntoView {
    view! {
        <span class=move || {
            format!(
                "inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold {}",
                tone.get().classes()
            )
        }>{children()}</span>
    }
}
