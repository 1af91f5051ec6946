//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::ActiveView;

#[component]
pub fn Header(active: RwSignal<ActiveView>) -> impl IntoView {
    let tab_class = move |view: ActiveView| {
        if active.get() == view {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    view! {
        <header class="header">
            <h1>"Guidefy"</h1>
            <p class="tagline">"AI career guidance & resume insights"</p>
            <nav class="nav-tabs">
                <button
                    class=move || tab_class(ActiveView::Career)
                    on:click=move |_| active.set(ActiveView::Career)
                >
                    "🧭 Career Guidance"
                </button>
                <button
                    class=move || tab_class(ActiveView::Resume)
                    on:click=move |_| active.set(ActiveView::Resume)
                >
                    "📄 Resume Analyzer"
                </button>
            </nav>
        </header>
    }
}
