//! 履歴書解析結果

use leptos::prelude::*;
use web_sys::MouseEvent;

#[component]
pub fn ResumeResults<F>(html: RwSignal<String>, visible: Signal<bool>, on_reset: F) -> impl IntoView
where
    F: Fn(MouseEvent) + 'static,
{
    view! {
        <div class="resume-results" class:hidden=move || !visible.get()>
            <div class="results-body" inner_html=move || html.get()></div>
            <button class="reset-btn" on:click=on_reset>
                "🔄 Analyze Another Resume"
            </button>
        </div>
    }
}
