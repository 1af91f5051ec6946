//! プログレスバーコンポーネント

use guidefy_common::SimulatedProgress;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: RwSignal<SimulatedProgress>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get().percent())
                />
            </div>
            <p class="progress-text">
                {move || {
                    let p = progress.get();
                    format!("{} {}%", p.phrase(), p.percent())
                }}
            </p>
        </div>
    }
}
