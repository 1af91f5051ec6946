//! AIシステムのステータス表示

use guidefy_common::IndicatorState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::backend;

/// `/api-status` を取得して表示を更新する
pub fn refresh_status(state: RwSignal<IndicatorState>) {
    spawn_local(async move {
        state.set(backend::indicator().await);
    });
}

#[component]
pub fn StatusIndicator(state: RwSignal<IndicatorState>) -> impl IntoView {
    view! {
        <div
            class=move || format!("status-indicator {}", state.get().css_class())
            style=move || format!("color: {}", state.get().color())
            title=move || state.get().name()
        >
            {move || state.get().label()}
        </div>
    }
}
