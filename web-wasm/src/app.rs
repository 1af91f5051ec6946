//! メインアプリケーションコンポーネント

use guidefy_common::{IndicatorState, UpskillLayout};
use leptos::prelude::*;
use crate::components::{
    career_form::CareerForm,
    header::Header,
    resume_upload::ResumeAnalyzer,
    status_indicator::{refresh_status, StatusIndicator},
};

/// 表示中のビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Career,
    Resume,
}

/// `?layout=hero` でUpskillセクションをヒーロー表示にする
fn layout_from_query() -> UpskillLayout {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("layout"))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(ActiveView::default());
    let status = RwSignal::new(IndicatorState::Processing);

    // 初回ロード時のステータス確認
    refresh_status(status);

    view! {
        <div class="container">
            <Header active=active />
            <StatusIndicator state=status />

            <main>
                <div class:hidden=move || active.get() != ActiveView::Career>
                    <CareerForm status=status layout=layout_from_query() />
                </div>
                <div class:hidden=move || active.get() != ActiveView::Resume>
                    <ResumeAnalyzer />
                </div>
            </main>
        </div>
    }
}
