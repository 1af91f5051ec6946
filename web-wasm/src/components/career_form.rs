//! キャリア推薦フォーム
//!
//! 送信 → 疑似プログレス → 推薦の描画 → スコアのカウントアップ → ステータス再取得。
//! 送信中はボタンを無効化し、二重送信は `SubmitController::begin` で拒否する。

use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use guidefy_common::html::escape;
use guidefy_common::progress::{PROGRESS_TICK_MS, SCORE_ANIMATION_MS};
use guidefy_common::recommendation::{LOADING_MESSAGE, SCORE_ELEMENT_ID};
use guidefy_common::{
    display_score, CareerRequest, IndicatorState, ScoreCounter, SimulatedProgress,
    SubmitController, UpskillLayout,
};
use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::api::backend::{self, ApiError};
use crate::components::progress_bar::ProgressBar;
use crate::components::status_indicator::refresh_status;

/// 結果コンテナの中身を丸ごと差し替える
pub fn swap_in(container: &Element, html: &str) {
    container.set_inner_html(html);

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    container.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// 信頼度スコアを0%から数え上げる
///
/// `generation` が変わったら（次の送信が始まったら）途中で止める。
pub fn start_score_animation(target: u32, generation: StoredValue<u32>) {
    let Some(element) = document().get_element_by_id(SCORE_ELEMENT_ID) else {
        return;
    };

    let mut counter = ScoreCounter::new(target, SCORE_ANIMATION_MS);
    element.set_text_content(Some(&counter.display()));
    if counter.is_done() {
        return;
    }

    let started = generation.get_value();
    let step = counter.step_interval_ms();
    spawn_local(async move {
        while !counter.is_done() {
            TimeoutFuture::new(step).await;
            if generation.get_value() != started {
                return;
            }
            counter.tick();
            element.set_text_content(Some(&counter.display()));
        }
    });
}

fn message_html(class: &str, message: &str) -> String {
    format!(r#"<p class="{}">{}</p>"#, class, escape(message))
}

#[component]
pub fn CareerForm(
    status: RwSignal<IndicatorState>,
    #[prop(optional)] layout: UpskillLayout,
) -> impl IntoView {
    let interests = RwSignal::new(String::new());
    let strengths = RwSignal::new(String::new());
    let subjects = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());

    let controller = RwSignal::new(SubmitController::new(layout));
    let progress = RwSignal::new(SimulatedProgress::new());
    let ticker = StoredValue::new_local(None::<Interval>);
    let generation = StoredValue::new(0u32);
    let results_ref = NodeRef::<Div>::new();

    let is_busy = move || controller.with(|c| c.is_busy());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if !matches!(controller.try_update(|c| c.begin()), Some(Ok(()))) {
            return;
        }

        generation.set_value(generation.get_value().wrapping_add(1));
        status.set(IndicatorState::Processing);
        if let Some(container) = results_ref.get_untracked() {
            swap_in(&container, &message_html("loading", LOADING_MESSAGE));
        }

        progress.set(SimulatedProgress::new());
        ticker.set_value(Some(Interval::new(PROGRESS_TICK_MS, move || {
            progress.update(|p| {
                p.advance();
            });
        })));

        let request = CareerRequest {
            interests: interests.get_untracked(),
            strengths: strengths.get_untracked(),
            preferred_subjects: subjects.get_untracked(),
            career_goal: goal.get_untracked(),
        };

        spawn_local(async move {
            let result = backend::recommend(&request).await;

            // 描画前にタイマーを止める
            ticker.set_value(None);
            progress.update(|p| p.complete());

            let container = results_ref.get_untracked();
            match result {
                Ok(payload) => {
                    let html = controller
                        .try_update(|c| c.finish_ok(&payload))
                        .unwrap_or_default();
                    if let Some(container) = container {
                        swap_in(&container, &html);
                    }
                    start_score_animation(display_score(payload.confidence_score.as_ref()), generation);
                    refresh_status(status);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Recommendation failed: {}", e).into());
                    let outcome = controller.try_update(|c| match &e {
                        ApiError::Common(inner) => c.finish_err(inner),
                        _ => c.finish_transport_failure(),
                    });
                    if let Some((message, state)) = outcome {
                        if let Some(container) = container {
                            swap_in(&container, &message_html("error-message", &message));
                        }
                        status.set(state);
                    }
                }
            }
        });
    };

    view! {
        <section class="career-view">
            <form class="career-form" on:submit=on_submit>
                <Field id="interests" label="Interests" placeholder="e.g. robotics, design, writing" value=interests />
                <Field id="strengths" label="Strengths" placeholder="e.g. problem solving, communication" value=strengths />
                <Field id="subjects" label="Preferred Subjects" placeholder="e.g. mathematics, art" value=subjects />
                <Field id="goal" label="Career Goal" placeholder="e.g. build products people love" value=goal />

                <button type="submit" class="submit-btn" disabled=is_busy>
                    {move || if is_busy() { "⏳ Generating..." } else { "✨ Get Recommendations" }}
                </button>
            </form>

            <Show when=is_busy>
                <ProgressBar progress=progress />
            </Show>

            <div
                class="results-container"
                class:hidden=move || !controller.with(|c| c.results_visible())
                node_ref=results_ref
            ></div>
        </section>
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                name=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use guidefy_common::render_recommendation;
    use guidefy_common::RecommendationPayload;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> Element {
        let doc = document();
        let div = doc.create_element("div").expect("div作成失敗");
        doc.body().expect("body取得失敗").append_child(&div).expect("追加失敗");
        div
    }

    #[wasm_bindgen_test]
    fn wasm_swap_in_replaces_previous_content() {
        let div = container();
        swap_in(&div, &message_html("loading", LOADING_MESSAGE));
        swap_in(&div, &render_recommendation(&RecommendationPayload::default(), UpskillLayout::Grid));

        let html = div.inner_html();
        assert!(!html.contains(LOADING_MESSAGE));
        assert!(html.contains("No career recommendations available"));
        div.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_zero_score_finishes_immediately() {
        let div = container();
        swap_in(&div, &render_recommendation(&RecommendationPayload::default(), UpskillLayout::Grid));

        start_score_animation(0, StoredValue::new(0));
        let score = document().get_element_by_id(SCORE_ELEMENT_ID).expect("スコア要素なし");
        assert_eq!(score.text_content().as_deref(), Some("0%"));
        div.remove();
    }
}
