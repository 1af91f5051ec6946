//! 履歴書アップロードコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで1件だけ選択する。
//! 形式・サイズの検証は送信前に行い、失敗は alert で知らせる（選択中のファイルはそのまま）。

use guidefy_common::upload::SelectedFile;
use guidefy_common::{render_resume_results, UploadController, UploadView};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement, MouseEvent};

use crate::api::backend::{self, ApiError};
use crate::components::resume_results::ResumeResults;

/// ファイル選択ダイアログの accept 属性
const ACCEPT: &str = ".pdf,.docx,.doc,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document,application/msword";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// ブラウザの File から検証用のメタデータを作る
pub fn selected_file(file: &File) -> SelectedFile {
    SelectedFile::new(file.name(), file.size() as u64, file.type_())
}

#[component]
pub fn ResumeAnalyzer() -> impl IntoView {
    let controller = RwSignal::new(UploadController::new());
    let file_handle = StoredValue::new_local(None::<File>);
    let results_html = RwSignal::new(String::new());
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let is_loading = move || controller.with(|c| c.is_loading());
    let has_file = move || controller.with(|c| c.selected().is_some());

    let handle_file = move |file: File| {
        match controller.try_update(|c| c.select(selected_file(&file))) {
            Some(Ok(())) => file_handle.set_value(Some(file)),
            Some(Err(e)) => alert(&e.to_string()),
            None => {}
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_: MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    let on_remove = move |_: MouseEvent| {
        if controller.with_untracked(|c| c.is_loading()) {
            return;
        }
        controller.update(|c| c.remove());
        file_handle.set_value(None);
    };

    let on_analyze = move |_: MouseEvent| {
        match controller.try_update(|c| c.begin_analysis()) {
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                alert(&e.to_string());
                return;
            }
            None => return,
        }

        let Some(file) = file_handle.get_value() else {
            let message = controller.try_update(|c| c.finish_failure(None)).unwrap_or_default();
            alert(&message);
            return;
        };

        spawn_local(async move {
            let result = backend::analyze_resume(&file)
                .await
                .and_then(|payload| render_resume_results(&payload).map_err(ApiError::from));

            match result {
                Ok(html) => {
                    results_html.set(html);
                    controller.update(|c| c.finish_success());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Resume analysis failed: {}", e).into());
                    let message = controller
                        .try_update(|c| c.finish_failure(e.server_message()))
                        .unwrap_or_default();
                    alert(&message);
                }
            }
        });
    };

    let on_analyze_another = move |_: MouseEvent| {
        controller.update(|c| c.analyze_another());
        file_handle.set_value(None);
        results_html.set(String::new());
    };

    let file_name = move || controller.with(|c| c.selected().map(|f| f.name.clone()).unwrap_or_default());
    let file_size = move || controller.with(|c| c.selected().map(|f| f.display_size()).unwrap_or_default());

    view! {
        <section class="resume-view">
            <div class="upload-section" class:hidden=move || !controller.with(|c| c.upload_visible())>
                <div
                    class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                    class:hidden=move || controller.with(|c| c.view() != UploadView::DropZone)
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:click=on_click
                >
                    <div class="upload-icon">"📄"</div>
                    <p>"Drag & drop your resume here, or click to browse"</p>
                    <p class="text-muted">"Supported formats: PDF, DOCX (max 10MB)"</p>
                </div>
                <input
                    type="file"
                    class="hidden"
                    accept=ACCEPT
                    node_ref=input_ref
                    on:change=on_change
                />

                <div class="file-preview" class:hidden=move || !has_file()>
                    <span class="file-icon">"📎"</span>
                    <div class="file-info">
                        <span class="file-name">{file_name}</span>
                        <span class="file-size">{file_size}</span>
                    </div>
                    <button class="remove-btn" disabled=is_loading on:click=on_remove>
                        "✕ Remove"
                    </button>
                </div>

                <button
                    class="analyze-btn"
                    class:hidden=move || !has_file()
                    disabled=is_loading
                    on:click=on_analyze
                >
                    {move || if is_loading() { "⏳ Analyzing..." } else { "🔍 Analyze Resume" }}
                </button>

                <div class="loading-state" class:hidden=move || !is_loading()>
                    <div class="spinner"></div>
                    <p>"Analyzing your resume..."</p>
                </div>
            </div>

            <ResumeResults
                html=results_html
                visible=Signal::derive(move || controller.with(|c| c.results_visible()))
                on_reset=on_analyze_another
            />
        </section>
    }
}
