//! 履歴書アップロードの状態管理
//!
//! 選択中ファイルは常に1つ（新しい選択で置き換える）。
//! 画面は DropZone → FileSelected → Loading → Results の順に遷移し、
//! アップロード画面と結果画面が同時に表示されることはない。

use crate::error::{Error, Result};
use crate::resume::ANALYSIS_FAILED_MESSAGE;

/// アップロード上限（10 MiB）
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX, MIME_DOC];

pub const INVALID_TYPE_MESSAGE: &str = "Please upload a PDF or DOCX file.";
pub const TOO_LARGE_MESSAGE: &str = "File size must be less than 10MB.";

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// 一覧表示用のサイズ文字列
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// MIMEタイプとサイズを検証
pub fn validate_file(file: &SelectedFile) -> Result<()> {
    if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(Error::Validation(INVALID_TYPE_MESSAGE.to_string()));
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(Error::Validation(TOO_LARGE_MESSAGE.to_string()));
    }
    Ok(())
}

/// 拡張子からMIMEタイプを推定（ブラウザ以外から送る場合に使用）
pub fn mime_from_file_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_lowercase();
    match ext.as_str() {
        "pdf" => Some(MIME_PDF),
        "docx" => Some(MIME_DOCX),
        "doc" => Some(MIME_DOC),
        _ => None,
    }
}

/// バイト数を読みやすい単位に変換
///
/// # Examples
/// ```
/// use guidefy_common::upload::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// アップロード画面の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadView {
    DropZone,
    FileSelected,
    Loading,
    Results,
}

/// 選択ファイルと画面遷移を管理
#[derive(Debug, Clone)]
pub struct UploadController {
    selected: Option<SelectedFile>,
    view: UploadView,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadController {
    pub fn new() -> Self {
        Self {
            selected: None,
            view: UploadView::DropZone,
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn view(&self) -> UploadView {
        self.view
    }

    /// アップロード側（ドロップゾーン/プレビュー/ローディング）が表示中か
    pub fn upload_visible(&self) -> bool {
        self.view != UploadView::Results
    }

    pub fn results_visible(&self) -> bool {
        self.view == UploadView::Results
    }

    pub fn is_loading(&self) -> bool {
        self.view == UploadView::Loading
    }

    /// ファイルを選択（検証に失敗した場合は状態を変えない）
    pub fn select(&mut self, file: SelectedFile) -> Result<()> {
        if self.is_loading() {
            return Err(Error::RequestInFlight);
        }
        validate_file(&file)?;
        self.selected = Some(file);
        self.view = UploadView::FileSelected;
        Ok(())
    }

    /// 選択を解除してドロップゾーンに戻る
    pub fn remove(&mut self) {
        if self.is_loading() {
            return;
        }
        self.selected = None;
        self.view = UploadView::DropZone;
    }

    /// 解析開始（ファイル未選択・解析中はエラー）
    pub fn begin_analysis(&mut self) -> Result<SelectedFile> {
        if self.is_loading() {
            return Err(Error::RequestInFlight);
        }
        let file = self.selected.clone().ok_or(Error::NoFileSelected)?;
        self.view = UploadView::Loading;
        Ok(file)
    }

    /// 解析成功: 結果画面へ
    pub fn finish_success(&mut self) {
        self.view = UploadView::Results;
    }

    /// 解析失敗: ファイル選択済みの画面に戻し、表示するメッセージを返す
    pub fn finish_failure(&mut self, server_message: Option<&str>) -> String {
        self.view = if self.selected.is_some() {
            UploadView::FileSelected
        } else {
            UploadView::DropZone
        };
        server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(ANALYSIS_FAILED_MESSAGE)
            .to_string()
    }

    /// 「別の履歴書を解析」: 初期状態に戻す
    pub fn analyze_another(&mut self) {
        self.selected = None;
        self.view = UploadView::DropZone;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(name, size, MIME_PDF)
    }

    #[test]
    fn test_validate_mime_types() {
        assert!(validate_file(&pdf("cv.pdf", 1000)).is_ok());
        assert!(validate_file(&SelectedFile::new("cv.docx", 1000, MIME_DOCX)).is_ok());
        assert!(validate_file(&SelectedFile::new("cv.doc", 1000, MIME_DOC)).is_ok());

        let err = validate_file(&SelectedFile::new("photo.png", 1000, "image/png")).unwrap_err();
        assert_eq!(err.to_string(), INVALID_TYPE_MESSAGE);
    }

    #[test]
    fn test_validate_size_boundary() {
        assert!(validate_file(&pdf("cv.pdf", MAX_UPLOAD_BYTES)).is_ok());
        let err = validate_file(&pdf("cv.pdf", MAX_UPLOAD_BYTES + 1)).unwrap_err();
        assert_eq!(err.to_string(), TOO_LARGE_MESSAGE);
    }

    #[test]
    fn test_reject_png_keeps_slot_empty() {
        let mut controller = UploadController::new();
        let result = controller.select(SelectedFile::new("photo.png", 10, "image/png"));
        assert!(result.is_err());
        assert!(controller.selected().is_none());
        assert_eq!(controller.view(), UploadView::DropZone);
    }

    #[test]
    fn test_reject_keeps_previous_file() {
        let mut controller = UploadController::new();
        controller.select(pdf("first.pdf", 10)).expect("選択失敗");
        assert!(controller.select(pdf("huge.pdf", MAX_UPLOAD_BYTES * 2)).is_err());
        assert_eq!(controller.selected().map(|f| f.name.as_str()), Some("first.pdf"));
    }

    #[test]
    fn test_select_replaces() {
        let mut controller = UploadController::new();
        controller.select(pdf("a.pdf", 10)).expect("選択失敗");
        controller.select(pdf("b.pdf", 20)).expect("選択失敗");
        assert_eq!(controller.selected().map(|f| f.name.as_str()), Some("b.pdf"));
        assert_eq!(controller.view(), UploadView::FileSelected);
    }

    #[test]
    fn test_analysis_flow_success() {
        let mut controller = UploadController::new();
        assert!(matches!(controller.begin_analysis(), Err(Error::NoFileSelected)));

        controller.select(pdf("cv.pdf", 10)).expect("選択失敗");
        let file = controller.begin_analysis().expect("開始失敗");
        assert_eq!(file.name, "cv.pdf");
        assert!(controller.is_loading());
        assert!(matches!(controller.begin_analysis(), Err(Error::RequestInFlight)));

        controller.finish_success();
        assert!(controller.results_visible());
        assert!(!controller.upload_visible());
    }

    #[test]
    fn test_analysis_flow_failure() {
        let mut controller = UploadController::new();
        controller.select(pdf("cv.pdf", 10)).expect("選択失敗");
        controller.begin_analysis().expect("開始失敗");

        let message = controller.finish_failure(Some("Invalid file type. Only PDF and DOCX files are allowed."));
        assert_eq!(message, "Invalid file type. Only PDF and DOCX files are allowed.");
        assert_eq!(controller.view(), UploadView::FileSelected);
        assert!(controller.selected().is_some());

        controller.begin_analysis().expect("再開始失敗");
        assert_eq!(controller.finish_failure(None), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(controller.finish_failure(Some("  ")), ANALYSIS_FAILED_MESSAGE);
    }

    #[test]
    fn test_analyze_another_resets() {
        let mut controller = UploadController::new();
        controller.select(pdf("cv.pdf", 10)).expect("選択失敗");
        controller.begin_analysis().expect("開始失敗");
        controller.finish_success();

        controller.analyze_another();
        assert!(controller.selected().is_none());
        assert_eq!(controller.view(), UploadView::DropZone);
        assert!(controller.upload_visible());
        assert!(!controller.results_visible());
    }

    #[test]
    fn test_remove_file() {
        let mut controller = UploadController::new();
        controller.select(pdf("cv.pdf", 10)).expect("選択失敗");
        controller.remove();
        assert!(controller.selected().is_none());
        assert_eq!(controller.view(), UploadView::DropZone);
    }

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("resume.PDF"), Some(MIME_PDF));
        assert_eq!(mime_from_file_name("my.cv.docx"), Some(MIME_DOCX));
        assert_eq!(mime_from_file_name("old.doc"), Some(MIME_DOC));
        assert_eq!(mime_from_file_name("photo.png"), None);
        assert_eq!(mime_from_file_name("noext"), None);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(MAX_UPLOAD_BYTES), "10 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }
}
