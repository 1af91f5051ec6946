//! バックエンドAPI呼び出し（fetch）
//!
//! - `GET /api-status`: ステータス
//! - `POST /career`: キャリア推薦（JSON）
//! - `POST /resume-analyze`: 履歴書解析（multipart, フィールド名 `resume`）
//!
//! 応答の解釈は guidefy_common に任せ、ここでは通信だけを扱う。

use guidefy_common::resume::ANALYSIS_FAILED_MESSAGE;
use guidefy_common::{
    error_message_from_body, parse_career_response, CareerRequest, IndicatorState,
    RecommendationPayload, ResumeAnalysisPayload, StatusPayload,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

pub const STATUS_ENDPOINT: &str = "/api-status";
pub const CAREER_ENDPOINT: &str = "/career";
pub const RESUME_ENDPOINT: &str = "/resume-analyze";

/// multipartのフィールド名
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Error)]
pub enum ApiError {
    /// ネットワーク到達不能・JS例外
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Common(#[from] guidefy_common::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Fetch(message)
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ApiError::Common(guidefy_common::Error::InvalidResponse(e.to_string()))
    }
}

impl ApiError {
    /// サーバーが返したメッセージ
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Common(guidefy_common::Error::Server(message)) => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

async fn send(request: &Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| ApiError::Fetch("window is unavailable".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request)).await?;
    Ok(value.dyn_into()?)
}

async fn read_text(response: &Response) -> Result<String> {
    let value = JsFuture::from(response.text()?).await?;
    Ok(value.as_string().unwrap_or_default())
}

/// ステータス取得（非2xx・不正JSONはエラー）
pub async fn fetch_status() -> Result<StatusPayload> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(STATUS_ENDPOINT, &opts)?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let json = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

/// インジケーター状態（取得失敗はすべてOffline）
pub async fn indicator() -> IndicatorState {
    let result = fetch_status().await;
    if let Err(e) = &result {
        web_sys::console::warn_1(&format!("Status check failed: {}", e).into());
    }
    IndicatorState::from_fetch(result)
}

/// キャリア推薦を取得
pub async fn recommend(form: &CareerRequest) -> Result<RecommendationPayload> {
    let body = serde_json::to_string(form).map_err(guidefy_common::Error::from)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CAREER_ENDPOINT, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let response = send(&request).await?;
    let text = read_text(&response).await?;

    if !response.ok() {
        return match error_message_from_body(&text) {
            Some(message) => Err(guidefy_common::Error::Server(message).into()),
            None => Err(ApiError::Status(response.status())),
        };
    }

    Ok(parse_career_response(&text)?)
}

/// 履歴書を送信して解析結果を取得
pub async fn analyze_resume(file: &File) -> Result<ResumeAnalysisPayload> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(RESUME_ENDPOINT, &opts)?;
    let response = send(&request).await?;
    let text = read_text(&response).await?;

    if !response.ok() {
        let message = error_message_from_body(&text).unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string());
        return Err(guidefy_common::Error::Server(message).into());
    }

    serde_json::from_str(&text).map_err(|e| guidefy_common::Error::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ApiError::from(guidefy_common::Error::Server("Invalid file type".to_string()));
        assert_eq!(err.server_message(), Some("Invalid file type"));
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn test_transport_errors_have_no_server_message() {
        assert_eq!(ApiError::Status(502).server_message(), None);
        assert_eq!(ApiError::Fetch("offline".to_string()).server_message(), None);
        assert_eq!(ApiError::Status(502).to_string(), "HTTP status 502");
    }
}
