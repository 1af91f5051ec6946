//! バックエンドHTTPクライアント
//!
//! `/api-status`, `/career`, `/resume-analyze` を呼び出す。
//! 応答の解釈（エラー判定・形式チェック）は guidefy_common 側で行う。

use crate::error::{GuidefyError, Result};
use guidefy_common::resume::ANALYSIS_FAILED_MESSAGE;
use guidefy_common::upload::SelectedFile;
use guidefy_common::{
    parse_career_response, CareerRequest, IndicatorState, RecommendationPayload,
    ResumeAnalysisPayload, StatusPayload,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

const STATUS_ENDPOINT: &str = "/api-status";
const CAREER_ENDPOINT: &str = "/career";
const RESUME_ENDPOINT: &str = "/resume-analyze";

/// multipartのフィールド名
const RESUME_FIELD: &str = "resume";

pub use guidefy_common::error_message_from_body;

pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// ステータス取得（非2xx・不正JSONはエラー）
    pub async fn fetch_status(&self) -> Result<StatusPayload> {
        let url = self.url(STATUS_ENDPOINT);
        debug!(%url, "ステータス取得");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// インジケーター状態（取得失敗はすべてOffline）
    pub async fn indicator(&self) -> IndicatorState {
        let result = self.fetch_status().await;
        if let Err(e) = &result {
            warn!(error = %e, "ステータス取得に失敗");
        }
        IndicatorState::from_fetch(result)
    }

    /// キャリア推薦を取得
    pub async fn recommend(&self, request: &CareerRequest) -> Result<RecommendationPayload> {
        let url = self.url(CAREER_ENDPOINT);
        info!(%url, "キャリア推薦をリクエスト");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "推薦レスポンス受信");

        if !status.is_success() {
            if let Some(message) = error_message_from_body(&body) {
                return Err(guidefy_common::Error::Server(message).into());
            }
            // 本文がエラー形式でなければ通信失敗として扱う
            return Err(GuidefyError::HttpStatus(status.as_u16()));
        }

        Ok(parse_career_response(&body)?)
    }

    /// 履歴書ファイルを送信して解析結果を取得
    ///
    /// ファイルの検証は呼び出し前に `UploadController::select` で済ませておくこと。
    pub async fn analyze_resume(&self, path: &Path, file: &SelectedFile) -> Result<ResumeAnalysisPayload> {
        let url = self.url(RESUME_ENDPOINT);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| GuidefyError::FileNotFound(path.display().to_string()))?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part(RESUME_FIELD, part);

        info!(%url, file = %file.name, size = file.size, "履歴書を送信");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "解析レスポンス受信");

        if !status.is_success() {
            let message = error_message_from_body(&body).unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string());
            return Err(guidefy_common::Error::Server(message).into());
        }

        Ok(serde_json::from_str(&body)?)
    }
}
