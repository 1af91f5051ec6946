//! キャリアフォーム送信の状態管理
//!
//! 送信中は二重送信を拒否する。完了時は成功・失敗どちらでも
//! ローディング状態を必ず抜ける。

use crate::error::{Error, Result};
use crate::recommendation::{render_recommendation, UpskillLayout, FAILURE_MESSAGE};
use crate::status::IndicatorState;
use crate::types::{CareerResponse, RecommendationPayload};
use serde::Deserialize;

/// エラー応答 `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 非2xx応答の本文からサーバーのメッセージを取り出す
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

/// `/career` の応答から推薦本体を取り出す
///
/// `error` があればそのメッセージ、`recommendation` が無ければ形式エラー。
pub fn interpret_career_response(response: CareerResponse) -> Result<RecommendationPayload> {
    if let Some(error) = response.error.filter(|e| !e.trim().is_empty()) {
        return Err(Error::Server(error));
    }
    response
        .recommendation
        .ok_or_else(|| Error::InvalidResponse("missing recommendation".to_string()))
}

/// 応答本文（JSON文字列）から推薦本体を取り出す
pub fn parse_career_response(body: &str) -> Result<RecommendationPayload> {
    let response: CareerResponse = serde_json::from_str(body)?;
    interpret_career_response(response)
}

/// 送信状態
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Loading,
    /// 描画済みHTML
    Rendered(String),
    /// 表示する失敗メッセージ
    Failed(String),
}

/// フォーム送信コントローラー
#[derive(Debug, Clone)]
pub struct SubmitController {
    phase: SubmitPhase,
    layout: UpskillLayout,
}

impl Default for SubmitController {
    fn default() -> Self {
        Self::new(UpskillLayout::default())
    }
}

impl SubmitController {
    pub fn new(layout: UpskillLayout) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            layout,
        }
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// 送信ボタンを無効化すべきか
    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Loading
    }

    /// 結果コンテナを表示するか（一度でも送信したら表示）
    pub fn results_visible(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    /// 送信開始（送信中なら拒否）
    pub fn begin(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(Error::RequestInFlight);
        }
        self.phase = SubmitPhase::Loading;
        Ok(())
    }

    /// 成功: 描画して返す
    pub fn finish_ok(&mut self, payload: &RecommendationPayload) -> String {
        let html = render_recommendation(payload, self.layout);
        self.phase = SubmitPhase::Rendered(html.clone());
        html
    }

    /// 失敗: 表示メッセージとステータス表示（Offline）を返す
    ///
    /// サーバーが明示的なエラーを返した場合はそのメッセージを使う。
    pub fn finish_err(&mut self, error: &Error) -> (String, IndicatorState) {
        let message = match error {
            Error::Server(message) => format!("❌ {}", message),
            Error::InvalidResponse(_) => "❌ Invalid response format.".to_string(),
            _ => return self.finish_transport_failure(),
        };
        self.phase = SubmitPhase::Failed(message.clone());
        (message, IndicatorState::Offline)
    }

    /// 通信失敗（到達不能・非2xx・不正JSON）
    pub fn finish_transport_failure(&mut self) -> (String, IndicatorState) {
        self.phase = SubmitPhase::Failed(FAILURE_MESSAGE.to_string());
        (FAILURE_MESSAGE.to_string(), IndicatorState::Offline)
    }

    /// 応答をまとめて処理する
    pub fn finish(&mut self, result: Result<RecommendationPayload>) -> std::result::Result<String, (String, IndicatorState)> {
        match result {
            Ok(payload) => Ok(self.finish_ok(&payload)),
            Err(e) => Err(self.finish_err(&e)),
        }
    }
}
