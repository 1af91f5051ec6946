//! AIステータス表示
//!
//! `/api-status` の応答を表示状態に変換する。履歴は持たず毎回再計算する。

use crate::types::StatusPayload;

/// インジケーターの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// モデル応答・解析とも成功
    Online,
    /// モデルは応答したが解析に失敗（フォールバック応答中）
    Degraded,
    /// 未使用だがAPIキーは読み込み済み
    Ready,
    /// APIキー未設定
    MissingApiKey,
    /// ステータス取得に失敗
    Offline,
    /// 推薦リクエスト処理中
    Processing,
}

impl IndicatorState {
    /// ステータス応答から状態を決定
    pub fn from_payload(status: &StatusPayload) -> Self {
        match (status.model_responded, status.model_parsed, status.api_key_loaded) {
            (true, true, _) => IndicatorState::Online,
            (true, false, _) => IndicatorState::Degraded,
            (false, _, true) => IndicatorState::Ready,
            (false, _, false) => IndicatorState::MissingApiKey,
        }
    }

    /// 取得結果から状態を決定（エラーは種類を問わずOffline）
    pub fn from_fetch<E>(result: std::result::Result<StatusPayload, E>) -> Self {
        match result {
            Ok(status) => Self::from_payload(&status),
            Err(_) => IndicatorState::Offline,
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorState::Online => "🟢 AI System: Online",
            IndicatorState::Degraded => "🟡 AI System: Online (Fallback Active)",
            IndicatorState::Ready => "🟡 AI System: Ready",
            IndicatorState::MissingApiKey => "🔴 AI System: API Key Missing",
            IndicatorState::Offline => "🔴 AI System: Offline",
            IndicatorState::Processing => "🟡 AI System: Processing...",
        }
    }

    /// 状態名
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorState::Online => "Online",
            IndicatorState::Degraded => "Online (Fallback Active)",
            IndicatorState::Ready => "Ready",
            IndicatorState::MissingApiKey => "API key missing",
            IndicatorState::Offline => "Offline",
            IndicatorState::Processing => "Processing",
        }
    }

    /// CSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorState::Online => "status-online",
            IndicatorState::Degraded => "status-degraded",
            IndicatorState::Ready => "status-ready",
            IndicatorState::MissingApiKey => "status-missing-key",
            IndicatorState::Offline => "status-offline",
            IndicatorState::Processing => "status-processing",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IndicatorState::Online => "green",
            IndicatorState::Degraded | IndicatorState::Ready | IndicatorState::Processing => "yellow",
            IndicatorState::MissingApiKey | IndicatorState::Offline => "red",
        }
    }

    /// 正常に応答できる状態か
    pub fn is_healthy(&self) -> bool {
        matches!(self, IndicatorState::Online | IndicatorState::Ready)
    }
}
