use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidefyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTPステータスエラー: {0}")]
    HttpStatus(u16),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] guidefy_common::Error),
}

impl GuidefyError {
    /// サーバーが返したエラーメッセージ（あれば）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GuidefyError::Common(guidefy_common::Error::Server(message)) => Some(message),
            _ => None,
        }
    }

    /// 通信・応答形式の失敗か（ステータス表示をOfflineにする対象）
    pub fn is_transport(&self) -> bool {
        matches!(self, GuidefyError::Http(_) | GuidefyError::HttpStatus(_) | GuidefyError::JsonParse(_))
    }
}

pub type Result<T> = std::result::Result<T, GuidefyError>;
