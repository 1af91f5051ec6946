//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 応答に主要オブジェクトが無い（セクション単位の欠落とは区別する）
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// サーバーが返したエラーメッセージ
    #[error("{0}")]
    Server(String),

    /// クライアント側の入力検証エラー
    #[error("{0}")]
    Validation(String),

    #[error("A request is already in progress")]
    RequestInFlight,

    #[error("No file selected")]
    NoFileSelected,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_response() {
        let error = Error::InvalidResponse("missing recommendation".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid response format: missing recommendation"
        );
    }

    #[test]
    fn test_error_display_passthrough() {
        let error = Error::Server("Invalid file type".to_string());
        assert_eq!(format!("{}", error), "Invalid file type");

        let error = Error::Validation("File size must be less than 10MB.".to_string());
        assert_eq!(format!("{}", error), "File size must be less than 10MB.");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::RequestInFlight;
        let debug = format!("{:?}", error);
        assert!(debug.contains("RequestInFlight"));
    }
}
