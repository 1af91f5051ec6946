//! Guidefy CLI
//!
//! バックエンドの `/api-status`, `/career`, `/resume-analyze` を呼び出し、
//! guidefy_common のレンダラーでHTMLレポートを生成する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod report;
