//! Guidefy Common Library
//!
//! CLIとWeb(WASM)で共有される型・レンダラー・状態管理

pub mod types;
pub mod error;
pub mod sanitize;
pub mod html;
pub mod status;
pub mod progress;
pub mod recommendation;
pub mod resume;
pub mod upload;
pub mod submit;
pub mod page;

pub use types::{
    CareerRequest, CareerResponse, RecommendationPayload, ResumeAnalysisPayload, StatusPayload,
};
pub use error::{Error, Result};
pub use sanitize::{sanitize, sanitize_or, NOT_AVAILABLE};
pub use status::IndicatorState;
pub use progress::{ScoreCounter, SimulatedProgress};
pub use recommendation::{display_score, render_recommendation, UpskillLayout};
pub use resume::{render_resume_results, AtsBand, Gauge};
pub use upload::{SelectedFile, UploadController, UploadView};
pub use submit::{
    error_message_from_body, interpret_career_response, parse_career_response, SubmitController, SubmitPhase,
};
pub use page::wrap_document;
