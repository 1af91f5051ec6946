//! バックエンドJSONの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - StatusPayload: `/api-status` の応答
//! - CareerRequest / CareerResponse: `/career` の入出力
//! - RecommendationPayload: キャリア推薦の本体
//! - ResumeAnalysisPayload: `/resume-analyze` の応答
//!
//! コレクションは欠落・nullのどちらでも空Vecとして扱う。

use serde::{Deserialize, Deserializer, Serialize};

/// 欠落とnullを既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 数値または数値文字列を受け付ける（AIが "87" を返すことがある）
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    })
}

// =============================================
// /api-status
// =============================================

/// AIバックエンドの稼働状況
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPayload {
    pub model_responded: bool,
    pub model_parsed: bool,
    pub api_key_loaded: bool,
    pub last_error: Option<String>,
}

// =============================================
// /career
// =============================================

/// キャリアフォームの送信内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerRequest {
    pub interests: String,
    pub strengths: String,
    pub preferred_subjects: String,
    pub career_goal: String,
}

/// `/career` の応答（成功時は recommendation、失敗時は error）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerResponse {
    pub recommendation: Option<RecommendationPayload>,
    pub error: Option<String>,
}

/// キャリア推薦
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub careers: Vec<Career>,
    #[serde(deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
    #[serde(deserialize_with = "null_as_default")]
    pub next_steps: Vec<NextStep>,
    pub confidence_score: Option<ConfidenceScore>,
    pub skill_gap_analysis: Option<SkillGapAnalysis>,
    pub upskill: Option<UpskillBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Career {
    pub name: Option<String>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextStep {
    pub action: Option<String>,
    pub details: Option<String>,
}

/// 推薦の確信度（0〜100）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceScore {
    #[serde(deserialize_with = "lenient_number")]
    pub overall: Option<f64>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGapAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub missing_skills: Vec<String>,
}

/// おすすめ学習セット（動画 + 学習プラットフォーム）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpskillBlock {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub platform: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub name: Option<String>,
    pub url: Option<String>,
    pub certificate: Option<String>,
    pub best_for: Option<String>,
    pub duration: Option<String>,
    pub learning_type: Option<String>,
    pub details: Option<String>,
}

// =============================================
// /resume-analyze
// =============================================

/// 履歴書解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAnalysisPayload {
    #[serde(deserialize_with = "lenient_number")]
    pub ats_score: Option<f64>,
    pub analysis: Option<ResumeAnalysis>,
    pub keywords_found: KeywordsFound,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub missing_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub action_items: Vec<ActionItem>,
    pub formatting_feedback: Option<String>,
    pub overall_impression: Option<String>,
}

/// 履歴書から検出されたキーワード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsFound {
    #[serde(deserialize_with = "null_as_default")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub action_verbs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub item: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: Priority,
}

/// アクション項目の優先度
///
/// low/medium/high 以外の値もそのままバッジに表示するため保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    /// バッジに表示する文字列
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(s) => s.as_str(),
        }
    }

    /// CSSクラス用のキー（英数字とハイフンのみ）
    pub fn style_key(&self) -> String {
        let slug: String = self
            .as_str()
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug.trim_matches('-').to_string();
        if slug.is_empty() {
            "unknown".to_string()
        } else {
            slug
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_deserialize_missing_fields() {
        let payload: RecommendationPayload = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(payload.careers.is_empty());
        assert!(payload.courses.is_empty());
        assert!(payload.next_steps.is_empty());
        assert!(payload.confidence_score.is_none());
        assert!(payload.upskill.is_none());
    }

    #[test]
    fn test_recommendation_deserialize_null_collections() {
        let json = r#"{"careers": null, "courses": null, "next_steps": null, "upskill": {"videos": null}}"#;
        let payload: RecommendationPayload = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(payload.careers.is_empty());
        assert!(payload.upskill.expect("upskill").videos.is_empty());
    }

    #[test]
    fn test_confidence_score_accepts_string() {
        let json = r#"{"overall": "87", "explanation": "ok"}"#;
        let score: ConfidenceScore = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(score.overall, Some(87.0));

        let json = r#"{"overall": "high"}"#;
        let score: ConfidenceScore = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(score.overall, None);
    }

    #[test]
    fn test_career_response_error() {
        let json = r#"{"error": "Model unavailable"}"#;
        let response: CareerResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.recommendation.is_none());
        assert_eq!(response.error.as_deref(), Some("Model unavailable"));
    }

    #[test]
    fn test_career_request_serialize() {
        let request = CareerRequest {
            interests: "robotics".to_string(),
            career_goal: "engineer".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"interests\":\"robotics\""));
        assert!(json.contains("\"preferred_subjects\":\"\""));
        assert!(json.contains("\"career_goal\":\"engineer\""));
    }

    #[test]
    fn test_status_payload_defaults() {
        let status: StatusPayload = serde_json::from_str(r#"{"api_key_loaded": true}"#).expect("デシリアライズ失敗");
        assert!(status.api_key_loaded);
        assert!(!status.model_responded);
        assert!(status.last_error.is_none());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::from("HIGH".to_string()), Priority::High);
        assert_eq!(Priority::from(" low ".to_string()), Priority::Low);
        assert_eq!(
            Priority::from("Critical!".to_string()),
            Priority::Other("Critical!".to_string())
        );
    }

    #[test]
    fn test_priority_style_key() {
        assert_eq!(Priority::High.style_key(), "high");
        assert_eq!(Priority::Other("Very Urgent".to_string()).style_key(), "very-urgent");
        assert_eq!(Priority::Other("\"><".to_string()).style_key(), "unknown");
    }

    #[test]
    fn test_resume_payload_deserialize() {
        let json = r#"{
            "ats_score": 72,
            "keywords_found": {"technical_skills": ["python", "sql"]},
            "analysis": {
                "strengths": ["Clear layout"],
                "weaknesses": [],
                "action_items": [{"priority": "high", "item": "Add metrics"}, {"item": "Shorten summary"}]
            }
        }"#;
        let payload: ResumeAnalysisPayload = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(payload.ats_score, Some(72.0));
        assert_eq!(payload.keywords_found.technical_skills, vec!["python", "sql"]);
        assert!(payload.keywords_found.soft_skills.is_empty());

        let analysis = payload.analysis.expect("analysis");
        assert_eq!(analysis.action_items[0].priority, Priority::High);
        assert_eq!(analysis.action_items[1].priority, Priority::Medium);
        assert!(analysis.missing_keywords.is_empty());
    }
}
