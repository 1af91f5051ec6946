//! 履歴書解析結果のHTMLレンダリング
//!
//! ATSスコアの円形ゲージ、強み/弱みリスト、キーワードタグ、アクション項目を生成する。
//! 強み・弱み・キーワードは空白正規化せずそのまま（エスケープのみ）表示する。

use crate::error::{Error, Result};
use crate::html::escape;
use crate::sanitize::NOT_AVAILABLE;
use crate::types::{ActionItem, ResumeAnalysis, ResumeAnalysisPayload};
use std::f64::consts::PI;

pub const TECHNICAL_KEYWORDS_EMPTY: &str = "No technical keywords found";
pub const MISSING_KEYWORDS_EMPTY: &str = "No critical keywords missing";
pub const ACTION_ITEMS_EMPTY: &str = "No action items";

/// 解析失敗時の既定メッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// ゲージ円の半径（SVG座標）
pub const GAUGE_RADIUS: f64 = 90.0;

/// ATSスコアの評価帯（下限を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl AtsBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            AtsBand::Excellent
        } else if score >= 60.0 {
            AtsBand::Good
        } else if score >= 40.0 {
            AtsBand::Fair
        } else {
            AtsBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AtsBand::Excellent => "excellent",
            AtsBand::Good => "good",
            AtsBand::Fair => "fair",
            AtsBand::NeedsImprovement => "needs improvement",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AtsBand::Excellent => "Excellent! Your resume is highly optimized for ATS systems.",
            AtsBand::Good => "Good! Your resume has solid ATS compatibility with room for improvement.",
            AtsBand::Fair => "Fair. Your resume needs optimization to pass through ATS filters.",
            AtsBand::NeedsImprovement => "Needs improvement. Your resume may struggle with ATS systems.",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            AtsBand::Excellent => "band-excellent",
            AtsBand::Good => "band-good",
            AtsBand::Fair => "band-fair",
            AtsBand::NeedsImprovement => "band-needs-improvement",
        }
    }
}

/// 円形ゲージの寸法
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    /// 塗りつぶし割合（score / 100、0〜1にクランプ、丸めない）
    pub fraction: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl Gauge {
    pub fn new(score: f64) -> Self {
        let fraction = if score.is_finite() {
            (score / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let circumference = 2.0 * PI * GAUGE_RADIUS;
        Self {
            fraction,
            circumference,
            dash_offset: circumference - fraction * circumference,
        }
    }
}

/// 表示用の整数スコア
pub fn display_ats_score(score: f64) -> i64 {
    if score.is_finite() {
        score.round() as i64
    } else {
        0
    }
}

/// 応答の主要部分を取り出す（ats_score / analysis 欠落は形式エラー）
pub fn validate_payload(payload: &ResumeAnalysisPayload) -> Result<(f64, &ResumeAnalysis)> {
    let score = payload
        .ats_score
        .ok_or_else(|| Error::InvalidResponse("missing ats_score".to_string()))?;
    let analysis = payload
        .analysis
        .as_ref()
        .ok_or_else(|| Error::InvalidResponse("missing analysis".to_string()))?;
    Ok((score, analysis))
}

/// 解析結果全体をレンダリング
pub fn render_resume_results(payload: &ResumeAnalysisPayload) -> Result<String> {
    let (score, analysis) = validate_payload(payload)?;
    let band = AtsBand::from_score(score);
    let keywords = &payload.keywords_found;

    Ok(format!(
        r#"<div class="resume-results">
{gauge}
<div class="results-grid">
<div class="result-card strengths-card"><h3>💪 Strengths</h3><div class="list" id="strengths-list">{strengths}</div></div>
<div class="result-card weaknesses-card"><h3>⚠️ Areas for Improvement</h3><div class="list" id="weaknesses-list">{weaknesses}</div></div>
</div>
<div class="result-card keywords-card">
<h3>🔑 Technical Keywords Found</h3><div class="keyword-tags" id="technical-keywords">{technical}</div>
<h3>🤝 Soft Skills</h3><div class="keyword-tags" id="soft-skills">{soft}</div>
<h3>⚡ Action Verbs</h3><div class="keyword-tags" id="action-verbs">{verbs}</div>
<h3>❗ Missing Keywords</h3><div class="keyword-tags" id="missing-keywords">{missing}</div>
</div>
<div class="result-card actions-card"><h3>✅ Action Items</h3><div class="action-items" id="action-items">{actions}</div></div>
<div class="result-card feedback-card"><h3>📐 Formatting Feedback</h3><p id="formatting-feedback">{formatting}</p></div>
<div class="result-card impression-card"><h3>📝 Overall Impression</h3><p id="overall-impression">{impression}</p></div>
</div>"#,
        gauge = render_gauge(score, band),
        strengths = render_list(&analysis.strengths, "list-item"),
        weaknesses = render_list(&analysis.weaknesses, "list-item weakness"),
        technical = render_tags(&keywords.technical_skills, "keyword-tag", Some(TECHNICAL_KEYWORDS_EMPTY)),
        soft = render_tags(&keywords.soft_skills, "keyword-tag soft", None),
        verbs = render_tags(&keywords.action_verbs, "keyword-tag verb", None),
        missing = render_tags(&analysis.missing_keywords, "keyword-tag missing", Some(MISSING_KEYWORDS_EMPTY)),
        actions = render_action_items(&analysis.action_items),
        formatting = escape(raw_or_placeholder(analysis.formatting_feedback.as_deref())),
        impression = escape(raw_or_placeholder(analysis.overall_impression.as_deref())),
    ))
}

fn raw_or_placeholder(text: Option<&str>) -> &str {
    text.filter(|t| !t.trim().is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// スコアゲージ（グラデーション定義を含む）
fn render_gauge(score: f64, band: AtsBand) -> String {
    let gauge = Gauge::new(score);
    format!(
        r#"<div class="score-section {band_class}">
<svg class="score-circle" viewBox="0 0 200 200">
<defs><linearGradient id="scoreGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" style="stop-color:var(--accent-purple);stop-opacity:1" /><stop offset="100%" style="stop-color:var(--accent-pink);stop-opacity:1" /></linearGradient></defs>
<circle class="score-track" cx="100" cy="100" r="{r}" />
<circle class="score-fill" id="score-circle" cx="100" cy="100" r="{r}" stroke="url(#scoreGradient)" stroke-dasharray="{c:.4}" stroke-dashoffset="{offset:.4}" data-fraction="{fraction}" />
</svg>
<div class="score-number" id="ats-score">{display}</div>
<p class="score-band">{band}</p>
<p class="score-description" id="score-description">{description}</p>
</div>"#,
        band_class = band.css_class(),
        r = GAUGE_RADIUS,
        c = gauge.circumference,
        offset = gauge.dash_offset,
        fraction = gauge.fraction,
        display = display_ats_score(score),
        band = band.label(),
        description = band.description(),
    )
}

fn render_list(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<div class="{}">{}</div>"#, class, escape(item)))
        .collect()
}

fn render_tags(tags: &[String], class: &str, empty: Option<&str>) -> String {
    if tags.is_empty() {
        return empty
            .map(|m| format!(r#"<p class="empty-state">{}</p>"#, escape(m)))
            .unwrap_or_default();
    }
    tags.iter()
        .map(|tag| format!(r#"<span class="{}">{}</span>"#, class, escape(tag)))
        .collect()
}

/// アクション項目（入力順を維持し、優先度で並べ替えない）
fn render_action_items(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return format!(r#"<p class="empty-state">{}</p>"#, ACTION_ITEMS_EMPTY);
    }
    items
        .iter()
        .map(|a| {
            format!(
                r#"<div class="action-item"><span class="priority-badge priority-{key}">{badge}</span><div class="action-text">{text}</div></div>"#,
                key = a.priority.style_key(),
                badge = escape(a.priority.as_str()),
                text = escape(raw_or_placeholder(a.item.as_deref())),
            )
        })
        .collect()
}
