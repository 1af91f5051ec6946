//! キャリア推薦のHTMLレンダリング
//!
//! ペイロードから結果セクション全体のHTML断片を生成する。
//! 呼び出し側は前回の断片を丸ごと置き換えるので、同じ入力なら同じ出力になる。

use crate::html::{escape, safe_url};
use crate::sanitize::{sanitize, sanitize_or};
use crate::types::{
    Career, ConfidenceScore, Course, NextStep, Platform, RecommendationPayload, SkillGapAnalysis,
    UpskillBlock, Video,
};

// セクションごとの空表示（テストで区別できるようにすべて異なる文言）
pub const CAREERS_EMPTY: &str = "No career recommendations available";
pub const COURSES_EMPTY: &str = "No course recommendations available";
pub const STEPS_EMPTY: &str = "No steps available";
pub const UPSKILL_EMPTY: &str = "No upskill recommendations available";
pub const VIDEOS_EMPTY: &str = "No videos available";
pub const PLATFORMS_EMPTY: &str = "No platforms available";
pub const SKILL_GAPS_EMPTY: &str = "No skill gaps identified";

/// 通信失敗時の表示
pub const FAILURE_MESSAGE: &str = "❌ Failed to load recommendations.";

/// ローディング中の表示
pub const LOADING_MESSAGE: &str = "💡 Synthesizing your future...";

/// アニメーション対象のスコア要素ID
pub const SCORE_ELEMENT_ID: &str = "animated-score";

// プラットフォーム項目の既定表示
const PLATFORM_RATING: &str = "⭐ Avg Rating: 4.4 / 5";
const DEFAULT_CERTIFICATE: &str = "Available";
const DEFAULT_BEST_FOR: &str = "Skill development";
const DEFAULT_DURATION: &str = "Self-paced";
const DEFAULT_LEARNING_TYPE: &str = "Online learning";
const DEFAULT_DETAILS: &str = "Professional online learning platform";

const CAREER_CATEGORIES: [&str; 3] = ["tech", "business", "creative"];

const LIGHTBULB_PATH: &str = "M9,21A1,1 0 0,0 10,22H14A1,1 0 0,0 15,21V20H9V21M12,2A7,7 0 0,0 5,9C5,11.38 6.19,13.47 8,14.74V17A1,1 0 0,0 9,18H15A1,1 0 0,0 16,17V14.74C17.81,13.47 19,11.38 19,9A7,7 0 0,0 12,2Z";

/// Upskillセクションのレイアウト
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpskillLayout {
    /// 動画カードのグリッド + プラットフォーム一覧
    #[default]
    Grid,
    /// 先頭動画を大きく表示 + プラットフォーム一覧
    HeroVideo,
}

impl std::str::FromStr for UpskillLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(UpskillLayout::Grid),
            "hero" | "hero-video" => Ok(UpskillLayout::HeroVideo),
            _ => Err(format!("Unknown layout: {}. Use grid or hero", s)),
        }
    }
}

/// 確信度を表示用の整数に丸める（0〜100、非有限値は0）
pub fn display_score(score: Option<&ConfidenceScore>) -> u32 {
    let overall = score.and_then(|s| s.overall).unwrap_or(0.0);
    if !overall.is_finite() {
        return 0;
    }
    overall.round().clamp(0.0, 100.0) as u32
}

/// 推薦結果全体をレンダリング
pub fn render_recommendation(payload: &RecommendationPayload, layout: UpskillLayout) -> String {
    let connector = render_connector();
    format!(
        r#"<div class="results-section reveal-animation cascading-reveal">
{hero}
{connector}
<div class="glass-card careers-card">
<h3>🚀 Career Pathways</h3>
<div class="career-grid">{careers}</div>
</div>
{connector}
<div class="glass-card courses-card">
<h3>📚 Recommended Courses</h3>
<div class="course-list">{courses}</div>
</div>
{connector}
<div class="glass-card steps-card">
<h3>👣 Strategy &amp; Next Steps</h3>
<div class="steps-list">{steps}</div>
</div>
{connector}
<div class="glass-card skill-gap-card">
<h3>🧩 Skill Gaps</h3>
{skill_gaps}
</div>
{connector}
<div class="glass-card upskill-card">
<h3>🔥 Upskill (Recommended Learning)</h3>
{upskill}
</div>
</div>"#,
        hero = render_hero(payload.confidence_score.as_ref()),
        connector = connector,
        careers = render_careers(&payload.careers),
        courses = render_courses(&payload.courses),
        steps = render_steps(&payload.next_steps),
        skill_gaps = render_skill_gaps(payload.skill_gap_analysis.as_ref()),
        upskill = render_upskill(payload.upskill.as_ref(), layout),
    )
}

/// 空表示の段落
fn empty_state(message: &str) -> String {
    format!(r#"<p class="empty-state">{}</p>"#, escape(message))
}

fn render_connector() -> String {
    r#"<div class="flow-connector"><div class="connector-line"><div class="connector-arrow"></div></div></div>"#
        .to_string()
}

/// 電球ヒーロー + スコア
fn render_hero(score: Option<&ConfidenceScore>) -> String {
    let value = display_score(score);
    format!(
        r#"<div class="hero-lightbulb">
<div class="lightbulb-container"><svg class="lightbulb-svg" viewBox="0 0 24 24"><path d="{path}" /></svg></div>
<div class="score-display">
<div class="score-percentage" id="{id}" data-score="{value}">{value}%</div>
<div class="score-label">Career Potential Illuminated</div>
<p class="score-explanation">{explanation}</p>
</div>
</div>"#,
        path = LIGHTBULB_PATH,
        id = SCORE_ELEMENT_ID,
        value = value,
        explanation = escape(&sanitize(score.and_then(|s| s.explanation.as_deref()))),
    )
}

fn render_careers(careers: &[Career]) -> String {
    if careers.is_empty() {
        return empty_state(CAREERS_EMPTY);
    }
    careers
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                r#"<div class="career-card card-{category}"><h4>{name}</h4><p>{justification}</p></div>"#,
                category = CAREER_CATEGORIES[i % CAREER_CATEGORIES.len()],
                name = escape(&sanitize(c.name.as_deref())),
                justification = escape(&sanitize(c.justification.as_deref())),
            )
        })
        .collect()
}

fn render_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return empty_state(COURSES_EMPTY);
    }
    courses
        .iter()
        .map(|c| {
            format!(
                r#"<div class="course-item"><h4>{}</h4><p>{}</p></div>"#,
                escape(&sanitize(c.name.as_deref())),
                escape(&sanitize(c.description.as_deref())),
            )
        })
        .collect()
}

fn render_steps(steps: &[NextStep]) -> String {
    if steps.is_empty() {
        return empty_state(STEPS_EMPTY);
    }
    steps
        .iter()
        .enumerate()
        .map(|(i, n)| {
            format!(
                r#"<div class="step-item"><div class="step-number">{}</div><div class="step-content"><h4>{}</h4><p>{}</p></div></div>"#,
                i + 1,
                escape(&sanitize(n.action.as_deref())),
                escape(&sanitize(n.details.as_deref())),
            )
        })
        .collect()
}

fn render_skill_gaps(gaps: Option<&SkillGapAnalysis>) -> String {
    let skills = gaps.map(|g| g.missing_skills.as_slice()).unwrap_or_default();
    if skills.is_empty() {
        return empty_state(SKILL_GAPS_EMPTY);
    }
    let tags: String = skills
        .iter()
        .map(|s| format!(r#"<span class="skill-gap-tag">{}</span>"#, escape(&sanitize(Some(s)))))
        .collect();
    format!(r#"<div class="skill-gap-list">{}</div>"#, tags)
}

/// Upskillブロック
fn render_upskill(upskill: Option<&UpskillBlock>, layout: UpskillLayout) -> String {
    let Some(u) = upskill else {
        return empty_state(UPSKILL_EMPTY);
    };

    let videos = match layout {
        UpskillLayout::Grid => render_video_grid(&u.videos),
        UpskillLayout::HeroVideo => render_hero_video(&u.videos),
    };

    format!(
        r#"<div class="upskill-section upskill-{layout}">
<div class="upskill-header"><h3 class="upskill-title">{title}</h3><p class="upskill-description">{description}</p></div>
{videos}
<div class="platform-list"><h4>🌐 Online Learning Platforms</h4>{platforms}</div>
</div>"#,
        layout = match layout {
            UpskillLayout::Grid => "grid",
            UpskillLayout::HeroVideo => "hero",
        },
        title = escape(&sanitize(u.title.as_deref())),
        description = escape(&sanitize(u.description.as_deref())),
        videos = videos,
        platforms = render_platforms(&u.platforms),
    )
}

fn render_video_card(v: &Video, class: &str) -> String {
    format!(
        r#"<div class="{class}">
<a href="{url}" target="_blank" rel="noopener"><img src="{thumbnail}" class="video-thumbnail" alt="Video thumbnail" /></a>
<div class="video-info"><span class="video-platform">{platform}</span><p class="video-explanation">{explanation}</p></div>
</div>"#,
        class = class,
        url = safe_url(v.url.as_deref()),
        thumbnail = safe_url(v.thumbnail.as_deref()),
        platform = escape(&sanitize(v.platform.as_deref())),
        explanation = escape(&sanitize(v.explanation.as_deref())),
    )
}

fn render_video_grid(videos: &[Video]) -> String {
    if videos.is_empty() {
        return empty_state(VIDEOS_EMPTY);
    }
    let cards: String = videos.iter().map(|v| render_video_card(v, "video-card")).collect();
    format!(r#"<div class="video-grid">{}</div>"#, cards)
}

fn render_hero_video(videos: &[Video]) -> String {
    match videos.first() {
        Some(v) => render_video_card(v, "video-hero"),
        None => empty_state(VIDEOS_EMPTY),
    }
}

fn render_platforms(platforms: &[Platform]) -> String {
    if platforms.is_empty() {
        return empty_state(PLATFORMS_EMPTY);
    }
    platforms
        .iter()
        .map(|p| {
            format!(
                r#"<div class="platform-item">
<h4><a href="{url}" target="_blank" rel="noopener">{name}</a></h4>
<p>{rating} • Certificate: {certificate}<br>
🧠 <strong>Best for:</strong> {best_for}<br>
⏱ <strong>Duration:</strong> {duration}<br>
📚 <strong>Learning Type:</strong> {learning_type}<br>
📄 {details}</p>
</div>"#,
                url = safe_url(p.url.as_deref()),
                name = escape(&sanitize(p.name.as_deref())),
                rating = PLATFORM_RATING,
                certificate = escape(&sanitize_or(p.certificate.as_deref(), DEFAULT_CERTIFICATE)),
                best_for = escape(&sanitize_or(p.best_for.as_deref(), DEFAULT_BEST_FOR)),
                duration = escape(&sanitize_or(p.duration.as_deref(), DEFAULT_DURATION)),
                learning_type = escape(&sanitize_or(p.learning_type.as_deref(), DEFAULT_LEARNING_TYPE)),
                details = escape(&sanitize_or(p.details.as_deref(), DEFAULT_DETAILS)),
            )
        })
        .collect()
}
