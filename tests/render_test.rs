//! レンダリング統合テスト
//!
//! バックエンドの応答本文からレポート文書までを通しで検証

use guidefy::report;
use guidefy_common::recommendation::{
    CAREERS_EMPTY, COURSES_EMPTY, FAILURE_MESSAGE, PLATFORMS_EMPTY, SKILL_GAPS_EMPTY, STEPS_EMPTY,
    UPSKILL_EMPTY,
};
use guidefy_common::resume::{MISSING_KEYWORDS_EMPTY, TECHNICAL_KEYWORDS_EMPTY};
use guidefy_common::{
    parse_career_response, render_recommendation, render_resume_results, wrap_document,
    AtsBand, IndicatorState, ResumeAnalysisPayload, SubmitController, UpskillLayout,
};
use tempfile::tempdir;

const CAREER_BODY: &str = r#"{
    "recommendation": {
        "careers": [
            {"name": "Software Developer", "justification": "Strong logical thinking"},
            {"name": "Data Analyst", "justification": null},
            {"name": "Technical Writer", "justification": "Enjoys explaining"}
        ],
        "courses": [{"name": "CS50", "description": "Intro to computer science"}],
        "next_steps": [
            {"action": "Learn Git", "details": "Version control basics"},
            {"action": "Ship a project", "details": "Deploy something small"}
        ],
        "confidence_score": {"overall": 82.5, "explanation": "Interests match well"},
        "skill_gap_analysis": {"missing_skills": ["SQL", "Statistics"]},
        "upskill": {
            "title": "Developer Starter Pack",
            "description": "Curated picks",
            "videos": [
                {"url": "https://www.youtube.com/watch?v=abc", "thumbnail": "https://i.ytimg.com/vi/abc/0.jpg", "platform": "YouTube", "explanation": "Crash course"}
            ],
            "platforms": [
                {"name": "freeCodeCamp", "url": "https://www.freecodecamp.org", "certificate": "Free certificate"}
            ]
        }
    }
}"#;

const RESUME_BODY: &str = r#"{
    "ats_score": 58,
    "keywords_found": {
        "technical_skills": ["Rust", "SQL"],
        "soft_skills": ["Teamwork"],
        "action_verbs": ["Led"]
    },
    "analysis": {
        "strengths": ["Clear structure"],
        "weaknesses": ["No metrics"],
        "missing_keywords": ["Docker"],
        "action_items": [
            {"item": "Quantify achievements", "priority": "high"},
            {"item": "Add a summary"}
        ],
        "formatting_feedback": "Consistent fonts",
        "overall_impression": "Solid base"
    }
}"#;

#[test]
fn test_career_report_end_to_end() {
    let payload = parse_career_response(CAREER_BODY).expect("応答の解釈に失敗");
    let mut controller = SubmitController::new(UpskillLayout::Grid);
    controller.begin().expect("開始失敗");
    let html = controller.finish_ok(&payload);

    assert!(html.contains("83%"));
    assert!(html.contains("card-tech"));
    assert!(html.contains("card-business"));
    assert!(html.contains("card-creative"));
    assert!(html.contains("CS50"));
    assert!(html.contains(r#"<div class="step-number">2</div>"#));
    assert!(html.contains(r#"<span class="skill-gap-tag">SQL</span>"#));
    assert!(html.contains("https://www.freecodecamp.org"));
    for empty in [CAREERS_EMPTY, COURSES_EMPTY, STEPS_EMPTY, UPSKILL_EMPTY, PLATFORMS_EMPTY, SKILL_GAPS_EMPTY] {
        assert!(!html.contains(empty), "空表示が出ている: {}", empty);
    }

    let dir = tempdir().expect("Failed to create temp dir");
    let path = report::default_report_path(dir.path(), "career");
    report::write_report(&path, &wrap_document("Career Recommendation", Some(IndicatorState::Online), &html))
        .expect("書き込み失敗");

    let written = std::fs::read_to_string(&path).expect("読み込み失敗");
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("🟢 AI System: Online"));
    assert!(written.contains("Software Developer"));
}

#[test]
fn test_empty_recommendation_shows_every_empty_state() {
    let payload = parse_career_response(r#"{"recommendation": {}}"#).expect("応答の解釈に失敗");
    let html = render_recommendation(&payload, UpskillLayout::HeroVideo);

    for empty in [CAREERS_EMPTY, COURSES_EMPTY, STEPS_EMPTY, UPSKILL_EMPTY, SKILL_GAPS_EMPTY] {
        assert!(html.contains(empty), "空表示がない: {}", empty);
    }
    assert!(html.contains("0%"));
}

#[test]
fn test_career_failure_paths() {
    let mut controller = SubmitController::default();

    controller.begin().expect("開始失敗");
    let err = parse_career_response("<html>Bad Gateway</html>").unwrap_err();
    let (message, state) = controller.finish_err(&err);
    assert_eq!(message, FAILURE_MESSAGE);
    assert_eq!(state, IndicatorState::Offline);

    controller.begin().expect("失敗後に再送信できるべき");
    let err = parse_career_response(r#"{"error": "Model quota exceeded"}"#).unwrap_err();
    let (message, _) = controller.finish_err(&err);
    assert_eq!(message, "❌ Model quota exceeded");
}

#[test]
fn test_resume_report_end_to_end() {
    let payload: ResumeAnalysisPayload = serde_json::from_str(RESUME_BODY).expect("デシリアライズ失敗");
    let html = render_resume_results(&payload).expect("描画失敗");

    assert!(html.contains(r#"<div class="score-number" id="ats-score">58</div>"#));
    assert!(html.contains(AtsBand::Fair.description()));
    assert!(html.contains(r#"<span class="keyword-tag">Rust</span>"#));
    assert!(html.contains(r#"<span class="keyword-tag missing">Docker</span>"#));
    assert!(html.contains("priority-badge priority-high"));
    assert!(html.contains("priority-badge priority-medium"));
    assert!(html.contains("Consistent fonts"));
    assert!(html.contains("Solid base"));
    assert!(!html.contains(TECHNICAL_KEYWORDS_EMPTY));
    assert!(!html.contains(MISSING_KEYWORDS_EMPTY));

    // 優先度バッジは入力順
    let high = html.find("Quantify achievements").expect("項目1がない");
    let medium = html.find("Add a summary").expect("項目2がない");
    assert!(high < medium);

    let summary = report::resume_summary(&payload);
    assert!(summary.iter().any(|line| line.contains("58")));
}

#[test]
fn test_second_resume_render_has_no_previous_items() {
    let first: ResumeAnalysisPayload = serde_json::from_str(RESUME_BODY).expect("デシリアライズ失敗");
    let second: ResumeAnalysisPayload = serde_json::from_str(
        r#"{"ats_score": 91, "analysis": {"strengths": ["Great impact"]}}"#,
    )
    .expect("デシリアライズ失敗");

    let _ = render_resume_results(&first).expect("描画失敗");
    let html = render_resume_results(&second).expect("描画失敗");

    assert!(html.contains("Great impact"));
    assert!(!html.contains("Clear structure"));
    assert!(!html.contains("Docker"));
    assert!(html.contains(TECHNICAL_KEYWORDS_EMPTY));
}
