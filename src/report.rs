//! レポート出力
//!
//! レンダリング済みHTMLをファイルに書き出し、ターミナルに要約を表示する。

use crate::error::Result;
use guidefy_common::resume::display_ats_score;
use guidefy_common::{display_score, sanitize, AtsBand, RecommendationPayload, ResumeAnalysisPayload};
use std::path::{Path, PathBuf};

/// 既定のレポートファイル名（prefix-YYYYmmdd-HHMMSS.html）
pub fn default_report_path(output_dir: &Path, prefix: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    output_dir.join(format!("{}-{}.html", prefix, stamp))
}

/// HTMLを書き出す（親ディレクトリが無ければ作成）
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

/// 推薦結果の要約
pub fn recommendation_summary(payload: &RecommendationPayload) -> Vec<String> {
    let mut lines = vec![format!(
        "確信度: {}%",
        display_score(payload.confidence_score.as_ref())
    )];

    if payload.careers.is_empty() {
        lines.push("キャリア候補: なし".to_string());
    } else {
        lines.push("キャリア候補:".to_string());
        for career in &payload.careers {
            lines.push(format!("  - {}", sanitize(career.name.as_deref())));
        }
    }

    lines.push(format!(
        "コース: {}件 / 次のステップ: {}件",
        payload.courses.len(),
        payload.next_steps.len()
    ));
    lines
}

/// 履歴書解析の要約
pub fn resume_summary(payload: &ResumeAnalysisPayload) -> Vec<String> {
    let score = payload.ats_score.unwrap_or(0.0);
    let mut lines = vec![format!(
        "ATSスコア: {} ({})",
        display_ats_score(score),
        AtsBand::from_score(score).label()
    )];

    if let Some(analysis) = &payload.analysis {
        lines.push(format!(
            "強み: {}件 / 改善点: {}件 / アクション: {}件",
            analysis.strengths.len(),
            analysis.weaknesses.len(),
            analysis.action_items.len()
        ));
        for item in &analysis.action_items {
            lines.push(format!(
                "  [{}] {}",
                item.priority.as_str(),
                sanitize(item.item.as_deref())
            ));
        }
    }
    lines
}
