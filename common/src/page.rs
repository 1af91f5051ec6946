//! 単体HTMLレポート
//!
//! CLIが書き出すレポート用に、レンダリング済み断片をスタイル付きの
//! HTML文書で包む。

use crate::html::escape;
use crate::status::IndicatorState;

const REPORT_CSS: &str = r#"
:root { --accent-purple: #8b5cf6; --accent-pink: #ec4899; --text-tertiary: #94a3b8; }
body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; padding: 2rem; }
main { max-width: 960px; margin: 0 auto; }
.status { display: inline-block; padding: .25rem .75rem; border-radius: 999px; background: #1e293b; }
.glass-card, .result-card { background: rgba(30, 41, 59, .8); border-radius: 12px; padding: 1.25rem; margin: 1rem 0; }
.career-grid, .video-grid, .results-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
.career-card { border-left: 4px solid #38bdf8; padding: .75rem; }
.card-business { border-color: #f59e0b; } .card-creative { border-color: #ec4899; }
.step-item { display: flex; gap: .75rem; } .step-number { font-weight: 700; color: #38bdf8; }
.video-thumbnail { width: 100%; border-radius: 8px; }
.score-percentage, .score-number { font-size: 3rem; font-weight: 800; }
.score-circle { width: 200px; height: 200px; transform: rotate(-90deg); }
.score-track { fill: none; stroke: #1e293b; stroke-width: 12; }
.score-fill { fill: none; stroke-width: 12; stroke-linecap: round; }
.list-item { padding: .5rem; border-left: 3px solid #22c55e; margin: .25rem 0; }
.list-item.weakness { border-color: #ef4444; }
.keyword-tag, .skill-gap-tag { display: inline-block; padding: .2rem .6rem; margin: .2rem; border-radius: 999px; background: #334155; }
.keyword-tag.missing { background: #7f1d1d; }
.priority-badge { text-transform: uppercase; font-size: .75rem; padding: .1rem .5rem; border-radius: 4px; background: #475569; }
.priority-high { background: #dc2626; } .priority-medium { background: #d97706; } .priority-low { background: #16a34a; }
.empty-state { color: var(--text-tertiary); }
"#;

/// 断片を完全なHTML文書にする
pub fn wrap_document(title: &str, status: Option<IndicatorState>, body: &str) -> String {
    let status_html = status
        .map(|s| {
            format!(
                r#"<div class="status {}">{}</div>"#,
                s.css_class(),
                escape(s.label())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<main>
<h1>{title}</h1>
{status}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        css = REPORT_CSS,
        status = status_html,
        body = body,
    )
}
