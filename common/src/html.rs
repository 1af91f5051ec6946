//! HTMLエスケープとURL検証
//!
//! レンダラーは文字列テンプレートでHTMLを組み立てるため、
//! 差し込むテキストはすべてここを通す。

/// テキスト・属性値として安全な形にエスケープ
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// href/src 用のURL
///
/// http(s) 以外（javascript: など）や空の場合は `#` を返す。
pub fn safe_url(url: Option<&str>) -> String {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return "#".to_string();
    };

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        escape(url)
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Data Scientist"), "Data Scientist");
        assert_eq!(escape("データ分析"), "データ分析");
    }

    #[test]
    fn test_safe_url_accepts_http() {
        assert_eq!(
            safe_url(Some("https://www.youtube.com/watch?v=abc&t=1")),
            "https://www.youtube.com/watch?v=abc&amp;t=1"
        );
        assert_eq!(safe_url(Some("HTTP://example.com")), "HTTP://example.com");
    }

    #[test]
    fn test_safe_url_rejects_other_schemes() {
        assert_eq!(safe_url(Some("javascript:alert(1)")), "#");
        assert_eq!(safe_url(Some("data:text/html,hi")), "#");
        assert_eq!(safe_url(Some("   ")), "#");
        assert_eq!(safe_url(None), "#");
    }
}
