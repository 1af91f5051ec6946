//! 表示用テキストの正規化
//!
//! バックエンドやAIの出力に含まれる改行・連続空白を1つの空白にまとめる。
//! HTMLエスケープは行わない（`html::escape` を別途適用すること）。

/// 値が無い場合の表示文字列
pub const NOT_AVAILABLE: &str = "Not available";

/// 空白を正規化し、空・"undefined" の場合は [`NOT_AVAILABLE`] を返す
///
/// 判定は正規化後の文字列に対して行うため、`sanitize(sanitize(x)) == sanitize(x)` が成り立つ。
///
/// # Examples
/// ```
/// use guidefy_common::sanitize;
///
/// assert_eq!(sanitize(Some("  Data \n\t Scientist ")), "Data Scientist");
/// assert_eq!(sanitize(Some("undefined")), "Not available");
/// assert_eq!(sanitize(None), "Not available");
/// ```
pub fn sanitize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return NOT_AVAILABLE.to_string();
    };

    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() || normalized == "undefined" {
        NOT_AVAILABLE.to_string()
    } else {
        normalized
    }
}

/// 値が無い・空の場合に `default` を使ってから正規化する
pub fn sanitize_or(text: Option<&str>, default: &str) -> String {
    let text = text.filter(|t| !t.is_empty()).unwrap_or(default);
    sanitize(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize(Some("a\n\nb\t c")), "a b c");
        assert_eq!(sanitize(Some("   leading and trailing   ")), "leading and trailing");
    }

    #[test]
    fn test_sanitize_placeholder() {
        assert_eq!(sanitize(None), NOT_AVAILABLE);
        assert_eq!(sanitize(Some("")), NOT_AVAILABLE);
        assert_eq!(sanitize(Some("undefined")), NOT_AVAILABLE);
        assert_eq!(sanitize(Some(" \n\t ")), NOT_AVAILABLE);
        assert_eq!(sanitize(Some("  undefined ")), NOT_AVAILABLE);
    }

    #[test]
    fn test_sanitize_keeps_markup_characters() {
        // エスケープはhtmlモジュールの責務
        assert_eq!(sanitize(Some("<b>bold</b>")), "<b>bold</b>");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let samples = [
            "",
            " ",
            "undefined",
            " undefined ",
            "Not available",
            "multi\nline\r\ntext",
            "\u{3000}全角スペース\u{3000}",
            "plain",
        ];
        for sample in samples {
            let once = sanitize(Some(sample));
            assert_eq!(sanitize(Some(&once)), once, "入力: {:?}", sample);
        }
    }

    #[test]
    fn test_sanitize_or_default() {
        assert_eq!(sanitize_or(None, "Self-paced"), "Self-paced");
        assert_eq!(sanitize_or(Some(""), "Self-paced"), "Self-paced");
        assert_eq!(sanitize_or(Some(" 6  weeks "), "Self-paced"), "6 weeks");
    }
}
