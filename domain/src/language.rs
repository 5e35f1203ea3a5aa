//! Script detection and language-dependent fallback text.
//!
//! Classification looks only at Unicode ranges: kana wins over CJK
//! ideographs, anything else is Latin. Mixed-script text can misclassify —
//! that boundary is part of the observable contract and is kept as-is.

/// Writing system detected in a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Japanese,
    Chinese,
    Latin,
}

/// Detect the script of `text` by Unicode ranges.
///
/// Any kana code point → Japanese; else any CJK ideograph → Chinese;
/// else Latin.
pub fn detect_script(text: &str) -> Script {
    let mut has_cjk = false;
    for c in text.chars() {
        match c {
            // Hiragana + Katakana
            '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' => return Script::Japanese,
            // CJK Unified Ideographs
            '\u{4E00}'..='\u{9FFF}' => has_cjk = true,
            _ => {}
        }
    }
    if has_cjk { Script::Chinese } else { Script::Latin }
}

/// Templated apology used by the last fallback stage, per script.
pub fn apology(script: Script) -> &'static str {
    match script {
        Script::Japanese => {
            "申し訳ありません。現在リクエストを処理できませんでした。もう一度お試しください。"
        }
        Script::Chinese => "抱歉，当前无法处理您的请求，请稍后再试。",
        Script::Latin => "Sorry, I couldn't process your request right now. Please try again.",
    }
}

/// English interrogative markers for the information-query heuristic.
const EN_QUERY_MARKERS: &[&str] = &[
    "what", "which", "where", "when", "who", "how", "is there", "are there", "do i", "does",
    "status", "state",
];

/// Japanese interrogative markers.
const JA_QUERY_MARKERS: &[&str] = &["ですか", "ますか", "教えて", "どこ", "なに", "何", "いくつ"];

/// Chinese interrogative markers.
const ZH_QUERY_MARKERS: &[&str] = &["吗", "什么", "哪", "多少", "几", "状态"];

/// Surface-pattern test: does the text look like an information query?
///
/// Deliberately small and approximate; only used to pick between the
/// heuristic tool-call fallback and the plain apology.
pub fn is_information_query(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.ends_with('?') || trimmed.ends_with('？') {
        return true;
    }

    let markers: &[&str] = match detect_script(trimmed) {
        Script::Japanese => JA_QUERY_MARKERS,
        Script::Chinese => ZH_QUERY_MARKERS,
        Script::Latin => EN_QUERY_MARKERS,
    };

    let lowered = trimmed.to_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_latin() {
        assert_eq!(detect_script("turn on the light"), Script::Latin);
        assert_eq!(detect_script(""), Script::Latin);
    }

    #[test]
    fn test_detect_japanese_by_kana() {
        assert_eq!(detect_script("電気をつけて"), Script::Japanese);
        assert_eq!(detect_script("ライトオン"), Script::Japanese);
    }

    #[test]
    fn test_detect_chinese_by_ideographs() {
        assert_eq!(detect_script("打开客厅的灯"), Script::Chinese);
    }

    #[test]
    fn test_kana_wins_over_ideographs() {
        // Ideographs plus kana classifies as Japanese
        assert_eq!(detect_script("電気を消して"), Script::Japanese);
    }

    #[test]
    fn test_apology_templates_differ() {
        assert_ne!(apology(Script::Japanese), apology(Script::Chinese));
        assert_ne!(apology(Script::Chinese), apology(Script::Latin));
    }

    #[test]
    fn test_information_query_question_mark() {
        assert!(is_information_query("is the light on?"));
        assert!(is_information_query("部屋は暑い？"));
    }

    #[test]
    fn test_information_query_markers() {
        assert!(is_information_query("what lights are on"));
        assert!(is_information_query("電気の状態を教えて"));
        assert!(is_information_query("灯开着吗"));
    }

    #[test]
    fn test_not_information_query() {
        assert!(!is_information_query("turn on the light"));
        assert!(!is_information_query(""));
    }
}
