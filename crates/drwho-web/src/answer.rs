/// Keyword derivation from question-answering output.
///
/// The QA service answers in prose but is prompted to include a labeled
/// line naming the main treatment area, e.g.
/// `주요 진료분야(Main): Lung-Cancer*`. The search keyword is the segment
/// before the first `-`, with emphasis asterisks stripped. Without the
/// labeled line there is no keyword and the professor search is skipped.
use regex::Regex;

/// Find the labeled main-specialty line and derive the keyword from it.
///
/// Returns `None` when the line is absent or the derivation ends up empty.
pub fn extract_main_keyword(answer: &str) -> Option<String> {
    let main_line_re = Regex::new(r"주요 진료분야\(Main\): ([^\n]+)").expect("valid regex");
    let caps = main_line_re.captures(answer)?;

    let keyword = caps[1]
        .trim()
        .split('-')
        .next()
        .unwrap_or("")
        .replace('*', "");
    let keyword = keyword.trim();

    if keyword.is_empty() {
        None
    } else {
        Some(keyword.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_after_hyphen() {
        let answer = "추천 결과입니다.\n주요 진료분야(Main): Lung-Cancer*\n감사합니다.";
        assert_eq!(extract_main_keyword(answer).as_deref(), Some("Lung"));
    }

    #[test]
    fn strips_emphasis_asterisks() {
        let answer = "주요 진료분야(Main): **폐암**";
        assert_eq!(extract_main_keyword(answer).as_deref(), Some("폐암"));
    }

    #[test]
    fn no_labeled_line_yields_none() {
        assert_eq!(extract_main_keyword("진료분야를 찾지 못했습니다."), None);
        assert_eq!(extract_main_keyword(""), None);
    }

    #[test]
    fn empty_derivation_yields_none() {
        assert_eq!(extract_main_keyword("주요 진료분야(Main): ** - 폐암"), None);
    }

    #[test]
    fn takes_only_the_labeled_line() {
        let answer = "주요 진료분야(Main): 위암\n세부 분야: 복강경 수술";
        assert_eq!(extract_main_keyword(answer).as_deref(), Some("위암"));
    }
}
