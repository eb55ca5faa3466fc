/// Lowercase free text and strip every character outside `[a-z0-9,\s]`
///
/// Pure and idempotent; an empty input yields an empty string.
#[inline]
pub fn clean_text(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ',' || c.is_whitespace()
        })
        .collect();
    cleaned.trim().to_string()
}

/// Split cleaned text into keywords
///
/// Comma-separated input splits on commas, otherwise on whitespace.
/// Token order follows the original text; duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    if cleaned.contains(',') {
        cleaned
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    } else {
        cleaned.split_whitespace().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_lowercases_and_strips() {
        assert_eq!(clean_text("Fever & Chills!"), "fever  chills");
        assert_eq!(clean_text("  Headache.  "), "headache");
    }

    #[test]
    fn test_clean_text_keeps_commas_and_digits() {
        assert_eq!(clean_text("Fever, 38C"), "fever, 38c");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let inputs = ["Fever, Cough!", "  MILD fever  ", "", "a,b,,c"];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_extract_keywords_comma_separated() {
        assert_eq!(
            extract_keywords("Fever, Cough, Headache"),
            vec!["fever", "cough", "headache"]
        );
    }

    #[test]
    fn test_extract_keywords_whitespace_separated() {
        assert_eq!(
            extract_keywords("mild fever and cough"),
            vec!["mild", "fever", "and", "cough"]
        );
    }

    #[test]
    fn test_extract_keywords_drops_empty_tokens() {
        assert_eq!(extract_keywords("fever,,cough,"), vec!["fever", "cough"]);
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_extract_keywords_keeps_duplicates() {
        assert_eq!(
            extract_keywords("cough, fever, cough"),
            vec!["cough", "fever", "cough"]
        );
    }
}
