//! Text helpers shared by the offline search and inference providers.

use unicode_segmentation::UnicodeSegmentation;

/// Words ignored when matching questions against passages.
pub const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were", "for", "to", "of",
    "in", "and", "or", "but", "with", "by", "from", "this", "that", "be", "have", "has", "had",
    "it", "its", "their", "they", "them", "how", "what", "why", "when", "where", "who", "do",
    "does", "can", "could", "should", "would", "i", "my", "me", "you", "your", "we", "our",
];

/// Lowercased words of `text` with stop words removed, in order of appearance.
pub fn keywords(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(str::to_lowercase)
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_drop_stop_words_and_punctuation() {
        assert_eq!(
            keywords("How do I reset my VPN password?"),
            vec!["reset", "vpn", "password"]
        );
    }

    #[test]
    fn test_keywords_unicode() {
        assert_eq!(keywords("Wie ändere ich das Passwort?"), vec![
            "wie", "ändere", "ich", "das", "passwort"
        ]);
    }

    #[test]
    fn test_keywords_empty() {
        assert!(keywords("  ?! ").is_empty());
    }
}
