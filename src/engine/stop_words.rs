use std::{collections::HashSet, sync::LazyLock};

/// Common English function words excluded from every document
const STOP_WORD_LIST: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall",
    "this", "that", "these", "those", "it", "its", "not", "no", "nor", "so", "yet",
    "both", "either", "neither", "whether", "as", "if", "than", "then", "when", "where",
    "which", "who", "what", "how", "all", "each", "every", "few", "more", "most",
    "other", "some", "such", "only", "own", "same", "too", "very", "just", "also", "i",
    "we", "you", "he", "she", "they", "their", "our", "your", "his", "her", "my",
    "can", "cannot", "about", "into", "through", "during", "before", "after", "above",
    "between", "out", "off", "over", "under", "again", "further", "once", "here", "there",
    "while", "although", "because", "since", "rather", "even", "still", "already",
    "without", "within", "along", "across", "behind", "beyond", "up", "down", "new",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Check whether `word` (already lowercased) is a stop word
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
