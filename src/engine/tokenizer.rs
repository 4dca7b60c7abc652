use super::stop_words::is_stop_word;

/// Shortest piece (in chars) that survives tokenization
pub const MIN_TOKEN_LEN: usize = 3;

/// Tokenize free text into normalized terms
///
/// - lowercases the input
/// - turns anything that is not `[a-z0-9]`, whitespace, `'` or `-` into a space
/// - splits on whitespace runs
/// - strips leading/trailing `-` and `'`
/// - drops pieces shorter than [`MIN_TOKEN_LEN`] and stop words
///
/// Order and multiplicity are preserved, the TF stage depends on them.
///
/// # Examples
/// ```
/// use thematic_recommender::engine::tokenizer::tokenize;
/// let tokens = tokenize("A noir thriller about a corrupt detective's city");
/// assert_eq!(tokens, vec!["noir", "thriller", "corrupt", "detective's", "city"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(|piece| piece.trim_matches(|c| c == '-' || c == '\''))
        .filter(|piece| piece.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(piece))
        .map(str::to_owned)
        .collect()
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '\'' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Rain, SHADOW; and silence!"),
            vec!["rain", "shadow", "silence"]
        );
    }

    #[test]
    fn keeps_inner_hyphens_and_apostrophes() {
        assert_eq!(
            tokenize("a rain-soaked city's -edge- 'quoted'"),
            vec!["rain-soaked", "city's", "edge", "quoted"]
        );
    }

    #[test]
    fn drops_short_pieces_and_stop_words() {
        assert_eq!(tokenize("an ox is by the sea of war"), vec!["sea", "war"]);
    }

    #[test]
    fn non_ascii_letters_split_words() {
        // é is not in the kept class, so it becomes a separator
        assert_eq!(tokenize("Théo Masson"), vec!["masson"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("noir noir detective noir"),
            vec!["noir", "noir", "detective", "noir"]
        );
    }

    #[test]
    fn retokenizing_joined_tokens_is_stable() {
        let text = "A haunting noir detective film about corruption -- and shadows' 'edges' 1970s co-op";
        let first = tokenize(text);
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }
}
