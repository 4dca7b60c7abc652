use std::{cmp::Ordering, collections::HashSet};

use indexmap::IndexSet;
use num::Float;

use crate::{catalog::Item, vectorizer::IDFVector};

/// Default number of shared terms considered for a reason
pub const DEFAULT_MAX_SHARED_TERMS: usize = 3;

/// Human phrase for a thematic term, `None` for terms without one
///
/// Static table, no runtime mutation path.
pub fn theme_phrase(term: &str) -> Option<&'static str> {
    let phrase = match term {
        "identity" => "identity",
        "memory" => "memory",
        "grief" => "grief",
        "loss" => "loss",
        "silence" => "silence",
        "isolation" => "isolation",
        "darkness" => "darkness",
        "corruption" => "moral ambiguity",
        "city" | "urban" => "urban life",
        "noir" => "noir atmosphere",
        "detective" => "detective noir",
        "crime" => "crime",
        "consciousness" => "consciousness",
        "perception" => "perception",
        "survival" => "survival",
        "nature" => "nature",
        "landscape" => "landscape",
        "documentary" => "documentary craft",
        "art" => "artistic process",
        "cinema" => "cinema itself",
        "film" => "the art of filmmaking",
        "preservation" => "preservation",
        "archive" => "archival memory",
        "trauma" => "trauma",
        "horror" => "dread",
        "fear" => "fear",
        "romance" => "romance",
        "love" => "love",
        "longing" => "longing",
        "mystery" => "mystery",
        "investigation" => "investigation",
        "experimental" => "formal experimentation",
        "formal" => "formal invention",
        "body" => "bodily experience",
        "physical" => "physicality",
        "time" => "time",
        "repetition" => "repetition",
        "devotion" => "devotion",
        "power" => "power",
        "institution" => "institutions",
        "political" => "politics",
        "complicity" => "complicity",
        "moral" => "moral weight",
        "community" => "community",
        "belonging" => "belonging",
        _ => return None,
    };
    Some(phrase)
}

/// Most distinctive terms the two documents share
///
/// Intersection of both token sets (query first-seen order), sorted by IDF
/// descending, equal weights keeping query order, truncated to `max_terms`.
pub fn shared_themes<'a, N, S>(
    query_tokens: &'a [S],
    candidate_tokens: &[S],
    idf: &IDFVector<N>,
    max_terms: usize,
) -> Vec<&'a str>
where
    N: Float,
    S: AsRef<str>,
{
    let candidate_set: HashSet<&str> = candidate_tokens.iter().map(|t| t.as_ref()).collect();
    let mut shared: Vec<&'a str> = query_tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .filter(|term| candidate_set.contains(term))
        .collect();
    shared.sort_by(|a, b| {
        idf.weight(b)
            .partial_cmp(&idf.weight(a))
            .unwrap_or(Ordering::Equal)
    });
    shared.truncate(max_terms);
    shared
}

/// Render the justification for recommending `candidate` to someone who
/// wanted `query`
///
/// Template priority:
/// 1. two or more mapped phrases
/// 2. exactly one mapped phrase
/// 3. a shared genre (case-insensitive)
/// 4. generic, naming only the query title
pub fn reason_text<S>(query: &Item, candidate: &Item, shared_terms: &[S]) -> String
where
    S: AsRef<str>,
{
    let phrases: IndexSet<&'static str> = shared_terms
        .iter()
        .filter_map(|term| theme_phrase(term.as_ref()))
        .collect();

    if let (Some(first), Some(second)) = (phrases.get_index(0), phrases.get_index(1)) {
        return format!(
            "Like {}, this film explores themes of {} and {} with a similarly assured sense of craft.",
            query.title, first, second
        );
    }
    if let Some(only) = phrases.first() {
        return format!(
            "Shares {}'s preoccupation with {}, brought to life through bold and distinctive filmmaking.",
            query.title, only
        );
    }
    if let Some(genre) = first_shared_genre(query, candidate) {
        return format!(
            "A compelling {} film with the same emotional intensity and artistic rigour as {}.",
            genre.to_lowercase(),
            query.title
        );
    }
    format!(
        "Selected for its thematic resonance with {} — a film that shares its commitment to authentic, uncompromising storytelling.",
        query.title
    )
}

/// First genre of `query` (in query order) that `candidate` also carries
fn first_shared_genre<'a>(query: &'a Item, candidate: &Item) -> Option<&'a str> {
    query
        .genres
        .iter()
        .find(|genre| {
            let genre = genre.to_lowercase();
            candidate
                .genres
                .iter()
                .any(|other| other.to_lowercase() == genre)
        })
        .map(String::as_str)
}

/// Shared themes and rendered reason in one step
pub fn explain<N, S>(
    query_tokens: &[S],
    candidate_tokens: &[S],
    idf: &IDFVector<N>,
    query: &Item,
    candidate: &Item,
    max_terms: usize,
) -> String
where
    N: Float,
    S: AsRef<str>,
{
    let shared = shared_themes(query_tokens, candidate_tokens, idf, max_terms);
    reason_text(query, candidate, &shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TFIDFVectorizer;

    fn item(id: u64, title: &str, genres: &[&str]) -> Item {
        Item::new(id, title).with_genres(genres.iter().copied())
    }

    fn idf_of(docs: &[&str]) -> (TFIDFVectorizer, Vec<Vec<String>>) {
        let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(docs);
        let tokens = vectorizer.tokens.clone();
        (vectorizer, tokens)
    }

    #[test]
    fn phrase_table_lookups() {
        assert_eq!(theme_phrase("noir"), Some("noir atmosphere"));
        assert_eq!(theme_phrase("corruption"), Some("moral ambiguity"));
        assert_eq!(theme_phrase("urban"), theme_phrase("city"));
        assert_eq!(theme_phrase("baking"), None);
    }

    #[test]
    fn shared_themes_prefer_rare_terms() {
        // "city" occurs everywhere, "noir" only in the first two documents
        let (vectorizer, tokens) = idf_of(&[
            "city noir detective",
            "noir city detective",
            "city baking",
            "city garden",
        ]);
        let shared = shared_themes(&tokens[0], &tokens[1], &vectorizer.idf, 3);
        assert_eq!(shared, vec!["noir", "detective", "city"]);

        let top_two = shared_themes(&tokens[0], &tokens[1], &vectorizer.idf, 2);
        assert_eq!(top_two, vec!["noir", "detective"]);
    }

    #[test]
    fn shared_themes_are_deduplicated() {
        let (vectorizer, tokens) = idf_of(&["noir noir noir", "noir noir"]);
        let shared = shared_themes(&tokens[0], &tokens[1], &vectorizer.idf, 3);
        assert_eq!(shared, vec!["noir"]);
    }

    #[test]
    fn nothing_shared_nothing_returned() {
        let (vectorizer, tokens) = idf_of(&["noir detective", "baking bread"]);
        assert!(shared_themes(&tokens[0], &tokens[1], &vectorizer.idf, 3).is_empty());
    }

    #[test]
    fn two_phrase_template() {
        let query = item(1, "Shadows of Tomorrow", &["Noir"]);
        let candidate = item(2, "Night Ledger", &["Noir"]);
        assert_eq!(
            reason_text(&query, &candidate, &["noir", "corruption", "detective"]),
            "Like Shadows of Tomorrow, this film explores themes of noir atmosphere and moral ambiguity with a similarly assured sense of craft."
        );
    }

    #[test]
    fn duplicate_phrases_collapse() {
        let query = item(1, "Q", &[]);
        let candidate = item(2, "C", &[]);
        assert_eq!(
            reason_text(&query, &candidate, &["city", "urban"]),
            "Shares Q's preoccupation with urban life, brought to life through bold and distinctive filmmaking."
        );
    }

    #[test]
    fn unmapped_terms_fall_back_to_shared_genre() {
        let query = item(1, "Q", &["Thriller", "Crime"]);
        let candidate = item(2, "C", &["crime", "THRILLER"]);
        assert_eq!(
            reason_text(&query, &candidate, &["rain", "docks"]),
            "A compelling thriller film with the same emotional intensity and artistic rigour as Q."
        );
    }

    #[test]
    fn generic_fallback_names_query_only() {
        let query = item(1, "Q", &["Noir"]);
        let candidate = item(2, "C", &["Comedy"]);
        let reason = reason_text::<&str>(&query, &candidate, &[]);
        assert_eq!(
            reason,
            "Selected for its thematic resonance with Q — a film that shares its commitment to authentic, uncompromising storytelling."
        );
        assert!(!reason.contains('C'));
    }

    #[test]
    fn explain_cites_distinctive_shared_themes() {
        let (vectorizer, tokens) = idf_of(&[
            "haunting noir detective film corruption shadows",
            "cheerful documentary baking",
            "noir thriller corruption detective",
        ]);
        let query = item(1, "Q", &[]);
        let candidate = item(3, "C", &[]);
        let reason = explain(&tokens[0], &tokens[2], &vectorizer.idf, &query, &candidate, 3);
        assert!(reason.starts_with("Like Q, this film explores themes of "));
        assert!(reason.contains("noir atmosphere") || reason.contains("detective noir"));
    }
}
