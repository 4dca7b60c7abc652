pub mod config;
pub mod reason;

use serde::Serialize;
use tracing::debug;

use crate::{
    catalog::{build_document, Item},
    error::Result,
    vectorizer::TFIDFVectorizer,
};

pub use config::RecommenderConfig;

/// A recommended item with its similarity score and justification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub item: &'a Item,
    /// cosine similarity to the query, in [0, 1]
    pub score: f64,
    pub reason: String,
}

/// Content-based recommender
///
/// Holds only configuration; every call builds its own corpus, vocabulary
/// and vectors and drops them on return, so one instance can serve
/// concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    /// Fails with [`Error::Config`](crate::Error::Config) when `config` does
    /// not validate, e.g. `max_shared_terms = 0`.
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommend up to `config.top_n` items from `available` for `query`
    pub fn recommend<'a>(&self, query: &Item, available: &'a [Item]) -> Vec<Recommendation<'a>> {
        self.recommend_top(query, available, self.config.top_n)
    }

    /// Recommend up to `top_n` items from `available` for `query`
    ///
    /// `query` is excluded from `available` by id. Results are sorted by
    /// descending cosine similarity; equal scores keep catalog order.
    pub fn recommend_top<'a>(
        &self,
        query: &Item,
        available: &'a [Item],
        top_n: usize,
    ) -> Vec<Recommendation<'a>> {
        let candidates: Vec<&'a Item> = available.iter().filter(|item| item.id != query.id).collect();
        if candidates.is_empty() || top_n == 0 {
            debug!(query = query.id, candidates = candidates.len(), top_n, "nothing to rank");
            return Vec::new();
        }

        let documents: Vec<String> = std::iter::once(query)
            .chain(candidates.iter().copied())
            .map(build_document)
            .collect();
        let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(&documents);
        debug!(
            query = query.id,
            documents = vectorizer.doc_num(),
            vocabulary = vectorizer.idf.len(),
            "corpus built"
        );

        let hits = vectorizer.similarity(top_n, self.config.parallel);
        let query_tokens = vectorizer.tokens[0].as_slice();
        hits.into_iter()
            .map(|(idx, score)| {
                let candidate = candidates[idx];
                let reason = reason::explain(
                    query_tokens,
                    vectorizer.tokens[idx + 1].as_slice(),
                    &vectorizer.idf,
                    query,
                    candidate,
                    self.config.max_shared_terms,
                );
                Recommendation {
                    item: candidate,
                    score,
                    reason,
                }
            })
            .collect()
    }
}

/// Recommend up to `top_n` items from `available` for `query` with the
/// default configuration
///
/// # Examples
/// ```
/// use thematic_recommender::{recommend, Item};
///
/// let query = Item::new(1, "Shadows").with_description("A haunting noir detective film about corruption and shadows");
/// let available = vec![
///     Item::new(2, "Bake Off").with_description("A cheerful documentary about baking"),
///     Item::new(3, "Night Ledger").with_description("A noir thriller about a corrupt detective"),
/// ];
/// let picks = recommend(&query, &available, 3);
/// assert_eq!(picks[0].item.id, 3);
/// ```
pub fn recommend<'a>(query: &Item, available: &'a [Item], top_n: usize) -> Vec<Recommendation<'a>> {
    Recommender::default().recommend_top(query, available, top_n)
}
