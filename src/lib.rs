/// This crate is a content-based recommender using a TF-IDF Vectorizer.
/// Given an item that is no longer available, it ranks the rest of the
/// catalog by thematic similarity and explains every pick.
pub mod catalog;
pub mod engine;
pub mod error;
pub mod recommend;
pub mod vectorizer;

/// Recommend entry point
/// Ranks `available` (minus the query itself) by cosine similarity of
/// TF-IDF vectors and returns at most `top_n` recommendations, each with
/// a human-readable reason.
///
/// All working structures (tokens, vocabulary, IDF map, vectors) are built
/// per call and dropped on return. Nothing is cached between calls.
pub use recommend::{recommend, Recommendation, Recommender};

/// Recommender configuration
/// `top_n`, `max_shared_terms` and `parallel`, all with defaults.
/// Deserializable from JSON.
pub use recommend::config::RecommenderConfig;

/// Catalog item and corpus builder
/// `Item` carries the descriptive text fields; `build_document` joins them
/// (critique, synopsis, genres, description) into one searchable document.
pub use catalog::{build_document, Catalog, Item, ItemId};

/// Error type of the outer surface (catalog and config loading)
pub use error::{Error, Result};

/// Tokenizer
/// Lowercases, strips punctuation, drops short pieces and stop words.
pub use engine::tokenizer::tokenize;

/// TF-IDF Vectorizer
/// Builds one corpus from raw documents (document 0 is the query), then
/// exposes the vocabulary, the smoothed IDF map and the dense TF-IDF vectors.
///
/// `TFIDFVectorizer<N, E, C>` has the following generic parameters:
/// - `N`: vector parameter type (f32, f64)
/// - `E`: TF-IDF calculation engine (`DefaultTFIDFEngine`)
/// - `C`: vector comparison (`DefaultCompare`)
pub use vectorizer::{IDFVector, TFIDFVectorizer};

/// Corpus
/// Document count and per-term document frequency, in first-seen term order.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Occurrence counts of one document's terms and the TF calculation.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// The default engine uses `count / total` TF and the smoothed IDF
/// `ln((N + 1) / (df + 1)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Vector comparison (cosine similarity)
pub use vectorizer::compute::compare::{Compare, DefaultCompare};

/// Ranking result list and the cosine ranker
pub use vectorizer::evaluate::scoring::{rank, Hits};
