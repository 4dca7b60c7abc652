use indexmap::IndexMap;
use num::{Float, NumCast};

use crate::vectorizer::{corpus::Corpus, term::TermFrequency, IDFVector};

/// TF-IDF calculation strategy
///
/// The vectorizer is generic over this trait so the weighting can be swapped
/// without touching the pipeline around it.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF weight of a term that occurs in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// IDF map over the whole corpus vocabulary, in vocabulary order
    fn idf_vec(corpus: &Corpus) -> IDFVector<N> {
        let doc_num = corpus.get_doc_num();
        let idf_map: IndexMap<Box<str>, N> = corpus
            .iter()
            .map(|(term, doc_freq)| (Box::from(term), Self::idf(doc_num, doc_freq)))
            .collect();
        IDFVector { idf_map, doc_num }
    }

    /// Dense TF-IDF vector of one document, aligned to the IDF vocabulary
    fn tfidf_vec(freq: &TermFrequency, idf: &IDFVector<N>) -> Vec<N>;
}

/// Default TF-IDF engine
///
/// - TF: `count / total` (empty document → all zero)
/// - IDF: smoothed, `ln((N + 1) / (df + 1)) + 1`
///
/// The trailing `+ 1` keeps terms present in every document at weight 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }

    /// smoothed idf in f64
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> N {
        <N as NumCast>::from(Self::idf_calc(doc_num, doc_freq)).unwrap_or_else(N::one)
    }

    fn tfidf_vec(freq: &TermFrequency, idf: &IDFVector<N>) -> Vec<N> {
        if freq.is_empty() {
            return vec![N::zero(); idf.len()];
        }
        idf.iter()
            .map(|(term, weight)| freq.tf::<N>(term) * weight)
            .collect()
    }
}
