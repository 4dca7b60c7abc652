pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use indexmap::IndexMap;
use num::Float;
use rayon::prelude::*;

use crate::{
    engine::tokenizer::tokenize,
    vectorizer::{
        compute::compare::{Compare, DefaultCompare},
        corpus::Corpus,
        evaluate::scoring::{rank, Hits},
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// IDF weights for one corpus
/// The key order of `idf_map` is the vocabulary, i.e. the axis order of every
/// vector built against it.
#[derive(Debug, Clone)]
pub struct IDFVector<N> {
    /// term -> idf weight
    pub idf_map: IndexMap<Box<str>, N>,
    /// document count the weights were computed from
    pub doc_num: u64,
}

impl<N> IDFVector<N>
where
    N: Float,
{
    /// Weight of `term`, `None` if it is not in the vocabulary
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.idf_map.get(term).copied()
    }

    /// Weight of `term`, 0 if it is not in the vocabulary
    #[inline]
    pub fn weight(&self, term: &str) -> N {
        self.get(term).unwrap_or_else(N::zero)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.idf_map.keys().map(|term| term.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.idf_map.iter().map(|(term, &idf)| (term.as_ref(), idf))
    }

    /// vocabulary size (vector dimension)
    #[inline]
    pub fn len(&self) -> usize {
        self.idf_map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_map.is_empty()
    }
}

/// TF-IDF Vectorizer over one ranking corpus
///
/// Document 0 is the query, documents `1..` are candidates in caller order.
/// Everything is built once in [`TFIDFVectorizer::new`] and never updated:
/// a new corpus means a new vectorizer.
///
/// `TFIDFVectorizer<N, E, C>`:
/// - `N`: vector parameter type (f32, f64)
/// - `E`: TF-IDF weighting engine
/// - `C`: vector comparison used for ranking
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine, C = DefaultCompare>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// tokens of each document, in document order
    pub tokens: Vec<Vec<String>>,
    /// term frequency of each document
    pub documents: Vec<TermFrequency>,
    /// document frequencies
    pub corpus: Corpus,
    /// idf weights, key order is the vocabulary
    pub idf: IDFVector<N>,
    _marker: PhantomData<(E, C)>,
}

impl<N, E, C> TFIDFVectorizer<N, E, C>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// Tokenize raw documents and build the corpus statistics
    pub fn new<T>(documents: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let tokens = documents.iter().map(|doc| tokenize(doc.as_ref())).collect();
        Self::from_tokens(tokens)
    }

    /// Build from already tokenized documents
    pub fn from_tokens(tokens: Vec<Vec<String>>) -> Self {
        let documents: Vec<TermFrequency> = tokens
            .iter()
            .map(|doc_tokens| TermFrequency::from(doc_tokens.as_slice()))
            .collect();
        let mut corpus = Corpus::new();
        documents.iter().for_each(|doc| corpus.add_doc(doc));
        let idf = E::idf_vec(&corpus);
        Self {
            tokens,
            documents,
            corpus,
            idf,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Vocabulary in axis order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.idf.vocabulary()
    }

    /// Tokens of one document
    pub fn doc_tokens(&self, index: usize) -> Option<&[String]> {
        self.tokens.get(index).map(Vec::as_slice)
    }

    /// TF-IDF vector of one document
    pub fn tfidf_vec(&self, index: usize) -> Option<Vec<N>> {
        self.documents
            .get(index)
            .map(|freq| E::tfidf_vec(freq, &self.idf))
    }

    /// TF-IDF vectors of every document, in document order
    pub fn tfidf_vecs(&self) -> Vec<Vec<N>> {
        self.documents
            .iter()
            .map(|freq| E::tfidf_vec(freq, &self.idf))
            .collect()
    }
}

impl<N, E, C> TFIDFVectorizer<N, E, C>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Sync,
    C: Compare<N> + Sync,
{
    /// Same as [`TFIDFVectorizer::tfidf_vecs`], computed on the rayon pool
    /// Output order is document order.
    pub fn par_tfidf_vecs(&self) -> Vec<Vec<N>> {
        self.documents
            .par_iter()
            .map(|freq| E::tfidf_vec(freq, &self.idf))
            .collect()
    }

    /// Score every candidate (documents `1..`) against the query (document 0)
    ///
    /// Results are sorted by descending score, ties keep candidate order,
    /// and at most `top_n` hits are returned. Hit keys are candidate indices
    /// (0 = first candidate).
    pub fn similarity(&self, top_n: usize, parallel: bool) -> Hits<usize> {
        let vectors = if parallel {
            self.par_tfidf_vecs()
        } else {
            self.tfidf_vecs()
        };
        match vectors.split_first() {
            Some((query, candidates)) => rank::<N, C>(query, candidates, top_n),
            None => Hits::new(Vec::new()),
        }
    }
}
