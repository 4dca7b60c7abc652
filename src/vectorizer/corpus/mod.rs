use indexmap::IndexMap;

use crate::TermFrequency;

/// keep document count and per-term document frequency
///
/// Terms are kept in first-seen order across documents, which is the axis
/// order of every vector built from this corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's unique terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            let term = term.as_ref();
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Add a document by its term frequency
    /// each unique term counts once regardless of how often it occurs
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        let terms: Vec<&str> = freq.term_set_iter().collect();
        self.add_set(&terms);
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Vocabulary in first-seen order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(|term| term.as_ref())
    }

    /// (term, document frequency) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts
            .iter()
            .map(|(term, &count)| (term.as_ref(), count))
    }
}
