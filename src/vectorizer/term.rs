use indexmap::IndexMap;
use num::{Float, NumCast};

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document.
/// Terms keep their first-seen order, so iteration is deterministic.
///
/// # Examples
/// ```
/// use thematic_recommender::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("noir");
/// term_freq.add_term("detective");
/// term_freq.add_term("noir");
///
/// assert_eq!(term_freq.term_count("noir"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate over terms and their counts in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }

    /// Unique terms in first-seen order
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(String::as_str)
    }

    /// Occurrence count of `term`, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms added (with multiplicity)
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }
}

/// TF-calculation
impl TermFrequency {
    /// Normalized term frequency: count / total
    ///
    /// An empty document has no TF entries, so every term maps to 0.
    #[inline]
    pub fn tf<N>(&self, term: &str) -> N
    where
        N: Float,
    {
        match (self.term_count.get(term), self.total_term_count) {
            (Some(&count), total) if total > 0 => Self::tf_calc(count, total),
            _ => N::zero(),
        }
    }

    /// TF map of the whole document in first-seen order
    pub fn tf_map<N>(&self) -> IndexMap<&str, N>
    where
        N: Float,
    {
        if self.total_term_count == 0 {
            return IndexMap::new();
        }
        self.term_count
            .iter()
            .map(|(term, &count)| (term.as_str(), Self::tf_calc(count, self.total_term_count)))
            .collect()
    }

    #[inline]
    fn tf_calc<N>(count: u64, total: u64) -> N
    where
        N: Float,
    {
        let count = <N as NumCast>::from(count).unwrap_or_else(N::zero);
        let total = <N as NumCast>::from(total).unwrap_or_else(N::one);
        count / total
    }
}
