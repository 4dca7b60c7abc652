use std::fmt::{Debug, Display};

use num::Float;
use tracing::trace;

use crate::vectorizer::compute::compare::Compare;

/// Structure to store ranking results
#[derive(Clone, PartialEq)]
pub struct Hits<K> {
    /// (key, score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<(K, f64)>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score
    /// stable: equal scores keep their current order
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Keep at most `n` results
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.list.iter()
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = (K, f64);
    type IntoIter = std::vec::IntoIter<(K, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, score) in &self.list {
            writeln!(f, "{:.6}\t{}", score, key)?;
        }
        Ok(())
    }
}

/// Rank candidate vectors against a query vector by cosine similarity
///
/// Returns `(candidate index, score)` sorted by descending score, ties in
/// candidate order, truncated to `top_n`. No candidates → no hits.
pub fn rank<N, C>(query: &[N], candidates: &[Vec<N>], top_n: usize) -> Hits<usize>
where
    N: Float,
    C: Compare<N>,
{
    let scores = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let score = C::cosine_similarity(query, candidate);
            trace!(candidate = idx, score, "cosine score");
            (idx, score)
        })
        .collect();
    let mut hits = Hits::new(scores);
    hits.sort_by_score_desc().truncate(top_n);
    hits
}
