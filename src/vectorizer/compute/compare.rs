use num::{Float, ToPrimitive};

/// Vector comparison used by the ranker
///
/// Vectors are dense and share one vocabulary, so both sides always have the
/// same length. Results are accumulated in f64 whatever `N` is.
pub trait Compare<N>
where
    N: Float,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// ||a||^2 = Σ(a_i^2)
    fn norm_sq(vec: &[N]) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// A zero-magnitude side gives 0.
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Float,
{
    #[inline(always)]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(vec.len(), other.len(), "vectors must share one vocabulary");
        vec.iter()
            .zip(other)
            .map(|(a, b)| as_f64(*a) * as_f64(*b))
            .sum()
    }

    #[inline(always)]
    fn norm_sq(vec: &[N]) -> f64 {
        vec.iter().map(|a| as_f64(*a) * as_f64(*a)).sum()
    }

    #[inline(always)]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(vec.len(), other.len(), "vectors must share one vocabulary");
        let norm_a = <Self as Compare<N>>::norm_sq(vec);
        let norm_b = <Self as Compare<N>>::norm_sq(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        let dot = <Self as Compare<N>>::dot(vec, other);
        // sqrt(|a|^2 |b|^2) is exact for a == b, so self similarity is exactly 1
        (dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)
    }
}

#[inline(always)]
fn as_f64<N: ToPrimitive>(value: N) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine<N: Float>(a: &[N], b: &[N]) -> f64 {
        DefaultCompare::cosine_similarity(a, b)
    }

    #[test]
    fn cosine_of_vector_with_itself_is_one() {
        let v = [0.3_f64, 0.0, 1.7, 0.25, 0.0, 4.2];
        assert_eq!(cosine(&v, &v), 1.0);

        let v32 = [0.1_f32, 0.9, 0.0, 3.3];
        assert_eq!(cosine(&v32, &v32), 1.0);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = [1.0_f64, 0.0, 2.0, 0.0];
        let b = [0.0_f64, 3.0, 0.0, 1.0];
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn zero_magnitude_scores_zero_not_nan() {
        let zero = [0.0_f64; 4];
        let other = [1.0_f64, 2.0, 3.0, 4.0];
        assert_eq!(cosine(&zero, &other), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
        assert_eq!(cosine::<f64>(&[], &[]), 0.0);
    }

    #[test]
    fn cosine_ignores_magnitude() {
        let a = [1.0_f64, 2.0, 0.0];
        let b = [2.0_f64, 4.0, 0.0];
        let score = cosine(&a, &b);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_is_dot_over_norms() {
        let a = [0.5_f64, 1.5, 0.0, 2.0];
        let b = [1.0_f64, 0.25, 3.0, 0.5];
        let dot = <DefaultCompare as Compare<f64>>::dot(&a, &b);
        let na = <DefaultCompare as Compare<f64>>::norm_sq(&a);
        let nb = <DefaultCompare as Compare<f64>>::norm_sq(&b);
        assert_eq!(cosine(&a, &b).to_bits(), (dot / (na * nb).sqrt()).to_bits());
    }

    #[test]
    fn dot_and_norm() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [4.0_f64, 5.0, 6.0];
        assert_eq!(<DefaultCompare as Compare<f64>>::dot(&a, &b), 32.0);
        assert_eq!(<DefaultCompare as Compare<f64>>::norm_sq(&a), 14.0);
    }
}
