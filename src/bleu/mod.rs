//! Sentence-level BLEU with pluggable n-gram equality.
//!
//! Precision for order `n` counts hypothesis n-grams that match at least one
//! reference n-gram (no clipping). Any order with precision below
//! [`BLEU_PRECISION_FLOOR`] makes the whole score 0.


use crate::constants::BLEU_PRECISION_FLOOR;

/// Extracts the order-`n` n-grams of a sequence.
pub type NgramExtractor<T> = fn(&[T], usize) -> Vec<&[T]>;

/// Contiguous n-grams. Empty when `n` is 0 or longer than the sequence.
pub fn ngrams<T>(items: &[T], n: usize) -> Vec<&[T]> {
    if n == 0 {
        return Vec::new();
    }
    items.windows(n).collect()
}

/// Brevity penalty for a hypothesis of `hyp_len` against a reference of `ref_len`.
pub fn brevity_penalty(ref_len: usize, hyp_len: usize) -> f64 {
    if hyp_len > ref_len {
        1.0
    } else if hyp_len == 0 {
        0.0
    } else {
        (1.0 - ref_len as f64 / hyp_len as f64).exp()
    }
}

/// BLEU scorer over sequences of `T`, comparing elements with `Q`.
#[derive(Clone)]
pub struct BleuCalculator<T, Q> {
    extract: NgramExtractor<T>,
    equal: Q,
}

impl<T, Q> std::fmt::Debug for BleuCalculator<T, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BleuCalculator").finish_non_exhaustive()
    }
}

impl<T, Q> BleuCalculator<T, Q>
where
    Q: Fn(&T, &T) -> bool,
{
    /// Calculator with contiguous n-grams and element predicate `equal`.
    pub fn new(equal: Q) -> Self {
        Self {
            extract: ngrams::<T>,
            equal,
        }
    }

    /// Replaces the n-gram extractor.
    pub fn with_extractor(mut self, extract: NgramExtractor<T>) -> Self {
        self.extract = extract;
        self
    }

    fn ngram_equal(&self, a: &[T], b: &[T]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (self.equal)(x, y))
    }

    /// Modified precision for order `n`.
    pub fn precision(&self, reference: &[T], hypothesis: &[T], n: usize) -> f64 {
        let reference_ngrams = (self.extract)(reference, n);
        let hypothesis_ngrams = (self.extract)(hypothesis, n);

        let found = hypothesis_ngrams
            .iter()
            .filter(|h| reference_ngrams.iter().any(|r| self.ngram_equal(h, r)))
            .count();

        found as f64 / hypothesis_ngrams.len().max(1) as f64
    }

    /// BLEU with uniform weights over orders `1..=max_n`. 0 when `max_n` is 0.
    pub fn score(&self, reference: &[T], hypothesis: &[T], max_n: usize) -> f64 {
        if max_n == 0 {
            return 0.0;
        }
        let weight = 1.0 / max_n as f64;

        let mut log_sum = 0.0;
        for n in 1..=max_n {
            let p = self.precision(reference, hypothesis, n);
            if p.abs() < BLEU_PRECISION_FLOOR {
                return 0.0;
            }
            log_sum += weight * p.ln();
        }

        brevity_penalty(reference.len(), hypothesis.len()) * log_sum.exp()
    }
}
