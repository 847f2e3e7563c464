//! Probability mass functions over labeled categories.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::ProbError;
use crate::PROB_TOLERANCE;

/// A mass function over a finite set of category labels.
///
/// Labels are kept sorted and unique; `probs[i]` is the mass of `labels[i]`.
/// Labels not present carry an implicit mass of zero.
///
/// Invariants:
/// - `labels` is strictly increasing (sorted, no duplicates)
/// - `labels` and `probs` have the same, non-zero length
/// - All masses are non-negative
///
/// Constructors that normalize (`from_seq`, `from_weights`, `uniform`,
/// `normalize`) additionally guarantee the masses sum to 1 within
/// [`PROB_TOLERANCE`]. [`JointPmf::marginal`](crate::JointPmf::marginal)
/// instead produces a `Pmf` whose total equals the grand total of the table
/// it was taken from.
///
/// # Example
///
/// ```rust
/// use tabular_prob::Pmf;
///
/// let pmf = Pmf::from_seq(&["r", "r", "g"]).unwrap();
/// assert!((pmf.prob(&"r") - 2.0 / 3.0).abs() < 1e-9);
/// assert!((pmf.prob(&"g") - 1.0 / 3.0).abs() < 1e-9);
/// assert_eq!(pmf.prob(&"b"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pmf<L> {
    /// Sorted distinct labels.
    pub labels: Vec<L>,
    /// Mass per label, parallel to `labels`.
    pub probs: Vec<f64>,
}

impl<L: Ord + Clone + fmt::Display> Pmf<L> {
    /// Build a PMF from a sequence of draws.
    ///
    /// Each distinct label maps to `count / n`. Order of the input is
    /// irrelevant; only identity and multiplicity matter.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyInput`] if the sequence is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabular_prob::Pmf;
    ///
    /// let pmf = Pmf::from_seq(&[1_u8, 2, 2, 3]).unwrap();
    /// assert!((pmf.prob(&2) - 0.5).abs() < 1e-9);
    /// assert!((pmf.total() - 1.0).abs() < 1e-9);
    /// ```
    pub fn from_seq(samples: &[L]) -> Result<Self, ProbError> {
        if samples.is_empty() {
            return Err(ProbError::EmptyInput);
        }

        let mut counts: BTreeMap<&L, u64> = BTreeMap::new();
        for label in samples {
            *counts.entry(label).or_insert(0) += 1;
        }

        let n = samples.len() as f64;
        let mut labels = Vec::with_capacity(counts.len());
        let mut probs = Vec::with_capacity(counts.len());
        for (label, count) in counts {
            labels.push(label.clone());
            probs.push(count as f64 / n);
        }

        Ok(Self { labels, probs })
    }

    /// Build a normalized PMF from `(label, weight)` pairs.
    ///
    /// Weights for the same label accumulate; the result is divided by the
    /// total so it sums to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No pairs were given ([`ProbError::EmptyInput`])
    /// - Any weight is negative ([`ProbError::NegativeMass`])
    /// - The weights sum to zero ([`ProbError::EmptyTable`])
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabular_prob::Pmf;
    ///
    /// let pmf = Pmf::from_weights(vec![("a", 1.0), ("b", 2.0), ("a", 1.0)]).unwrap();
    /// assert!((pmf.prob(&"a") - 0.5).abs() < 1e-9);
    /// ```
    pub fn from_weights(pairs: Vec<(L, f64)>) -> Result<Self, ProbError> {
        if pairs.is_empty() {
            return Err(ProbError::EmptyInput);
        }

        let mut weights: BTreeMap<L, f64> = BTreeMap::new();
        for (label, w) in pairs {
            if w < 0.0 {
                return Err(ProbError::NegativeMass);
            }
            *weights.entry(label).or_insert(0.0) += w;
        }

        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            return Err(ProbError::EmptyTable);
        }

        let mut labels = Vec::with_capacity(weights.len());
        let mut probs = Vec::with_capacity(weights.len());
        for (label, w) in weights {
            labels.push(label);
            probs.push(w / total);
        }

        Ok(Self { labels, probs })
    }

    /// Uniform distribution over the given labels (duplicates collapse).
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyInput`] if no labels are given.
    pub fn uniform(labels: Vec<L>) -> Result<Self, ProbError> {
        if labels.is_empty() {
            return Err(ProbError::EmptyInput);
        }

        let mut labels: Vec<L> = labels;
        labels.sort();
        labels.dedup();

        let p = 1.0 / labels.len() as f64;
        let probs = vec![p; labels.len()];
        Ok(Self { labels, probs })
    }

    /// Build a mass function directly from parallel label and mass vectors.
    ///
    /// Labels may arrive in any order; they are sorted together with their
    /// masses. The masses are NOT required to sum to 1, so this constructor
    /// also covers unnormalized tables that a caller will normalize later.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The vectors differ in length ([`ProbError::LengthMismatch`])
    /// - The vectors are empty ([`ProbError::EmptyInput`])
    /// - Any mass is negative ([`ProbError::NegativeMass`])
    /// - A label repeats ([`ProbError::DuplicateLabel`])
    pub fn new(labels: Vec<L>, probs: Vec<f64>) -> Result<Self, ProbError> {
        if labels.len() != probs.len() {
            return Err(ProbError::LengthMismatch {
                left: labels.len(),
                right: probs.len(),
            });
        }
        if labels.is_empty() {
            return Err(ProbError::EmptyInput);
        }
        if probs.iter().any(|&p| p < -PROB_TOLERANCE) {
            return Err(ProbError::NegativeMass);
        }

        let mut entries: Vec<(L, f64)> = labels.into_iter().zip(probs).collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        for pair in entries.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(ProbError::DuplicateLabel {
                    label: pair[1].0.to_string(),
                });
            }
        }

        let (labels, probs): (Vec<L>, Vec<f64>) = entries.into_iter().unzip();
        Ok(Self { labels, probs })
    }

    /// Renormalize so the masses sum to 1.
    ///
    /// Normalizing an already-normalized PMF divides by ≈1 and returns it
    /// unchanged within tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyTable`] if the total mass is zero.
    pub fn normalize(&self) -> Result<Self, ProbError> {
        let total = self.total();
        if total <= 0.0 {
            return Err(ProbError::EmptyTable);
        }
        Ok(Self {
            labels: self.labels.clone(),
            probs: self.probs.iter().map(|p| p / total).collect(),
        })
    }

    /// Mass of a label. Labels not on the support carry zero.
    pub fn prob(&self, label: &L) -> f64 {
        match self.labels.binary_search(label) {
            Ok(i) => self.probs[i],
            Err(_) => 0.0,
        }
    }

    /// Total mass (≈1 for a normalized PMF).
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed `Pmf`.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(label, mass)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.labels.iter().zip(self.probs.iter().copied())
    }

    /// The label with the highest mass (first one on ties).
    pub fn mode(&self) -> &L {
        let mut best = 0;
        for (i, &p) in self.probs.iter().enumerate() {
            if p > self.probs[best] {
                best = i;
            }
        }
        &self.labels[best]
    }

    /// Labels with non-zero mass.
    pub fn support(&self) -> Vec<&L> {
        self.iter()
            .filter(|(_, p)| *p > PROB_TOLERANCE)
            .map(|(l, _)| l)
            .collect()
    }

    /// Shannon entropy in nats: `H(p) = -Σ p·ln(p)`.
    ///
    /// Zero-mass labels contribute nothing. Meaningful for normalized PMFs.
    pub fn entropy(&self) -> f64 {
        self.probs
            .iter()
            .filter(|&&p| p > PROB_TOLERANCE)
            .map(|&p| -p * p.ln())
            .sum()
    }

    /// Shannon entropy in bits.
    pub fn entropy_bits(&self) -> f64 {
        self.entropy() / 2.0_f64.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seq_counts_and_normalizes() {
        let pmf = Pmf::from_seq(&["b", "a", "b", "c"]).unwrap();
        assert_eq!(pmf.labels, vec!["a", "b", "c"]);
        assert!((pmf.prob(&"b") - 0.5).abs() < PROB_TOLERANCE);
        assert!((pmf.prob(&"a") - 0.25).abs() < PROB_TOLERANCE);
        assert!((pmf.total() - 1.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_from_seq_empty() {
        let result = Pmf::<u8>::from_seq(&[]);
        assert!(matches!(result, Err(ProbError::EmptyInput)));
    }

    #[test]
    fn test_from_seq_values_in_unit_interval() {
        let pmf = Pmf::from_seq(&[1_u8, 1, 1, 1]).unwrap();
        for (_, p) in pmf.iter() {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_from_weights_accumulates_duplicates() {
        let pmf = Pmf::from_weights(vec![("x", 1.0), ("y", 1.0), ("x", 2.0)]).unwrap();
        assert!((pmf.prob(&"x") - 0.75).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_from_weights_negative() {
        let result = Pmf::from_weights(vec![("x", -1.0)]);
        assert!(matches!(result, Err(ProbError::NegativeMass)));
    }

    #[test]
    fn test_from_weights_zero_total() {
        let result = Pmf::from_weights(vec![("x", 0.0), ("y", 0.0)]);
        assert!(matches!(result, Err(ProbError::EmptyTable)));
    }

    #[test]
    fn test_uniform() {
        let pmf = Pmf::uniform(vec!["c", "a", "b", "a"]).unwrap();
        assert_eq!(pmf.len(), 3);
        for (_, p) in pmf.iter() {
            assert!((p - 1.0 / 3.0).abs() < PROB_TOLERANCE);
        }
    }

    #[test]
    fn test_new_sorts_labels() {
        let pmf = Pmf::new(vec!["b", "a"], vec![0.7, 0.3]).unwrap();
        assert_eq!(pmf.labels, vec!["a", "b"]);
        assert!((pmf.prob(&"b") - 0.7).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_new_rejects_duplicate_label() {
        let result = Pmf::new(vec!["a", "a"], vec![0.5, 0.5]);
        assert!(matches!(result, Err(ProbError::DuplicateLabel { .. })));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = Pmf::new(vec!["a", "b"], vec![1.0]);
        assert!(matches!(
            result,
            Err(ProbError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_normalize() {
        let pmf = Pmf::new(vec!["a", "b"], vec![2.0, 6.0]).unwrap();
        let norm = pmf.normalize().unwrap();
        assert!((norm.prob(&"a") - 0.25).abs() < PROB_TOLERANCE);
        assert!((norm.total() - 1.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_normalize_zero_mass() {
        let pmf = Pmf::new(vec!["a"], vec![0.0]).unwrap();
        assert!(matches!(pmf.normalize(), Err(ProbError::EmptyTable)));
    }

    #[test]
    fn test_mode_and_support() {
        let pmf = Pmf::new(vec!["a", "b", "c"], vec![0.1, 0.9, 0.0]).unwrap();
        assert_eq!(pmf.mode(), &"b");
        assert_eq!(pmf.support(), vec![&"a", &"b"]);
    }

    #[test]
    fn test_entropy_uniform() {
        let pmf = Pmf::uniform(vec![0_u8, 1, 2, 3]).unwrap();
        // H(uniform over n) = ln(n)
        assert!((pmf.entropy() - 4.0_f64.ln()).abs() < PROB_TOLERANCE);
        assert!((pmf.entropy_bits() - 2.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_entropy_point_mass() {
        let pmf = Pmf::from_seq(&["only"]).unwrap();
        assert!(pmf.entropy().abs() < PROB_TOLERANCE);
    }
}
