//! Cross-tabulation of two paired categorical sequences.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::ProbError;
use crate::joint::JointPmf;

/// A 2-D co-occurrence count table with named axes.
///
/// Entry `(a, b)` counts the indices `i` where the row sequence has `a` and
/// the column sequence has `b`. Each axis holds the sorted distinct labels
/// observed in its own sequence; nothing is zero-padded to an external
/// universe, but every unobserved *pair* of observed labels is an explicit
/// zero cell in the dense grid.
///
/// # Example
///
/// ```rust
/// use tabular_prob::CrossTab;
///
/// let colors = ["r", "r", "g"];
/// let fruits = ["x", "y", "x"];
/// let tab = CrossTab::from_pairs("color", &colors, "fruit", &fruits).unwrap();
///
/// assert_eq!(tab.count(&"r", &"x"), 1);
/// assert_eq!(tab.count(&"g", &"y"), 0);
/// assert_eq!(tab.total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab<L> {
    /// Name of the row variable.
    pub row_name: String,
    /// Name of the column variable.
    pub col_name: String,
    /// Sorted distinct labels observed in the row sequence.
    pub rows: Vec<L>,
    /// Sorted distinct labels observed in the column sequence.
    pub cols: Vec<L>,
    /// `counts[i][j]` = co-occurrences of `rows[i]` with `cols[j]`.
    pub counts: Vec<Vec<u64>>,
}

impl<L: Ord + Clone + fmt::Display> CrossTab<L> {
    /// Cross-tabulate two sequences paired by position.
    ///
    /// The row axis takes the first sequence's name, the column axis the
    /// second's.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sequences differ in length ([`ProbError::LengthMismatch`])
    /// - The sequences are empty ([`ProbError::EmptyInput`])
    pub fn from_pairs(
        row_name: &str,
        row_seq: &[L],
        col_name: &str,
        col_seq: &[L],
    ) -> Result<Self, ProbError> {
        if row_seq.len() != col_seq.len() {
            return Err(ProbError::LengthMismatch {
                left: row_seq.len(),
                right: col_seq.len(),
            });
        }
        if row_seq.is_empty() {
            return Err(ProbError::EmptyInput);
        }

        let rows: Vec<L> = row_seq.iter().cloned().collect::<BTreeSet<L>>().into_iter().collect();
        let cols: Vec<L> = col_seq.iter().cloned().collect::<BTreeSet<L>>().into_iter().collect();

        let mut counts = vec![vec![0_u64; cols.len()]; rows.len()];
        for (a, b) in row_seq.iter().zip(col_seq.iter()) {
            // Lookups cannot fail: the axes were built from these sequences.
            let i = rows.binary_search(a).expect("row label on its own axis");
            let j = cols.binary_search(b).expect("col label on its own axis");
            counts[i][j] += 1;
        }

        Ok(Self {
            row_name: row_name.to_string(),
            col_name: col_name.to_string(),
            rows,
            cols,
            counts,
        })
    }

    /// Count for a `(row, col)` pair. Unobserved pairs carry zero.
    pub fn count(&self, row: &L, col: &L) -> u64 {
        match (self.rows.binary_search(row), self.cols.binary_search(col)) {
            (Ok(i), Ok(j)) => self.counts[i][j],
            _ => 0,
        }
    }

    /// Grand total: equals the length of the input sequences.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|row| row.iter().sum::<u64>()).sum()
    }

    /// Normalize the counts into a joint PMF.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyTable`] if the grand total is zero.
    pub fn to_joint(&self) -> Result<JointPmf<L>, ProbError> {
        JointPmf::from_counts(self)
    }
}
