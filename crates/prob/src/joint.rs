//! Joint distributions over two labeled variables.
//!
//! A [`JointPmf`] is a 2-D probability table with named axes. Two views come
//! off it:
//!
//! - [`JointPmf::conditional`] slices at one value of a named variable and
//!   renormalizes: P(other | named = value).
//! - [`JointPmf::marginal`] sums over the other axis and does NOT
//!   renormalize: for a normalized joint the marginal already sums to 1, and
//!   keeping the raw sums is what makes the law of total probability hold
//!   exactly.
//!
//! Key insight: conditioning restricts the probability space, so it must
//! renormalize; marginalizing only re-buckets mass, so it must not.

use std::fmt;

use serde::Serialize;

use crate::crosstab::CrossTab;
use crate::error::ProbError;
use crate::pmf::Pmf;
use crate::PROB_TOLERANCE;

/// Which axis of a table an operation targets.
enum Axis {
    Row,
    Col,
}

/// A joint probability table over two categorical variables.
///
/// Same shape as [`CrossTab`], holding mass instead of counts. After
/// [`from_counts`](JointPmf::from_counts) or
/// [`normalize`](JointPmf::normalize) the grand total is 1 within
/// [`PROB_TOLERANCE`]; the conditional and marginal views also accept
/// unnormalized tables (conditioning renormalizes at the end, so slicing raw
/// co-occurrence mass gives the same answer).
///
/// Invariants:
/// - `rows` and `cols` are strictly increasing
/// - `probs` is a dense `rows.len() × cols.len()` grid of non-negative mass
///
/// # Example
///
/// ```rust
/// use tabular_prob::CrossTab;
///
/// let colors = ["r", "r", "g"];
/// let fruits = ["x", "y", "x"];
/// let joint = CrossTab::from_pairs("color", &colors, "fruit", &fruits)
///     .unwrap()
///     .to_joint()
///     .unwrap();
///
/// // Each observed cell carries 1/3.
/// assert!((joint.prob(&"r", &"x") - 1.0 / 3.0).abs() < 1e-9);
///
/// // P(fruit | color = "r") = {x: 0.5, y: 0.5}
/// let given_r = joint.conditional("color", &"r").unwrap();
/// assert!((given_r.prob(&"x") - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointPmf<L> {
    /// Name of the row variable.
    pub row_name: String,
    /// Name of the column variable.
    pub col_name: String,
    /// Sorted row labels.
    pub rows: Vec<L>,
    /// Sorted column labels.
    pub cols: Vec<L>,
    /// `probs[i][j]` = mass of `(rows[i], cols[j])`.
    pub probs: Vec<Vec<f64>>,
}

impl<L: Ord + Clone + fmt::Display> JointPmf<L> {
    /// Normalize a count table into a joint PMF.
    ///
    /// Every count is divided by the grand total.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyTable`] if the grand total is zero.
    pub fn from_counts(tab: &CrossTab<L>) -> Result<Self, ProbError> {
        let total = tab.total();
        if total == 0 {
            return Err(ProbError::EmptyTable);
        }

        let total = total as f64;
        let probs = tab
            .counts
            .iter()
            .map(|row| row.iter().map(|&c| c as f64 / total).collect())
            .collect();

        Ok(Self {
            row_name: tab.row_name.clone(),
            col_name: tab.col_name.clone(),
            rows: tab.rows.clone(),
            cols: tab.cols.clone(),
            probs,
        })
    }

    /// Build a joint table directly from axis labels and a mass grid.
    ///
    /// Labels may arrive unsorted; rows and columns of the grid are permuted
    /// along with them. The mass is NOT required to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `probs` has a different number of rows than `rows`
    ///   ([`ProbError::LengthMismatch`])
    /// - Any grid row differs in length from `cols`
    ///   ([`ProbError::RaggedTable`])
    /// - Any mass is negative ([`ProbError::NegativeMass`])
    /// - A label repeats on either axis ([`ProbError::DuplicateLabel`])
    /// - Either axis is empty ([`ProbError::EmptyInput`])
    pub fn new(
        row_name: &str,
        col_name: &str,
        rows: Vec<L>,
        cols: Vec<L>,
        probs: Vec<Vec<f64>>,
    ) -> Result<Self, ProbError> {
        if rows.is_empty() || cols.is_empty() {
            return Err(ProbError::EmptyInput);
        }
        if probs.len() != rows.len() {
            return Err(ProbError::LengthMismatch {
                left: rows.len(),
                right: probs.len(),
            });
        }
        for (i, row) in probs.iter().enumerate() {
            if row.len() != cols.len() {
                return Err(ProbError::RaggedTable {
                    row: i,
                    expected: cols.len(),
                    got: row.len(),
                });
            }
            if row.iter().any(|&p| p < -PROB_TOLERANCE) {
                return Err(ProbError::NegativeMass);
            }
        }

        let row_order = argsort(&rows);
        let col_order = argsort(&cols);

        let rows: Vec<L> = row_order.iter().map(|&i| rows[i].clone()).collect();
        let cols: Vec<L> = col_order.iter().map(|&j| cols[j].clone()).collect();
        check_distinct(&rows)?;
        check_distinct(&cols)?;

        let probs: Vec<Vec<f64>> = row_order
            .iter()
            .map(|&i| col_order.iter().map(|&j| probs[i][j]).collect())
            .collect();

        Ok(Self {
            row_name: row_name.to_string(),
            col_name: col_name.to_string(),
            rows,
            cols,
            probs,
        })
    }

    /// Grand total mass (≈1 for a normalized table).
    pub fn total(&self) -> f64 {
        self.probs.iter().map(|row| row.iter().sum::<f64>()).sum()
    }

    /// Mass of a `(row, col)` pair. Unobserved pairs carry zero.
    pub fn prob(&self, row: &L, col: &L) -> f64 {
        match (self.rows.binary_search(row), self.cols.binary_search(col)) {
            (Ok(i), Ok(j)) => self.probs[i][j],
            _ => 0.0,
        }
    }

    /// Renormalize so the grand total is 1.
    ///
    /// Normalizing an already-normalized table divides by ≈1 and returns it
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
            row_name: self.row_name.clone(),
            col_name: self.col_name.clone(),
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            probs: self
                .probs
                .iter()
                .map(|row| row.iter().map(|p| p / total).collect())
                .collect(),
        })
    }

    /// The conditional distribution P(other | `axis` = `label`).
    ///
    /// Selects the 1-D slice of the named axis at the given label (a row if
    /// the name matches the row axis, a column if it matches the column
    /// axis), then renormalizes the slice to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name matches neither axis ([`ProbError::UnknownAxis`])
    /// - The label is absent from the matched axis
    ///   ([`ProbError::LabelNotFound`])
    /// - The slice sums to zero ([`ProbError::EmptyConditional`])
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabular_prob::JointPmf;
    ///
    /// let joint = JointPmf::new(
    ///     "color",
    ///     "fruit",
    ///     vec!["g", "r"],
    ///     vec!["x", "y"],
    ///     vec![vec![1.0 / 3.0, 0.0], vec![1.0 / 3.0, 1.0 / 3.0]],
    /// )
    /// .unwrap();
    ///
    /// let given_r = joint.conditional("color", &"r").unwrap();
    /// assert!((given_r.prob(&"x") - 0.5).abs() < 1e-9);
    /// assert!((given_r.prob(&"y") - 0.5).abs() < 1e-9);
    /// ```
    pub fn conditional(&self, axis: &str, label: &L) -> Result<Pmf<L>, ProbError> {
        let not_found = || ProbError::LabelNotFound {
            axis: axis.to_string(),
            label: label.to_string(),
        };

        let (labels, slice): (Vec<L>, Vec<f64>) = match self.resolve_axis(axis)? {
            Axis::Row => {
                let i = self.rows.binary_search(label).map_err(|_| not_found())?;
                (self.cols.clone(), self.probs[i].clone())
            }
            Axis::Col => {
                let j = self.cols.binary_search(label).map_err(|_| not_found())?;
                (self.rows.clone(), self.probs.iter().map(|row| row[j]).collect())
            }
        };

        let mass: f64 = slice.iter().sum();
        if mass <= 0.0 {
            return Err(ProbError::EmptyConditional {
                axis: axis.to_string(),
                label: label.to_string(),
            });
        }

        Ok(Pmf {
            labels,
            probs: slice.into_iter().map(|p| p / mass).collect(),
        })
    }

    /// The marginal distribution of the named variable alone.
    ///
    /// Sums over the *other* axis. The result is NOT renormalized: its total
    /// equals this table's grand total (1 for a normalized joint, up to
    /// floating-point accumulation). Callers that marginalize an
    /// unnormalized table and want probabilities can follow up with
    /// [`Pmf::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::UnknownAxis`] if the name matches neither axis.
    pub fn marginal(&self, axis: &str) -> Result<Pmf<L>, ProbError> {
        match self.resolve_axis(axis)? {
            Axis::Row => Ok(Pmf {
                labels: self.rows.clone(),
                probs: self.probs.iter().map(|row| row.iter().sum()).collect(),
            }),
            Axis::Col => Ok(Pmf {
                labels: self.cols.clone(),
                probs: (0..self.cols.len())
                    .map(|j| self.probs.iter().map(|row| row[j]).sum())
                    .collect(),
            }),
        }
    }

    /// Mutual information I(row; col) in nats.
    ///
    /// `I(X; Y) = Σ P(x,y) · ln(P(x,y) / (P(x)·P(y)))`, computed over the
    /// normalized table. Zero when the variables are independent.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyTable`] if the total mass is zero.
    pub fn mutual_information(&self) -> Result<f64, ProbError> {
        let joint = self.normalize()?;
        let p_row = joint.marginal(&joint.row_name)?;
        let p_col = joint.marginal(&joint.col_name)?;

        let mut mi = 0.0;
        for (i, row) in joint.probs.iter().enumerate() {
            for (j, &p) in row.iter().enumerate() {
                if p > PROB_TOLERANCE {
                    let px = p_row.probs[i];
                    let py = p_col.probs[j];
                    if px > PROB_TOLERANCE && py > PROB_TOLERANCE {
                        mi += p * (p / (px * py)).ln();
                    }
                }
            }
        }
        Ok(mi)
    }

    fn resolve_axis(&self, name: &str) -> Result<Axis, ProbError> {
        if name == self.row_name {
            Ok(Axis::Row)
        } else if name == self.col_name {
            Ok(Axis::Col)
        } else {
            Err(ProbError::UnknownAxis {
                name: name.to_string(),
                row_axis: self.row_name.clone(),
                col_axis: self.col_name.clone(),
            })
        }
    }
}

fn argsort<L: Ord>(labels: &[L]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| labels[a].cmp(&labels[b]));
    order
}

fn check_distinct<L: Ord + fmt::Display>(sorted: &[L]) -> Result<(), ProbError> {
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(ProbError::DuplicateLabel {
                label: pair[1].to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_fruit_joint() -> JointPmf<&'static str> {
        let colors = ["r", "r", "g"];
        let fruits = ["x", "y", "x"];
        CrossTab::from_pairs("color", &colors, "fruit", &fruits)
            .unwrap()
            .to_joint()
            .unwrap()
    }

    #[test]
    fn test_from_counts_divides_by_total() {
        let joint = color_fruit_joint();
        assert!((joint.prob(&"r", &"x") - 1.0 / 3.0).abs() < PROB_TOLERANCE);
        assert!((joint.prob(&"r", &"y") - 1.0 / 3.0).abs() < PROB_TOLERANCE);
        assert!((joint.prob(&"g", &"x") - 1.0 / 3.0).abs() < PROB_TOLERANCE);
        assert_eq!(joint.prob(&"g", &"y"), 0.0);
        assert!((joint.total() - 1.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_normalize_is_stable_on_normalized_input() {
        let joint = color_fruit_joint();
        let again = joint.normalize().unwrap();
        for (row_a, row_b) in joint.probs.iter().zip(again.probs.iter()) {
            for (a, b) in row_a.iter().zip(row_b.iter()) {
                assert!((a - b).abs() < PROB_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_normalize_empty_table() {
        let joint = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
        )
        .unwrap();
        assert!(matches!(joint.normalize(), Err(ProbError::EmptyTable)));
    }

    #[test]
    fn test_conditional_on_row_axis() {
        let joint = color_fruit_joint();
        let given_r = joint.conditional("color", &"r").unwrap();
        assert!((given_r.prob(&"x") - 0.5).abs() < PROB_TOLERANCE);
        assert!((given_r.prob(&"y") - 0.5).abs() < PROB_TOLERANCE);
        assert!((given_r.total() - 1.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_conditional_on_col_axis() {
        let joint = color_fruit_joint();
        // P(color | fruit = "x"): mass 1/3 at r and 1/3 at g, renormalized.
        let given_x = joint.conditional("fruit", &"x").unwrap();
        assert!((given_x.prob(&"r") - 0.5).abs() < PROB_TOLERANCE);
        assert!((given_x.prob(&"g") - 0.5).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_conditional_works_on_unnormalized_mass() {
        // Conditioning a raw count table must agree with conditioning the
        // normalized joint.
        let counts = JointPmf::new(
            "color",
            "fruit",
            vec!["g", "r"],
            vec!["x", "y"],
            vec![vec![1.0, 0.0], vec![1.0, 1.0]],
        )
        .unwrap();
        let from_counts = counts.conditional("color", &"r").unwrap();
        let from_joint = counts.normalize().unwrap().conditional("color", &"r").unwrap();
        assert!((from_counts.prob(&"x") - from_joint.prob(&"x")).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_conditional_unknown_axis() {
        let joint = color_fruit_joint();
        let result = joint.conditional("flavor", &"r");
        assert!(matches!(result, Err(ProbError::UnknownAxis { .. })));
    }

    #[test]
    fn test_conditional_label_not_found() {
        let joint = color_fruit_joint();
        let result = joint.conditional("color", &"b");
        assert!(matches!(result, Err(ProbError::LabelNotFound { .. })));
    }

    #[test]
    fn test_conditional_zero_slice() {
        let joint = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![0.5, 0.5], vec![0.0, 0.0]],
        )
        .unwrap();
        let result = joint.conditional("a", &1);
        assert!(matches!(result, Err(ProbError::EmptyConditional { .. })));
    }

    #[test]
    fn test_marginal_sums_other_axis() {
        let joint = color_fruit_joint();
        let color = joint.marginal("color").unwrap();
        assert!((color.prob(&"r") - 2.0 / 3.0).abs() < PROB_TOLERANCE);
        assert!((color.prob(&"g") - 1.0 / 3.0).abs() < PROB_TOLERANCE);

        let fruit = joint.marginal("fruit").unwrap();
        assert!((fruit.prob(&"x") - 2.0 / 3.0).abs() < PROB_TOLERANCE);
        assert!((fruit.prob(&"y") - 1.0 / 3.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_marginal_does_not_renormalize() {
        // An unnormalized table's marginal keeps the grand total.
        let joint = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![2.0, 1.0], vec![1.0, 0.0]],
        )
        .unwrap();
        let m = joint.marginal("a").unwrap();
        assert!((m.total() - 4.0).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_marginal_unknown_axis() {
        let joint = color_fruit_joint();
        assert!(matches!(
            joint.marginal("flavor"),
            Err(ProbError::UnknownAxis { .. })
        ));
    }

    #[test]
    fn test_new_sorts_axes_with_grid() {
        let joint = JointPmf::new(
            "a",
            "b",
            vec![1_u8, 0],
            vec![1_u8, 0],
            vec![vec![0.4, 0.3], vec![0.2, 0.1]],
        )
        .unwrap();
        // Row 1/col 1 held 0.4 before sorting; after sorting it sits at (1, 1).
        assert_eq!(joint.rows, vec![0, 1]);
        assert_eq!(joint.cols, vec![0, 1]);
        assert!((joint.prob(&1, &1) - 0.4).abs() < PROB_TOLERANCE);
        assert!((joint.prob(&0, &0) - 0.1).abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_new_rejects_ragged_grid() {
        let result = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![0.5, 0.5], vec![0.0]],
        );
        assert!(matches!(
            result,
            Err(ProbError::RaggedTable {
                row: 1,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_axis_label() {
        let result = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 0],
            vec![0_u8, 1],
            vec![vec![0.5, 0.0], vec![0.0, 0.5]],
        );
        assert!(matches!(result, Err(ProbError::DuplicateLabel { .. })));
    }

    #[test]
    fn test_mutual_information_independent() {
        // Product of marginals: independent variables, MI = 0.
        let joint = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![0.25, 0.25], vec![0.25, 0.25]],
        )
        .unwrap();
        assert!(joint.mutual_information().unwrap().abs() < PROB_TOLERANCE);
    }

    #[test]
    fn test_mutual_information_deterministic() {
        // Perfect correlation: MI equals the marginal entropy, ln(2) here.
        let joint = JointPmf::new(
            "a",
            "b",
            vec![0_u8, 1],
            vec![0_u8, 1],
            vec![vec![0.5, 0.0], vec![0.0, 0.5]],
        )
        .unwrap();
        let mi = joint.mutual_information().unwrap();
        assert!((mi - 2.0_f64.ln()).abs() < PROB_TOLERANCE);
    }
}
