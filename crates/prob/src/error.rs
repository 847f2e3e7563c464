//! Error types for distribution operations.

use thiserror::Error;

/// Errors that can occur when building or transforming distributions.
///
/// Every variant is a local precondition violation on malformed or degenerate
/// input. Nothing here is transient: callers get the error directly, with no
/// retry or silent defaulting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProbError {
    /// Sample sequence was empty.
    #[error("Cannot build a distribution from an empty sequence")]
    EmptyInput,

    /// Paired sequences (or parallel label/mass vectors) differ in length.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Table has zero total mass, so it cannot be normalized.
    #[error("Cannot normalize: total mass is zero")]
    EmptyTable,

    /// Axis name matched neither the row axis nor the column axis.
    #[error("Unknown axis '{name}' (table axes are '{row_axis}' and '{col_axis}')")]
    UnknownAxis {
        name: String,
        row_axis: String,
        col_axis: String,
    },

    /// Label not present on the matched axis.
    #[error("Label '{label}' not found on axis '{axis}'")]
    LabelNotFound { axis: String, label: String },

    /// Selected slice has zero mass; conditioning cannot renormalize it.
    #[error("Conditioning on {axis} = '{label}' selects zero mass")]
    EmptyConditional { axis: String, label: String },

    /// Negative mass encountered.
    #[error("Negative mass encountered")]
    NegativeMass,

    /// The same label appeared twice on one axis.
    #[error("Duplicate label '{label}' on one axis")]
    DuplicateLabel { label: String },

    /// Rows of a 2-D table have different lengths.
    #[error("Row {row} has {got} entries (expected {expected})")]
    RaggedTable {
        row: usize,
        expected: usize,
        got: usize,
    },
}
