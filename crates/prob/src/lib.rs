//! # Tabular Prob - Joint, Conditional, and Marginal Distributions
//!
//! This crate teaches discrete probability over labeled categorical data
//! through a small set of pure transformations:
//!
//! - **PMF builder**: a sequence of draws becomes a normalized frequency
//!   table ([`Pmf::from_seq`])
//! - **Cross-tabulator**: two paired sequences become a 2-D count table
//!   ([`CrossTab::from_pairs`])
//! - **Joint normalizer**: counts divided by the grand total become a joint
//!   PMF ([`JointPmf::from_counts`])
//! - **Conditional**: slice a named axis at a value and renormalize
//!   ([`JointPmf::conditional`])
//! - **Marginal**: sum over the other axis, without renormalizing
//!   ([`JointPmf::marginal`])
//!
//! Every structure is immutable and every operation is a pure function of
//! its inputs, so the whole pipeline is safe to call from multiple threads.
//!
//! ## Example: colors and fruits
//!
//! ```rust
//! use tabular_prob::CrossTab;
//!
//! // Paired draws: draw i produced (color[i], fruit[i]).
//! let colors = ["red", "red", "green", "red"];
//! let fruits = ["apple", "cherry", "apple", "apple"];
//!
//! let joint = CrossTab::from_pairs("color", &colors, "fruit", &fruits)
//!     .unwrap()
//!     .to_joint()
//!     .unwrap();
//!
//! // P(fruit | color = red)
//! let fruit_given_red = joint.conditional("color", &"red").unwrap();
//! assert!((fruit_given_red.prob(&"apple") - 2.0 / 3.0).abs() < 1e-9);
//!
//! // P(color), unconditioned
//! let color = joint.marginal("color").unwrap();
//! assert!((color.prob(&"red") - 0.75).abs() < 1e-9);
//! ```

mod crosstab;
mod error;
mod joint;
mod pmf;

pub use crosstab::CrossTab;
pub use error::ProbError;
pub use joint::JointPmf;
pub use pmf::Pmf;

/// Tolerance for probability comparisons.
pub const PROB_TOLERANCE: f64 = 1e-9;
