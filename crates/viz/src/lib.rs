//! # Tabular Viz - Rendering Boundary for Labeled Distributions
//!
//! The statistical core hands its tables over by shared reference; this crate
//! turns them into presentation artifacts without touching them:
//!
//! - [`heatmap`]: a [`JointPmf`](tabular_prob::JointPmf) becomes a
//!   [`HeatmapArtifact`] holding axis names, label strings, and the value
//!   grid, with the first row label at the top
//! - [`bar_chart`]: a [`Pmf`](tabular_prob::Pmf) becomes a [`BarArtifact`]
//!
//! Artifacts are serializable so a plotting front end can consume them as
//! JSON; each also carries a `to_text` rendering for terminal walkthroughs.

mod bars;
mod heatmap;

pub use bars::{bar_chart, BarArtifact};
pub use heatmap::{heatmap, HeatmapArtifact};
