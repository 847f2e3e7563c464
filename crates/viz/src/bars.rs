//! Bar-chart artifact for 1-D distributions.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabular_prob::Pmf;

/// Bar length of the highest-mass label in the text rendering.
const FULL_BAR: usize = 40;

/// A serializable bar chart of a 1-D mass function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarArtifact {
    pub schema_version: String,
    pub title: String,
    pub axis: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Build a bar-chart artifact from a PMF.
pub fn bar_chart<L: Ord + Clone + fmt::Display>(
    pmf: &Pmf<L>,
    axis: &str,
    title: &str,
) -> BarArtifact {
    BarArtifact {
        schema_version: "tabular_bars_v0".to_string(),
        title: title.to_string(),
        axis: axis.to_string(),
        labels: pmf.labels.iter().map(|l| l.to_string()).collect(),
        values: pmf.probs.clone(),
    }
}

impl BarArtifact {
    /// Render as one bar per label, scaled so the tallest bar fills the row.
    pub fn to_text(&self) -> String {
        let max = self.values.iter().cloned().fold(0.0_f64, f64::max);
        let label_width = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{} ({})\n", self.title, self.axis));
        for (label, &v) in self.labels.iter().zip(self.values.iter()) {
            let len = if max > 0.0 {
                (v / max * FULL_BAR as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:>width$} | {} {:.3}\n",
                label,
                "█".repeat(len),
                v,
                width = label_width
            ));
        }
        out
    }
}
