//! Heatmap artifact - pseudo-color view of a 2-D probability table.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabular_prob::JointPmf;

/// Shade ramp from empty cell to maximum-mass cell.
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// A serializable heatmap of a joint table.
///
/// Rows appear in axis-label order with the first row label at the top;
/// `values[i][j]` is the mass of `(row_labels[i], col_labels[j])`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapArtifact {
    pub schema_version: String,
    pub title: String,
    pub row_axis: String,
    pub col_axis: String,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Build a heatmap artifact from a joint table.
///
/// The table is only read; the artifact owns stringified copies of the axis
/// labels and the value grid.
pub fn heatmap<L: Ord + Clone + fmt::Display>(joint: &JointPmf<L>, title: &str) -> HeatmapArtifact {
    HeatmapArtifact {
        schema_version: "tabular_heatmap_v0".to_string(),
        title: title.to_string(),
        row_axis: joint.row_name.clone(),
        col_axis: joint.col_name.clone(),
        row_labels: joint.rows.iter().map(|l| l.to_string()).collect(),
        col_labels: joint.cols.iter().map(|l| l.to_string()).collect(),
        values: joint.probs.clone(),
    }
}

impl HeatmapArtifact {
    /// Render the grid as shaded text cells, first row label at the top.
    pub fn to_text(&self) -> String {
        let max = self
            .values
            .iter()
            .flatten()
            .cloned()
            .fold(0.0_f64, f64::max);
        let label_width = self
            .row_labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0)
            .max(self.row_axis.len());

        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!(
            "{:>width$} | {}\n",
            self.row_axis,
            self.col_axis,
            width = label_width
        ));
        for (label, row) in self.row_labels.iter().zip(self.values.iter()) {
            out.push_str(&format!("{:>width$} | ", label, width = label_width));
            for &v in row {
                out.push(shade(v, max));
                out.push(shade(v, max));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "{:>width$} | cols: {}\n",
            "",
            self.col_labels.join(" "),
            width = label_width
        ));
        out
    }
}

fn shade(value: f64, max: f64) -> char {
    if max <= 0.0 || value <= 0.0 {
        return SHADES[0];
    }
    let bucket = (value / max * (SHADES.len() - 1) as f64).ceil() as usize;
    SHADES[bucket.min(SHADES.len() - 1)]
}
