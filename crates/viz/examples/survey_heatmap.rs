//! Rendering the survey joint distribution.
//!
//! Run with: cargo run -p tabular-viz --example survey_heatmap
//!
//! This example demonstrates:
//! - Turning a joint PMF into a heatmap artifact and a text rendering
//! - Bar charts for the marginal and a conditional slice
//! - Dumping an artifact as JSON for an external plotting front end

use tabular_prob::CrossTab;
use tabular_viz::{bar_chart, heatmap};

#[rustfmt::skip]
const PARTY: [u8; 60] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7,
];
#[rustfmt::skip]
const VIEWS: [u8; 60] = [
    1, 2, 1, 3, 2, 2, 1, 4,
    2, 3, 2, 3, 4, 2, 3, 1,
    3, 4, 3, 4, 2, 3, 5,
    4, 3, 4, 5, 4, 3, 4, 5, 4, 2,
    5, 4, 5, 6, 4, 5, 5,
    5, 6, 6, 5, 7, 6, 5, 6,
    6, 7, 6, 7, 5, 6, 7, 6,
    2, 4, 5, 7,
];

fn main() {
    let joint = CrossTab::from_pairs("party", &PARTY, "views", &VIEWS)
        .unwrap()
        .to_joint()
        .unwrap();

    println!("=== Survey Joint Distribution, Rendered ===\n");

    // The diagonal band is the party/alignment correlation.
    let map = heatmap(&joint, "P(party, views)");
    println!("{}", map.to_text());

    let views = joint.marginal("views").unwrap();
    println!("{}", bar_chart(&views, "views", "P(views)").to_text());

    let strong_dem = joint.conditional("party", &0).unwrap();
    println!(
        "{}",
        bar_chart(&strong_dem, "views", "P(views | party = 0)").to_text()
    );

    // Artifacts serialize for plotting front ends.
    println!("heatmap artifact as JSON:");
    println!("{}", serde_json::to_string_pretty(&map).unwrap());
}
