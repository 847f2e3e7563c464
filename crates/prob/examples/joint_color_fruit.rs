//! Joint distributions from paired draws: colors and fruits.
//!
//! Run with: cargo run -p tabular-prob --example joint_color_fruit
//!
//! This example demonstrates:
//! - Building a PMF from a single sequence of draws
//! - Cross-tabulating two paired sequences into a count table
//! - Normalizing counts into a joint PMF
//! - Conditioning (slice + renormalize) vs marginalizing (sum, no renormalize)

use tabular_prob::{CrossTab, Pmf};

fn main() {
    println!("=== Joint, Conditional, and Marginal: Colors and Fruits ===\n");

    // Paired draws: each basket pick i produced (color[i], fruit[i]).
    let colors = [
        "red", "red", "green", "red", "yellow", "green", "red", "yellow", "red", "green", "red",
        "yellow",
    ];
    let fruits = [
        "apple", "cherry", "apple", "apple", "banana", "pear", "cherry", "lemon", "apple", "apple",
        "cherry", "banana",
    ];

    // -------------------------------------------------------------------------
    // 1. One variable at a time: the PMF builder
    // -------------------------------------------------------------------------
    println!("1. PMF of a single variable");
    println!("---------------------------");
    let color_pmf = Pmf::from_seq(&colors).unwrap();
    for (label, p) in color_pmf.iter() {
        println!("  P(color = {:<6}) = {:.3}", label, p);
    }
    println!("  total = {:.3}\n", color_pmf.total());

    // -------------------------------------------------------------------------
    // 2. Two variables together: cross-tabulation
    // -------------------------------------------------------------------------
    println!("2. Cross-tabulation of paired draws");
    println!("-----------------------------------");
    let tab = CrossTab::from_pairs("color", &colors, "fruit", &fruits).unwrap();
    print!("  {:<8}", "");
    for fruit in &tab.cols {
        print!("{:>8}", fruit);
    }
    println!();
    for (i, color) in tab.rows.iter().enumerate() {
        print!("  {:<8}", color);
        for count in &tab.counts[i] {
            print!("{:>8}", count);
        }
        println!();
    }
    println!("  grand total = {} draws\n", tab.total());

    // -------------------------------------------------------------------------
    // 3. Normalize: counts -> joint PMF
    // -------------------------------------------------------------------------
    println!("3. Joint PMF (counts / grand total)");
    println!("-----------------------------------");
    let joint = tab.to_joint().unwrap();
    println!(
        "  P(color = red, fruit = apple)  = {:.3}",
        joint.prob(&"red", &"apple")
    );
    println!(
        "  P(color = green, fruit = pear) = {:.3}",
        joint.prob(&"green", &"pear")
    );
    println!("  grand total = {:.3}\n", joint.total());

    // -------------------------------------------------------------------------
    // 4. Conditioning: slice a named axis, then renormalize
    // -------------------------------------------------------------------------
    println!("4. Conditional: P(fruit | color = red)");
    println!("--------------------------------------");
    let fruit_given_red = joint.conditional("color", &"red").unwrap();
    for (fruit, p) in fruit_given_red.iter() {
        println!("  P(fruit = {:<6} | red) = {:.3}", fruit, p);
    }
    println!(
        "  slice renormalized: total = {:.3}\n",
        fruit_given_red.total()
    );

    // -------------------------------------------------------------------------
    // 5. Marginalizing: sum over the other axis, no renormalization
    // -------------------------------------------------------------------------
    println!("5. Marginal: P(fruit), unconditioned");
    println!("------------------------------------");
    let fruit_marginal = joint.marginal("fruit").unwrap();
    for (fruit, p) in fruit_marginal.iter() {
        println!("  P(fruit = {:<6}) = {:.3}", fruit, p);
    }
    println!();
    println!("Key insight: conditioning restricts the space, so it must");
    println!("renormalize; marginalizing only re-buckets mass, so it must not.");
    println!(
        "The most likely fruit overall is '{}'.",
        fruit_marginal.mode()
    );
}
