//! Party affiliation vs political alignment in a social survey sample.
//!
//! Run with: cargo run -p tabular-prob --example survey_conditionals
//!
//! This example demonstrates:
//! - A joint distribution over two coded survey variables
//! - Marginals as the single-variable views of a joint
//! - Conditionals as "what does alignment look like within one party?"
//! - The law of total probability tying the three together
//! - Mutual information as a one-number summary of association
//!
//! Code legends (survey conventions):
//! - party: 0 = strong Democrat .. 3 = independent .. 6 = strong Republican,
//!   7 = other party
//! - views: 1 = extremely liberal .. 4 = moderate .. 7 = extremely conservative

use tabular_prob::CrossTab;

// One respondent per index: PARTY[i] and VIEWS[i] come from the same answer
// sheet, which is what makes the cross-tabulation meaningful.
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
    println!("=== Survey: Party Affiliation vs Political Alignment ===\n");

    let joint = CrossTab::from_pairs("party", &PARTY, "views", &VIEWS)
        .unwrap()
        .to_joint()
        .unwrap();

    // -------------------------------------------------------------------------
    // 1. Marginals: each variable on its own
    // -------------------------------------------------------------------------
    println!("1. Marginal distributions");
    println!("-------------------------");
    let party = joint.marginal("party").unwrap();
    let views = joint.marginal("views").unwrap();
    println!("  P(party): ");
    for (code, p) in party.iter() {
        println!("    party {} -> {:.3}", code, p);
    }
    println!("  P(views): ");
    for (code, p) in views.iter() {
        println!("    views {} -> {:.3}", code, p);
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Conditionals: alignment within one party
    // -------------------------------------------------------------------------
    println!("2. Conditional distributions");
    println!("----------------------------");
    for party_code in [0_u8, 3, 6] {
        let cond = joint.conditional("party", &party_code).unwrap();
        println!(
            "  P(views | party = {}): mode = {}, entropy = {:.2} bits",
            party_code,
            cond.mode(),
            cond.entropy_bits()
        );
        for (code, p) in cond.iter() {
            if p > 0.0 {
                println!("    views {} -> {:.3}", code, p);
            }
        }
    }
    println!();

    // Conditioning runs the other way too.
    let moderate = joint.conditional("views", &4).unwrap();
    println!("  P(party | views = 4 (moderate)):");
    for (code, p) in moderate.iter() {
        if p > 0.0 {
            println!("    party {} -> {:.3}", code, p);
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Law of total probability
    // -------------------------------------------------------------------------
    println!("3. Law of total probability");
    println!("---------------------------");
    println!("  P(views = x) = sum over v of P(party = v) * P(views = x | party = v)");
    let mut reconstructed = 0.0;
    for (v, weight) in party.iter() {
        reconstructed += weight * joint.conditional("party", v).unwrap().prob(&4);
    }
    println!(
        "  reconstructed P(views = 4) = {:.6}, marginal gives {:.6}\n",
        reconstructed,
        views.prob(&4)
    );

    // -------------------------------------------------------------------------
    // 4. How associated are the two variables?
    // -------------------------------------------------------------------------
    println!("4. Mutual information");
    println!("---------------------");
    let mi = joint.mutual_information().unwrap();
    println!("  I(party; views) = {:.3} nats", mi);
    println!("  (0 would mean party tells you nothing about alignment)");
}
