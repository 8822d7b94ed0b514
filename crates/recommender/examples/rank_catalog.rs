//! Example: Rank the seeded catalog
//!
//! Run with: cargo run --package recommender --example rank_catalog
//!
//! This example shows how to:
//! 1. Seed the catalog store
//! 2. Rank by rating with no anchor
//! 3. Rank against an anchor movie
//! 4. Restrict the pool to one genre

use catalog::CatalogStore;
use recommender::{Candidate, RecommendationRequest, Recommender};
use std::time::Instant;

fn print_candidates(candidates: &[Candidate]) {
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "  {}. {} ({}) score {:.1} [{:?}]",
            i + 1,
            candidate.entry.title,
            candidate.entry.year,
            candidate.score,
            candidate.source
        );
        println!("     {}", candidate.explanation);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== ReelCatalog Ranking Example ===\n");

    let store = CatalogStore::seeded()?;
    println!("Seeded {} movies\n", store.len());

    let recommender = Recommender::new();

    println!("Top rated (no anchor):");
    let start = Instant::now();
    let top = recommender.recommend_scored(store.get_all(), &RecommendationRequest::new());
    println!("Ranked in {:?}", start.elapsed());
    print_candidates(&top);

    let anchor_id = 1;
    if let Some(anchor) = store.get_by_id(anchor_id) {
        println!("Because you liked {}:", anchor.title);
        let request = RecommendationRequest::new().with_anchor(anchor_id);
        print_candidates(&recommender.recommend_scored(store.get_all(), &request));
    }

    println!("Horror only:");
    let request = RecommendationRequest::new().with_genre("Horror");
    print_candidates(&recommender.recommend_scored(store.get_all(), &request));

    Ok(())
}
