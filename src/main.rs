//! Comparison binary: runs both scenarios with fixed parameters.
//!
//! Run with:
//! ```bash
//! cargo run --release
//!
//! # With per-scenario diagnostics on stderr
//! RUST_LOG=mapjoust=debug cargo run --release
//! ```
//!
//! Takes no arguments and always exits 0. The tables go to stdout; tracing
//! output (if enabled) goes to stderr so the two never interleave.

use mapjoust::reservation::{self, ReservationParams};
use mapjoust::spell::{self, SpellParams};
use mapjoust::workload::BENCH_SEED;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Quiet by default; RUST_LOG opts in.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    println!("PERFORMANCE COMPARISON: MAP vs. UNORDERED_MAP");

    // Scenario 1: Spell Checker (favors the hash map)
    let spell_params = SpellParams {
        num_words: 100_000,
        num_searches: 50_000,
        seed: BENCH_SEED,
    };
    println!("\n=== SCENARIO 1: SPELL CHECKER ===");
    println!("Number of words in dictionary: {}", spell_params.num_words);
    println!("Number of searches: {}", spell_params.num_searches);

    let report = spell::run(&spell_params);
    println!("\n{}", report.table());

    // Scenario 2: Time Reservation System (favors the ordered map)
    let reservation_params = ReservationParams {
        num_reservations: 100_000,
        num_ranges: 1_000,
        seed: BENCH_SEED,
    };
    println!("\n=== SCENARIO 2: TIME-BASED RESERVATION SYSTEM ===");
    println!(
        "Number of reservations: {}",
        reservation_params.num_reservations
    );
    println!(
        "Number of time ranges to search: {}",
        reservation_params.num_ranges
    );

    let report = reservation::run(&reservation_params);
    println!("\n{}", report.table());
}
