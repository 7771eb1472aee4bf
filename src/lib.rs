//! # mapjoust
//!
//! Benchmarks two associative-container strategies against each other: an
//! ordered map (`BTreeMap`) and an unordered map (`HashMap`), across two
//! workload shapes chosen to favor one structure each.
//!
//! | Scenario | Workload | Expected winner |
//! |----------|----------|-----------------|
//! | Spell checker | Point lookups in a word dictionary | Hash map |
//! | Reservation system | Range queries + sorted traversal over timestamps | Ordered map |
//!
//! ## Running
//!
//! ```bash
//! # One-shot comparison tables on stdout
//! cargo run --release
//!
//! # Diagnostics while running (tables stay on stdout, logs on stderr)
//! RUST_LOG=mapjoust=debug cargo run --release
//!
//! # Statistical benchmarks over the same strategies
//! cargo bench --bench comparison
//! ```
//!
//! ## Methodology
//!
//! - Workloads are generated up front from a fixed seed (42), so every run
//!   measures the same key sequences.
//! - Each operation is timed exactly once with a monotonic clock, no warm-up
//!   and no repetition. Numbers are noisy; the point is the relative shape,
//!   not the absolute figure. The `divan` bench suite exists for when
//!   statistical rigor is wanted.
//! - Both strategies sit behind one minimal interface
//!   ([`MapStrategy`](strategy::MapStrategy)), so scenario logic is written
//!   once and parameterized over the container.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod report;
pub mod reservation;
pub mod spell;
pub mod strategy;
pub mod timing;
pub mod workload;

// Re-export main types for convenience
pub use report::{FactorDir, Row, Table};
pub use reservation::{ReservationParams, ReservationReport};
pub use spell::{SpellParams, SpellReport};
pub use strategy::{Hashed, MapStrategy, Ordered};
pub use timing::time_ms;
pub use workload::{BENCH_SEED, TimeRange};
