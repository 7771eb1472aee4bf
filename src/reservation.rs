//! Scenario 2: time-based reservation system.
//!
//! Reservations keyed by timestamp are loaded into each strategy, then hit
//! with range queries (count everything inside `[start, end]`) and a full
//! sorted traversal. Ordered structure pays off here: the tree answers a
//! range from its lower bound onward and iterates pre-sorted, while the hash
//! map scans everything per range and must sort its snapshot explicitly.

use std::hint::black_box;

use crate::report::{FactorDir, Row, Table};
use crate::strategy::{Hashed, MapStrategy, Ordered};
use crate::timing::time_ms;
use crate::workload::{self, ReservationWorkload};

/// Parameters for one reservation run.
#[derive(Debug, Clone, Copy)]
pub struct ReservationParams {
    /// Number of reservations to load.
    pub num_reservations: usize,
    /// Number of query ranges.
    pub num_ranges: usize,
    /// PRNG seed for the workload.
    pub seed: u64,
}

/// Per-strategy timings for the three measured operations.
#[derive(Debug, Clone, Copy)]
pub struct ReservationTimes {
    /// Time to insert all reservations, in milliseconds.
    pub load_ms: f64,
    /// Time to count matches for every range, in milliseconds.
    pub range_ms: f64,
    /// Time to materialize the sorted snapshot, in milliseconds.
    pub traversal_ms: f64,
}

/// Both strategies' timings for one run.
#[derive(Debug, Clone, Copy)]
pub struct ReservationReport {
    /// `BTreeMap`-backed timings.
    pub ordered: ReservationTimes,
    /// `HashMap`-backed timings.
    pub hashed: ReservationTimes,
}

fn measure<S: MapStrategy<u64, usize>>(data: &ReservationWorkload) -> ReservationTimes {
    let mut map = S::default();

    // Duplicate timestamps overwrite the earlier index in both strategies.
    let load_ms = time_ms(|| {
        for (i, &t) in data.timestamps.iter().enumerate() {
            map.insert(t, i);
        }
    });

    let range_ms = time_ms(|| {
        let mut total_found = 0usize;
        for range in &data.ranges {
            total_found += map.range_count(&range.start, &range.end);
        }
        black_box(total_found);
    });

    let traversal_ms = time_ms(|| {
        black_box(map.sorted_pairs());
    });

    tracing::debug!(
        strategy = S::NAME,
        entries = map.len(),
        load_ms,
        range_ms,
        traversal_ms,
        "reservation scenario measured"
    );

    ReservationTimes {
        load_ms,
        range_ms,
        traversal_ms,
    }
}

/// Generate the workload and time both strategies.
#[must_use]
pub fn run(params: &ReservationParams) -> ReservationReport {
    let data =
        workload::reservation_workload(params.num_reservations, params.num_ranges, params.seed);
    ReservationReport {
        ordered: measure::<Ordered<u64, usize>>(&data),
        hashed: measure::<Hashed<u64, usize>>(&data),
    }
}

impl ReservationReport {
    /// Render the scenario's comparison table.
    ///
    /// Loading reports ordered / hashed; range search and sorting report
    /// hashed / ordered. Each factor above 1.0 reads as "this much slower
    /// for the structure not suited to the operation".
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new("Difference factor", 22).with_note(
            "(loading factor is map / unordered_map; range and sorting are unordered_map / map)",
        );
        table.push(Row::new(
            "Loading time",
            self.ordered.load_ms,
            self.hashed.load_ms,
            FactorDir::OrderedOverHashed,
        ));
        table.push(Row::new(
            "Range search",
            self.ordered.range_ms,
            self.hashed.range_ms,
            FactorDir::HashedOverOrdered,
        ));
        table.push(Row::new(
            "Sorting data",
            self.ordered.traversal_ms,
            self.hashed.traversal_ms,
            FactorDir::HashedOverOrdered,
        ));
        table
    }
}
