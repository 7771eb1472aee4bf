//! Scenario 1: spell checker.
//!
//! A dictionary of random words is loaded into each strategy, then probed
//! with a mixed search list (half guaranteed hits, half random misses).
//! Point lookups dominate, which is the hash map's home turf.

use std::hint::black_box;

use crate::report::{FactorDir, Row, Table};
use crate::strategy::{Hashed, MapStrategy, Ordered};
use crate::timing::time_ms;
use crate::workload::{self, SpellWorkload};

/// Parameters for one spell-checker run.
#[derive(Debug, Clone, Copy)]
pub struct SpellParams {
    /// Dictionary size.
    pub num_words: usize,
    /// Total lookups, split 50/50 between hits and fresh random words.
    pub num_searches: usize,
    /// PRNG seed for the workload.
    pub seed: u64,
}

/// Load and search timings for a single strategy.
#[derive(Debug, Clone, Copy)]
pub struct SpellTimes {
    /// Time to insert the whole dictionary, in milliseconds.
    pub load_ms: f64,
    /// Time to run every lookup, in milliseconds.
    pub search_ms: f64,
}

/// Both strategies' timings for one run.
#[derive(Debug, Clone, Copy)]
pub struct SpellReport {
    /// `BTreeMap`-backed timings.
    pub ordered: SpellTimes,
    /// `HashMap`-backed timings.
    pub hashed: SpellTimes,
}

fn measure<S: MapStrategy<String, bool>>(data: &SpellWorkload) -> SpellTimes {
    let mut map = S::default();

    let load_ms = time_ms(|| {
        for word in &data.dictionary {
            map.insert(word.clone(), true);
        }
    });

    let search_ms = time_ms(|| {
        let mut found = 0usize;
        for word in &data.searches {
            if map.contains(word) {
                found += 1;
            }
        }
        // The count only exists to keep the lookups from being optimized out.
        black_box(found);
    });

    tracing::debug!(
        strategy = S::NAME,
        entries = map.len(),
        load_ms,
        search_ms,
        "spell scenario measured"
    );

    SpellTimes { load_ms, search_ms }
}

/// Generate the workload and time both strategies.
///
/// Pure in its parameters: no state survives the call besides the report.
#[must_use]
pub fn run(params: &SpellParams) -> SpellReport {
    let data = workload::spell_workload(params.num_words, params.num_searches, params.seed);
    SpellReport {
        ordered: measure::<Ordered<String, bool>>(&data),
        hashed: measure::<Hashed<String, bool>>(&data),
    }
}

impl SpellReport {
    /// Render the scenario's comparison table.
    ///
    /// Both rows report ordered / hashed ("improvement factor": how much the
    /// hash map gains over the tree for this lookup-heavy workload).
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new("Improvement factor", 24)
            .with_note("(factors are map / unordered_map)");
        table.push(Row::new(
            "Loading time",
            self.ordered.load_ms,
            self.hashed.load_ms,
            FactorDir::OrderedOverHashed,
        ));
        table.push(Row::new(
            "Search time",
            self.ordered.search_ms,
            self.hashed.search_ms,
            FactorDir::OrderedOverHashed,
        ));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::{SpellParams, run};
    use crate::workload::BENCH_SEED;

    #[test]
    fn empty_dictionary_still_produces_a_report() {
        let report = run(&SpellParams {
            num_words: 0,
            num_searches: 10,
            seed: BENCH_SEED,
        });
        assert!(report.ordered.load_ms >= 0.0);
        assert!(report.hashed.load_ms >= 0.0);
    }

    #[test]
    fn table_has_two_rows_and_the_banner() {
        let report = run(&SpellParams {
            num_words: 50,
            num_searches: 20,
            seed: BENCH_SEED,
        });
        let out = report.table().to_string();
        assert!(out.contains("Loading time"));
        assert!(out.contains("Search time"));
        assert!(out.contains("Improvement factor"));
    }
}
