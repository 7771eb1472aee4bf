//! Seeded workload generation.
//!
//! Both scenarios generate their full input up front from a fixed seed, so a
//! run measures container behavior and nothing else. Same seed, same
//! sequences. Exact values differ across PRNG implementations; the shape
//! (uniform draws, fixed counts) is the contract.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by both scenarios in the shipped binary.
pub const BENCH_SEED: u64 = 42;

/// Length of every generated dictionary/search word.
pub const WORD_LEN: usize = 8;

/// Seconds in a day; the maximum width of a reservation query range.
pub const SECS_PER_DAY: u64 = 86_400;

/// Seconds in a (non-leap) year; the timestamp domain is `[0, SECS_PER_YEAR]`.
pub const SECS_PER_YEAR: u64 = SECS_PER_DAY * 365;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A closed query interval over reservation timestamps.
///
/// Invariant (by construction in [`reservation_workload`]):
/// `start <= end` and `end - start < SECS_PER_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Inclusive lower bound.
    pub start: u64,
    /// Inclusive upper bound.
    pub end: u64,
}

impl TimeRange {
    /// Whether `t` falls inside the closed interval `[start, end]`.
    #[must_use]
    pub const fn contains(&self, t: u64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Generate one word of exactly `len` lowercase ASCII letters, each drawn
/// uniformly from `a..=z`. `len == 0` yields the empty string.
#[must_use]
pub fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Inputs for the spell-checker scenario.
#[derive(Debug, Clone)]
pub struct SpellWorkload {
    /// `num_words` random 8-letter words, keys of the dictionary under test.
    pub dictionary: Vec<String>,
    /// `num_searches` lookup terms: first half reused cyclically from the
    /// dictionary, second half freshly random.
    pub searches: Vec<String>,
}

/// Generate the spell-checker workload from `seed`.
///
/// The search list is split 50/50: `num_searches / 2` terms taken as
/// `dictionary[i % num_words]` (guaranteed hits), then `num_searches / 2`
/// fresh random words. Fresh words are not checked against the dictionary;
/// an accidental hit is astronomically unlikely at 26^8 possible words and
/// deliberately left in. Odd `num_searches` truncates: each half gets
/// `num_searches / 2` terms, one fewer in total than asked for.
///
/// An empty dictionary has nothing to reuse, so the in-dictionary half is
/// empty in that case.
#[must_use]
pub fn spell_workload(num_words: usize, num_searches: usize, seed: u64) -> SpellWorkload {
    let mut rng = StdRng::seed_from_u64(seed);

    let dictionary: Vec<String> = (0..num_words)
        .map(|_| random_word(&mut rng, WORD_LEN))
        .collect();

    let mut searches = Vec::with_capacity(num_searches / 2 * 2);
    if !dictionary.is_empty() {
        for i in 0..num_searches / 2 {
            searches.push(dictionary[i % dictionary.len()].clone());
        }
    }
    for _ in 0..num_searches / 2 {
        searches.push(random_word(&mut rng, WORD_LEN));
    }

    tracing::debug!(
        num_words,
        num_searches,
        seed,
        generated = dictionary.len() + searches.len(),
        "spell workload ready"
    );

    SpellWorkload {
        dictionary,
        searches,
    }
}

/// Inputs for the reservation scenario.
#[derive(Debug, Clone)]
pub struct ReservationWorkload {
    /// Timestamps uniform in `[0, SECS_PER_YEAR]`. Duplicates are legal and
    /// kept; the maps under test resolve them by last-write-wins.
    pub timestamps: Vec<u64>,
    /// Query ranges, each at most a day wide.
    pub ranges: Vec<TimeRange>,
}

/// Generate the reservation workload from `seed`.
///
/// Timestamps first, then ranges, off one PRNG stream. Each range start is
/// uniform over the year; the width is a fresh uniform draw reduced mod one
/// day, so `end - start` lies in `[0, SECS_PER_DAY)`.
#[must_use]
pub fn reservation_workload(
    num_reservations: usize,
    num_ranges: usize,
    seed: u64,
) -> ReservationWorkload {
    let mut rng = StdRng::seed_from_u64(seed);

    let timestamps: Vec<u64> = (0..num_reservations)
        .map(|_| rng.gen_range(0..=SECS_PER_YEAR))
        .collect();

    let ranges: Vec<TimeRange> = (0..num_ranges)
        .map(|_| {
            let start = rng.gen_range(0..=SECS_PER_YEAR);
            let end = start + rng.gen_range(0..=SECS_PER_YEAR) % SECS_PER_DAY;
            TimeRange { start, end }
        })
        .collect();

    tracing::debug!(
        num_reservations,
        num_ranges,
        seed,
        "reservation workload ready"
    );

    ReservationWorkload { timestamps, ranges }
}
