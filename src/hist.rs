//! A histogram of run lengths that can display itself.

use crate::runs::{length_frequencies, run_length_frequencies, Run};
use std::collections::BTreeMap;
use std::fmt;

/// The width of the longest bar, in characters.
const BAR_WIDTH: usize = 40;

pub struct RunHistogram {
    counts: BTreeMap<usize, usize>,
}

impl RunHistogram {
    pub fn from_runs(runs: &[Run]) -> Self {
        Self {
            counts: run_length_frequencies(runs),
        }
    }

    pub fn from_lengths(lengths: &[usize]) -> Self {
        Self {
            counts: length_frequencies(lengths.iter().copied()),
        }
    }

    /// Maps each run length to the number of runs with that length.
    pub fn counts(&self) -> &BTreeMap<usize, usize> {
        &self.counts
    }

    /// Returns the number of runs.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn dump(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for RunHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.counts.values().copied().max().unwrap_or(0);
        if max == 0 {
            return writeln!(f, "-- empty --");
        }

        // Print every length between the shortest and the longest run, so
        // gaps are visible.
        let first = *self.counts.keys().next().unwrap_or(&0);
        let last = *self.counts.keys().next_back().unwrap_or(&0);
        for len in first..=last {
            let count = self.counts.get(&len).copied().unwrap_or(0);
            let bar = BAR_WIDTH * count / max;
            writeln!(f, "{:>3}) {} - {}", len, "#".repeat(bar), count)?;
        }
        Ok(())
    }
}
