//! Splits a walk into runs: maximal sequences of steps in the same direction.

use crate::Step;
use std::collections::BTreeMap;

/// A maximal sequence of 'length' consecutive steps in 'direction'.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Run {
    pub direction: Step,
    pub length: usize,
}

impl Run {
    pub fn new(direction: Step, length: usize) -> Self {
        Self { direction, length }
    }
}

/// Iterates over the runs of a slice of steps.
pub struct RunIterator<'a> {
    input: &'a [Step],
    pos: usize,
}

impl<'a> RunIterator<'a> {
    pub fn new(input: &'a [Step]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for RunIterator<'a> {
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        let direction = *self.input.get(self.pos)?;
        let start = self.pos;
        while self.pos < self.input.len() && self.input[self.pos] == direction {
            self.pos += 1;
        }
        Some(Run::new(direction, self.pos - start))
    }
}

/// Returns the runs of the walk 'steps', in order.
pub fn extract_runs(steps: &[Step]) -> Vec<Run> {
    RunIterator::new(steps).collect()
}

/// Builds the run sequence one step at a time, as the steps are recorded.
/// After pushing all of the steps of a walk the runs are identical to the
/// result of `extract_runs` on the same walk.
#[derive(Debug, Default, Clone)]
pub struct RunExtractor {
    runs: Vec<Run>,
}

impl RunExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the last run, or start a new one if 'step' changes direction.
    pub fn push(&mut self, step: Step) {
        match self.runs.last_mut() {
            Some(last) if last.direction == step => last.length += 1,
            _ => self.runs.push(Run::new(step, 1)),
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }
}

/// Expand the runs back into the walk they were extracted from.
pub fn expand_runs(runs: &[Run]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(runs.iter().map(|r| r.length).sum());
    for run in runs {
        steps.extend(std::iter::repeat(run.direction).take(run.length));
    }
    steps
}

/// Returns the lengths of the runs, dropping the directions.
pub fn run_lengths(runs: &[Run]) -> Vec<usize> {
    runs.iter().map(|r| r.length).collect()
}

/// Count how many times each length appears in 'lengths'.
pub fn length_frequencies<I>(lengths: I) -> BTreeMap<usize, usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut freq = BTreeMap::new();
    for len in lengths {
        *freq.entry(len).or_insert(0) += 1;
    }
    freq
}

/// Count how many runs have each length.
pub fn run_length_frequencies(runs: &[Run]) -> BTreeMap<usize, usize> {
    length_frequencies(runs.iter().map(|r| r.length))
}

#[test]
fn test_incremental_matches_batch() {
    use Step::*;
    let walk = [Right, Right, Left, Right, Right, Right, Left, Left];
    let mut extractor = RunExtractor::new();
    for (i, step) in walk.iter().enumerate() {
        extractor.push(*step);
        // Every prefix agrees, not only the final walk.
        assert_eq!(extractor.runs(), extract_runs(&walk[..i + 1]));
    }
    assert_eq!(run_lengths(extractor.runs()), vec![2, 1, 3, 2]);
}
