//! A walk that is being recorded, one step at a time, and its analysis.

use crate::classifier::{ClassificationResult, Classifier};
use crate::runs::{run_length_frequencies, run_lengths, Run, RunExtractor};
use crate::{Error, Step, MAX_STEPS};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// The result of a request to analyze a walk.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Analysis<'a> {
    /// This request ran the classifier.
    Computed(&'a ClassificationResult),
    /// The walk was analyzed before; this is the stored result.
    Cached(&'a ClassificationResult),
}

impl<'a> Analysis<'a> {
    pub fn result(&self) -> &'a ClassificationResult {
        match self {
            Analysis::Computed(r) | Analysis::Cached(r) => r,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Analysis::Computed(_))
    }
}

/// Records a walk and analyzes it once.
///
/// The walk is either collecting steps or analyzed. The transition happens in
/// `analyze`, and is an atomic one-time initialization of the stored result:
/// when several callers report completion at the same time (for example a
/// timer-driven stepper and a key handler), exactly one of them runs the
/// classifier and the others receive the stored result.
#[derive(Debug)]
pub struct Walk {
    steps: Vec<Step>,
    runs: RunExtractor,
    position: i64,
    max_steps: usize,
    result: OnceLock<Result<ClassificationResult, Error>>,
}

impl Default for Walk {
    fn default() -> Self {
        Self::new()
    }
}

impl Walk {
    pub fn new() -> Self {
        Self::with_capacity(MAX_STEPS)
    }

    /// Create a walk that holds at most 'max_steps' steps.
    pub fn with_capacity(max_steps: usize) -> Self {
        Self {
            steps: Vec::with_capacity(max_steps.min(MAX_STEPS)),
            runs: RunExtractor::new(),
            position: 0,
            max_steps,
            result: OnceLock::new(),
        }
    }

    /// Build a walk from recorded steps.
    pub fn from_steps(steps: &[Step]) -> Result<Self, Error> {
        let mut walk = Self::new();
        for step in steps {
            walk.push(*step)?;
        }
        Ok(walk)
    }

    /// Append 'step' to the walk. Returns true if the walk reached its
    /// maximum length and should be analyzed.
    pub fn push(&mut self, step: Step) -> Result<bool, Error> {
        if self.is_analyzed() {
            return Err(Error::WalkAnalyzed);
        }
        if self.is_complete() {
            return Err(Error::WalkFull(self.max_steps));
        }
        self.steps.push(step);
        self.runs.push(step);
        self.position += step.value() as i64;
        Ok(self.is_complete())
    }

    /// Run the classifier on the walk, unless it was analyzed before.
    pub fn analyze(
        &self,
        classifier: &Classifier,
    ) -> Result<Analysis<'_>, Error> {
        let mut computed = false;
        let result = self.result.get_or_init(|| {
            computed = true;
            log::info!(
                "Analyzing a walk of {} steps and {} runs",
                self.steps.len(),
                self.runs.runs().len()
            );
            classifier.classify(&run_lengths(self.runs.runs()))
        });

        match result {
            Ok(r) if computed => Ok(Analysis::Computed(r)),
            Ok(r) => {
                log::debug!("The walk was already analyzed");
                Ok(Analysis::Cached(r))
            }
            Err(e) => Err(e.clone()),
        }
    }

    /// Returns the stored result, if the walk was analyzed successfully.
    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.get().and_then(|r| r.as_ref().ok())
    }

    pub fn is_analyzed(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.steps.len() >= self.max_steps
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn runs(&self) -> &[Run] {
        self.runs.runs()
    }

    /// The sum of the steps so far.
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Count how many runs have each length.
    pub fn frequencies(&self) -> BTreeMap<usize, usize> {
        run_length_frequencies(self.runs.runs())
    }
}
