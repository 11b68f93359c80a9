//! The likelihood-ratio test that decides if a walk's run lengths look more
//! like a human or a computer generated them.
//!
//! The per-run probabilities are multiplied in the log domain; a product of
//! a hundred small probabilities underflows a double.

use crate::models::model::check_finite;
use crate::models::LengthModel;
use crate::{Class, Error};
use serde::Serialize;

/// The models of the two classes within one model family.
pub struct ModelPair {
    pub human: Box<dyn LengthModel>,
    pub computer: Box<dyn LengthModel>,
}

/// The outcome of the test under one model family.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct FamilyVerdict {
    /// The log of the joint probability of the runs under the human model.
    pub human_log_prob: f64,
    /// The log of the joint probability of the runs under the computer model.
    pub computer_log_prob: f64,
    /// human_log_prob - computer_log_prob.
    pub log_likelihood_ratio: f64,
    pub decision: Class,
}

/// The outcome of the test under both model families, which are independent
/// cross-checks of each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub continuous: FamilyVerdict,
    pub discrete: FamilyVerdict,
    /// Run lengths that a discrete model had no value for. They were scored
    /// with the probability floor.
    pub out_of_range: Vec<usize>,
}

pub struct Classifier {
    continuous: ModelPair,
    discrete: ModelPair,
    epsilon: f64,
}

impl Classifier {
    /// Create a classifier that floors every probability at 'epsilon', which
    /// must be in (0, 1).
    pub fn new(
        continuous: ModelPair,
        discrete: ModelPair,
        epsilon: f64,
    ) -> Result<Self, Error> {
        check_finite("epsilon", epsilon)?;
        if epsilon <= 0.0 || epsilon >= 1.0 {
            return Err(Error::InvalidInput(format!(
                "epsilon must be in (0, 1), got {}",
                epsilon
            )));
        }
        Ok(Self {
            continuous,
            discrete,
            epsilon,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the log of 'model's probability for 'length', floored at
    /// epsilon. Lengths the model has no value for have probability zero and
    /// are recorded in 'missing'.
    fn log_prob(
        &self,
        model: &dyn LengthModel,
        length: usize,
        missing: &mut Vec<usize>,
    ) -> Result<f64, Error> {
        let p = match model.probability(length) {
            Ok(p) => p,
            Err(Error::OutOfRangeRunLength(len)) => {
                log::warn!(
                    "Run length {} is not covered by the model. Using 0.",
                    len
                );
                if !missing.contains(&len) {
                    missing.push(len);
                }
                0.0
            }
            Err(e) => return Err(e),
        };
        Ok(p.max(self.epsilon).ln())
    }

    fn score(
        &self,
        pair: &ModelPair,
        run_lengths: &[usize],
        missing: &mut Vec<usize>,
    ) -> Result<FamilyVerdict, Error> {
        let mut human_log_prob = 0.0;
        let mut computer_log_prob = 0.0;
        for &length in run_lengths {
            let human = pair.human.as_ref();
            let computer = pair.computer.as_ref();
            human_log_prob += self.log_prob(human, length, missing)?;
            computer_log_prob += self.log_prob(computer, length, missing)?;
        }
        let log_likelihood_ratio = human_log_prob - computer_log_prob;
        Ok(FamilyVerdict {
            human_log_prob,
            computer_log_prob,
            log_likelihood_ratio,
            decision: Class::from_ratio(log_likelihood_ratio),
        })
    }

    /// Classify a walk from the lengths of its runs. Fails with InvalidInput
    /// if any length is zero.
    pub fn classify(
        &self,
        run_lengths: &[usize],
    ) -> Result<ClassificationResult, Error> {
        if let Some(pos) = run_lengths.iter().position(|&l| l < 1) {
            return Err(Error::InvalidInput(format!(
                "run {} has length {}",
                pos, run_lengths[pos]
            )));
        }

        let mut out_of_range = Vec::new();
        let continuous =
            self.score(&self.continuous, run_lengths, &mut out_of_range)?;
        let discrete =
            self.score(&self.discrete, run_lengths, &mut out_of_range)?;
        out_of_range.sort_unstable();

        log::debug!(
            "Continuous: human {:.6}, computer {:.6}, ratio {:.6}",
            continuous.human_log_prob,
            continuous.computer_log_prob,
            continuous.log_likelihood_ratio
        );
        log::debug!(
            "Discrete: human {:.6}, computer {:.6}, ratio {:.6}",
            discrete.human_log_prob,
            discrete.computer_log_prob,
            discrete.log_likelihood_ratio
        );

        Ok(ClassificationResult {
            continuous,
            discrete,
            out_of_range,
        })
    }
}

impl Default for Classifier {
    /// The classifier with the published fit.
    fn default() -> Self {
        match crate::ModelConfig::default().build() {
            Ok(classifier) => classifier,
            Err(e) => unreachable!("the default model is valid: {}", e),
        }
    }
}
