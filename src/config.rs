//! The fitted constants of the classifier, as data.
//!
//! A model description looks like this:
//!
//! ```json
//! {
//!   "continuous": {
//!     "human": { "mean": 16.05, "stddev": 5.55 },
//!     "computer": { "mean": 2.0, "stddev": 0.57 }
//!   },
//!   "discrete": {
//!     "human": { "buckets": { "1": 0.2, "2-100": 0.8 } },
//!     "computer": { "geometric": { "p": 0.5 } }
//!   },
//!   "epsilon": 1e-10
//! }
//! ```

use crate::classifier::{Classifier, ModelPair};
use crate::models::{BucketTable, GaussianModel, GeometricModel, LengthModel};
use crate::{ConfigError, EPSILON};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The empirical PMF of human run lengths.
pub const HUMAN_BUCKETS: [(&str, f64); 11] = [
    ("1", 0.20192307692307693),
    ("2", 0.022435897435897436),
    ("3", 0.016025641025641024),
    ("4-5", 0.041666666666666664),
    ("6-7", 0.04326923076923077),
    ("8-10", 0.12179487179487178),
    ("11-15", 0.15705128205128205),
    ("16-20", 0.10416666666666667),
    ("21-30", 0.14262820512820512),
    ("31-50", 0.10897435897435895),
    ("51-100", 0.040064102564102574),
];

pub const HUMAN_MEAN: f64 = 16.05;
pub const HUMAN_STDDEV: f64 = 5.55;
pub const COMPUTER_MEAN: f64 = 2.0;
pub const COMPUTER_STDDEV: f64 = 0.57;
pub const COMPUTER_GEOMETRIC_P: f64 = 0.5;

/// One value per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPair<T> {
    pub human: T,
    pub computer: T,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub stddev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscreteSpec {
    /// Maps bucket labels ("3", "4-5") to probabilities.
    Buckets(BTreeMap<String, f64>),
    Geometric { p: f64 },
}

impl DiscreteSpec {
    fn build(&self) -> Result<Box<dyn LengthModel>, ConfigError> {
        let model: Box<dyn LengthModel> = match self {
            DiscreteSpec::Buckets(labels) => Box::new(BucketTable::from_labels(
                labels.iter().map(|(k, v)| (k.as_str(), *v)),
            )?),
            DiscreteSpec::Geometric { p } => Box::new(GeometricModel::new(*p)?),
        };
        Ok(model)
    }
}

/// Describes the models of both classes, for both model families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub continuous: ClassPair<GaussianParams>,
    pub discrete: ClassPair<DiscreteSpec>,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_epsilon() -> f64 {
    EPSILON
}

impl Default for ModelConfig {
    fn default() -> Self {
        let buckets = HUMAN_BUCKETS
            .iter()
            .map(|(label, p)| (label.to_string(), *p))
            .collect();
        Self {
            continuous: ClassPair {
                human: GaussianParams {
                    mean: HUMAN_MEAN,
                    stddev: HUMAN_STDDEV,
                },
                computer: GaussianParams {
                    mean: COMPUTER_MEAN,
                    stddev: COMPUTER_STDDEV,
                },
            },
            discrete: ClassPair {
                human: DiscreteSpec::Buckets(buckets),
                computer: DiscreteSpec::Geometric {
                    p: COMPUTER_GEOMETRIC_P,
                },
            },
            epsilon: EPSILON,
        }
    }
}

impl ModelConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a model description from the JSON file at 'path'.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and construct the classifier.
    pub fn build(&self) -> Result<Classifier, ConfigError> {
        type Built = Result<Box<dyn LengthModel>, ConfigError>;
        let gaussian = |g: &GaussianParams| -> Built {
            Ok(Box::new(GaussianModel::new(g.mean, g.stddev)?))
        };

        let continuous = ModelPair {
            human: gaussian(&self.continuous.human)?,
            computer: gaussian(&self.continuous.computer)?,
        };
        let discrete = ModelPair {
            human: self.discrete.human.build()?,
            computer: self.discrete.computer.build()?,
        };
        Ok(Classifier::new(continuous, discrete, self.epsilon)?)
    }
}

#[test]
fn test_default_table_covers_walks() {
    let table = BucketTable::from_labels(HUMAN_BUCKETS).unwrap();
    for len in 1..=crate::MAX_STEPS {
        assert!(table.find(len).is_some(), "length {} not covered", len);
    }
    assert!((table.total() - 1.0).abs() < 1e-9);
}
