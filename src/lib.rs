pub mod classifier;
pub mod config;
pub mod error;
pub mod hist;
pub mod models;
pub mod runs;
pub mod walk;

pub use classifier::{ClassificationResult, Classifier, FamilyVerdict};
pub use config::ModelConfig;
pub use error::{ConfigError, Error};
pub use runs::{extract_runs, Run, RunExtractor};
pub use walk::{Analysis, Walk};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The maximum number of steps in a walk.
pub const MAX_STEPS: usize = 100;

/// The lowest probability that enters the log-probability sums.
pub const EPSILON: f64 = 1e-10;

/// A single step of the walk.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Left = -1,
    Right = 1,
}

impl Step {
    /// Returns the step as +1 or -1.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Step {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Step::Right),
            -1 => Ok(Step::Left),
            _ => Err(Error::InvalidStep(value.to_string())),
        }
    }
}

/// The two generators a walk may come from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Human,
    Computer,
}

impl Class {
    /// Decide on a log-likelihood ratio. A ratio of exactly zero is a human.
    pub fn from_ratio(log_likelihood_ratio: f64) -> Self {
        if log_likelihood_ratio < 0.0 {
            Class::Computer
        } else {
            Class::Human
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Human => write!(f, "human"),
            Class::Computer => write!(f, "computer"),
        }
    }
}

/// Parse a recorded walk. Tokens are separated by whitespace or commas, and
/// are either the numbers 1, +1, -1, or a compact string of the characters
/// '+'/'-', 'R'/'L' or '>'/'<'.
pub fn parse_steps(text: &str) -> Result<Vec<Step>, Error> {
    let mut steps = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        match token {
            "" => {}
            "1" | "+1" => steps.push(Step::Right),
            "-1" => steps.push(Step::Left),
            _ => {
                for c in token.chars() {
                    let step = match c {
                        '+' | 'R' | 'r' | '>' => Step::Right,
                        '-' | 'L' | 'l' | '<' => Step::Left,
                        _ => return Err(Error::InvalidStep(token.to_string())),
                    };
                    steps.push(step);
                }
            }
        }
    }
    Ok(steps)
}

#[test]
fn test_parse_steps() {
    use Step::*;
    assert_eq!(parse_steps("").unwrap(), Vec::<Step>::new());
    assert_eq!(parse_steps("1 -1, +1").unwrap(), vec![Right, Left, Right]);
    let expected = vec![Right, Right, Left, Left, Right];
    assert_eq!(parse_steps("RRL\n<>").unwrap(), expected);
    assert_eq!(parse_steps("+-+").unwrap(), vec![Right, Left, Right]);
    assert_eq!(parse_steps("1 2"), Err(Error::InvalidStep("2".to_string())));
    assert!(Step::try_from(0).is_err());
    assert_eq!(Step::try_from(-1).unwrap().value(), -1);
}
