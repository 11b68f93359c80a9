use super::model::{check_finite, check_length, LengthModel};
use crate::Error;

fn check_p(p: f64) -> Result<(), Error> {
    check_finite("p", p)?;
    if p <= 0.0 || p > 1.0 {
        return Err(Error::InvalidInput(format!(
            "geometric p must be in (0, 1], got {}",
            p
        )));
    }
    Ok(())
}

/// Returns p * (1 - p)^(length - 1), the probability that the first success
/// of a Bernoulli(p) sequence happens on trial 'length'.
pub fn geometric_probability(length: usize, p: f64) -> Result<f64, Error> {
    check_length(length)?;
    check_p(p)?;
    let exp = i32::try_from(length - 1).unwrap_or(i32::MAX);
    Ok(p * (1.0 - p).powi(exp))
}

/// Models the run length of a fair (or biased) coin: a run ends when the coin
/// changes side, which happens with probability 'p' at every step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometricModel {
    p: f64,
}

impl GeometricModel {
    pub fn new(p: f64) -> Result<Self, Error> {
        check_p(p)?;
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl LengthModel for GeometricModel {
    fn probability(&self, length: usize) -> Result<f64, Error> {
        geometric_probability(length, self.p)
    }
}
