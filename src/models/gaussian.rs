use super::model::{check_finite, check_length, LengthModel};
use crate::Error;
use std::f64::consts::PI;

/// Returns the density of the normal distribution N(mean, stddev^2) at 'x'.
pub fn density(x: f64, mean: f64, stddev: f64) -> f64 {
    let factor = 1.0 / (stddev * (2.0 * PI).sqrt());
    let z = (x - mean) / stddev;
    factor * (-0.5 * z * z).exp()
}

/// Models the run length as a continuous normal variable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianModel {
    mean: f64,
    stddev: f64,
}

impl GaussianModel {
    pub fn new(mean: f64, stddev: f64) -> Result<Self, Error> {
        check_finite("mean", mean)?;
        check_finite("stddev", stddev)?;
        if stddev <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "stddev must be positive, got {}",
                stddev
            )));
        }
        Ok(Self { mean, stddev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

impl LengthModel for GaussianModel {
    fn probability(&self, length: usize) -> Result<f64, Error> {
        check_length(length)?;
        Ok(density(length as f64, self.mean, self.stddev))
    }
}

#[test]
fn test_density_peak() {
    for stddev in [0.57, 1.0, 5.55, 100.0] {
        let peak = density(3.5, 3.5, stddev);
        let expected = 1.0 / (stddev * (2.0 * PI).sqrt());
        assert!((peak - expected).abs() <= f64::EPSILON * expected);
    }
}
