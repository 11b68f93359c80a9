use crate::Error;

/// A trait that defines the interface for evaluating the probability of a run
/// length under one generator.
pub trait LengthModel: Send + Sync {
    /// Return the probability (or the density, for continuous models) of a
    /// run of length 'length'. Fails with InvalidInput if 'length' is zero,
    /// and with OutOfRangeRunLength if the model has no value for 'length'.
    fn probability(&self, length: usize) -> Result<f64, Error>;
}

/// Fails with InvalidInput unless 'length' is a valid run length.
pub(crate) fn check_length(length: usize) -> Result<(), Error> {
    if length < 1 {
        return Err(Error::InvalidInput(format!(
            "run length must be at least 1, got {}",
            length
        )));
    }
    Ok(())
}

/// Fails with InvalidInput unless 'value' is finite.
pub(crate) fn check_finite(name: &str, value: f64) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}
