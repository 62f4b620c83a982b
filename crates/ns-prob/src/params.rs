//! Parameter validation shared by the distribution constructors.

use ns_core::{Error, Result};

/// `value` must be finite and strictly positive.
pub(crate) fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Validation(format!("{} must be finite and > 0, got {}", name, value)));
    }
    Ok(())
}

/// `value` must be finite and non-negative.
pub(crate) fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!("{} must be finite and >= 0, got {}", name, value)));
    }
    Ok(())
}

/// `value` must be finite.
pub(crate) fn finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(format!("{} must be finite, got {}", name, value)));
    }
    Ok(())
}

/// `value` must lie in the open unit interval.
pub(crate) fn open_unit(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(Error::Validation(format!(
            "{} must be finite and in (0,1), got {}",
            name, value
        )));
    }
    Ok(())
}
