//! Conversion arithmetic over a resolved rate snapshot.

use crate::core::error::RateError;
use crate::core::rates::RateSnapshot;

/// Converts an amount from the snapshot's base currency into `target`.
pub fn convert(snapshot: &RateSnapshot, target: &str, amount: f64) -> Result<f64, RateError> {
    let rate = snapshot
        .rate(target)
        .ok_or_else(|| RateError::UnknownTarget {
            base: snapshot.base.clone(),
            target: target.to_string(),
        })?;
    Ok(amount * rate)
}
