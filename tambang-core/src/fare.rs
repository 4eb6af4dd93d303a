//! Fare formula: a per-km charge plus a per-minute charge, then surcharges.

use tracing::{debug, warn};

use crate::model::{CarVariant, FareInput, FareResult};
use crate::ports::FareError;

/// Charge per minute of trip time, in ringgit.
pub const TIME_RATE_PER_MINUTE: f64 = 0.10;
/// Multiplier applied when the trip ran into a traffic jam.
pub const TRAFFIC_JAM_MULTIPLIER: f64 = 1.20;
/// Multiplier applied for night trips. Applied after the traffic multiplier.
pub const NIGHT_CHARGE_MULTIPLIER: f64 = 1.30;

/// Compute the fare of a trip.
///
/// `distance_km * rate_per_km + time_minutes * 0.10`, then `* 1.20` for a
/// traffic jam, then `* 1.30` for a night trip. The amount is not rounded.
///
/// # Errors
///
/// Returns [`FareError::InvalidInput`] when the distance is negative or not a
/// finite number.
pub fn compute_fare(
    variant: &CarVariant,
    distance_km: f64,
    time_minutes: u32,
    traffic_jam: bool,
    night_charge: bool,
) -> Result<FareResult, FareError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        warn!(distance_km, "rejected distance");
        return Err(FareError::InvalidInput(format!(
            "distance must be a non-negative number of kilometres, got {distance_km}"
        )));
    }

    let mut amount =
        distance_km * variant.rate_per_km + f64::from(time_minutes) * TIME_RATE_PER_MINUTE;
    if traffic_jam {
        amount *= TRAFFIC_JAM_MULTIPLIER;
    }
    if night_charge {
        amount *= NIGHT_CHARGE_MULTIPLIER;
    }
    if !amount.is_finite() {
        warn!(distance_km, time_minutes, "fare out of range");
        return Err(FareError::InvalidInput(format!(
            "fare for {distance_km} km is too large to represent"
        )));
    }

    debug!(
        variant = %variant.label(),
        distance_km,
        time_minutes,
        traffic_jam,
        night_charge,
        amount,
        "computed fare"
    );
    Ok(FareResult::ringgit(amount))
}

impl FareInput<'_> {
    /// Compute the fare for these parameters.
    ///
    /// # Errors
    ///
    /// See [`compute_fare`].
    pub fn compute(&self) -> Result<FareResult, FareError> {
        compute_fare(
            self.variant,
            self.distance_km,
            self.time_minutes,
            self.traffic_jam,
            self.night_charge,
        )
    }
}
