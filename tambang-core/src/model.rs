//! Domain data structures for car variants, fare inputs, and quotes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ports::FareError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A specific trim/engine configuration of a car model.
pub struct CarVariant {
    /// Model name, e.g. "Perodua Myvi".
    pub model: String,
    /// Variant label within the model, e.g. "1.5 X (A)".
    pub variant: String,
    /// Engine displacement in cubic centimetres.
    pub engine_cc: u32,
    /// Fuel efficiency in kilometres per litre.
    pub fuel_efficiency_km_per_litre: f64,
    /// Charge per kilometre travelled, in ringgit.
    pub rate_per_km: f64,
}

impl CarVariant {
    /// Construct a variant record.
    #[must_use]
    pub fn new<M: Into<String>, V: Into<String>>(
        model: M,
        variant: V,
        engine_cc: u32,
        fuel_efficiency_km_per_litre: f64,
        rate_per_km: f64,
    ) -> Self {
        Self {
            model: model.into(),
            variant: variant.into(),
            engine_cc,
            fuel_efficiency_km_per_litre,
            rate_per_km,
        }
    }

    /// Check the record against the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidInput`] when a label is blank, the engine
    /// displacement is zero, the fuel efficiency is not strictly positive, or
    /// the rate is negative. Non-finite numbers are rejected as well.
    pub fn validate(&self) -> Result<(), FareError> {
        if self.model.trim().is_empty() {
            return Err(FareError::InvalidInput("car model name is empty".to_owned()));
        }
        if self.variant.trim().is_empty() {
            return Err(FareError::InvalidInput(format!(
                "variant label of {} is empty",
                self.model
            )));
        }
        if self.engine_cc == 0 {
            return Err(FareError::InvalidInput(format!(
                "{} must have a positive engine displacement",
                self.label()
            )));
        }
        if !self.fuel_efficiency_km_per_litre.is_finite() || self.fuel_efficiency_km_per_litre <= 0.0
        {
            return Err(FareError::InvalidInput(format!(
                "{} must have a positive fuel efficiency, got {}",
                self.label(),
                self.fuel_efficiency_km_per_litre
            )));
        }
        if !self.rate_per_km.is_finite() || self.rate_per_km < 0.0 {
            return Err(FareError::InvalidInput(format!(
                "{} must have a non-negative rate per km, got {}",
                self.label(),
                self.rate_per_km
            )));
        }
        Ok(())
    }

    /// Human-friendly "Model - Variant" label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.model, self.variant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Currency a fare is expressed in.
pub enum Currency {
    /// Malaysian ringgit, displayed as "RM".
    #[default]
    Ringgit,
}

impl fmt::Display for Currency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Currency::Ringgit => "RM",
        };
        write!(formatter, "{symbol}")
    }
}

#[derive(Debug, Clone, Copy)]
/// Parameters of a single fare calculation.
pub struct FareInput<'catalog> {
    /// Variant the trip is charged for.
    pub variant: &'catalog CarVariant,
    /// Distance travelled in kilometres.
    pub distance_km: f64,
    /// Trip duration in whole minutes.
    pub time_minutes: u32,
    /// Whether the traffic jam surcharge applies.
    pub traffic_jam: bool,
    /// Whether the night charge applies.
    pub night_charge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Computed fare. The amount keeps full precision; rounding happens on display.
pub struct FareResult {
    /// Unrounded fare amount.
    pub amount: f64,
    /// Currency of the amount.
    pub currency: Currency,
}

impl FareResult {
    /// Wrap an amount in ringgit.
    #[must_use]
    pub fn ringgit(amount: f64) -> Self {
        Self {
            amount,
            currency: Currency::Ringgit,
        }
    }
}

impl fmt::Display for FareResult {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{:.2}", self.currency, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Name-based fare request, resolved against the catalog by the service.
pub struct FareRequest {
    /// Model name.
    pub model: String,
    /// Variant label within the model.
    pub variant: String,
    /// Distance travelled in kilometres.
    pub distance_km: f64,
    /// Trip duration in whole minutes.
    pub time_minutes: u32,
    /// Whether the traffic jam surcharge applies.
    pub traffic_jam: bool,
    /// Whether the night charge applies.
    pub night_charge: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// A completed calculation: the inputs that produced it and the resulting fare.
pub struct Quote {
    /// Variant the trip was charged for.
    pub variant: CarVariant,
    /// Distance travelled in kilometres.
    pub distance_km: f64,
    /// Trip duration in whole minutes.
    pub time_minutes: u32,
    /// Whether the traffic jam surcharge was applied.
    pub traffic_jam: bool,
    /// Whether the night charge was applied.
    pub night_charge: bool,
    /// Computed fare.
    pub fare: FareResult,
}
