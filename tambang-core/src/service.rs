//! High-level service facade over a catalog.

use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::model::{CarVariant, FareInput, FareRequest, Quote};
use crate::ports::FareError;

/// Public entry point for browsing the catalog and quoting fares.
pub struct FareService {
    catalog: Arc<Catalog>,
}

impl FareService {
    /// Create a new service bound to the provided catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Catalog the service answers from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Model names in catalog order.
    #[must_use]
    pub fn list_models(&self) -> Vec<String> {
        self.catalog
            .list_models()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Variant labels of a model in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the model is unknown.
    pub fn list_variants(&self, model: &str) -> Result<Vec<String>, FareError> {
        Ok(self
            .catalog
            .list_variants(model)?
            .into_iter()
            .map(str::to_owned)
            .collect())
    }

    /// Look up a variant by model and label.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the pair does not exist.
    pub fn lookup(&self, model: &str, variant_label: &str) -> Result<&CarVariant, FareError> {
        self.catalog.lookup(model, variant_label)
    }

    /// Compute a quote for an already resolved variant.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidInput`] when the distance is out of range.
    pub fn quote(&self, input: FareInput<'_>) -> Result<Quote, FareError> {
        let fare = input.compute()?;
        info!(
            variant = %input.variant.label(),
            fare = %fare,
            "quoted fare"
        );
        Ok(Quote {
            variant: input.variant.clone(),
            distance_km: input.distance_km,
            time_minutes: input.time_minutes,
            traffic_jam: input.traffic_jam,
            night_charge: input.night_charge,
            fare,
        })
    }

    /// Resolve a request by model and variant name, then quote it.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the variant is unknown or
    /// [`FareError::InvalidInput`] when the distance is out of range.
    pub fn quote_request(&self, request: &FareRequest) -> Result<Quote, FareError> {
        let variant = self.lookup(&request.model, &request.variant)?;
        self.quote(FareInput {
            variant,
            distance_km: request.distance_km,
            time_minutes: request.time_minutes,
            traffic_jam: request.traffic_jam,
            night_charge: request.night_charge,
        })
    }
}
