//! TOML catalog files.
//!
//! ```toml
//! [[variants]]
//! model = "Perodua Axia"
//! variant = "1.0 G (A)"
//! engine_cc = 998
//! fuel_efficiency_km_per_litre = 22.6
//! rate_per_km = 1.10
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::model::CarVariant;
use crate::ports::{CatalogSource, FareError};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Contents of a catalog file.
pub struct CatalogFile {
    /// Variants in declared order.
    pub variants: Vec<CarVariant>,
}

impl CatalogFile {
    /// Parse catalog file contents.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::Config`] when the text is not a valid catalog file.
    pub fn from_toml_str(contents: &str) -> Result<Self, FareError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::Io`] when the file cannot be read, or
    /// [`FareError::Config`] when it is not a valid catalog file.
    pub fn load(path: &Path) -> Result<Self, FareError> {
        debug!(path = %path.display(), "reading catalog file");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl CatalogSource for CatalogFile {
    fn name(&self) -> &str {
        "catalog file"
    }

    fn variants(&self) -> Result<Vec<CarVariant>, FareError> {
        Ok(self.variants.clone())
    }
}

/// Read a catalog file and build a validated [`Catalog`] from it.
///
/// # Errors
///
/// Returns a [`FareError`] when the file cannot be read or parsed, or its
/// records violate the catalog invariants.
pub fn load_catalog(path: &Path) -> Result<Catalog, FareError> {
    Catalog::from_source(&CatalogFile::load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[variants]]
model = "Perodua Axia"
variant = "1.0 G (A)"
engine_cc = 998
fuel_efficiency_km_per_litre = 22.6
rate_per_km = 1.10

[[variants]]
model = "Perodua Axia"
variant = "1.0 AV (A)"
engine_cc = 998
fuel_efficiency_km_per_litre = 22.1
rate_per_km = 1.15
"#;

    #[test]
    fn parses_variants_in_order() {
        let file = CatalogFile::from_toml_str(SAMPLE).expect("valid toml");
        let labels: Vec<&str> = file.variants.iter().map(|variant| variant.variant.as_str()).collect();
        assert_eq!(labels, vec!["1.0 G (A)", "1.0 AV (A)"]);
    }

    #[test]
    fn missing_field_is_a_config_error() {
        let broken = "[[variants]]\nmodel = \"Perodua Axia\"\nvariant = \"1.0 G (A)\"\n";
        assert!(matches!(
            CatalogFile::from_toml_str(broken),
            Err(FareError::Config(_))
        ));
    }

    #[test]
    fn negative_engine_size_is_a_config_error() {
        let broken = SAMPLE.replacen("engine_cc = 998", "engine_cc = -998", 1);
        assert!(matches!(
            CatalogFile::from_toml_str(&broken),
            Err(FareError::Config(_))
        ));
    }
}
