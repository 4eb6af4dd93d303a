//! Error type and the trait describing where catalogs come from.

use std::io::Error as IoError;

use toml::de::Error as TomlError;

use crate::model::CarVariant;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while building catalogs or computing fares.
pub enum FareError {
    /// Malformed or out-of-range input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Unknown model or variant reference.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Catalog file is not valid TOML or does not match the expected layout.
    #[error("Config error: {0}")]
    Config(#[from] TomlError),
    /// Reading a catalog or writing a receipt failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// Trait for anything that can supply the variants of a catalog.
pub trait CatalogSource {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Variants in declared order.
    ///
    /// # Errors
    ///
    /// Returns a [`FareError`] when the source cannot produce its records.
    fn variants(&self) -> Result<Vec<CarVariant>, FareError>;
}
