//! Built-in catalog of Malaysian-market car variants and their per-km rates.

use tambang_core::{
    catalog::Catalog,
    model::CarVariant,
    ports::{CatalogSource, FareError},
};

/// (model, variant, engine cc, km per litre, RM per km), in display order.
const VARIANTS: &[(&str, &str, u32, f64, f64)] = &[
    ("Perodua Bezza", "1.0 G (M)", 998, 22.8, 1.20),
    ("Perodua Bezza", "1.3 X (A)", 1329, 21.0, 1.20),
    ("Proton Saga", "1.3 Standard M/T", 1297, 14.0, 1.20),
    ("Proton Persona", "1.6 Standard CVT", 1597, 15.2, 1.50),
    ("Toyota Vios", "1.3 XLE CVT", 1329, 15.0, 1.50),
    ("Perodua Myvi", "1.3 G (M)", 1297, 15.4, 1.20),
    ("Perodua Myvi", "1.5 X (A)", 1495, 17.5, 1.20),
];

/// Catalog source backed by the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn name(&self) -> &str {
        "built-in (Malaysia)"
    }

    fn variants(&self) -> Result<Vec<CarVariant>, FareError> {
        Ok(VARIANTS
            .iter()
            .map(|&(model, variant, engine_cc, km_per_litre, rate_per_km)| {
                CarVariant::new(model, variant, engine_cc, km_per_litre, rate_per_km)
            })
            .collect())
    }
}

/// Build the catalog from the built-in table.
///
/// # Errors
///
/// Returns a [`FareError`] if the table violates the catalog invariants.
pub fn catalog() -> Result<Catalog, FareError> {
    Catalog::from_source(&BuiltinCatalog)
}
