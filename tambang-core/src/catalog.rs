//! Read-only catalog of car variants grouped by model.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::model::CarVariant;
use crate::ports::{CatalogSource, FareError};

/// Variants belonging to a single model, in declared order.
#[derive(Debug, Clone)]
pub struct ModelGroup {
    /// Model name.
    pub name: String,
    /// Variants of this model.
    pub variants: Vec<Arc<CarVariant>>,
}

/// Catalog that resolves variants by model and label.
///
/// Built once from a flat list; both the flat declared order and the order of
/// models and variants within each model are preserved.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Arc<CarVariant>>,
    groups: Vec<ModelGroup>,
    group_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from variants in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidInput`] when the list is empty, a record
    /// fails validation, or a model/variant pair appears twice.
    pub fn new(variants: Vec<CarVariant>) -> Result<Self, FareError> {
        if variants.is_empty() {
            return Err(FareError::InvalidInput(
                "catalog contains no car variants".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(variants.len());
        let mut groups: Vec<ModelGroup> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for variant in variants {
            variant.validate()?;
            if !seen.insert((variant.model.clone(), variant.variant.clone())) {
                warn!(variant = %variant.label(), "duplicate catalog entry");
                return Err(FareError::InvalidInput(format!(
                    "duplicate catalog entry {}",
                    variant.label()
                )));
            }

            let variant = Arc::new(variant);
            let position = *group_index
                .entry(variant.model.clone())
                .or_insert_with(|| {
                    groups.push(ModelGroup {
                        name: variant.model.clone(),
                        variants: Vec::new(),
                    });
                    groups.len() - 1
                });
            if let Some(group) = groups.get_mut(position) {
                group.variants.push(Arc::clone(&variant));
            }
            entries.push(variant);
        }

        debug!(
            models = groups.len(),
            variants = entries.len(),
            "built car catalog"
        );

        Ok(Self {
            entries,
            groups,
            group_index,
        })
    }

    /// Build a catalog from the records of a [`CatalogSource`].
    ///
    /// # Errors
    ///
    /// Returns a [`FareError`] when the source fails or its records are invalid.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, FareError> {
        debug!(source = source.name(), "loading catalog");
        Self::new(source.variants()?)
    }

    /// Model names in declared order, without duplicates.
    #[must_use]
    pub fn list_models(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }

    /// Variant labels of a model in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the model is unknown.
    pub fn list_variants(&self, model: &str) -> Result<Vec<&str>, FareError> {
        Ok(self
            .group(model)?
            .variants
            .iter()
            .map(|variant| variant.variant.as_str())
            .collect())
    }

    /// Look up a variant by model name and variant label.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the pair does not exist.
    pub fn lookup(&self, model: &str, variant_label: &str) -> Result<&CarVariant, FareError> {
        self.group(model)?
            .variants
            .iter()
            .find(|variant| variant.variant == variant_label)
            .map(AsRef::as_ref)
            .ok_or_else(|| {
                FareError::NotFound(format!("variant {variant_label:?} of model {model:?}"))
            })
    }

    /// Model group by name.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::NotFound`] when the model is unknown.
    pub fn group(&self, model: &str) -> Result<&ModelGroup, FareError> {
        self.group_index
            .get(model)
            .and_then(|position| self.groups.get(*position))
            .ok_or_else(|| FareError::NotFound(format!("car model {model:?}")))
    }

    /// Iterator over all variants in flat declared order.
    pub fn iter(&self) -> impl Iterator<Item = &CarVariant> {
        self.entries.iter().map(AsRef::as_ref)
    }

    /// Variant at a zero-based position in flat declared order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CarVariant> {
        self.entries.get(index).map(AsRef::as_ref)
    }

    /// Number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no variants. Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interleaved() -> Vec<CarVariant> {
        vec![
            CarVariant::new("Perodua Myvi", "1.3 G (M)", 1297, 15.4, 1.20),
            CarVariant::new("Toyota Vios", "1.3 XLE CVT", 1329, 15.0, 1.50),
            CarVariant::new("Perodua Myvi", "1.5 X (A)", 1495, 17.5, 1.20),
        ]
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let catalog = Catalog::new(interleaved()).expect("valid catalog");
        assert_eq!(catalog.list_models(), vec!["Perodua Myvi", "Toyota Vios"]);
        assert_eq!(
            catalog.list_variants("Perodua Myvi").expect("known model"),
            vec!["1.3 G (M)", "1.5 X (A)"]
        );
    }

    #[test]
    fn flat_order_is_kept_for_numbered_selection() {
        let catalog = Catalog::new(interleaved()).expect("valid catalog");
        let labels: Vec<String> = catalog.iter().map(CarVariant::label).collect();
        assert_eq!(
            labels,
            vec![
                "Perodua Myvi - 1.3 G (M)",
                "Toyota Vios - 1.3 XLE CVT",
                "Perodua Myvi - 1.5 X (A)",
            ]
        );
        assert_eq!(
            catalog.get(1).map(|variant| variant.model.as_str()),
            Some("Toyota Vios")
        );
        assert!(catalog.get(3).is_none(), "past the end");
    }

    #[test]
    fn unknown_model_and_variant_are_not_found() {
        let catalog = Catalog::new(interleaved()).expect("valid catalog");
        assert!(matches!(
            catalog.list_variants("Honda City"),
            Err(FareError::NotFound(_))
        ));
        assert!(matches!(
            catalog.lookup("Perodua Myvi", "2.0 Turbo"),
            Err(FareError::NotFound(_))
        ));
        assert!(matches!(
            catalog.lookup("Honda City", "1.5 V"),
            Err(FareError::NotFound(_))
        ));
    }

    #[test]
    fn empty_and_duplicate_catalogs_are_rejected() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(FareError::InvalidInput(_))
        ));

        let mut variants = interleaved();
        variants.push(CarVariant::new("Toyota Vios", "1.3 XLE CVT", 1329, 15.0, 1.50));
        assert!(matches!(
            Catalog::new(variants),
            Err(FareError::InvalidInput(_))
        ));
    }
}
