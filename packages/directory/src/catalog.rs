//! The immutable dataset bundle behind a directory
//!
//! Hosts deserialize the bundled JSON files once at startup and assemble a
//! [`Catalog`] from them. The catalog owns the data for the process
//! lifetime and answers the lookups the rest of the crate needs: regions
//! and subregions by id, locales by id, the known categories, and the
//! dataset refresh timestamp.
//!
//! Assembly checks referential quality and records findings as
//! [`CatalogIssue`]s without failing. Hand-authored static data is
//! imperfect in practice and the directory has to keep working anyway.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogIssue};
use crate::types::{Locale, Region, Resource, ResourceSet, SubRegion};

/// Read-only datasets plus lookup helpers.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<Region>,
    locales: Vec<Locale>,
    resources: ResourceSet,
    categories: Vec<String>,
    issues: Vec<CatalogIssue>,
}

impl Catalog {
    /// Assemble a catalog from the loaded datasets.
    ///
    /// `categories` is the known-category list, in the order the host's
    /// category dropdown shows them. Fails only when `locales` is empty;
    /// every other data problem is recorded as an issue and logged at
    /// `warn`.
    pub fn new(
        regions: Vec<Region>,
        locales: Vec<Locale>,
        resources: impl Into<ResourceSet>,
        categories: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if locales.is_empty() {
            return Err(CatalogError::NoLocales);
        }

        let resources = resources.into();
        let issues = validate(&regions, &locales, &resources, &categories);
        for issue in &issues {
            warn!(%issue, "catalog data-quality issue");
        }
        debug!(
            regions = regions.len(),
            locales = locales.len(),
            resources = resources.resources().len(),
            categories = categories.len(),
            issues = issues.len(),
            "catalog assembled"
        );

        Ok(Self {
            regions,
            locales,
            resources,
            categories,
            issues,
        })
    }

    /// All regions, in dataset order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All locales, in dataset order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// All resources, in dataset order.
    pub fn resources(&self) -> &[Resource] {
        self.resources.resources()
    }

    /// The known category ids, in dropdown order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// When the resources dataset was last refreshed, if recorded.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.resources.updated()
    }

    /// Data-quality findings recorded at assembly.
    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    /// The locale a new session starts in: the first dataset entry.
    pub fn default_locale(&self) -> &Locale {
        // Non-empty by the NoLocales check in new().
        &self.locales[0]
    }

    /// Find a locale by id (case-sensitive).
    pub fn locale_by_id(&self, id: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.id == id)
    }

    /// Find a main region by id (case-sensitive).
    pub fn region_by_id(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Find a subregion anywhere in the hierarchy, with its parent region.
    pub fn sub_region_by_id(&self, id: &str) -> Option<(&Region, &SubRegion)> {
        self.regions
            .iter()
            .find_map(|region| region.sub_region(id).map(|sub| (region, sub)))
    }
}

/// Collect data-quality findings across the datasets.
fn validate(
    regions: &[Region],
    locales: &[Locale],
    resources: &ResourceSet,
    categories: &[String],
) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut region_ids = HashSet::new();
    let mut sub_region_ids = HashSet::new();
    for region in regions {
        if !region_ids.insert(region.id.as_str()) {
            issues.push(CatalogIssue::DuplicateRegion {
                id: region.id.clone(),
            });
        }
        for sub in &region.sub_regions {
            // Matching is by bare id, so a repeat anywhere in the
            // hierarchy is ambiguous, not just within one parent.
            if !sub_region_ids.insert(sub.id.as_str()) {
                issues.push(CatalogIssue::DuplicateSubRegion { id: sub.id.clone() });
            }
        }
    }

    let mut locale_ids = HashSet::new();
    for locale in locales {
        if !locale_ids.insert(locale.id.as_str()) {
            issues.push(CatalogIssue::DuplicateLocale {
                id: locale.id.clone(),
            });
        }
    }

    for (resource_index, resource) in resources.resources().iter().enumerate() {
        for region_id in &resource.region_ids {
            if !region_ids.contains(region_id.as_str())
                && !sub_region_ids.contains(region_id.as_str())
            {
                issues.push(CatalogIssue::UnknownRegionId {
                    resource_index,
                    region_id: region_id.clone(),
                });
            }
        }
        if !categories.iter().any(|known| known == &resource.category) {
            issues.push(CatalogIssue::UnknownCategory {
                resource_index,
                category: resource.category.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::demo_catalog;
    use crate::types::LocalizedText;

    #[test]
    fn test_empty_locales_is_the_only_fatal_error() {
        let result = Catalog::new(vec![], vec![], vec![], vec![]);
        assert!(matches!(result, Err(CatalogError::NoLocales)));
    }

    #[test]
    fn test_lookups_on_the_demo_data() {
        let catalog = demo_catalog();

        assert_eq!(catalog.default_locale().id, "en");
        assert_eq!(catalog.locale_by_id("es").unwrap().name, "Español");
        assert!(catalog.locale_by_id("fr").is_none());

        assert_eq!(catalog.region_by_id("r1").unwrap().id, "r1");
        assert!(catalog.region_by_id("r1-sub1").is_none());

        let (parent, sub) = catalog.sub_region_by_id("r1-sub2").unwrap();
        assert_eq!(parent.id, "r1");
        assert_eq!(sub.id, "r1-sub2");
        assert!(catalog.sub_region_by_id("r2").is_none());
    }

    #[test]
    fn test_demo_data_is_clean() {
        let catalog = demo_catalog();
        assert!(catalog.issues().is_empty());
        assert!(catalog.updated().is_some());
    }

    #[test]
    fn test_unknown_references_become_issues_not_errors() {
        let resource = Resource {
            name: LocalizedText::Plain("Ace Cafe".to_string()),
            city: None,
            category: "nonsense".to_string(),
            sub_category: String::new(),
            description: None,
            region_ids: vec!["r9".to_string()],
        };
        let catalog = Catalog::new(
            vec![],
            vec![Locale {
                id: "en".to_string(),
                name: "English".to_string(),
            }],
            vec![resource],
            vec!["food".to_string()],
        )
        .unwrap();

        assert_eq!(
            catalog.issues(),
            &[
                CatalogIssue::UnknownRegionId {
                    resource_index: 0,
                    region_id: "r9".to_string(),
                },
                CatalogIssue::UnknownCategory {
                    resource_index: 0,
                    category: "nonsense".to_string(),
                },
            ]
        );
        // Still fully usable.
        assert_eq!(catalog.resources().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_become_issues() {
        let region = |id: &str| Region {
            id: id.to_string(),
            name: LocalizedText::Plain(id.to_string()),
            sub_regions: vec![],
        };
        let catalog = Catalog::new(
            vec![region("r1"), region("r1")],
            vec![
                Locale {
                    id: "en".to_string(),
                    name: "English".to_string(),
                },
                Locale {
                    id: "en".to_string(),
                    name: "English again".to_string(),
                },
            ],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(
            catalog.issues(),
            &[
                CatalogIssue::DuplicateRegion {
                    id: "r1".to_string(),
                },
                CatalogIssue::DuplicateLocale {
                    id: "en".to_string(),
                },
            ]
        );
    }
}
