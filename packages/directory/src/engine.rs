//! The filtering pipeline: region scope, category, search, sort
//!
//! Everything here is a pure linear scan over the in-memory dataset,
//! re-run to completion on every selection or keystroke. Datasets are a
//! few hundred hand-authored entries, so there is no index to maintain and
//! no cache to invalidate. Predicates short-circuit cheapest first: region
//! tags, then category equality, then the five-field substring search.

use tracing::debug;

use crate::catalog::Catalog;
use crate::fragment::FilterDescriptor;
use crate::lookup::{category_key, sub_category_key, StringLookup};
use crate::matcher;
use crate::types::Resource;

/// Resources passing the descriptor and search term, in dataset order.
///
/// The search term matches case-insensitively as a substring of any of
/// five fields: localized name, localized city, the category display
/// string, the sub-category display string, and the localized description.
/// A field that cannot be resolved for the locale simply does not match.
/// An empty term passes everything.
pub fn filter_resources<'c>(
    catalog: &'c Catalog,
    descriptor: &FilterDescriptor,
    search_term: &str,
    locale: &str,
    strings: &dyn StringLookup,
) -> Vec<&'c Resource> {
    let needle = search_term.to_uppercase();

    let visible: Vec<&Resource> = catalog
        .resources()
        .iter()
        .filter(|&resource| {
            if !matcher::matches(
                catalog,
                resource,
                descriptor.region_type.as_ref(),
                descriptor.region_id.as_deref(),
            ) {
                return false;
            }
            if let Some(category) = &descriptor.category {
                if &resource.category != category {
                    return false;
                }
            }
            if needle.is_empty() {
                return true;
            }
            matches_search(resource, &needle, locale, strings)
        })
        .collect();

    debug!(
        total = catalog.resources().len(),
        visible = visible.len(),
        "filtered resources"
    );

    visible
}

/// Substring containment of the uppercased needle in any searchable field.
fn matches_search(
    resource: &Resource,
    needle: &str,
    locale: &str,
    strings: &dyn StringLookup,
) -> bool {
    let field_contains =
        |field: Option<&str>| field.is_some_and(|text| text.to_uppercase().contains(needle));

    field_contains(resource.name.resolve(locale))
        || field_contains(resource.city.as_ref().and_then(|city| city.resolve(locale)))
        || field_contains(strings.lookup(&category_key(&resource.category)).as_deref())
        || field_contains(
            strings
                .lookup(&sub_category_key(&resource.sub_category))
                .as_deref(),
        )
        || field_contains(
            resource
                .description
                .as_ref()
                .and_then(|description| description.resolve(locale)),
        )
}

/// Sort ascending by uppercased localized name, in place.
///
/// The sort is stable, so entries whose names compare equal keep their
/// dataset order. Names that do not resolve for the locale sort as empty
/// strings, ahead of everything else.
pub fn sort_resources(resources: &mut [&Resource], locale: &str) {
    resources.sort_by_cached_key(|&resource| sort_key(resource, locale));
}

fn sort_key(resource: &Resource, locale: &str) -> String {
    resource
        .name
        .resolve(locale)
        .map(str::to_uppercase)
        .unwrap_or_default()
}

/// The full render pipeline: filter, then sort by localized name.
pub fn visible_resources<'c>(
    catalog: &'c Catalog,
    descriptor: &FilterDescriptor,
    search_term: &str,
    locale: &str,
    strings: &dyn StringLookup,
) -> Vec<&'c Resource> {
    let mut resources = filter_resources(catalog, descriptor, search_term, locale, strings);
    sort_resources(&mut resources, locale);
    resources
}
