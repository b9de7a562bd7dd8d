//! Region scope matching
//!
//! One question, answered one way everywhere: does a resource fall inside
//! the selected region scope? A subregion selection matches only resources
//! tagged with that subregion directly. A main-region selection matches
//! resources tagged with the region itself or with any of its subregions,
//! so widening a selection from a subregion to its parent never hides
//! entries.

use crate::catalog::Catalog;
use crate::fragment::RegionScope;
use crate::types::Resource;

/// Decide whether `resource` falls inside the selected region scope.
///
/// A selection only takes effect when both parts are present; with either
/// the scope or the id missing, everything matches. Ids compare
/// case-sensitively, and an unrecognized scope matches nothing.
pub fn matches(
    catalog: &Catalog,
    resource: &Resource,
    region_type: Option<&RegionScope>,
    region_id: Option<&str>,
) -> bool {
    let (region_type, region_id) = match (region_type, region_id) {
        (Some(region_type), Some(region_id)) => (region_type, region_id),
        _ => return true,
    };

    match region_type {
        RegionScope::Sub => resource.has_region_id(region_id),
        RegionScope::Main => {
            if resource.has_region_id(region_id) {
                return true;
            }
            // A resource tagged only with a subregion still belongs to the
            // parent region.
            match catalog.region_by_id(region_id) {
                Some(region) => resource
                    .region_ids
                    .iter()
                    .any(|id| region.has_sub_region(id)),
                None => false,
            }
        }
        RegionScope::Other(_) => false,
    }
}
