//! Region hierarchy records
//!
//! Geography is a fixed two-level tree: main regions, each optionally
//! subdivided into subregions. Resources tag themselves with ids from
//! either level.

use serde::{Deserialize, Serialize};

use super::localized::LocalizedText;

/// A second-level area inside a [`Region`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRegion {
    /// Identifier, unique within the parent region.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
}

/// A top-level area of the directory's coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Identifier, unique across regions.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
    /// Subregions in dataset order; empty when the region is not subdivided.
    #[serde(default)]
    pub sub_regions: Vec<SubRegion>,
}

impl Region {
    /// Find a subregion of this region by id (case-sensitive).
    pub fn sub_region(&self, id: &str) -> Option<&SubRegion> {
        self.sub_regions.iter().find(|sub| sub.id == id)
    }

    /// Whether `id` names one of this region's subregions.
    pub fn has_sub_region(&self, id: &str) -> bool {
        self.sub_region(id).is_some()
    }
}
