//! Resource dataset records
//!
//! A resource is one directory entry: a local service, business, or
//! program. Entries are authored by hand in JSON, so every field except the
//! name is allowed to be missing and the filtering code treats absent data
//! as simply not matching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::localized::LocalizedText;

/// A single directory entry.
///
/// Resources carry no identifier of their own; position in the dataset
/// array is identity enough for a read-only list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Display name.
    pub name: LocalizedText,
    /// City the resource operates in.
    pub city: Option<LocalizedText>,
    /// Category id, expected to be one of the catalog's known categories.
    #[serde(default)]
    pub category: String,
    /// Sub-category id within the category.
    #[serde(default)]
    pub sub_category: String,
    /// Longer description, if authored.
    pub description: Option<LocalizedText>,
    /// Region and subregion ids this resource is tagged with. A plain list
    /// with set semantics; duplicates are harmless.
    #[serde(default)]
    pub region_ids: Vec<String>,
}

impl Resource {
    /// Whether the resource is tagged with the given region or subregion id
    /// (case-sensitive).
    pub fn has_region_id(&self, id: &str) -> bool {
        self.region_ids.iter().any(|tagged| tagged == id)
    }
}

/// The bundled resources dataset.
///
/// Older bundles ship a bare array of resources; newer ones wrap it
/// together with the refresh timestamp of the data pipeline
/// (`{"data": [...], "updated": "..."}`). Both shapes deserialize here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceSet {
    /// The wrapped shape carrying the pipeline refresh timestamp.
    Dated {
        data: Vec<Resource>,
        #[serde(default)]
        updated: Option<DateTime<Utc>>,
    },
    /// The bare-array shape.
    Bare(Vec<Resource>),
}

impl ResourceSet {
    /// The resources, in dataset order.
    pub fn resources(&self) -> &[Resource] {
        match self {
            ResourceSet::Dated { data, .. } => data,
            ResourceSet::Bare(data) => data,
        }
    }

    /// When the dataset was last refreshed, if the bundle records it.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        match self {
            ResourceSet::Dated { updated, .. } => *updated,
            ResourceSet::Bare(_) => None,
        }
    }
}

impl From<Vec<Resource>> for ResourceSet {
    fn from(data: Vec<Resource>) -> Self {
        ResourceSet::Bare(data)
    }
}
