//! Error types for catalog assembly
//!
//! Only catalog construction can fail, and only one way: with no locales
//! there is nothing to start a session in. Every other data problem is a
//! [`CatalogIssue`], recorded and logged but never fatal. The filtering
//! path itself has no error type at all; anything missing or malformed
//! there degrades to "does not match".

use std::fmt;

use thiserror::Error;

/// Errors raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The locales dataset is empty.
    #[error("locales dataset is empty; at least one locale is required")]
    NoLocales,
}

/// A non-fatal data-quality finding recorded during catalog assembly.
///
/// Issues are logged at `warn` level and kept on the catalog for hosts
/// that want to surface them. They never change what the filter engine
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two regions share the same id.
    DuplicateRegion { id: String },
    /// Two subregions share the same id.
    DuplicateSubRegion { id: String },
    /// Two locales share the same id.
    DuplicateLocale { id: String },
    /// A resource is tagged with an id that exists nowhere in the region
    /// hierarchy.
    UnknownRegionId {
        resource_index: usize,
        region_id: String,
    },
    /// A resource's category is not on the known-category list.
    UnknownCategory {
        resource_index: usize,
        category: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateRegion { id } => {
                write!(f, "duplicate region id \"{}\"", id)
            }
            CatalogIssue::DuplicateSubRegion { id } => {
                write!(f, "duplicate subregion id \"{}\"", id)
            }
            CatalogIssue::DuplicateLocale { id } => {
                write!(f, "duplicate locale id \"{}\"", id)
            }
            CatalogIssue::UnknownRegionId {
                resource_index,
                region_id,
            } => {
                write!(
                    f,
                    "resource #{} is tagged with unknown region id \"{}\"",
                    resource_index, region_id
                )
            }
            CatalogIssue::UnknownCategory {
                resource_index,
                category,
            } => {
                write!(
                    f,
                    "resource #{} has unknown category \"{}\"",
                    resource_index, category
                )
            }
        }
    }
}
