//! Core logic for a static-data community resource directory
//!
//! A host UI renders a browsable, filterable list of local services and
//! businesses from read-only JSON datasets bundled with the app. This
//! crate owns everything between the navigation fragment and the visible
//! list:
//!
//! - the shareable `#regionType=..&regionId=..&category=..` fragment codec
//!   ([`FilterDescriptor`])
//! - region scoping, where selecting a main region also covers resources
//!   tagged only with its subregions ([`matcher`])
//! - category filtering and case-insensitive localized search ([`engine`])
//! - stable, locale-aware ordering of the visible list
//! - per-page selection state and its event handlers ([`Session`])
//!
//! Rendering, routing, translation files, and data loading stay with the
//! host. The one collaborator seam is [`StringLookup`], the host's `t`
//! function bound to the session locale.
//!
//! Nothing on the filtering path can fail. Malformed fragments and missing
//! translations degrade to "does not match", so the worst a bad input can
//! produce is an empty list rather than a crashed UI.
//!
//! # Usage
//!
//! ```rust,ignore
//! let catalog = Catalog::new(regions, locales, resources, categories)?;
//! let mut session = Session::start(&catalog, location_fragment);
//!
//! // UI events
//! let fragment = session.select_category(Some("food"));
//! session.set_search_term("plumb");
//!
//! // Render
//! for resource in session.visible(&catalog, &strings) { /* ... */ }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod fragment;
pub mod lookup;
pub mod matcher;
pub mod session;
pub mod testing;
pub mod types;

pub use catalog::Catalog;
pub use engine::{filter_resources, sort_resources, visible_resources};
pub use error::{CatalogError, CatalogIssue};
pub use fragment::{FilterDescriptor, RegionScope};
pub use lookup::{StringLookup, StringTable};
pub use session::Session;
pub use types::{Locale, LocalizedText, Region, Resource, ResourceSet, SubRegion};
