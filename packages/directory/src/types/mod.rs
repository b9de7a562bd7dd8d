//! Dataset model for the bundled directory JSON
//!
//! These types mirror the three static files a host ships: regions,
//! locales, and resources. Hosts deserialize them once at startup and hand
//! the values to [`Catalog::new`](crate::Catalog::new).

pub mod locale;
pub mod localized;
pub mod region;
pub mod resource;

pub use locale::Locale;
pub use localized::LocalizedText;
pub use region::{Region, SubRegion};
pub use resource::{Resource, ResourceSet};
