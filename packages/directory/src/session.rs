//! Per-session selection state
//!
//! One [`Session`] per open page: the current locale, the free-text search
//! term, and the active filter. Selection handlers replace the filter with
//! a freshly built descriptor and hand back the fragment string the host
//! should publish to its location bar, which keeps every filtered view
//! shareable as a link.
//!
//! The search term is deliberately not mirrored into the fragment;
//! half-typed queries make poor bookmarks.

use tracing::debug;

use crate::catalog::Catalog;
use crate::engine;
use crate::fragment::{FilterDescriptor, RegionScope};
use crate::lookup::StringLookup;
use crate::types::Resource;

/// Selection state for one UI session.
#[derive(Debug, Clone)]
pub struct Session {
    locale: String,
    search_term: String,
    filter: FilterDescriptor,
}

impl Session {
    /// Start a session: the catalog's default locale, an empty search
    /// term, and the filter decoded from the navigation fragment the page
    /// was opened with.
    pub fn start(catalog: &Catalog, fragment: &str) -> Self {
        let filter = FilterDescriptor::from_fragment(fragment);
        debug!(?filter, "session started");
        Session {
            locale: catalog.default_locale().id.clone(),
            search_term: String::new(),
            filter,
        }
    }

    /// Current locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Current free-text search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current filter selection.
    pub fn filter(&self) -> &FilterDescriptor {
        &self.filter
    }

    /// Select a category, `None` meaning "all categories". The region
    /// selection is untouched. Returns the fragment to publish.
    pub fn select_category(&mut self, category: Option<&str>) -> String {
        self.filter = self
            .filter
            .clone()
            .with_category(category.map(str::to_string));
        debug!(category = ?category, "category selected");
        self.filter.to_fragment()
    }

    /// Select a main region, `None` meaning "all regions". The category
    /// selection is untouched. Returns the fragment to publish.
    ///
    /// Region pickers offer main regions only; subregion scopes arrive via
    /// shared links, not through this handler.
    pub fn select_region(&mut self, region_id: Option<&str>) -> String {
        let (region_type, region_id) = match region_id {
            Some(id) => (Some(RegionScope::Main), Some(id.to_string())),
            None => (None, None),
        };
        self.filter = FilterDescriptor {
            region_type,
            region_id,
            category: self.filter.category.take(),
        };
        debug!(region = ?self.filter.region_id, "region selected");
        self.filter.to_fragment()
    }

    /// Switch the UI locale. Only ids present in the catalog take effect;
    /// an unknown id leaves the previous locale in place. Returns whether
    /// the locale changed.
    pub fn select_locale(&mut self, catalog: &Catalog, locale_id: &str) -> bool {
        match catalog.locale_by_id(locale_id) {
            Some(locale) => {
                self.locale = locale.id.clone();
                debug!(locale = %self.locale, "locale switched");
                true
            }
            None => {
                debug!(locale = %locale_id, "unknown locale ignored");
                false
            }
        }
    }

    /// Replace the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The resources this session currently sees: filtered by the active
    /// selection and search term, sorted by localized name.
    pub fn visible<'c>(
        &self,
        catalog: &'c Catalog,
        strings: &dyn StringLookup,
    ) -> Vec<&'c Resource> {
        engine::visible_resources(
            catalog,
            &self.filter,
            &self.search_term,
            &self.locale,
            strings,
        )
    }
}
