//! Navigation-fragment filter state
//!
//! Region and category selection live in the portion of the URL after `#`,
//! encoded as `&`-joined `key=value` pairs:
//!
//! `#regionType=main&regionId=r1&category=food`
//!
//! which keeps filtered views bookmarkable and shareable. Decoding is
//! deliberately forgiving: each key is extracted independently, a missing
//! or mangled key resolves to `None`, and no input is ever an error.

use std::fmt;

/// Fragment key for the region scope.
const REGION_TYPE_KEY: &str = "regionType";
/// Fragment key for the selected region or subregion id.
const REGION_ID_KEY: &str = "regionId";
/// Fragment key for the selected category.
const CATEGORY_KEY: &str = "category";

// ============================================================================
// RegionScope
// ============================================================================

/// How a region selection scopes the resource list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionScope {
    /// A main region: matches resources tagged with the region itself or
    /// with any of its subregions.
    Main,
    /// A single subregion: matches only resources tagged with it directly.
    Sub,
    /// An unrecognized fragment value, kept verbatim. Matches nothing but
    /// re-encodes unchanged, so decoding then encoding loses no state.
    Other(String),
}

impl RegionScope {
    /// Parse a fragment value. Total: unknown values become
    /// [`RegionScope::Other`].
    pub fn parse(value: &str) -> Self {
        match value {
            "main" => RegionScope::Main,
            "sub" => RegionScope::Sub,
            other => RegionScope::Other(other.to_string()),
        }
    }

    /// The value written back to the fragment.
    pub fn as_str(&self) -> &str {
        match self {
            RegionScope::Main => "main",
            RegionScope::Sub => "sub",
            RegionScope::Other(value) => value,
        }
    }
}

impl fmt::Display for RegionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FilterDescriptor
// ============================================================================

/// The selection state mirrored into the navigation fragment.
///
/// A descriptor is a value, not a place: selection handlers build a fresh
/// one for every change and hand it to the filter engine explicitly.
/// Nothing holds a descriptor that mutates behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// Region scope; meaningful only together with `region_id`.
    pub region_type: Option<RegionScope>,
    /// Selected main-region or subregion id.
    pub region_id: Option<String>,
    /// Selected category id.
    pub category: Option<String>,
}

impl FilterDescriptor {
    /// Descriptor with no filters applied.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.region_type.is_none() && self.region_id.is_none() && self.category.is_none()
    }

    /// Descriptor scoped to a main region.
    pub fn main_region(id: impl Into<String>) -> Self {
        FilterDescriptor {
            region_type: Some(RegionScope::Main),
            region_id: Some(id.into()),
            category: None,
        }
    }

    /// Descriptor scoped to a single subregion.
    pub fn sub_region(id: impl Into<String>) -> Self {
        FilterDescriptor {
            region_type: Some(RegionScope::Sub),
            region_id: Some(id.into()),
            category: None,
        }
    }

    /// The same descriptor with the category replaced, region untouched.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Parse a navigation fragment, with or without the leading `#`.
    ///
    /// Each recognized key is pulled out on its own: the value runs from
    /// the first `<key>=` to the next `&`. Keys that cannot be extracted
    /// are `None`. Never fails, whatever the input looks like.
    pub fn from_fragment(fragment: &str) -> Self {
        FilterDescriptor {
            region_type: fragment_value(fragment, REGION_TYPE_KEY)
                .map(|value| RegionScope::parse(&value)),
            region_id: fragment_value(fragment, REGION_ID_KEY),
            category: fragment_value(fragment, CATEGORY_KEY),
        }
    }

    /// Serialize to the fragment form (no leading `#`).
    ///
    /// Unset keys are omitted and set keys always appear in the order
    /// `regionType`, `regionId`, `category`, so equal descriptors produce
    /// byte-equal fragments.
    pub fn to_fragment(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(region_type) = &self.region_type {
            pairs.push(format!("{}={}", REGION_TYPE_KEY, region_type.as_str()));
        }
        if let Some(region_id) = &self.region_id {
            pairs.push(format!("{}={}", REGION_ID_KEY, region_id));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("{}={}", CATEGORY_KEY, category));
        }
        pairs.join("&")
    }
}

/// Extract the value after the first `<key>=`, up to the next `&`.
fn fragment_value(fragment: &str, key: &str) -> Option<String> {
    let marker = format!("{}=", key);
    let start = fragment.find(&marker)? + marker.len();
    let rest = &fragment[start..];
    let value = match rest.find('&') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(value.to_string())
}
