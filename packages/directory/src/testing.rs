//! Fixture data for tests and for hosts prototyping without real datasets
//!
//! The demo catalog goes through the same serde path as bundled JSON, so
//! anything it exercises also proves the dataset shapes deserialize.

use serde_json::json;

use crate::catalog::Catalog;
use crate::lookup::StringTable;
use crate::types::{Locale, Region, ResourceSet};

/// A small bilingual directory: two regions (one subdivided), two locales,
/// four resources across three categories.
pub fn demo_catalog() -> Catalog {
    let regions: Vec<Region> = serde_json::from_value(json!([
        {
            "id": "r1",
            "name": "North Metro",
            "subRegions": [
                {"id": "r1-sub1", "name": "Brooklyn Center"},
                {"id": "r1-sub2", "name": {"en": "Fridley", "es": "Fridley"}}
            ]
        },
        {
            "id": "r2",
            "name": {"en": "South Metro", "es": "Metro Sur"}
        }
    ]))
    .expect("demo regions");

    let locales: Vec<Locale> = serde_json::from_value(json!([
        {"id": "en", "name": "English"},
        {"id": "es", "name": "Español"}
    ]))
    .expect("demo locales");

    let resources: ResourceSet = serde_json::from_value(json!({
        "data": [
            {
                "name": "Ace Cafe",
                "city": "Brooklyn Center",
                "category": "food",
                "subCategory": "cafe",
                "description": {"en": "Coffee and pastries", "es": "Café y repostería"},
                "regionIds": ["r1-sub1"]
            },
            {
                "name": {"en": "North Market", "es": "Mercado del Norte"},
                "city": "Fridley",
                "category": "food",
                "subCategory": "grocery",
                "regionIds": ["r1-sub2"]
            },
            {
                "name": "banana Bikes",
                "city": "Lakeville",
                "category": "shopping",
                "subCategory": "retail",
                "regionIds": ["r2"]
            },
            {
                "name": "Apple Repair",
                "city": "Burnsville",
                "category": "services",
                "subCategory": "repair",
                "regionIds": ["r2"]
            }
        ],
        "updated": "2020-05-01T12:00:00Z"
    }))
    .expect("demo resources");

    let categories = vec![
        "food".to_string(),
        "shopping".to_string(),
        "services".to_string(),
    ];

    Catalog::new(regions, locales, resources, categories).expect("demo catalog")
}

/// English display strings for the demo catalog's taxonomy keys.
pub fn demo_strings() -> StringTable {
    StringTable::new()
        .with("category.food", "Food & Drink")
        .with("category.shopping", "Shopping")
        .with("category.services", "Services")
        .with("subCategory.cafe", "Cafe")
        .with("subCategory.grocery", "Grocery")
        .with("subCategory.retail", "Retail")
        .with("subCategory.repair", "Repair")
}
