//! Property tests for the fragment codec, region matching, and ordering.

use directory::lookup::StringTable;
use directory::testing::demo_catalog;
use directory::{
    matcher, sort_resources, visible_resources, Catalog, FilterDescriptor, Locale, LocalizedText,
    RegionScope, Resource,
};
use proptest::prelude::*;

/// Fragment-safe tokens: ids and categories as the datasets actually write
/// them. No `&` or `=`, so a token can never fabricate another key's
/// marker inside an encoded fragment.
fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{0,12}"
}

fn scope() -> impl Strategy<Value = RegionScope> {
    prop_oneof![
        Just(RegionScope::Main),
        Just(RegionScope::Sub),
        token()
            .prop_filter("tokens naming a real scope parse as that scope", |t| {
                t != "main" && t != "sub"
            })
            .prop_map(RegionScope::Other),
    ]
}

fn descriptor() -> impl Strategy<Value = FilterDescriptor> {
    (
        proptest::option::of(scope()),
        proptest::option::of(token()),
        proptest::option::of(token()),
    )
        .prop_map(|(region_type, region_id, category)| FilterDescriptor {
            region_type,
            region_id,
            category,
        })
}

fn resource_tagged(region_ids: Vec<String>) -> Resource {
    Resource {
        name: LocalizedText::Plain("Fixture".to_string()),
        city: None,
        category: "food".to_string(),
        sub_category: String::new(),
        description: None,
        region_ids,
    }
}

proptest! {
    #[test]
    fn test_decode_inverts_encode(descriptor in descriptor()) {
        let fragment = descriptor.to_fragment();
        prop_assert_eq!(FilterDescriptor::from_fragment(&fragment), descriptor);
    }

    #[test]
    fn test_decode_never_fails_and_is_deterministic(fragment in ".{0,40}") {
        let first = FilterDescriptor::from_fragment(&fragment);
        let second = FilterDescriptor::from_fragment(&fragment);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_incomplete_region_selection_matches_everything(
        tags in proptest::collection::vec(token(), 0..6),
        region_type in proptest::option::of(scope()),
        region_id in proptest::option::of(token()),
    ) {
        prop_assume!(region_type.is_none() || region_id.is_none());
        let catalog = demo_catalog();
        let resource = resource_tagged(tags);
        prop_assert!(matcher::matches(
            &catalog,
            &resource,
            region_type.as_ref(),
            region_id.as_deref(),
        ));
    }

    #[test]
    fn test_sub_scope_is_exact_tag_containment(
        tags in proptest::collection::vec(token(), 0..6),
        target in token(),
    ) {
        let catalog = demo_catalog();
        let resource = resource_tagged(tags.clone());
        let matched = matcher::matches(
            &catalog,
            &resource,
            Some(&RegionScope::Sub),
            Some(&target),
        );
        prop_assert_eq!(matched, tags.contains(&target));
    }

    #[test]
    fn test_unrecognized_scope_never_matches(
        tags in proptest::collection::vec(token(), 0..6),
        target in token(),
        scope_name in token(),
    ) {
        let catalog = demo_catalog();
        // Tag the resource with the target too; the scope alone decides.
        let mut tags = tags;
        tags.push(target.clone());
        let resource = resource_tagged(tags);
        prop_assert!(!matcher::matches(
            &catalog,
            &resource,
            Some(&RegionScope::Other(scope_name)),
            Some(&target),
        ));
    }

    #[test]
    fn test_visible_list_is_sorted_and_stable(
        names in proptest::collection::vec("[A-Za-z ]{0,8}", 0..12),
    ) {
        let resources: Vec<Resource> = names
            .iter()
            .enumerate()
            .map(|(index, name)| Resource {
                name: name.clone().into(),
                city: None,
                category: "food".to_string(),
                // Smuggle the dataset position through for the stability check.
                sub_category: index.to_string(),
                description: None,
                region_ids: vec![],
            })
            .collect();
        let catalog = Catalog::new(
            vec![],
            vec![Locale {
                id: "en".to_string(),
                name: "English".to_string(),
            }],
            resources,
            vec!["food".to_string()],
        )
        .unwrap();

        let visible = visible_resources(
            &catalog,
            &FilterDescriptor::empty(),
            "",
            "en",
            &StringTable::new(),
        );
        prop_assert_eq!(visible.len(), names.len());

        let keys: Vec<String> = visible
            .iter()
            .map(|resource| {
                resource
                    .name
                    .resolve("en")
                    .map(str::to_uppercase)
                    .unwrap_or_default()
            })
            .collect();
        let positions: Vec<usize> = visible
            .iter()
            .map(|resource| resource.sub_category.parse().unwrap())
            .collect();
        for index in 1..keys.len() {
            prop_assert!(keys[index - 1] <= keys[index]);
            if keys[index - 1] == keys[index] {
                prop_assert!(positions[index - 1] < positions[index]);
            }
        }

        // Sorting an already sorted list must not reorder anything.
        let mut resorted = visible.clone();
        sort_resources(&mut resorted, "en");
        prop_assert_eq!(resorted, visible);
    }
}
