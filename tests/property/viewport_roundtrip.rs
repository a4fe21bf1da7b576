//! Property-based tests for the viewport grammar

use axe_crawler::config::{parse_viewports, Viewport};
use proptest::prelude::*;

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    ("[A-Za-z0-9_]{1,16}", any::<u32>(), any::<u32>())
        .prop_map(|(name, width, height)| Viewport::new(name, width, height))
}

proptest! {
    /// Serializing viewports and parsing them back yields the same list.
    #[test]
    fn test_viewport_spec_round_trip(views in prop::collection::vec(viewport_strategy(), 1..6)) {
        let spec = views
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let parsed = parse_viewports(&spec).unwrap();
        prop_assert_eq!(parsed, views);
    }

    /// A single token parses to its name and dimensions as given.
    #[test]
    fn test_single_token_fields(name in "[a-z_]{1,10}", width in 1u32..10_000, height in 1u32..10_000) {
        let view: Viewport = format!("{}:{}x{}", name, width, height).parse().unwrap();
        prop_assert_eq!(view.name, name);
        prop_assert_eq!(view.width, width);
        prop_assert_eq!(view.height, height);
    }

    /// Tokens without a `name:WxH` shape fail the whole value.
    #[test]
    fn test_shapeless_token_fails(junk in "[a-z]{1,10}") {
        let spec = format!("mobile:360x640,{}", junk);
        prop_assert!(parse_viewports(&spec).is_err());
    }
}
