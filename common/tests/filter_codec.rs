//! Tests for decoding and encoding the discovery query grammar.

use std::collections::BTreeMap;

use common::{
    filter_codec::{decode_query_string, encode_filter_state, reset_query_params},
    filter_state::{FilterState, Flag, RangeBounds},
    query_params::QueryParams,
};
use proptest::prelude::*;

const CATEGORY: &str = "https://vocabs.acdh.oeaw.ac.at/schema#hasCategory";
const DATE: &str = "https://vocabs.acdh.oeaw.ac.at/schema#hasDate";

// =========================================================================
// Decode
// =========================================================================

#[test]
fn test_decode_defaults_from_empty_query() {
    let state = decode_query_string("");
    assert_eq!(state, FilterState::default());
    assert_eq!(state.page, 1);
    assert_eq!(state.include_binaries, Flag::Off);
    assert_eq!(state.link_named_entities, Flag::Off);
    assert_eq!(state.map_polygon, None);
}

#[test]
fn test_decode_full_query() {
    let query = format!(
        "?q=vienna&includeBinaries=1&linkNamedEntities=0&page=3&pageSize=20\
         &facets[{c}][]=a&facets[{c}][]=b&facets[dateContent][]=1900\
         &facets[{d}][min]=1800&facets[{d}][max]=1900\
         &facets[map]=POLYGON((1%201%2C2%202%2C3%203%2C1%201))",
        c = CATEGORY.replace('#', "%23"),
        d = DATE.replace('#', "%23"),
    );
    let state = decode_query_string(&query);

    assert_eq!(state.query, "vienna");
    assert_eq!(state.include_binaries, Flag::On);
    assert_eq!(state.link_named_entities, Flag::Off);
    assert_eq!(state.page, 3);
    assert_eq!(state.facet_values(CATEGORY), ["a", "b"]);
    assert_eq!(state.facet_values("dateContent"), ["1900"]);
    assert_eq!(state.range(DATE), Some(&RangeBounds::new(Some("1800"), Some("1900"))));
    assert_eq!(state.map_polygon.as_deref(), Some("POLYGON((1 1,2 2,3 3,1 1))"));
}

#[test]
fn test_decode_percent_encoded_facet_keys() {
    let state = decode_query_string(
        "facets[https%3A%2F%2Fvocabs.acdh.oeaw.ac.at%2Fschema%23hasCategory][]=text",
    );
    assert_eq!(state.facet_values(CATEGORY), ["text"]);
}

#[test]
fn test_decode_keeps_encounter_order() {
    let state = decode_query_string("facets[dateContent][]=z&facets[dateContent][]=a&facets[dateContent][]=m");
    assert_eq!(state.facet_values("dateContent"), ["z", "a", "m"]);
}

#[test]
fn test_decode_malformed_page_falls_back() {
    assert_eq!(decode_query_string("page=abc").page, 1);
    assert_eq!(decode_query_string("page=").page, 1);
    assert_eq!(decode_query_string("page=Infinity").page, 1);
    assert_eq!(decode_query_string("page=12").page, 12);
}

#[test]
fn test_decode_range_bounds_are_opaque() {
    let state = decode_query_string("facets[dateContent][min]=last%20year");
    assert_eq!(
        state.range("dateContent"),
        Some(&RangeBounds::new(Some("last year"), None))
    );
}

#[test]
fn test_decode_never_stores_map_as_categorical() {
    let state = decode_query_string("facets[map][]=x");
    assert!(state.categorical_facets.is_empty());
    assert_eq!(state.map_polygon, None);
}

#[test]
fn test_decode_never_stores_map_as_range() {
    let state = decode_query_string(
        "facets[map][min]=1&facets[map][max]=2&facets[map]=POLYGON((0 0))",
    );
    assert!(state.range_facets.is_empty());
    assert_eq!(state.map_polygon.as_deref(), Some("POLYGON((0 0))"));
}

// =========================================================================
// Encode
// =========================================================================

#[test]
fn test_encode_always_emits_scalars() {
    let params = encode_filter_state(&FilterState::default(), &QueryParams::new());
    assert_eq!(
        params.to_query_string(),
        "q=&includeBinaries=0&linkNamedEntities=0&page=1"
    );
}

#[test]
fn test_encode_keeps_pass_through_params() {
    let base = QueryParams::parse("preferredLang=de&q=old&pageSize=25&noCache=1");
    let state = FilterState {
        query: "new".to_string(),
        ..FilterState::default()
    };
    let params = encode_filter_state(&state, &base);
    assert_eq!(
        params.to_query_string(),
        "preferredLang=de&q=new&pageSize=25&noCache=1&includeBinaries=0&linkNamedEntities=0&page=1"
    );
}

#[test]
fn test_encode_drops_stale_facets() {
    let base = QueryParams::parse("facets[dateContent][]=1&facets[map]=POLYGON((0 0))&facets[x][min]=3&pageSize=10");
    let params = encode_filter_state(&FilterState::default(), &base);
    assert!(params.iter().all(|(name, _)| !name.starts_with("facets[")));
    assert_eq!(params.get("pageSize"), Some("10"));
}

#[test]
fn test_encode_omits_blank_range_bounds() {
    let mut state = FilterState::default();
    state
        .range_facets
        .insert(DATE.to_string(), RangeBounds::new(Some(" "), Some(" 2020 ")));
    state
        .range_facets
        .insert("dateContent".to_string(), RangeBounds::new(Some(""), Some("")));
    let params = encode_filter_state(&state, &QueryParams::new());

    assert_eq!(params.get(&format!("facets[{DATE}][max]")), Some("2020"));
    assert!(!params.contains(&format!("facets[{DATE}][min]")));
    assert!(!params.contains("facets[dateContent][min]"));
    assert!(!params.contains("facets[dateContent][max]"));
}

#[test]
fn test_encode_repeats_multi_valued_facets() {
    let mut state = FilterState::default();
    state
        .categorical_facets
        .insert(CATEGORY.to_string(), vec!["b".to_string(), "a".to_string()]);
    state.categorical_facets.insert("dateContent".to_string(), vec![]);
    let params = encode_filter_state(&state, &QueryParams::new());

    let name = format!("facets[{CATEGORY}][]");
    assert_eq!(params.get_all(&name).collect::<Vec<_>>(), ["b", "a"]);
    assert!(!params.contains("facets[dateContent][]"));
}

#[test]
fn test_encode_trims_polygon() {
    let state = FilterState {
        map_polygon: Some("  POLYGON((1 1,2 2,3 3,1 1)) ".to_string()),
        ..FilterState::default()
    };
    let query = encode_filter_state(&state, &QueryParams::new()).to_query_string();
    assert!(query.ends_with("&facets[map]=POLYGON((1%201%2C2%202%2C3%203%2C1%201))"));

    let blank = FilterState {
        map_polygon: Some("   ".to_string()),
        ..FilterState::default()
    };
    assert!(!encode_filter_state(&blank, &QueryParams::new()).contains("facets[map]"));
}

#[test]
fn test_reset_query_string() {
    assert_eq!(
        reset_query_params().to_query_string(),
        "q=&preferredLang=en&includeBinaries=0&linkNamedEntities=1&page=1&pageSize=10&noCache=0"
    );
}

// =========================================================================
// Round trip
// =========================================================================

fn facet_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "https?://vocabs\\.acdh\\.oeaw\\.ac\\.at/schema#[a-zA-Z]{1,8}",
        Just("dateContent".to_string()),
    ]
}

fn bound() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ 0-9a-z-]{0,6}")
}

prop_compose! {
    fn filter_state()(
        query in "[a-zA-Z0-9 &=+%#?]{0,12}",
        categorical_facets in proptest::collection::btree_map(
            facet_key(),
            proptest::collection::vec("[a-zA-Z0-9 ,&=+%/:#]{0,8}", 0..4),
            0..4,
        ),
        range_facets in proptest::collection::btree_map(
            facet_key(),
            (bound(), bound()).prop_map(|(min, max)| RangeBounds { min, max }),
            0..3,
        ),
        include_binaries in any::<bool>(),
        link_named_entities in any::<bool>(),
        map_polygon in proptest::option::of(" ?POLYGON\\(\\([0-9 ,.]{0,16}\\)\\) ?"),
        page in 1u64..500,
    ) -> FilterState {
        FilterState {
            query,
            categorical_facets,
            range_facets,
            include_binaries: include_binaries.into(),
            link_named_entities: link_named_entities.into(),
            map_polygon,
            page,
        }
    }
}

proptest! {
    #[test]
    fn prop_decode_encode_round_trip(state in filter_state()) {
        let query = encode_filter_state(&state, &QueryParams::new()).to_query_string();
        let decoded = decode_query_string(&query);
        prop_assert_eq!(decoded, state.normalized());
    }

    #[test]
    fn prop_encode_is_deterministic(state in filter_state(), extra in "[a-z]{1,5}") {
        let base = QueryParams::parse(&format!("pageSize=10&{extra}=1"));
        let first = encode_filter_state(&state, &base);
        let second = encode_filter_state(&state, &first);
        prop_assert_eq!(first.to_query_string(), second.to_query_string());
    }
}

#[test]
fn test_round_trip_drops_empty_entries() {
    let mut state = FilterState::default();
    state.categorical_facets.insert(CATEGORY.to_string(), vec![]);
    state.range_facets.insert(DATE.to_string(), RangeBounds::new(Some(""), None));
    let query = encode_filter_state(&state, &QueryParams::new()).to_query_string();
    let decoded = decode_query_string(&query);

    assert_eq!(decoded.categorical_facets, BTreeMap::new());
    assert_eq!(decoded.range_facets, BTreeMap::new());
}
