//! Tests for partial updates of pending filter state.

use common::{
    filter_state::{FilterState, Flag, RangeBounds},
    pending_edits::{
        PartialUpdate, PartialValue, PendingEdits, RangePatch, apply_partial_update,
        toggle_facet_value,
    },
};

const CATEGORY: &str = "https://vocabs.acdh.oeaw.ac.at/schema#hasCategory";
const DATE: &str = "https://vocabs.acdh.oeaw.ac.at/schema#hasDate";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_range_patch_merges_present_bounds_only() {
    let mut state = FilterState::default();
    state
        .range_facets
        .insert(DATE.to_string(), RangeBounds::new(Some("1800"), Some("1900")));

    let next = apply_partial_update(&state, &PartialUpdate::new().with(DATE, RangePatch::max("2000")));
    assert_eq!(next.range(DATE), Some(&RangeBounds::new(Some("1800"), Some("2000"))));
    // the input is untouched
    assert_eq!(state.range(DATE), Some(&RangeBounds::new(Some("1800"), Some("1900"))));
}

#[test]
fn test_range_patch_null_bound_becomes_empty() {
    let update: PartialValue = serde_json::from_str(r#"{"min": null}"#).unwrap();
    let mut state = FilterState::default();
    state
        .range_facets
        .insert(DATE.to_string(), RangeBounds::new(Some("1800"), Some("1900")));

    let next = apply_partial_update(&state, &PartialUpdate::new().with(DATE, update));
    assert_eq!(next.range(DATE), Some(&RangeBounds::new(Some(""), Some("1900"))));
}

#[test]
fn test_range_patch_wins_over_key_routing() {
    // a range object addressed to a scalar name still lands in the ranges
    let next = apply_partial_update(
        &FilterState::default(),
        &PartialUpdate::new().with("q", RangePatch::min("1")),
    );
    assert_eq!(next.query, "");
    assert_eq!(next.range("q"), Some(&RangeBounds::new(Some("1"), None)));
}

#[test]
fn test_map_takes_string_or_first_element() {
    let state = FilterState::default();
    let next = apply_partial_update(&state, &PartialUpdate::new().with("map", "POLYGON((0 0,1 1,0 0))"));
    assert_eq!(next.map_polygon.as_deref(), Some("POLYGON((0 0,1 1,0 0))"));
    assert!(next.categorical_facets.is_empty());

    let next = apply_partial_update(&state, &PartialUpdate::new().with("map", strings(&["A", "B"])));
    assert_eq!(next.map_polygon.as_deref(), Some("A"));

    let next = apply_partial_update(&next, &PartialUpdate::new().with("map", Vec::<String>::new()));
    assert_eq!(next.map_polygon, None);

    let cleared = apply_partial_update(&state, &PartialUpdate::new().with("map", PartialValue::Null));
    assert_eq!(cleared.map_polygon, None);
}

#[test]
fn test_categorical_replace_and_delete() {
    let mut state = FilterState::default();
    state
        .categorical_facets
        .insert(CATEGORY.to_string(), strings(&["1", "2"]));

    let next = apply_partial_update(&state, &PartialUpdate::new().with(CATEGORY, strings(&["3"])));
    assert_eq!(next.facet_values(CATEGORY), ["3"]);

    let next = apply_partial_update(&next, &PartialUpdate::new().with(CATEGORY, Vec::<String>::new()));
    assert!(!next.categorical_facets.contains_key(CATEGORY));

    let next = apply_partial_update(&state, &PartialUpdate::new().with(CATEGORY, PartialValue::Null));
    assert!(!next.categorical_facets.contains_key(CATEGORY));

    // a bare string is not a value list
    let next = apply_partial_update(&state, &PartialUpdate::new().with(CATEGORY, "3"));
    assert!(!next.categorical_facets.contains_key(CATEGORY));
}

#[test]
fn test_date_content_is_categorical() {
    let next = apply_partial_update(
        &FilterState::default(),
        &PartialUpdate::new().with("dateContent", strings(&["1900-1910"])),
    );
    assert_eq!(next.facet_values("dateContent"), ["1900-1910"]);
}

#[test]
fn test_scalars_coerce_lists() {
    let update = PartialUpdate::new()
        .with("q", strings(&["first", "second"]))
        .with("includeBinaries", "1")
        .with("linkNamedEntities", strings(&["1"]));
    let next = apply_partial_update(&FilterState::default(), &update);

    assert_eq!(next.query, "first");
    assert_eq!(next.include_binaries, Flag::On);
    assert_eq!(next.link_named_entities, Flag::On);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let state = FilterState::default();
    let update = PartialUpdate::new()
        .with("page", "5")
        .with("ftp://example.org/p", strings(&["x"]))
        .with("pageSize", "100");
    assert_eq!(apply_partial_update(&state, &update), state);
}

#[test]
fn test_later_entries_overwrite_same_key() {
    let update = PartialUpdate::new().with("q", "one").with("q", "two");
    let next = apply_partial_update(&FilterState::default(), &update);
    assert_eq!(next.query, "two");
}

#[test]
fn test_partial_update_from_json_values() {
    let json = r#"[["q", "wien"], ["dateContent", ["1900"]], ["map", null], ["https://ex.org/d", {"max": "2020"}]]"#;
    let entries: Vec<(String, PartialValue)> = serde_json::from_str(json).unwrap();
    let update: PartialUpdate = entries.into_iter().collect();
    let next = apply_partial_update(&FilterState::default(), &update);

    assert_eq!(next.query, "wien");
    assert_eq!(next.facet_values("dateContent"), ["1900"]);
    assert_eq!(next.map_polygon, None);
    assert_eq!(next.range("https://ex.org/d"), Some(&RangeBounds::new(None, Some("2020"))));
}

#[test]
fn test_toggle_facet_value() {
    let mut state = FilterState::default();
    state.categorical_facets.insert(CATEGORY.to_string(), strings(&["a"]));

    let added = apply_partial_update(&state, &toggle_facet_value(&state, CATEGORY, "b"));
    assert_eq!(added.facet_values(CATEGORY), ["a", "b"]);

    let removed = apply_partial_update(&added, &toggle_facet_value(&added, CATEGORY, "a"));
    assert_eq!(removed.facet_values(CATEGORY), ["b"]);

    let emptied = apply_partial_update(&removed, &toggle_facet_value(&removed, CATEGORY, "b"));
    assert!(!emptied.categorical_facets.contains_key(CATEGORY));
}

#[test]
fn test_pending_edits_read_falls_back_to_committed() {
    let committed = FilterState {
        query: "committed".to_string(),
        ..FilterState::default()
    };
    let pending = PendingEdits::Unset;
    assert_eq!(pending.read(&committed).query, "committed");

    let pending = pending.apply(&committed, &PartialUpdate::new().with("q", "edited"));
    assert!(pending.is_set());
    assert_eq!(pending.read(&committed).query, "edited");
}
