//! Conversion between URL query parameters and `FilterState`.
//!
//! Decoding never fails: missing or malformed values fall back to their defaults.
//! Encoding replaces every `facets[...]` parameter of the base and leaves any
//! other parameter (`pageSize`, `noCache`, `preferredLang`, ...) untouched.

use crate::{
    filter_state::{FilterState, Flag, RangeBounds},
    query_params::QueryParams,
    search_const::{
        DEFAULT_NO_CACHE, DEFAULT_PAGE_SIZE, DEFAULT_PREFERRED_LANG, FACETS_PARAM_PREFIX,
        FIRST_PAGE, INCLUDE_BINARIES_PARAM, LINK_NAMED_ENTITIES_PARAM, MAP_FACET_KEY,
        MAP_FACET_PARAM, NO_CACHE_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM, PREFERRED_LANG_PARAM,
        QUERY_PARAM,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FacetParam<'a> {
    Member(&'a str),
    Min(&'a str),
    Max(&'a str),
    Map,
}

fn parse_facet_param(name: &str) -> Option<FacetParam<'_>> {
    if name == MAP_FACET_PARAM {
        return Some(FacetParam::Map);
    }
    let inner = name.strip_prefix(FACETS_PARAM_PREFIX)?;
    if let Some(key) = inner.strip_suffix("][]") {
        return Some(FacetParam::Member(key));
    }
    if let Some(key) = inner.strip_suffix("][min]") {
        return Some(FacetParam::Min(key));
    }
    if let Some(key) = inner.strip_suffix("][max]") {
        return Some(FacetParam::Max(key));
    }
    None
}

pub fn facet_member_param(key: &str) -> String {
    format!("{FACETS_PARAM_PREFIX}{key}][]")
}

pub fn facet_min_param(key: &str) -> String {
    format!("{FACETS_PARAM_PREFIX}{key}][min]")
}

pub fn facet_max_param(key: &str) -> String {
    format!("{FACETS_PARAM_PREFIX}{key}][max]")
}

/// Reads the UI page. Anything that is not a finite number >= 1 becomes page 1.
pub fn decode_page(value: Option<&str>) -> u64 {
    let Some(value) = value else {
        return FIRST_PAGE;
    };
    match value.trim().parse::<f64>() {
        Ok(page) if page.is_finite() && page >= 1.0 => page.trunc() as u64,
        _ => FIRST_PAGE,
    }
}

fn decode_flag(value: Option<&str>) -> Flag {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

pub fn decode_filter_state(params: &QueryParams) -> FilterState {
    let mut state = FilterState {
        query: params.get(QUERY_PARAM).unwrap_or_default().to_string(),
        include_binaries: decode_flag(params.get(INCLUDE_BINARIES_PARAM)),
        link_named_entities: decode_flag(params.get(LINK_NAMED_ENTITIES_PARAM)),
        page: decode_page(params.get(PAGE_PARAM)),
        ..FilterState::default()
    };

    for (name, value) in params.iter() {
        match parse_facet_param(name) {
            Some(FacetParam::Member(key)) if key != MAP_FACET_KEY => {
                state
                    .categorical_facets
                    .entry(key.to_string())
                    .or_default()
                    .push(value.to_string());
            }
            Some(FacetParam::Min(key)) if key != MAP_FACET_KEY => {
                state.range_facets.entry(key.to_string()).or_default().min = Some(value.to_string());
            }
            Some(FacetParam::Max(key)) if key != MAP_FACET_KEY => {
                state.range_facets.entry(key.to_string()).or_default().max = Some(value.to_string());
            }
            Some(FacetParam::Map) => {
                if state.map_polygon.is_none() {
                    state.map_polygon = Some(value.to_string());
                }
            }
            _ => {}
        }
    }
    state
}

pub fn decode_query_string(query: &str) -> FilterState {
    decode_filter_state(&QueryParams::parse(query))
}

/// Writes `state` over `base`. Stale facet parameters of `base` never survive.
pub fn encode_filter_state(state: &FilterState, base: &QueryParams) -> QueryParams {
    let mut params = base.clone();
    params.retain(|name, _| !name.starts_with(FACETS_PARAM_PREFIX));

    params.set(QUERY_PARAM, state.query.as_str());
    params.set(INCLUDE_BINARIES_PARAM, state.include_binaries.as_param());
    params.set(LINK_NAMED_ENTITIES_PARAM, state.link_named_entities.as_param());
    params.set(PAGE_PARAM, state.page.max(FIRST_PAGE).to_string());

    for (key, bounds) in &state.range_facets {
        append_range(&mut params, key, bounds);
    }
    for (key, values) in &state.categorical_facets {
        let name = facet_member_param(key);
        for value in values {
            params.append(name.as_str(), value.as_str());
        }
    }
    if let Some(polygon) = state.map_polygon_value() {
        params.append(MAP_FACET_PARAM, polygon);
    }
    params
}

fn append_range(params: &mut QueryParams, key: &str, bounds: &RangeBounds) {
    if let Some(min) = bounds.min_value() {
        params.append(facet_min_param(key), min);
    }
    if let Some(max) = bounds.max_value() {
        params.append(facet_max_param(key), max);
    }
}

/// The query a reset navigates to. Note `linkNamedEntities=1`, unlike the decode default.
pub fn reset_query_params() -> QueryParams {
    let mut params = QueryParams::new();
    params.append(QUERY_PARAM, "");
    params.append(PREFERRED_LANG_PARAM, DEFAULT_PREFERRED_LANG);
    params.append(INCLUDE_BINARIES_PARAM, Flag::Off.as_param());
    params.append(LINK_NAMED_ENTITIES_PARAM, Flag::On.as_param());
    params.append(PAGE_PARAM, FIRST_PAGE.to_string());
    params.append(PAGE_SIZE_PARAM, DEFAULT_PAGE_SIZE.to_string());
    params.append(NO_CACHE_PARAM, DEFAULT_NO_CACHE);
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_param_names() {
        assert_eq!(
            parse_facet_param("facets[https://ex.org/p][]"),
            Some(FacetParam::Member("https://ex.org/p"))
        );
        assert_eq!(parse_facet_param("facets[d][min]"), Some(FacetParam::Min("d")));
        assert_eq!(parse_facet_param("facets[d][max]"), Some(FacetParam::Max("d")));
        assert_eq!(parse_facet_param("facets[map]"), Some(FacetParam::Map));
        assert_eq!(parse_facet_param("facets[d]"), None);
        assert_eq!(parse_facet_param("pageSize"), None);
    }

    #[test]
    fn page_fallbacks() {
        assert_eq!(decode_page(None), 1);
        assert_eq!(decode_page(Some("abc")), 1);
        assert_eq!(decode_page(Some("inf")), 1);
        assert_eq!(decode_page(Some("NaN")), 1);
        assert_eq!(decode_page(Some("0")), 1);
        assert_eq!(decode_page(Some("-4")), 1);
        assert_eq!(decode_page(Some("7")), 7);
        assert_eq!(decode_page(Some("3.9")), 3);
    }
}
