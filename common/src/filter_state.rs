//! Structured representation of a discovery search.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_const::{
    DATE_CONTENT_FACET_KEY, FIRST_PAGE, INCLUDE_BINARIES_PARAM, LINK_NAMED_ENTITIES_PARAM,
    MAP_FACET_KEY, QUERY_PARAM,
};

/// Bounds of a continuous facet. Bounds are opaque strings; a blank bound counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeBounds {
    pub fn new(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }

    pub fn min_value(&self) -> Option<&str> {
        non_blank(self.min.as_deref())
    }

    pub fn max_value(&self) -> Option<&str> {
        non_blank(self.max.as_deref())
    }

    pub fn is_blank(&self) -> bool {
        self.min_value().is_none() && self.max_value().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A `"0"`/`"1"` switch parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Hash)]
pub enum Flag {
    #[default]
    Off,
    On,
}

impl Flag {
    pub fn as_param(self) -> &'static str {
        match self {
            Flag::Off => "0",
            Flag::On => "1",
        }
    }

    pub fn is_on(self) -> bool {
        self == Flag::On
    }

    pub fn toggled(self) -> Self {
        match self {
            Flag::Off => Flag::On,
            Flag::On => Flag::Off,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Flag::On } else { Flag::Off }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagParseError(pub String);

impl Display for FlagParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid flag value {:?}: expected \"0\" or \"1\"", self.0)
    }
}

impl std::error::Error for FlagParseError {}

impl FromStr for Flag {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Flag::Off),
            "1" => Ok(Flag::On),
            other => Err(FlagParseError(other.to_string())),
        }
    }
}

/// The named scalar parameters a generic filter update can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarParam {
    Query,
    IncludeBinaries,
    LinkNamedEntities,
}

impl ScalarParam {
    pub fn param_name(self) -> &'static str {
        match self {
            ScalarParam::Query => QUERY_PARAM,
            ScalarParam::IncludeBinaries => INCLUDE_BINARIES_PARAM,
            ScalarParam::LinkNamedEntities => LINK_NAMED_ENTITIES_PARAM,
        }
    }
}

/// How a filter key is routed inside a FilterState.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKey<'a> {
    Categorical(&'a str),
    Map,
    Scalar(ScalarParam),
    Unknown(&'a str),
}

impl<'a> FacetKey<'a> {
    pub fn classify(key: &'a str) -> Self {
        if key == MAP_FACET_KEY {
            FacetKey::Map
        } else if is_categorical_key(key) {
            FacetKey::Categorical(key)
        } else if key == QUERY_PARAM {
            FacetKey::Scalar(ScalarParam::Query)
        } else if key == INCLUDE_BINARIES_PARAM {
            FacetKey::Scalar(ScalarParam::IncludeBinaries)
        } else if key == LINK_NAMED_ENTITIES_PARAM {
            FacetKey::Scalar(ScalarParam::LinkNamedEntities)
        } else {
            FacetKey::Unknown(key)
        }
    }
}

pub fn is_categorical_key(key: &str) -> bool {
    key.starts_with("http://") || key.starts_with("https://") || key == DATE_CONTENT_FACET_KEY
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub query: String,
    pub categorical_facets: BTreeMap<String, Vec<String>>,
    pub range_facets: BTreeMap<String, RangeBounds>,
    pub include_binaries: Flag,
    pub link_named_entities: Flag,
    /// WKT `POLYGON(...)` drawn on the map.
    pub map_polygon: Option<String>,
    /// 1-based, as shown to the user.
    pub page: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            categorical_facets: BTreeMap::new(),
            range_facets: BTreeMap::new(),
            include_binaries: Flag::Off,
            link_named_entities: Flag::Off,
            map_polygon: None,
            page: FIRST_PAGE,
        }
    }
}

impl FilterState {
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(FIRST_PAGE);
        self
    }

    pub fn facet_values(&self, key: &str) -> &[String] {
        self.categorical_facets
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_facet_value(&self, key: &str, value: &str) -> bool {
        self.facet_values(key).iter().any(|v| v == value)
    }

    pub fn range(&self, key: &str) -> Option<&RangeBounds> {
        self.range_facets.get(key)
    }

    pub fn map_polygon_value(&self) -> Option<&str> {
        non_blank(self.map_polygon.as_deref())
    }

    /// The state as it survives an encode: empty facets and blank bounds
    /// dropped, bounds and polygon trimmed.
    pub fn normalized(&self) -> Self {
        let categorical_facets = self
            .categorical_facets
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| (key.clone(), values.clone()))
            .collect();
        let range_facets = self
            .range_facets
            .iter()
            .filter(|(_, bounds)| !bounds.is_blank())
            .map(|(key, bounds)| {
                (
                    key.clone(),
                    RangeBounds::new(bounds.min_value(), bounds.max_value()),
                )
            })
            .collect();
        Self {
            query: self.query.clone(),
            categorical_facets,
            range_facets,
            include_binaries: self.include_binaries,
            link_named_entities: self.link_named_entities,
            map_polygon: self.map_polygon_value().map(str::to_string),
            page: self.page.max(FIRST_PAGE),
        }
    }

    /// Same filters, ignoring the page and anything the encoder would drop.
    pub fn same_filters(&self, other: &FilterState) -> bool {
        self.normalized().with_page(FIRST_PAGE) == other.normalized().with_page(FIRST_PAGE)
    }

    pub fn active_filter_count(&self) -> usize {
        let normalized = self.normalized();
        normalized.categorical_facets.values().map(Vec::len).sum::<usize>()
            + normalized.range_facets.len()
            + usize::from(normalized.map_polygon.is_some())
    }
}
