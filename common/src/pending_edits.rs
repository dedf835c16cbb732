//! Uncommitted filter edits.
//!
//! Filter controls describe their change as a `PartialUpdate`; none of them
//! needs to know about the others. Applying an update never touches the
//! previous state, it builds a new one.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::filter_state::{FacetKey, FilterState, ScalarParam};

/// One bound edit: `None` leaves the bound alone, `Some(None)` is an explicit null.
type BoundEdit = Option<Option<String>>;

fn explicit_bound<'de, D>(deserializer: D) -> Result<BoundEdit, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangePatch {
    #[serde(default, deserialize_with = "explicit_bound", skip_serializing_if = "Option::is_none")]
    pub min: BoundEdit,
    #[serde(default, deserialize_with = "explicit_bound", skip_serializing_if = "Option::is_none")]
    pub max: BoundEdit,
}

impl RangePatch {
    pub fn min(value: impl Into<String>) -> Self {
        Self {
            min: Some(Some(value.into())),
            max: None,
        }
    }

    pub fn max(value: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(Some(value.into())),
        }
    }

    pub fn both(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(Some(min.into())),
            max: Some(Some(max.into())),
        }
    }

    pub fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Value of a partial update entry, shaped like the JSON a control would send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartialValue {
    Null,
    Text(String),
    List(Vec<String>),
    Range(RangePatch),
}

impl PartialValue {
    /// Scalar view: a list yields its first element.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            PartialValue::Text(text) => Some(text),
            PartialValue::List(values) => values.first().map(String::as_str),
            PartialValue::Null | PartialValue::Range(_) => None,
        }
    }
}

impl From<&str> for PartialValue {
    fn from(value: &str) -> Self {
        PartialValue::Text(value.to_string())
    }
}

impl From<String> for PartialValue {
    fn from(value: String) -> Self {
        PartialValue::Text(value)
    }
}

impl From<Option<String>> for PartialValue {
    fn from(value: Option<String>) -> Self {
        value.map(PartialValue::Text).unwrap_or(PartialValue::Null)
    }
}

impl From<Vec<String>> for PartialValue {
    fn from(value: Vec<String>) -> Self {
        PartialValue::List(value)
    }
}

impl From<RangePatch> for PartialValue {
    fn from(value: RangePatch) -> Self {
        PartialValue::Range(value)
    }
}

/// Ordered set of key/value edits, applied front to back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialUpdate {
    entries: Vec<(String, PartialValue)>,
}

impl PartialUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PartialValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<PartialValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PartialValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PartialValue>> FromIterator<(K, V)> for PartialUpdate {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Update selecting or deselecting one value of a categorical facet.
pub fn toggle_facet_value(state: &FilterState, key: &str, value: &str) -> PartialUpdate {
    let mut values = state.facet_values(key).to_vec();
    if let Some(position) = values.iter().position(|v| v == value) {
        values.remove(position);
    } else {
        values.push(value.to_string());
    }
    PartialUpdate::new().with(key, values)
}

pub fn apply_partial_update(state: &FilterState, update: &PartialUpdate) -> FilterState {
    let mut next = state.clone();
    for (key, value) in update.iter() {
        if let PartialValue::Range(patch) = value {
            if patch.has_bounds() {
                let bounds = next.range_facets.entry(key.to_string()).or_default();
                if let Some(min) = &patch.min {
                    bounds.min = Some(min.clone().unwrap_or_default());
                }
                if let Some(max) = &patch.max {
                    bounds.max = Some(max.clone().unwrap_or_default());
                }
                continue;
            }
        }
        match FacetKey::classify(key) {
            FacetKey::Map => {
                next.map_polygon = value.first_text().map(str::to_string);
            }
            FacetKey::Categorical(key) => match value {
                PartialValue::List(values) if !values.is_empty() => {
                    next.categorical_facets.insert(key.to_string(), values.clone());
                }
                _ => {
                    next.categorical_facets.remove(key);
                }
            },
            FacetKey::Scalar(param) => {
                let text = value.first_text().unwrap_or_default();
                match param {
                    ScalarParam::Query => next.query = text.to_string(),
                    ScalarParam::IncludeBinaries => {
                        next.include_binaries = text.parse().unwrap_or_default();
                    }
                    ScalarParam::LinkNamedEntities => {
                        next.link_named_entities = text.parse().unwrap_or_default();
                    }
                }
            }
            FacetKey::Unknown(key) => {
                trace!("pending edits: dropping update for unknown key {key:?}");
            }
        }
    }
    next
}

/// Pending filter state: either nothing edited yet or a full edited copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingEdits {
    #[default]
    Unset,
    Set(FilterState),
}

impl PendingEdits {
    /// The pending state, falling back to the committed one when unset.
    pub fn read<'a>(&'a self, committed: &'a FilterState) -> &'a FilterState {
        match self {
            PendingEdits::Unset => committed,
            PendingEdits::Set(state) => state,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, PendingEdits::Set(_))
    }

    pub fn apply(&self, committed: &FilterState, update: &PartialUpdate) -> PendingEdits {
        PendingEdits::Set(apply_partial_update(self.read(committed), update))
    }
}
