//! Search API response models.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::search_const::UNDEFINED_LANG;

/// Language tag -> text.
pub type LangMap = BTreeMap<String, String>;

/// Picks the text for `preferred`, then untagged, then English, then whatever is there.
pub fn pick_lang<'a>(texts: &'a LangMap, preferred: &str) -> Option<&'a str> {
    [preferred, UNDEFINED_LANG, "en"]
        .iter()
        .find_map(|lang| texts.get(*lang))
        .or_else(|| texts.values().next())
        .map(String::as_str)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LangText {
    Plain(String),
    ByLang(LangMap),
}

impl LangText {
    pub fn pick(&self, preferred: &str) -> &str {
        match self {
            LangText::Plain(text) => text,
            LangText::ByLang(texts) => pick_lang(texts, preferred).unwrap_or_default(),
        }
    }
}

impl Default for LangText {
    fn default() -> Self {
        LangText::Plain(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl Default for ResourceId {
    fn default() -> Self {
        ResourceId::Text(String::new())
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A number or a string, as the API sends range limits and facet values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiScalar {
    Number(f64),
    Text(String),
}

impl Display for ApiScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiScalar::Number(n) => write!(f, "{}", n),
            ApiScalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultItem {
    pub id: ResourceId,
    pub url: String,
    pub title: LangMap,
    pub description: LangMap,
    pub access_restriction_summary: LangMap,
}

impl ResultItem {
    pub fn title(&self, preferred_lang: &str) -> &str {
        pick_lang(&self.title, preferred_lang).unwrap_or_default()
    }

    pub fn description(&self, preferred_lang: &str) -> Option<&str> {
        pick_lang(&self.description, preferred_lang)
    }

    pub fn access_restriction(&self, preferred_lang: &str) -> Option<&str> {
        pick_lang(&self.access_restriction_summary, preferred_lang)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValueCount {
    pub value: ApiScalar,
    #[serde(default)]
    pub label: LangText,
    #[serde(default)]
    pub count: u64,
}

impl FacetValueCount {
    /// Value as written into `facets[<key>][]`.
    pub fn param_value(&self) -> String {
        self.value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RangeSummary {
    pub min: Option<ApiScalar>,
    pub max: Option<ApiScalar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetSummaryValues {
    Items(Vec<FacetValueCount>),
    Range(RangeSummary),
}

impl Default for FacetSummaryValues {
    fn default() -> Self {
        FacetSummaryValues::Items(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetSummary {
    pub label: LangText,
    pub values: FacetSummaryValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
    pub facets: BTreeMap<String, FacetSummary>,
    pub total_count: u64,
    pub max_count: u64,
    pub page_size: u64,
    pub messages: Vec<String>,
}

impl SearchResponse {
    /// Results reachable through paging: the API stops at `maxCount`.
    pub fn pageable_count(&self) -> u64 {
        if self.max_count > 0 {
            self.total_count.min(self.max_count)
        } else {
            self.total_count
        }
    }

    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.pageable_count().div_ceil(self.page_size)
    }
}
