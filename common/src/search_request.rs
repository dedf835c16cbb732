//! Outbound search API request derived from the committed URL.

use serde::{Deserialize, Serialize};

use crate::{
    filter_codec::decode_page,
    query_params::QueryParams,
    search_const::{PAGE_PARAM, PAGE_SIZE_PARAM, PREFERRED_LANG_PARAM},
};

/// The API pages from 0 while the UI pages from 1.
pub fn api_page_index(ui_page: u64) -> u64 {
    ui_page.saturating_sub(1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub params: QueryParams,
}

impl SearchRequest {
    pub fn api_page(&self) -> u64 {
        self.params
            .get(PAGE_PARAM)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }

    pub fn page_size(&self) -> Option<u64> {
        self.params.get(PAGE_SIZE_PARAM).and_then(|p| p.trim().parse().ok())
    }

    pub fn preferred_lang(&self) -> Option<&str> {
        self.params.get(PREFERRED_LANG_PARAM)
    }

    pub fn to_query_string(&self) -> String {
        self.params.to_query_string()
    }

    /// `endpoint?query`, ready for a GET.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.to_query_string())
    }
}

/// Copies every committed parameter and rewrites `page` into the API's 0-based index.
pub fn build_search_request(committed: &QueryParams) -> SearchRequest {
    let mut params = committed.clone();
    let ui_page = decode_page(committed.get(PAGE_PARAM));
    params.set(PAGE_PARAM, api_page_index(ui_page).to_string());
    SearchRequest { params }
}
