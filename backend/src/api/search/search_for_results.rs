//! Search endpoint for result lists and facet counts.

use common::{search_request::SearchRequest, search_result::SearchResponse};

use crate::api_utils::arche_client::{arche_endpoint_url, arche_get_json, get_arche_api_url};

pub const SEARCH_ENDPOINT: &str = "search";

pub fn search_url(base_url: &str, request: &SearchRequest) -> String {
    request.url(&arche_endpoint_url(base_url, SEARCH_ENDPOINT))
}

/// Sends the request as-is. Superseding stale requests is up to the caller.
pub async fn search_for_results(request: SearchRequest) -> anyhow::Result<SearchResponse> {
    let url = search_url(&get_arche_api_url(), &request);
    let response = arche_get_json::<SearchResponse>(url).await?;
    Ok(response)
}
