use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{error, info};

pub const ARCHE_API_URL_ENV: &str = "ARCHE_API_URL";
pub const ARCHE_API_TIMEOUT_ENV: &str = "ARCHE_API_TIMEOUT_SECS";
const DEFAULT_ARCHE_API_URL: &str = "https://arche.acdh.oeaw.ac.at/browser/api";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub fn get_arche_api_url() -> String {
    std::env::var(ARCHE_API_URL_ENV).unwrap_or(DEFAULT_ARCHE_API_URL.to_string())
}

fn parse_timeout(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn get_arche_api_timeout() -> Duration {
    parse_timeout(std::env::var(ARCHE_API_TIMEOUT_ENV).ok())
}

/// `<base>/<endpoint>` without doubled slashes.
pub fn arche_endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

pub fn get_arche_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(get_arche_api_timeout())
        .build()
        .context("Failed to build search API client")
}

pub async fn arche_get_json<T: DeserializeOwned>(url: String) -> anyhow::Result<T> {
    let t0 = std::time::Instant::now();
    let client = get_arche_client()?;
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("Search API request failed: {}", url))?;
    let status = response.status();
    let response_txt = response.text().await.context("Failed to read search API response")?;
    let dt_ms = t0.elapsed().as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        error!("SEARCH API ERROR: {} {} ({}ms)", status, url, dt_ms);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    info!("SEARCH API: {} len = {} ({}ms)", url, response_txt.len(), dt_ms);
    let response: T = serde_json::from_str(&response_txt)
        .with_context(|| format!("Failed to decode search API response from {}", url))?;
    Ok(response)
}
