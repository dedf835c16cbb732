//! Result list of the discovery page.

use dioxus::prelude::*;

use common::search_result::ResultItem;
use crate::{components::{error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator}, pages::discover_page::DiscoveryContext, routes::Route};

/// Scroll container of the result list.
pub const RESULTS_WRAPPER_ID: &str = "x-discover-results-wrapper";

#[component]
pub fn SearchResultList() -> Element {
    let context = use_context::<DiscoveryContext>();
    let lang = context.preferred_lang();
    let search_result = context.search_result.read();
    let search_result = match search_result.as_ref() {
        Some(Err(e)) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Some(Ok(s)) => s,
        None => return rsx! { LoadingIndicator{} },
    };

    let messages = search_result.messages.clone();
    let result_list = search_result.results.clone();

    rsx! {
        div {
            id: RESULTS_WRAPPER_ID,
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            for message in messages {
                div {
                    class: "x-search-message",
                    style: "
                        background: #FFF7E6;
                        border: 1px solid #F5C26B;
                        border-radius: 6px;
                        padding: 8px 12px;
                        margin: 6px 0;
                    ",
                    "{message}"
                }
            }
            if result_list.is_empty() {
                div {
                    style: "padding: 20px; font-size: 18px; color: rgba(0,0,0,0.6);",
                    "No results"
                }
            }
            ul {
                for result in result_list.into_iter() {
                    li {
                        key: "{result.id}",
                        ResultItemCard { item: result, lang: lang.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultItemCard(item: ResultItem, lang: String) -> Element {
    let title = item.title(&lang).to_string();
    let title = if title.is_empty() { item.id.to_string() } else { title };
    let description = item.description(&lang).map(str::to_string);
    let access = item.access_restriction(&lang).map(str::to_string);
    rsx! {
        div {
            class: "x-result-item-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                background: white;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 6px 0;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.1);
            ",
            div {
                style: "font-size: 18px; font-weight: 500;",
                Link {
                    to: Route::MetadataPage { id: item.id.to_string() },
                    "{title}"
                }
            }
            if let Some(description) = description {
                div {
                    style: "font-size: 14px; color: rgba(0,0,0,0.8);",
                    "{description}"
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; font-size: 13px; color: rgba(0,0,0,0.6);",
                if let Some(access) = access {
                    span { "{access}" }
                }
                a { href: "{item.url}", target: "_blank", "{item.url}" }
            }
        }
    }
}
