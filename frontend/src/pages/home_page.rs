use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::{filter_codec::{decode_filter_state, encode_filter_state, reset_query_params}, query_params::QueryParams};
use crate::routes::Route;

/// The reset defaults with only the search text filled in.
fn home_search_query(text: &str) -> QueryParams {
    let defaults = reset_query_params();
    let mut state = decode_filter_state(&defaults);
    state.query = text.to_string();
    encode_filter_state(&state, &defaults)
}

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "ARCHE Browser - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 40px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "ARCHE Browser"
            }
            div {
                style: "
                    color: #111827;
                    font-size: 22px;
                    line-height: 1.6;
                    max-width: 620px;
                ",
                "Search and filter the resources of the repository: collections, places, persons, organisations, publications and projects."
            }
            TextSearchCard {}
        }
    }
}

#[component]
fn TextSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #1F4E8C 0%, #3A7BD5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "font-size: 26px; font-weight: 500;",
                "Discover"
            }
            div {
                style: "font-size: 16px; color: rgba(255,255,255,0.9);",
                "*Type search terms in the text box below and hit Enter to start."
            }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search the repository",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        n2.push(Route::discover_page(home_search_query(&search_q.read())));
                    }
                },
            }
        }
    }
}
