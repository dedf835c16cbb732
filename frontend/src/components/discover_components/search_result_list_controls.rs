//! Hit count and pagination for the discovery result list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::pages::discover_page::DiscoveryContext;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-discover-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchHitCountString { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            ControlNextPrevPage {}
        }
    }
}

#[component]
fn ControlNextPrevPage() -> Element {
    let context = use_context::<DiscoveryContext>();
    let session = context.session;
    let search_result = context.search_result;
    let set_current_page = context.set_current_page;

    let max_pages = use_memo(move || match &*search_result.read() {
        Some(Ok(response)) => response.page_count(),
        _ => 0,
    });
    let current_page = use_memo(move || session.read().committed().page);
    let selected_page = use_memo(move || current_page().min(max_pages()).max(1));
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < max_pages());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| {set_current_page(selected_page() - 1);}
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 26px;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{max_pages()}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| {set_current_page(selected_page() + 1);}
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                border: none;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}

#[component]
fn SearchHitCountString() -> Element {
    let context = use_context::<DiscoveryContext>();
    let search_result = context.search_result;

    match &*search_result.read() {
        Some(Err(e)) => return rsx! { "! error: {e:?}" },
        Some(Ok(s)) if s.total_count > s.pageable_count() => return rsx! { "{s.total_count} results found (first {s.pageable_count()} shown)" },
        Some(Ok(s)) => return rsx! { "{s.total_count} results found" },
        None => return rsx! {"..."}
    };
}
