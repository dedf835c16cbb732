use dioxus::prelude::*;
use common::{pending_edits::PartialUpdate, search_const::QUERY_PARAM};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdRefresh}};
use crate::pages::discover_page::DiscoveryContext;


#[component]
pub fn SearchInputTopBar() -> Element {
    let context = use_context::<DiscoveryContext>();
    let session = context.session;
    let query_text = use_memo(move || session.read().pending().query.clone());
    let query_has_changed = use_memo(move || session.read().has_uncommitted_changes());
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });
    let active_filter_count = use_memo(move || session.read().committed().active_filter_count());

    let search_oninput = move |event: Event<FormData>| {
        context.update_filters.call(PartialUpdate::new().with(QUERY_PARAM, event.value()));
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            context.apply_search.call(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                title: "Search",
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    context.apply_search.call(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search the repository",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{query_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                margin-left: 16px;
            ",
            button {
                style: "
                    height: 34px;
                    padding: 0 12px;
                    font-size: 14px;
                    border-radius: 8px;
                    background: {search_button_color()};
                    color: white;
                    border: none;
                    cursor: pointer;
                ",
                onclick: move |_| context.apply_search.call(()),
                "Apply filters"
            }
            button {
                title: "Reset all filters",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    height: 34px;
                    padding: 0 12px;
                    font-size: 14px;
                    border-radius: 8px;
                    background: white;
                    color: #111827;
                    border: 1px solid #D1D5DB;
                    cursor: pointer;
                ",
                onclick: move |_| context.reset_search.call(()),
                Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" }
                "Reset"
            }
            if active_filter_count() > 0 {
                span {
                    style: "font-size: 14px; color: rgba(0,0,0,0.6);",
                    "{active_filter_count()} active filters"
                }
            }
        }
    }
}
