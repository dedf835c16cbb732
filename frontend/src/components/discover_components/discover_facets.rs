//! Facet controls of the discovery page. Every control only emits partial updates.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use common::{
    filter_state::{Flag, is_categorical_key},
    pending_edits::{PartialUpdate, PartialValue, RangePatch, toggle_facet_value},
    search_const::{INCLUDE_BINARIES_PARAM, LINK_NAMED_ENTITIES_PARAM, MAP_FACET_KEY},
    search_result::{FacetSummary, FacetSummaryValues, FacetValueCount, RangeSummary},
};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::pages::discover_page::DiscoveryContext;


#[component]
pub fn FacetPanel() -> Element {
    let context = use_context::<DiscoveryContext>();
    let search_result = context.search_result;
    let facets = use_memo(move || match &*search_result.read() {
        Some(Ok(response)) => response.facets.clone(),
        _ => BTreeMap::new(),
    });

    rsx! {
        div {
            id: "x-discover-facet-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 10px;
            ",
            FlagToggles {}
            for (facet_key, summary) in facets().into_iter() {
                FacetBlock {
                    key: "{facet_key}",
                    facet_key: facet_key.clone(),
                    summary: summary.clone(),
                }
            }
            MapPolygonInput {}
        }
    }
}

#[component]
fn FacetBlockFrame(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-facet-block",
            style: "
                background: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                padding: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",
            h3 {
                style: "font-size: 16px; font-weight: 500; margin: 0 0 8px 0;",
                "{label}"
            }
            {children}
        }
    }
}

#[component]
fn FacetBlock(facet_key: String, summary: FacetSummary) -> Element {
    let context = use_context::<DiscoveryContext>();
    let lang = context.preferred_lang();
    let label = summary.label.pick(&lang).to_string();
    let label = if label.is_empty() { facet_key.clone() } else { label };

    let body = match summary.values {
        FacetSummaryValues::Range(range) => rsx! {
            RangeFacetInputs { facet_key: facet_key.clone(), range }
        },
        FacetSummaryValues::Items(items) if is_categorical_key(&facet_key) => rsx! {
            CategoricalFacetList { facet_key: facet_key.clone(), items }
        },
        // value lists for keys that cannot be filtered on are not shown
        FacetSummaryValues::Items(_) => return rsx! {},
    };
    rsx! {
        FacetBlockFrame { label, {body} }
    }
}

#[component]
fn CategoricalFacetList(facet_key: String, items: Vec<FacetValueCount>) -> Element {
    let context = use_context::<DiscoveryContext>();
    let lang = context.preferred_lang();
    let mut rows = items
        .iter()
        .map(|item| {
            let value = item.param_value();
            let display = item.label.pick(&lang).to_string();
            let display = if display.is_empty() { value.clone() } else { display };
            (value, display, item.count)
        })
        .collect::<Vec<_>>();

    // selected values the server no longer returns stay visible so they can be unchecked
    let selected = context.session.read().pending().facet_values(&facet_key).to_vec();
    for value in selected {
        if !rows.iter().any(|(v, _, _)| v == &value) {
            rows.push((value.clone(), format!("Missing: {}", value), 0));
        }
    }

    rsx! {
        ul {
            for (value, display, count) in rows {
                li {
                    key: "{value}-{count}",
                    FacetCheckbox {
                        facet_key: facet_key.clone(),
                        facet_value: value,
                        result_count: count,
                        result_display_string: display,
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(facet_key: ReadSignal<String>, facet_value: ReadSignal<String>, result_count: ReadSignal<u64>, result_display_string: ReadSignal<String>) -> Element {
    let context = use_context::<DiscoveryContext>();
    let session = context.session;
    let is_checked = use_memo(move || session.read().pending().has_facet_value(&facet_key.read(), &facet_value.read()));
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                let update = toggle_facet_value(session.peek().pending(), &facet_key.read(), &facet_value.read());
                context.update_filters.call(update);
            },

            CheckboxIcon { checked: is_checked() }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{result_display_string}"
            }
            div { style: "flex: 1 1 auto;", }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{result_count}"
            }
        }
    }
}

#[component]
fn CheckboxIcon(checked: bool) -> Element {
    if checked {
        rsx! { Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" } }
    } else {
        rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" } }
    }
}

const RANGE_INPUT_STYLE: &str = "
    width: 100px;
    height: 28px;
    padding: 0 8px;
    border: 1px solid rgba(0,0,0,0.3);
    border-radius: 6px;
";

#[component]
fn RangeFacetInputs(facet_key: String, range: RangeSummary) -> Element {
    let context = use_context::<DiscoveryContext>();
    let bounds = context.session.read().pending().range(&facet_key).cloned().unwrap_or_default();
    let min_value = bounds.min.unwrap_or_default();
    let max_value = bounds.max.unwrap_or_default();
    let min_placeholder = range.min.map(|m| m.to_string()).unwrap_or("min".to_string());
    let max_placeholder = range.max.map(|m| m.to_string()).unwrap_or("max".to_string());
    let min_key = facet_key.clone();
    let max_key = facet_key.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            input {
                r#type: "text",
                style: RANGE_INPUT_STYLE,
                placeholder: "{min_placeholder}",
                value: "{min_value}",
                oninput: move |event: Event<FormData>| {
                    context.update_filters.call(PartialUpdate::new().with(min_key.clone(), RangePatch::min(event.value())));
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        context.apply_search.call(());
                    }
                },
            }
            span { "-" }
            input {
                r#type: "text",
                style: RANGE_INPUT_STYLE,
                placeholder: "{max_placeholder}",
                value: "{max_value}",
                oninput: move |event: Event<FormData>| {
                    context.update_filters.call(PartialUpdate::new().with(max_key.clone(), RangePatch::max(event.value())));
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        context.apply_search.call(());
                    }
                },
            }
        }
    }
}

#[component]
fn FlagToggles() -> Element {
    rsx! {
        FacetBlockFrame {
            label: "Options".to_string(),
            FlagToggle { param: INCLUDE_BINARIES_PARAM, label: "Include binaries" }
            FlagToggle { param: LINK_NAMED_ENTITIES_PARAM, label: "Link named entities" }
        }
    }
}

#[component]
fn FlagToggle(param: &'static str, label: &'static str) -> Element {
    let context = use_context::<DiscoveryContext>();
    let session = context.session;
    let current = use_memo(move || {
        let session = session.read();
        let pending = session.pending();
        if param == INCLUDE_BINARIES_PARAM { pending.include_binaries } else { pending.link_named_entities }
    });
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_| {
                let next: Flag = current().toggled();
                context.update_filters.call(PartialUpdate::new().with(param, next.as_param()));
            },
            CheckboxIcon { checked: current().is_on() }
            "{label}"
        }
    }
}

#[component]
fn MapPolygonInput() -> Element {
    let context = use_context::<DiscoveryContext>();
    let session = context.session;
    let polygon = use_memo(move || session.read().pending().map_polygon.clone().unwrap_or_default());
    rsx! {
        FacetBlockFrame {
            label: "Map area".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                textarea {
                    rows: "3",
                    placeholder: "POLYGON((lon lat, ...))",
                    style: "width: 100%; font-family: monospace; font-size: 13px; box-sizing: border-box;",
                    value: "{polygon}",
                    oninput: move |event: Event<FormData>| {
                        context.update_filters.call(PartialUpdate::new().with(MAP_FACET_KEY, event.value()));
                    },
                }
                if !polygon().is_empty() {
                    button {
                        style: "align-self: flex-start; cursor: pointer;",
                        onclick: move |_| {
                            context.update_filters.call(PartialUpdate::new().with(MAP_FACET_KEY, PartialValue::Null));
                        },
                        "Clear area"
                    }
                }
            }
        }
    }
}
