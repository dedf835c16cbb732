use dioxus::prelude::*;

use common::{
    discovery_session::DiscoverySession,
    filter_codec::decode_filter_state,
    pending_edits::PartialUpdate,
    query_params::QueryParams,
    search_const::{DEFAULT_PREFERRED_LANG, PREFERRED_LANG_PARAM},
    search_request::build_search_request,
    search_result::SearchResponse,
};
use crate::{
    api::search_api::search_for_results,
    components::{discover_components::{discover_facets::FacetPanel, search_input_top_bar::SearchInputTopBar, search_result_list::SearchResultList, search_result_list_controls::SearchResultListControls}, suspend_boundary::SuspendWrapper},
    data_definitions::url_query::UrlQuery, routes::Route
};


fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Discovery page
#[component]
pub fn DiscoverPage(query: UrlQuery) -> Element {
    let search_text = decode_filter_state(&query.0).query;

    rsx! {
        Title { "ARCHE Browser: {title_ellipsis(search_text.clone())}" }
        DiscoverPageRootComponent {
            query: query.0.clone(),
        }
    }
}

/// Everything the discovery controls share. Controls only touch the session
/// through the callbacks, so a single place decides when the URL changes.
#[derive(Clone, Copy)]
pub struct DiscoveryContext {
    pub session: ReadSignal<DiscoverySession>,
    pub search_result: ReadSignal<Option<Result<SearchResponse, ServerFnError>>>,
    pub update_filters: Callback<PartialUpdate>,
    pub apply_search: Callback<()>,
    pub reset_search: Callback<()>,
    pub set_current_page: Callback<u64>,
}

impl DiscoveryContext {
    pub fn preferred_lang(&self) -> String {
        self.session
            .read()
            .committed_params()
            .get(PREFERRED_LANG_PARAM)
            .unwrap_or(DEFAULT_PREFERRED_LANG)
            .to_string()
    }
}

#[component]
fn DiscoverPageRootComponent(query: ReadSignal<QueryParams>) -> Element {
    let mut session = use_signal(|| DiscoverySession::from_url(query.read().clone()));
    // when url changes (the read signal given to us), the session has to observe it, as it is not reset by navigation.
    use_effect(move || {
        let params = query.read().clone();
        session.write().observe_url(params);
    });

    // reruns whenever the url changes; a rerun cancels the request still in flight
    let search_result = use_resource(move || {
        let request = build_search_request(&query.read());
        search_for_results(request)
    });

    let update_filters = Callback::new(move |update: PartialUpdate| {
        session.write().apply_partial_update(&update);
    });
    let apply_search = Callback::new(move |_: ()| {
        let navigation = session.peek().apply_search();
        if let Some(navigation) = navigation {
            Route::navigate(navigation);
        }
    });
    let reset_search = Callback::new(move |_: ()| {
        let navigation = session.write().reset();
        Route::navigate(navigation);
    });
    let set_current_page = Callback::new(move |page: u64| {
        let navigation = session.peek().go_to_page(page);
        Route::navigate(navigation);
    });
    use_context_provider(move || DiscoveryContext {
        session: session.into(),
        search_result: search_result.into(),
        update_filters,
        apply_search,
        reset_search,
        set_current_page,
    });

    rsx! {
        div {
            id: "x-discover-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }

            div {
                id: "x-discover-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-discover-left-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        min-width: 300px;
                        width: 30%;
                        overflow-y: auto;
                    ",
                    FacetPanel {}
                }
                div {
                    id: "x-discover-right-panel",
                    style: "
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        flex-grow: 1;
                        min-width: 400px;
                        width: 70%;
                        padding: 7px;
                    ",
                    SearchResultListControls {}
                    div {
                        style: "
                            flex-grow: 1;
                            width: 100%;
                            max-height: calc(100% - 56px);
                        ",
                        SuspendWrapper { SearchResultList {} }
                    }
                }
            }
        }
    }
}
