use dioxus::prelude::*;

use common::{discovery_session::{Navigation, NavigationMode}, filter_codec::reset_query_params, query_params::QueryParams};

use crate::components::{discover_components::search_result_list::RESULTS_WRAPPER_ID, navbar::Navbar};
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::discover_page::DiscoverPage;
use crate::pages::metadata_page::MetadataPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/browser/discover?:..query")]
    DiscoverPage {
        query: UrlQuery,
    },


    #[route("/browser/metadata/:id")]
    MetadataPage { id: String },

}

impl Route {
    pub fn discover_page(query: QueryParams) -> Self {
        Self::DiscoverPage {
            query: UrlQuery::from(query),
        }
    }

    /// Discovery page with the reset defaults.
    pub fn default_discover_page() -> Self {
        Self::discover_page(reset_query_params())
    }

    /// Performs a discovery navigation, replacing or pushing the history entry as asked.
    pub fn navigate(navigation: Navigation) {
        let route = Self::discover_page(navigation.query);
        match navigation.mode {
            NavigationMode::Replace => {
                navigator().replace(route);
            }
            NavigationMode::Push => {
                navigator().push(route);
            }
        }
        if navigation.reset_scroll {
            scroll_results_to_top();
        }
    }
}

fn scroll_to_top_script(element_id: &str) -> String {
    format!("document.getElementById('{}')?.scrollTo(0, 0);", element_id)
}

fn scroll_results_to_top() {
    let _ = document::eval(&scroll_to_top_script(RESULTS_WRAPPER_ID));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script_targets_result_list() {
        assert_eq!(
            scroll_to_top_script(RESULTS_WRAPPER_ID),
            "document.getElementById('x-discover-results-wrapper')?.scrollTo(0, 0);"
        );
    }

    #[test]
    fn default_discover_page_uses_reset_query() {
        let Route::DiscoverPage { query } = Route::default_discover_page() else {
            panic!("not a discover route");
        };
        assert_eq!(
            query.to_string(),
            "q=&preferredLang=en&includeBinaries=0&linkNamedEntities=1&page=1&pageSize=10&noCache=0"
        );
    }
}
