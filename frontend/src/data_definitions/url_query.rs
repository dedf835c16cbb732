//! Route query segment carrying the discovery parameters.

use std::fmt::Display;

use common::query_params::QueryParams;
use serde::{Deserialize, Serialize};


// The router builds a query segment from `&str` and writes it back with Display.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub QueryParams);

impl From<QueryParams> for UrlQuery {
    fn from(value: QueryParams) -> Self {
        UrlQuery(value)
    }
}

impl From<&str> for UrlQuery {
    fn from(query: &str) -> Self {
        UrlQuery(QueryParams::parse(query))
    }
}

impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        let query = UrlQuery::from("q=a%20b&facets[map]=POLYGON((1%201))&page=2");
        let again = UrlQuery::from(query.to_string().as_str());
        assert_eq!(query, again);
        assert_eq!(again.0.get("facets[map]"), Some("POLYGON((1 1))"));
    }
}
