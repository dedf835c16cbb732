//! Ordered URL query parameter list.
//!
//! Behaves like the browser `URLSearchParams`: names may repeat, order is kept,
//! and `set` replaces the first occurrence in place while dropping the others.

use std::fmt::Display;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters left alone by `encodeURIComponent`.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parameter names keep their brackets readable: `facets[<key>][]`.
const NAME_SET: &AsciiSet = &COMPONENT_SET.remove(b'[').remove(b']');

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string, with or without the leading `?`.
    /// `+` decodes to a space and percent escapes are resolved.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(first) = self.pairs.iter().position(|(n, _)| n == name) else {
            self.pairs.push((name.to_string(), value));
            return;
        };
        self.pairs[first].1 = value;
        let mut index = 0;
        self.pairs.retain(|(n, _)| {
            let keep = index <= first || n != name;
            index += 1;
            keep
        });
    }

    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(n, _)| n != name);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.pairs.retain(|(n, v)| keep(n, v));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes without the leading `?`. Values are escaped like
    /// `encodeURIComponent`, so spaces become `%20` and commas `%2C`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(n, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(n, NAME_SET),
                    utf8_percent_encode(v, COMPONENT_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut params = QueryParams::parse("a=1&b=2&a=3&c=4");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2&c=4");
    }

    #[test]
    fn set_appends_missing_name() {
        let mut params = QueryParams::parse("?a=1");
        params.set("page", "2");
        assert_eq!(params.to_query_string(), "a=1&page=2");
    }

    #[test]
    fn parse_decodes_plus_and_escapes() {
        let params = QueryParams::parse("q=hello+world&x=%C3%A9t%C3%A9");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("x"), Some("été"));
    }

    #[test]
    fn names_keep_brackets_and_escape_uri_keys() {
        let params: QueryParams = [("facets[https://ex.org/p#a][]", "x y")].into_iter().collect();
        assert_eq!(
            params.to_query_string(),
            "facets[https%3A%2F%2Fex.org%2Fp%23a][]=x%20y"
        );
    }
}
