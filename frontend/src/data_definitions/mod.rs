pub mod url_query;
