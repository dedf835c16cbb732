pub mod search_input_top_bar;
pub mod discover_facets;
pub mod search_result_list;
pub mod search_result_list_controls;
