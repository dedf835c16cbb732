//! Discovery query-state engine shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod query_params;
pub mod filter_state;
pub mod filter_codec;
pub mod pending_edits;
pub mod discovery_session;
pub mod search_request;
pub mod search_result;
