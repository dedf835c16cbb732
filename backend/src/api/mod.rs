//! Calls into the external search API.

pub mod search;
