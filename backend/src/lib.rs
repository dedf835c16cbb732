//! Server-side access to the external search API.

pub mod api;
pub mod api_utils;
