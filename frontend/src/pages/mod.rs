pub mod home_page;
pub mod discover_page;
pub mod metadata_page;
