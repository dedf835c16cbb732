//! Parameter names and defaults of the discovery query grammar.

pub const QUERY_PARAM: &str = "q";
pub const INCLUDE_BINARIES_PARAM: &str = "includeBinaries";
pub const LINK_NAMED_ENTITIES_PARAM: &str = "linkNamedEntities";
pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "pageSize";
pub const NO_CACHE_PARAM: &str = "noCache";
pub const PREFERRED_LANG_PARAM: &str = "preferredLang";

/// Every facet parameter starts with this prefix, including the map polygon.
pub const FACETS_PARAM_PREFIX: &str = "facets[";

/// Synthetic facet key holding the map polygon.
pub const MAP_FACET_KEY: &str = "map";
pub const MAP_FACET_PARAM: &str = "facets[map]";

/// Facet key of the content-date facet; the only categorical key that is not a URI.
pub const DATE_CONTENT_FACET_KEY: &str = "dateContent";

pub const FIRST_PAGE: u64 = 1;

pub const DEFAULT_PREFERRED_LANG: &str = "en";
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_NO_CACHE: &str = "0";

/// Language key used by the search API for untagged literals.
pub const UNDEFINED_LANG: &str = "und";
