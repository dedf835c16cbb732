//! Discovery page session: committed URL state plus pending edits.
//!
//! The URL is the only committed state. Edits accumulate in `PendingEdits`
//! until `apply_search` turns them into a navigation; `reset` navigates to the
//! default query. The session never navigates itself, it hands a `Navigation`
//! to the router and learns about the result through `observe_url`.

use tracing::debug;

use crate::{
    filter_codec::{decode_filter_state, encode_filter_state, reset_query_params},
    filter_state::FilterState,
    pending_edits::{PartialUpdate, PendingEdits},
    query_params::QueryParams,
    search_const::{FIRST_PAGE, PAGE_PARAM},
    search_request::{SearchRequest, build_search_request},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Rewrite the current history entry.
    Replace,
    Push,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub query: QueryParams,
    pub mode: NavigationMode,
    pub reset_scroll: bool,
}

impl Navigation {
    pub fn href(&self, path: &str) -> String {
        format!("{}?{}", path, self.query.to_query_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoverySession {
    committed_params: QueryParams,
    committed: FilterState,
    pending: PendingEdits,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_url(params: QueryParams) -> Self {
        let mut session = Self::new();
        session.observe_url(params);
        session
    }

    /// Records the URL the router currently shows. Pending edits are replaced
    /// only when the decoded filters differ from the last observed URL, so a
    /// change limited to the page or to pass-through parameters keeps the
    /// user's edits. Returns whether the pending state was reseeded.
    pub fn observe_url(&mut self, params: QueryParams) -> bool {
        let decoded = decode_filter_state(&params);
        self.committed_params = params;
        if self.pending.is_set() && decoded.same_filters(&self.committed) {
            self.committed = decoded;
            return false;
        }
        debug!("discovery session: reseeding pending edits from url");
        self.pending = PendingEdits::Set(decoded.clone());
        self.committed = decoded;
        true
    }

    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    pub fn committed_params(&self) -> &QueryParams {
        &self.committed_params
    }

    pub fn pending_edits(&self) -> &PendingEdits {
        &self.pending
    }

    /// The state filter controls render.
    pub fn pending(&self) -> &FilterState {
        self.pending.read(&self.committed)
    }

    pub fn apply_partial_update(&mut self, update: &PartialUpdate) {
        if update.is_empty() {
            return;
        }
        self.pending = self.pending.apply(&self.committed, update);
    }

    pub fn has_uncommitted_changes(&self) -> bool {
        !self.pending().same_filters(&self.committed)
    }

    /// Commit: encode the pending filters over the current URL, back on page 1.
    /// `None` while nothing was ever seeded or edited.
    pub fn apply_search(&self) -> Option<Navigation> {
        let PendingEdits::Set(pending) = &self.pending else {
            return None;
        };
        let state = pending.clone().with_page(FIRST_PAGE);
        let query = encode_filter_state(&state, &self.committed_params);
        debug!("discovery session: commit {}", query);
        Some(Navigation {
            query,
            mode: NavigationMode::Replace,
            reset_scroll: false,
        })
    }

    /// Drops every pending edit. The store reseeds from the next observed URL.
    pub fn reset(&mut self) -> Navigation {
        self.pending = PendingEdits::Unset;
        let query = reset_query_params();
        debug!("discovery session: reset to {}", query);
        Navigation {
            query,
            mode: NavigationMode::Replace,
            reset_scroll: false,
        }
    }

    /// Moves to another result page of the committed search. Pending edits are kept.
    pub fn go_to_page(&self, page: u64) -> Navigation {
        let mut query = self.committed_params.clone();
        query.set(PAGE_PARAM, page.max(FIRST_PAGE).to_string());
        Navigation {
            query,
            mode: NavigationMode::Push,
            reset_scroll: true,
        }
    }

    pub fn search_request(&self) -> SearchRequest {
        build_search_request(&self.committed_params)
    }
}
