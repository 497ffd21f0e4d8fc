use crate::config;

use super::error::WikiSearchError;
use super::hierarchy::NodeIndex;
use super::store::NodeStore;
use super::types::SearchMatch;

/// Read-only search over the wiki hierarchy.
///
/// Takes its persistence collaborator by constructor injection and keeps
/// no state of its own; every call works on a fresh snapshot from the
/// store.
pub struct WikiSearchService<S> {
    store: S,
}

impl<S: NodeStore> WikiSearchService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Find nodes whose effective label contains `query` (case-insensitive)
    /// and resolve each match's ancestor chain up to its root.
    ///
    /// Results come back in store order; no relevance ranking is applied.
    /// Blank queries are rejected before touching the store.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchMatch>, WikiSearchError> {
        let needle = query.trim();
        if needle.is_empty() {
            return Err(WikiSearchError::EmptyQuery);
        }

        let candidates = self.store.find_by_label(needle).await?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        // One bulk fetch instead of a store round-trip per ancestor hop
        let index = NodeIndex::new(self.store.fetch_all().await?);

        let needle_lowercase = needle.to_lowercase();
        let mut matches = Vec::with_capacity(candidates.len());
        for node in candidates {
            // The store already filters; re-check so the label contract
            // holds no matter how a store implementation matches
            if node.is_deleted() || !node.label_matches(&needle_lowercase) {
                continue;
            }
            let path = index.ancestor_path(&node)?;
            matches.push(SearchMatch { node, path });
        }

        let search_config = &config::config().search;
        if let Some(max) = search_config.max_results {
            if matches.len() > max as usize {
                tracing::warn!(
                    "Search for {:?} produced {} matches, capping at {}",
                    needle,
                    matches.len(),
                    max
                );
                matches.truncate(max as usize);
            }
        }

        if search_config.debug_logging {
            tracing::debug!("Search for {:?} returned {} matches", needle, matches.len());
        }

        Ok(matches)
    }

    /// Same traversal as [`search`](Self::search), kept as a separate entry
    /// point for wire compatibility with the extended-search route.
    pub async fn search_extended(&self, query: &str) -> Result<Vec<SearchMatch>, WikiSearchError> {
        self.search(query).await
    }
}
