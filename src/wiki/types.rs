use serde::{Deserialize, Serialize};

use crate::database::models::WikiNode;

/// One ancestor on the way from a matched node to its root.
/// `depth` counts parent-hops from the match: 1 is the immediate parent,
/// the last entry is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEntry {
    pub node: WikiNode,
    pub depth: usize,
}

/// A matched node together with its ancestor chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    pub node: WikiNode,
    pub path: Vec<PathEntry>,
}
