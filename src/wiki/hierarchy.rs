use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::database::models::WikiNode;

use super::error::WikiSearchError;
use super::types::PathEntry;

/// Id-keyed snapshot of the live node set, used to resolve ancestor
/// chains without further store round-trips. Soft-deleted nodes are
/// dropped on construction, so they can never show up in a path.
pub struct NodeIndex {
    by_id: HashMap<Uuid, WikiNode>,
}

impl NodeIndex {
    pub fn new(nodes: Vec<WikiNode>) -> Self {
        let by_id = nodes
            .into_iter()
            .filter(|node| !node.is_deleted())
            .map(|node| (node.id, node))
            .collect();
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Walk `parent_id` links from `node` to its root.
    ///
    /// Returns entries ordered by depth: the immediate parent at depth 1,
    /// the root last. A parent id that resolves to no live node truncates
    /// the path there (deleted without cascading, or an inconsistent
    /// snapshot) and logs a warning. Revisiting any id, including the
    /// start node, means the forest invariant is broken and the walk
    /// fails instead of looping.
    pub fn ancestor_path(&self, node: &WikiNode) -> Result<Vec<PathEntry>, WikiSearchError> {
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        seen.insert(node.id);

        let mut current = node.parent_id;
        let mut depth = 0usize;

        while let Some(parent_id) = current {
            if !seen.insert(parent_id) || depth > self.len() {
                return Err(WikiSearchError::CorruptHierarchy { node_id: node.id });
            }
            depth += 1;

            match self.by_id.get(&parent_id) {
                Some(parent) => {
                    current = parent.parent_id;
                    path.push(PathEntry {
                        node: parent.clone(),
                        depth,
                    });
                }
                None => {
                    tracing::warn!(
                        "Ancestor {} of node {} is missing, truncating path at depth {}",
                        parent_id,
                        node.id,
                        depth
                    );
                    break;
                }
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::NodeKind;
    use chrono::Utc;

    fn folder(id: u128, parent: Option<u128>, name: &str) -> WikiNode {
        WikiNode {
            id: Uuid::from_u128(id),
            parent_id: parent.map(Uuid::from_u128),
            kind: NodeKind::Folder,
            name: Some(name.to_string()),
            title: None,
            content: None,
            attachments: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn walks_to_root_with_increasing_depth() {
        let root = folder(1, None, "Root");
        let mid = folder(2, Some(1), "Engineering");
        let leaf = folder(3, Some(2), "Onboarding");
        let index = NodeIndex::new(vec![root, mid, leaf.clone()]);

        let path = index.ancestor_path(&leaf).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].node.id, Uuid::from_u128(2));
        assert_eq!(path[0].depth, 1);
        assert_eq!(path[1].node.id, Uuid::from_u128(1));
        assert_eq!(path[1].depth, 2);
        assert_eq!(path[1].node.parent_id, None);
    }

    #[test]
    fn root_node_has_empty_path() {
        let root = folder(1, None, "Root");
        let index = NodeIndex::new(vec![root.clone()]);
        assert!(index.ancestor_path(&root).unwrap().is_empty());
    }

    #[test]
    fn missing_parent_truncates() {
        // Parent 9 was never loaded into the snapshot
        let orphan = folder(3, Some(9), "Orphan");
        let index = NodeIndex::new(vec![orphan.clone()]);
        assert!(index.ancestor_path(&orphan).unwrap().is_empty());
    }

    #[test]
    fn deleted_parent_truncates() {
        let mut parent = folder(2, Some(1), "Gone");
        parent.deleted_at = Some(Utc::now());
        let root = folder(1, None, "Root");
        let leaf = folder(3, Some(2), "Leaf");
        let index = NodeIndex::new(vec![root, parent, leaf.clone()]);

        // The deleted parent is invisible, so the path ends before it
        assert!(index.ancestor_path(&leaf).unwrap().is_empty());
    }

    #[test]
    fn two_node_cycle_fails() {
        let a = folder(1, Some(2), "A");
        let b = folder(2, Some(1), "B");
        let index = NodeIndex::new(vec![a.clone(), b]);

        let err = index.ancestor_path(&a).unwrap_err();
        assert!(matches!(err, WikiSearchError::CorruptHierarchy { .. }));
    }

    #[test]
    fn self_reference_fails() {
        let node = folder(1, Some(1), "Selfie");
        let index = NodeIndex::new(vec![node.clone()]);

        let err = index.ancestor_path(&node).unwrap_err();
        assert!(matches!(
            err,
            WikiSearchError::CorruptHierarchy { node_id } if node_id == Uuid::from_u128(1)
        ));
    }
}
