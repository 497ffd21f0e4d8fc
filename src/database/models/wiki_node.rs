use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A folder or file entry in the wiki hierarchy.
///
/// Nodes form a forest through `parent_id`; root-level nodes carry no
/// parent. Folders must have a non-empty `name` (enforced by the CRUD
/// layer, not the storage schema); files may leave `name` empty and fall
/// back to `title` for display and matching.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WikiNode {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub kind: NodeKind,
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub attachments: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "wiki_node_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

impl WikiNode {
    /// The string used for matching and display: `name` when non-empty,
    /// otherwise `title`, otherwise empty.
    pub fn effective_label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.title.as_deref().unwrap_or(""),
        }
    }

    /// Case-insensitive substring match against the effective label.
    /// Expects the needle already lowercased.
    pub fn label_matches(&self, query_lowercase: &str) -> bool {
        self.effective_label()
            .to_lowercase()
            .contains(query_lowercase)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
