use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::manager::DatabaseError;
use crate::database::models::WikiNode;

/// Persistence collaborator for the search engine.
///
/// `find_by_label` narrows to candidate nodes whose effective label
/// contains the query case-insensitively; `fetch_all` returns the full
/// non-deleted node set so ancestor chains can be resolved from an
/// in-memory index instead of one round-trip per hop. Both exclude
/// soft-deleted rows.
#[async_trait]
pub trait NodeStore: Send + Sync {
    async fn find_by_label(&self, query: &str) -> Result<Vec<WikiNode>, DatabaseError>;
    async fn fetch_all(&self) -> Result<Vec<WikiNode>, DatabaseError>;
}

/// Handlers share one store behind the router state.
pub type SharedNodeStore = Arc<dyn NodeStore>;

#[async_trait]
impl<T: NodeStore + ?Sized> NodeStore for Arc<T> {
    async fn find_by_label(&self, query: &str) -> Result<Vec<WikiNode>, DatabaseError> {
        (**self).find_by_label(query).await
    }

    async fn fetch_all(&self) -> Result<Vec<WikiNode>, DatabaseError> {
        (**self).fetch_all().await
    }
}

/// Postgres-backed node store over the `wiki_nodes` table.
pub struct PgNodeStore {
    pool: PgPool,
}

impl PgNodeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Matching happens on the effective label: name unless empty, else title.
// Ordering is fixed so an unchanged node set always returns candidates in
// the same order.
const FIND_BY_LABEL_SQL: &str = r#"
    SELECT * FROM "wiki_nodes"
    WHERE "deleted_at" IS NULL
      AND COALESCE(NULLIF("name", ''), "title", '') ILIKE $1 ESCAPE '\'
    ORDER BY "created_at", "id"
"#;

const FETCH_ALL_SQL: &str = r#"
    SELECT * FROM "wiki_nodes"
    WHERE "deleted_at" IS NULL
"#;

#[async_trait]
impl NodeStore for PgNodeStore {
    async fn find_by_label(&self, query: &str) -> Result<Vec<WikiNode>, DatabaseError> {
        let pattern = format!("%{}%", escape_like(query));
        if crate::config::config().database.enable_query_logging {
            tracing::debug!("wiki_nodes candidate lookup, pattern={}", pattern);
        }
        let nodes = sqlx::query_as::<_, WikiNode>(FIND_BY_LABEL_SQL)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(nodes)
    }

    async fn fetch_all(&self) -> Result<Vec<WikiNode>, DatabaseError> {
        let nodes = sqlx::query_as::<_, WikiNode>(FETCH_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(nodes)
    }
}

/// Escape LIKE wildcards in user-supplied search terms
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Node store over an in-memory snapshot. Backs the test suite and any
/// caller that already holds the full node set.
pub struct InMemoryNodeStore {
    nodes: Vec<WikiNode>,
}

impl InMemoryNodeStore {
    pub fn new(nodes: Vec<WikiNode>) -> Self {
        Self { nodes }
    }
}

#[async_trait]
impl NodeStore for InMemoryNodeStore {
    async fn find_by_label(&self, query: &str) -> Result<Vec<WikiNode>, DatabaseError> {
        let needle = query.to_lowercase();
        Ok(self
            .nodes
            .iter()
            .filter(|node| !node.is_deleted() && node.label_matches(&needle))
            .cloned()
            .collect())
    }

    async fn fetch_all(&self) -> Result<Vec<WikiNode>, DatabaseError> {
        Ok(self
            .nodes
            .iter()
            .filter(|node| !node.is_deleted())
            .cloned()
            .collect())
    }
}
