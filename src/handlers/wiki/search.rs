use axum::extract::{Extension, Query, State};
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::wiki::{SearchMatch, SharedNodeStore, WikiSearchService};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/wiki/search?q=term - match folders and files by label and
/// return each match with its ancestor path
pub async fn search_get(
    State(store): State<SharedNodeStore>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Vec<SearchMatch>> {
    let query = params.q.unwrap_or_default();
    tracing::debug!("wiki search by {}: {:?}", user.user, query);

    let service = WikiSearchService::new(store);
    let matches = service.search(&query).await?;
    Ok(ApiResponse::success(matches))
}

/// GET /api/wiki/search/extended?q=term - kept for wire compatibility,
/// same node set and traversal as the basic search
pub async fn search_extended_get(
    State(store): State<SharedNodeStore>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Vec<SearchMatch>> {
    let query = params.q.unwrap_or_default();
    tracing::debug!("wiki extended search by {}: {:?}", user.user, query);

    let service = WikiSearchService::new(store);
    let matches = service.search_extended(&query).await?;
    Ok(ApiResponse::success(matches))
}
