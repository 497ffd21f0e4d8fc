// Router assembly and the public service endpoints. Search routes live
// under /api/* and require a valid bearer JWT; / and /health stay open
// for probes.
pub mod wiki;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::jwt_auth_middleware;
use crate::wiki::SharedNodeStore;

pub fn app(store: SharedNodeStore) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(wiki_routes(store));

    let config = crate::config::config();
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn wiki_routes(store: SharedNodeStore) -> Router {
    Router::new()
        .route("/api/wiki/search", get(wiki::search_get))
        .route("/api/wiki/search/extended", get(wiki::search_extended_get))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
        .with_state(store)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "wiki-api-rust",
        "description": "Wiki hierarchy search API"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
