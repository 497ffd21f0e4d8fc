mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;
use wiki_api_rust::auth::{generate_jwt, Claims};
use wiki_api_rust::database::models::WikiNode;
use wiki_api_rust::wiki::{InMemoryNodeStore, SharedNodeStore};

use common::{file, folder};

fn app(nodes: Vec<WikiNode>) -> axum::Router {
    let store: SharedNodeStore = Arc::new(InMemoryNodeStore::new(nodes));
    wiki_api_rust::handlers::app(store)
}

fn handbook_tree() -> Vec<WikiNode> {
    vec![
        folder(1, None, "Root"),
        folder(2, Some(1), "Engineering"),
        file(3, Some(2), Some("Onboarding Guide"), None),
    ]
}

fn bearer_token() -> String {
    let claims = Claims::new("admin".to_string(), "admin".to_string(), Uuid::from_u128(42));
    generate_jwt(claims).expect("token generation requires a configured JWT secret")
}

async fn get_json(
    app: axum::Router,
    uri: &str,
    token: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app.oneshot(builder.body(Body::empty())?).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, payload))
}

#[tokio::test]
async fn health_needs_no_token() -> Result<()> {
    let (status, payload) = get_json(app(vec![]), "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn search_requires_bearer_token() -> Result<()> {
    let (status, payload) = get_json(app(handbook_tree()), "/api/wiki/search?q=guide", None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    let (status, _) = get_json(
        app(handbook_tree()),
        "/api/wiki/search?q=guide",
        Some("not-a-jwt"),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn search_returns_matches_with_paths() -> Result<()> {
    let token = bearer_token();
    let (status, payload) = get_json(
        app(handbook_tree()),
        "/api/wiki/search?q=guide",
        Some(&token),
    )
    .await?;

    assert_eq!(status, StatusCode::OK, "unexpected payload: {}", payload);
    assert!(payload["success"].as_bool().unwrap_or(false));

    let data = payload["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["node"]["id"], Uuid::from_u128(3).to_string());

    let path = data[0]["path"].as_array().cloned().unwrap_or_default();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0]["node"]["id"], Uuid::from_u128(2).to_string());
    assert_eq!(path[0]["depth"], 1);
    assert_eq!(path[1]["node"]["id"], Uuid::from_u128(1).to_string());
    assert_eq!(path[1]["depth"], 2);
    Ok(())
}

#[tokio::test]
async fn blank_query_is_bad_request() -> Result<()> {
    let token = bearer_token();
    for uri in ["/api/wiki/search", "/api/wiki/search?q="] {
        let (status, payload) = get_json(app(handbook_tree()), uri, Some(&token)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {} payload {}", uri, payload);
        assert_eq!(payload["code"], "BAD_REQUEST");
    }
    Ok(())
}

#[tokio::test]
async fn extended_route_matches_basic_route() -> Result<()> {
    let token = bearer_token();
    // Same node set behind both routes, so the payloads compare equal
    let nodes = handbook_tree();
    let (_, basic) = get_json(
        app(nodes.clone()),
        "/api/wiki/search?q=engineering",
        Some(&token),
    )
    .await?;
    let (status, extended) = get_json(
        app(nodes),
        "/api/wiki/search/extended?q=engineering",
        Some(&token),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(basic["data"], extended["data"]);
    Ok(())
}
