#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;
use wiki_api_rust::database::models::{NodeKind, WikiNode};

pub fn node(
    id: u128,
    parent: Option<u128>,
    kind: NodeKind,
    name: Option<&str>,
    title: Option<&str>,
) -> WikiNode {
    WikiNode {
        id: Uuid::from_u128(id),
        parent_id: parent.map(Uuid::from_u128),
        kind,
        name: name.map(str::to_string),
        title: title.map(str::to_string),
        content: None,
        attachments: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}

pub fn folder(id: u128, parent: Option<u128>, name: &str) -> WikiNode {
    node(id, parent, NodeKind::Folder, Some(name), None)
}

pub fn file(id: u128, parent: Option<u128>, name: Option<&str>, title: Option<&str>) -> WikiNode {
    node(id, parent, NodeKind::File, name, title)
}

pub fn soft_deleted(mut node: WikiNode) -> WikiNode {
    node.deleted_at = Some(Utc::now());
    node
}
