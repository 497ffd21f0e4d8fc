pub mod wiki_node;

pub use wiki_node::{NodeKind, WikiNode};
