pub mod search;

pub use search::{search_extended_get, search_get};
