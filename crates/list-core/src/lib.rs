//! Swipe List Core
//!
//! Layered like the application it serves:
//! - domain: entities, ids and errors
//! - store: the item list and its edit selection
//! - render: the read-only interface the presentation layer consumes
//! - config: seed items and text policy

pub mod config;
pub mod domain;
pub mod render;
pub mod store;

pub use config::{StoreConfig, TextPolicy};
pub use domain::{DomainError, DomainResult, IdGenerator, Item, ItemId};
pub use render::{ListRenderer, RowView, SwipeAction};
pub use store::{EditSelection, ItemStore, ListSnapshot};
