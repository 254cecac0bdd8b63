//! Domain Layer
//!
//! Item entity, id generation and errors.
//! No dependency on any presentation toolkit.

mod error;
mod id;
mod item;

pub use error::{DomainError, DomainResult};
pub use id::IdGenerator;
pub use item::{Item, ItemId};
