//! Item Entity
//!
//! One entry of the list: text plus a done flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque item identifier, minted only by the store's [`IdGenerator`](super::IdGenerator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Wrap a raw id, e.g. one typed back by the presentation layer
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, fixed at creation
    pub id: ItemId,
    /// Item text content
    pub text: String,
    /// Done status
    pub checked: bool,
}

impl Item {
    /// Create a new unchecked item
    pub fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            checked: false,
        }
    }
}
