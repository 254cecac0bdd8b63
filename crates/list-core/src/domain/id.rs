//! Item id generation.

use super::error::{DomainError, DomainResult};
use super::item::ItemId;

/// Monotonic id source owned by a single store.
///
/// Ids start at 1 and are never handed out twice, even after the item
/// holding one is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id. Fails once the id space is used up.
    pub fn next_id(&mut self) -> DomainResult<ItemId> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("item id space exhausted".to_string()))?;
        Ok(ItemId::from_raw(id))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id().unwrap(), ItemId::from_raw(1));
        assert_eq!(ids.next_id().unwrap(), ItemId::from_raw(2));
    }

    #[test]
    fn test_exhausted_generator_fails_without_reuse() {
        let mut ids = IdGenerator { next: u32::MAX - 1 };
        assert_eq!(ids.next_id().unwrap(), ItemId::from_raw(u32::MAX - 1));
        assert!(matches!(ids.next_id(), Err(DomainError::Internal(_))));
        assert!(matches!(ids.next_id(), Err(DomainError::Internal(_))));
    }
}
