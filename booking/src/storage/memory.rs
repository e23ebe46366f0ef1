use std::cell::RefCell;
use std::rc::Rc;

use crate::storage::Repository;
use crate::utils::error::AppError;

/// In-process store. Clones share the same slot, so a test can keep a handle
/// while the application owns another.
#[derive(Debug)]
pub struct MemoryStore<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value))),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Clone> Repository<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>, AppError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, value: &T) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_slot() {
        let store: MemoryStore<Vec<u32>> = MemoryStore::new();
        let handle = store.clone();

        store.save(&vec![1, 2, 3]).unwrap();
        assert_eq!(handle.load().unwrap(), Some(vec![1, 2, 3]));
    }
}
