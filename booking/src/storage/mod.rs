//! Persistence for the three independent blobs: customer roster, event catalog
//! and system data.
//!
//! Every blob is read and written whole. Nothing here locks files; a single
//! process is assumed to own the data directory.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use tracing::{info, warn};

use crate::models::event::Event;
use crate::models::user::User;
use crate::utils::error::AppError;

/// Whole-value load/save of one persisted blob.
pub trait Repository<T> {
    /// `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<T>, AppError>;

    fn save(&self, value: &T) -> Result<(), AppError>;
}

/// Catalog written on first run.
pub fn default_catalog() -> Vec<Event> {
    vec![
        Event::new("E1", "Friday Practice", "2025-11-21", 200),
        Event::new("E2", "Qualifying", "2025-11-22", 200),
        Event::new("E3", "Grand Prix Race", "2025-11-23", 200),
    ]
}

/// Missing or unreadable rosters both start empty.
pub fn load_customers(repo: &dyn Repository<Vec<User>>) -> Vec<User> {
    match repo.load() {
        Ok(Some(customers)) => {
            info!(customers = customers.len(), "Loaded customer roster");
            customers
        }
        Ok(None) => {
            info!("No customer roster found; starting empty");
            Vec::new()
        }
        Err(e) => {
            warn!(error = ?e, "Customer roster unreadable; starting empty");
            Vec::new()
        }
    }
}

/// A missing catalog is seeded with the default events and written back.
/// An unreadable one yields an empty catalog and is left on disk untouched.
pub fn load_events(repo: &dyn Repository<Vec<Event>>) -> Vec<Event> {
    match repo.load() {
        Ok(Some(events)) => {
            info!(events = events.len(), "Loaded event catalog");
            events
        }
        Ok(None) => {
            let catalog = default_catalog();
            if let Err(e) = repo.save(&catalog) {
                warn!(error = ?e, "Could not persist seeded event catalog");
            }
            info!(events = catalog.len(), "Seeded default event catalog");
            catalog
        }
        Err(e) => {
            warn!(error = ?e, "Event catalog unreadable; starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_is_seeded_and_saved() {
        let repo: MemoryStore<Vec<Event>> = MemoryStore::new();
        let events = load_events(&repo);

        let ids: Vec<&str> = events.iter().map(Event::id).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
        assert!(events.iter().all(|e| e.capacity() == 200));
        assert_eq!(repo.load().unwrap(), Some(events));
    }

    #[test]
    fn test_existing_catalog_is_not_reseeded() {
        let repo = MemoryStore::with_value(vec![Event::new("E9", "Test Day", "tbd", 5)]);
        let events = load_events(&repo);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id(), "E9");
    }

    #[test]
    fn test_missing_roster_starts_empty() {
        let repo: MemoryStore<Vec<User>> = MemoryStore::new();
        assert!(load_customers(&repo).is_empty());
        assert_eq!(repo.load().unwrap(), None);
    }
}
