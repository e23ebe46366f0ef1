//! The single in-memory session the shell mutates.

use tracing::{info, warn};

use crate::config::Config;
use crate::models::event::Event;
use crate::models::user::User;
use crate::services::system_manager::{SystemData, SystemManager};
use crate::storage::{self, JsonFileStore, Repository};
use crate::utils::error::AppError;

/// Who is logged in. Customers are referenced by username into the roster;
/// the admin account is not part of the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUser {
    Customer(String),
    Admin(User),
}

pub struct AppState {
    pub config: Config,
    pub customers: Vec<User>,
    pub events: Vec<Event>,
    pub system: SystemManager,
    current_user: Option<CurrentUser>,
    customer_store: Box<dyn Repository<Vec<User>>>,
    event_store: Box<dyn Repository<Vec<Event>>>,
}

impl AppState {
    /// Loads all three blobs. Load failures are never fatal: each falls back
    /// to its empty (or seeded) default.
    pub fn open(
        config: Config,
        customer_store: Box<dyn Repository<Vec<User>>>,
        event_store: Box<dyn Repository<Vec<Event>>>,
        system_store: Box<dyn Repository<SystemData>>,
    ) -> Self {
        let customers = storage::load_customers(&*customer_store);
        let events = storage::load_events(&*event_store);

        let mut system = SystemManager::new(system_store);
        if let Err(e) = system.load_data() {
            warn!(error = ?e, "System data unreadable; starting with empty discounts and sales");
        }

        Self {
            config,
            customers,
            events,
            system,
            current_user: None,
            customer_store,
            event_store,
        }
    }

    /// Wires JSON files at the configured paths.
    pub fn open_files(config: Config) -> Self {
        let customers = JsonFileStore::new(config.customers_path());
        let events = JsonFileStore::new(config.events_path());
        let system = JsonFileStore::new(config.system_data_path());
        Self::open(config, Box::new(customers), Box::new(events), Box::new(system))
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    pub fn set_current_user(&mut self, user: Option<CurrentUser>) {
        self.current_user = user;
    }

    /// Username of the logged-in customer.
    pub fn customer_username(&self) -> Result<&str, AppError> {
        match &self.current_user {
            Some(CurrentUser::Customer(username)) => Ok(username.as_str()),
            Some(CurrentUser::Admin(_)) => Err(AppError::Forbidden(
                "This action is only available to customers".to_string(),
            )),
            None => Err(AppError::AuthError("Not logged in".to_string())),
        }
    }

    pub fn current_customer(&self) -> Result<&User, AppError> {
        let username = self.customer_username()?;
        self.customers
            .iter()
            .find(|c| c.username() == username)
            .ok_or_else(|| AppError::NotFound(format!("Customer '{}' not found", username)))
    }

    pub fn current_customer_mut(&mut self) -> Result<&mut User, AppError> {
        let username = self.customer_username()?.to_string();
        self.customers
            .iter_mut()
            .find(|c| c.username() == username)
            .ok_or_else(|| AppError::NotFound(format!("Customer '{}' not found", username)))
    }

    pub fn current_admin(&self) -> Result<&User, AppError> {
        match &self.current_user {
            Some(CurrentUser::Admin(admin)) => Ok(admin),
            Some(CurrentUser::Customer(_)) => Err(AppError::Forbidden(
                "This action is only available to administrators".to_string(),
            )),
            None => Err(AppError::AuthError("Not logged in".to_string())),
        }
    }

    pub fn event_by_id(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == event_id)
    }

    pub fn save_customers(&self) -> Result<(), AppError> {
        self.customer_store.save(&self.customers)
    }

    pub fn save_events(&self) -> Result<(), AppError> {
        self.event_store.save(&self.events)
    }

    pub fn save_system(&self) -> Result<(), AppError> {
        self.system.save_data()
    }

    /// Writes every blob; the shutdown path.
    pub fn save_all(&self) -> Result<(), AppError> {
        self.save_customers()?;
        self.save_events()?;
        self.save_system()?;
        info!(
            customers = self.customers.len(),
            events = self.events.len(),
            "All data saved"
        );
        Ok(())
    }
}
