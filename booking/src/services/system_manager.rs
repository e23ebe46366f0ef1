use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::event::Event;
use crate::models::ticket::Ticket;
use crate::storage::Repository;
use crate::utils::error::AppError;

/// Ticket-type tag -> flat amount subtracted from each ticket of that type.
pub type DiscountRules = HashMap<String, f64>;

/// Event id -> cumulative tickets sold, kept apart from `Event::tickets_sold`.
pub type SalesLog = HashMap<String, u64>;

/// The persisted form of the manager: both mappings, saved as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemData {
    #[serde(default)]
    pub discounts: DiscountRules,
    #[serde(default)]
    pub sales: SalesLog,
}

/// Owns the discount rules and the sales ledger.
pub struct SystemManager {
    discount_rules: DiscountRules,
    sales_log: SalesLog,
    store: Box<dyn Repository<SystemData>>,
}

impl SystemManager {
    /// Starts with both mappings empty; call `load_data` to restore them.
    pub fn new(store: Box<dyn Repository<SystemData>>) -> Self {
        Self {
            discount_rules: DiscountRules::new(),
            sales_log: SalesLog::new(),
            store,
        }
    }

    /// Replaces both mappings with the persisted blob.
    ///
    /// A missing blob keeps the in-memory state. A blob that cannot be read is
    /// reported and also leaves both mappings untouched.
    pub fn load_data(&mut self) -> Result<(), AppError> {
        match self.store.load()? {
            Some(data) => {
                info!(
                    discounts = data.discounts.len(),
                    events = data.sales.len(),
                    "Loaded system data"
                );
                self.discount_rules = data.discounts;
                self.sales_log = data.sales;
            }
            None => {
                debug!("No system data persisted yet; keeping current state");
            }
        }
        Ok(())
    }

    pub fn save_data(&self) -> Result<(), AppError> {
        self.store.save(&self.snapshot())?;
        debug!("Saved system data");
        Ok(())
    }

    pub fn snapshot(&self) -> SystemData {
        SystemData {
            discounts: self.discount_rules.clone(),
            sales: self.sales_log.clone(),
        }
    }

    /// Wholesale replacement; types missing from `rules` fall back to no discount.
    pub fn set_discount_rules(&mut self, rules: DiscountRules) {
        info!(rules = rules.len(), "Discount rules replaced");
        self.discount_rules = rules;
    }

    pub fn discount_rules(&self) -> &DiscountRules {
        &self.discount_rules
    }

    /// Flat per-ticket discount for the ticket's type, 0.0 when none is configured.
    pub fn calculate_discounts(&self, ticket: &Ticket) -> f64 {
        self.discount_rules
            .get(ticket.type_name())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn track_sales(&self) -> SalesLog {
        self.sales_log.clone()
    }

    pub fn log_sale(&mut self, event: &Event, count: u64) {
        let entry = self.sales_log.entry(event.id().to_string()).or_insert(0);
        *entry += count;
        debug!(event_id = %event.id(), count, total = *entry, "Sale logged");
    }
}
