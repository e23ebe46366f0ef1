use serde::{Deserialize, Serialize};

/// A race-weekend session tickets can be bought for.
///
/// `tickets_sold <= capacity` is only checked when a ticket is admitted, so
/// lowering the capacity afterwards can leave the remaining capacity negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    name: String,
    /// Free text, never parsed as a calendar date.
    date: String,
    capacity: u32,
    tickets_sold: u32,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            capacity,
            tickets_sold: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    pub fn tickets_sold(&self) -> u32 {
        self.tickets_sold
    }

    pub fn increment_tickets_sold(&mut self, count: u32) {
        self.tickets_sold = self.tickets_sold.saturating_add(count);
    }

    pub fn remaining_capacity(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.tickets_sold)
    }

    /// True when at least one more ticket can be admitted.
    pub fn has_capacity(&self) -> bool {
        self.remaining_capacity() > 0
    }
}
