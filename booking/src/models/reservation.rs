use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::payment::Payment;
use crate::models::ticket::Ticket;
use crate::utils::error::AppError;

/// One purchase: a single event, one payment, and the tickets bought.
///
/// The event is referenced by id; the catalog owns the `Event` itself and is
/// passed in whenever its sold counter has to move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: String,
    event_id: String,
    tickets: Vec<Ticket>,
    payment: Payment,
}

impl Reservation {
    pub fn new(id: impl Into<String>, event: &Event, payment: Payment) -> Self {
        Self {
            id: id.into(),
            event_id: event.id().to_string(),
            tickets: Vec::new(),
            payment,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    pub fn payment_mut(&mut self) -> &mut Payment {
        &mut self.payment
    }

    /// Admits one ticket: appends it and bumps the event's sold counter.
    ///
    /// Fails without touching either side when the event has no remaining
    /// capacity or is not the event this reservation was made for.
    pub fn add_ticket(&mut self, event: &mut Event, ticket: Ticket) -> Result<(), AppError> {
        if event.id() != self.event_id {
            return Err(AppError::ValidationError(format!(
                "Reservation '{}' is for event '{}', not '{}'",
                self.id,
                self.event_id,
                event.id()
            )));
        }
        if !event.has_capacity() {
            return Err(AppError::CapacityExceeded {
                event_id: event.id().to_string(),
            });
        }

        self.tickets.push(ticket);
        event.increment_tickets_sold(1);
        Ok(())
    }

    /// Sum of the stored ticket prices. Discounts are not re-applied here.
    pub fn total_price(&self) -> f64 {
        self.tickets.iter().map(Ticket::price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Event, Reservation) {
        let event = Event::new("E3", "Race 3", "2025-08-20", 2);
        let reservation = Reservation::new("R2", &event, Payment::new(0.0, "card"));
        (event, reservation)
    }

    #[test]
    fn test_add_ticket_and_total_price() {
        let (mut event, mut res) = setup();

        res.add_ticket(&mut event, Ticket::single_race_pass("S2", 120.0))
            .unwrap();
        res.add_ticket(&mut event, Ticket::single_race_pass("S3", 130.0))
            .unwrap();

        assert_eq!(res.total_price(), 250.0);
        assert_eq!(event.tickets_sold(), 2);
        assert_eq!(event.remaining_capacity(), 0);

        let err = res
            .add_ticket(&mut event, Ticket::single_race_pass("S4", 140.0))
            .unwrap_err();
        assert!(matches!(err, AppError::CapacityExceeded { ref event_id } if event_id == "E3"));
        assert_eq!(res.tickets().len(), 2);
        assert_eq!(event.tickets_sold(), 2);
    }

    #[test]
    fn test_add_ticket_rejects_other_event() {
        let (mut event, mut res) = setup();
        let mut other = Event::new("E9", "Other", "tbd", 10);

        let err = res
            .add_ticket(&mut other, Ticket::weekend_package("W1", 180.0))
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(res.tickets().is_empty());
        assert_eq!(other.tickets_sold(), 0);
        assert_eq!(event.tickets_sold(), 0);

        res.add_ticket(&mut event, Ticket::weekend_package("W1", 180.0))
            .unwrap();
        assert_eq!(res.event_id(), "E3");
    }

    #[test]
    fn test_negative_remaining_capacity_admits_nothing() {
        let (mut event, mut res) = setup();
        event.increment_tickets_sold(2);
        event.set_capacity(1);

        assert!(res
            .add_ticket(&mut event, Ticket::single_race_pass("S1", 100.0))
            .is_err());
        assert_eq!(event.tickets_sold(), 2);
    }

    #[test]
    fn test_payment_is_mutable_in_place() {
        let (_, mut res) = setup();
        res.payment_mut().set_amount(42.5);
        assert_eq!(res.payment().amount(), 42.5);
        assert_eq!(res.payment().method(), "card");
        assert_eq!(res.total_price(), 0.0);
    }
}
