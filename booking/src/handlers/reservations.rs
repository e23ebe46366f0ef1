use serde::Serialize;
use tracing::info;

use crate::models::event::Event;
use crate::models::payment::{Payment, PAYMENT_METHODS};
use crate::models::reservation::Reservation;
use crate::models::ticket::{Ticket, TicketKind};
use crate::models::user::Role;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success, Notice};

/// Raw values from the booking form, exactly as typed or selected.
#[derive(Debug, Clone, Default)]
pub struct PurchaseForm {
    pub event_name: String,
    pub ticket_type: String,
    pub quantity: String,
    pub payment_method: String,
}

#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub date: String,
    pub capacity: u32,
    pub tickets_sold: u32,
    pub remaining: i64,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            name: event.name().to_string(),
            date: event.date().to_string(),
            capacity: event.capacity(),
            tickets_sold: event.tickets_sold(),
            remaining: event.remaining_capacity(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationSummary {
    pub id: String,
    pub event_name: String,
    pub tickets: usize,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct PurchaseReceipt {
    pub reservation_id: String,
    pub quantity: u32,
    pub amount_paid: f64,
}

pub fn list_events(state: &AppState) -> Notice<Vec<EventSummary>> {
    let events = state.events.iter().map(EventSummary::from).collect();
    success(events, "Events loaded")
}

pub fn list_reservations(state: &AppState) -> Result<Notice<Vec<ReservationSummary>>, AppError> {
    let customer = state.current_customer()?;
    let summaries = customer
        .reservations()
        .iter()
        .map(|r| ReservationSummary {
            id: r.id().to_string(),
            event_name: state
                .event_by_id(r.event_id())
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| r.event_id().to_string()),
            tickets: r.tickets().len(),
            total_price: r.total_price(),
        })
        .collect();
    Ok(success(summaries, "Reservations loaded"))
}

fn parse_form(form: &PurchaseForm) -> Result<(u32, &str), AppError> {
    let invalid = || AppError::ValidationError("Fill all fields correctly.".to_string());

    let quantity = form.quantity.trim();
    if form.event_name.is_empty()
        || form.ticket_type.is_empty()
        || !PAYMENT_METHODS.iter().any(|m| *m == form.payment_method)
        || quantity.is_empty()
        || !quantity.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let quantity: u32 = quantity.parse().map_err(|_| invalid())?;
    if quantity == 0 {
        return Err(invalid());
    }
    Ok((quantity, form.ticket_type.as_str()))
}

/// `"{username}_{n}"`, where n starts at the reservation count plus one and
/// skips ids still held after earlier deletions.
fn next_reservation_id(username: &str, existing: &[Reservation]) -> String {
    let mut n = existing.len() + 1;
    loop {
        let candidate = format!("{}_{}", username, n);
        if existing.iter().all(|r| r.id() != candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Books `quantity` tickets of one type for the logged-in customer.
///
/// Each ticket is stored at its list price; the payment records the total after
/// per-ticket discounts. Both sale counters move once per ticket. When the
/// event cannot admit the whole quantity, or the roster entry is not a
/// customer, nothing is booked.
pub fn purchase(
    state: &mut AppState,
    form: &PurchaseForm,
) -> Result<Notice<PurchaseReceipt>, AppError> {
    let (quantity, ticket_type) = parse_form(form)?;
    let kind = TicketKind::from_tag(ticket_type, quantity)
        .ok_or_else(|| AppError::ValidationError("Fill all fields correctly.".to_string()))?;

    let username = state.customer_username()?.to_string();
    let event_idx = state
        .events
        .iter()
        .position(|e| e.name() == form.event_name)
        .ok_or_else(|| AppError::ValidationError("Invalid event selected.".to_string()))?;

    let AppState {
        customers,
        events,
        system,
        ..
    } = state;
    let customer = customers
        .iter_mut()
        .find(|c| c.username() == username)
        .ok_or_else(|| AppError::NotFound(format!("Customer '{}' not found", username)))?;
    if !matches!(customer.role(), Role::Customer { .. }) {
        return Err(AppError::Forbidden(
            "Only customers can hold reservations".to_string(),
        ));
    }
    let event = &mut events[event_idx];

    if event.remaining_capacity() < i64::from(quantity) {
        return Err(AppError::CapacityExceeded {
            event_id: event.id().to_string(),
        });
    }

    let reservation_id = next_reservation_id(&username, customer.reservations());
    let mut reservation = Reservation::new(
        reservation_id.clone(),
        event,
        Payment::new(0.0, form.payment_method.as_str()),
    );

    let mut total = 0.0;
    for i in 1..=quantity {
        let ticket = Ticket::new(format!("{}_{}", reservation_id, i), kind.list_price(), kind);
        let discount = system.calculate_discounts(&ticket);
        total += ticket.price() - discount;
        reservation.add_ticket(event, ticket)?;
        system.log_sale(event, 1);
    }
    reservation.payment_mut().set_amount(total);
    customer.add_reservation(reservation)?;

    info!(
        reservation_id = %reservation_id,
        event_id = %event.id(),
        quantity,
        total,
        "Reservation purchased"
    );

    state.save_customers()?;
    state.save_events()?;
    state.save_system()?;

    let receipt = PurchaseReceipt {
        reservation_id,
        quantity,
        amount_paid: total,
    };
    let message = format!("Purchased {} ticket(s). Total: ${:.2}", quantity, total);
    Ok(success(receipt, message))
}

/// Drops a reservation from the customer's list. Sold counters are left as they are.
pub fn delete_reservation(
    state: &mut AppState,
    reservation_id: &str,
) -> Result<Notice<()>, AppError> {
    let customer = state.current_customer_mut()?;
    if !customer.delete_reservation(reservation_id) {
        return Err(AppError::NotFound(format!(
            "Reservation '{}' not found",
            reservation_id
        )));
    }
    state.save_customers()?;

    info!(reservation_id = %reservation_id, "Reservation deleted");
    Ok(empty_success("Reservation deleted."))
}
