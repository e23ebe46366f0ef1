//! Actions behind the booking window's buttons, without any rendering.
//!
//! Each handler validates the raw form input, mutates the session, persists
//! the affected blobs and returns the data plus the message to display.

pub mod account;
pub mod admin;
pub mod reservations;

pub use account::{create_account, edit_profile, login, logout, profile, LoginRole, Profile};
pub use admin::{sales_report, update_discount, SalesLine};
pub use reservations::{
    delete_reservation, list_events, list_reservations, purchase, EventSummary, PurchaseForm,
    PurchaseReceipt, ReservationSummary,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, Notice};

/// Shutdown: writes customers, events and system data.
pub fn save_all(state: &AppState) -> Result<Notice<()>, AppError> {
    state.save_all()?;
    Ok(empty_success("All data saved."))
}
