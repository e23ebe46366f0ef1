use serde::Serialize;
use tracing::info;

use crate::models::ticket::TicketKind;
use crate::services::system_manager::DiscountRules;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{success, Notice};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesLine {
    pub event_id: String,
    /// Catalog name, or the raw id when the event is no longer listed.
    pub event_name: String,
    pub tickets_sold: u64,
}

/// Ledger totals per event, ordered by event id.
pub fn sales_report(state: &AppState) -> Result<Notice<Vec<SalesLine>>, AppError> {
    let admin = state.current_admin()?;
    let mut lines: Vec<SalesLine> = admin
        .view_sales_report(&state.system)?
        .into_iter()
        .map(|(event_id, tickets_sold)| SalesLine {
            event_name: state
                .event_by_id(&event_id)
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| event_id.clone()),
            event_id,
            tickets_sold,
        })
        .collect();
    lines.sort_by(|a, b| a.event_id.cmp(&b.event_id));

    Ok(success(lines, "Sales report generated"))
}

fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let digits_and_one_dot = raw.chars().filter(|&c| c == '.').count() <= 1
        && raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !digits_and_one_dot {
        return None;
    }
    raw.parse().ok()
}

/// Sets the discount for one ticket type.
///
/// The new rule set holds only this entry; every other type goes back to no
/// discount.
pub fn update_discount(
    state: &mut AppState,
    ticket_type: &str,
    amount: &str,
) -> Result<Notice<DiscountRules>, AppError> {
    let invalid = || AppError::ValidationError("Select type and valid amount.".to_string());
    if !TicketKind::ALL_TAGS.iter().any(|tag| *tag == ticket_type) {
        return Err(invalid());
    }
    let amount = parse_amount(amount).ok_or_else(invalid)?;

    let admin = state.current_admin()?.clone();
    let rules = DiscountRules::from([(ticket_type.to_string(), amount)]);
    admin.update_discounts(&mut state.system, rules)?;
    state.save_system()?;

    info!(ticket_type = %ticket_type, amount, "Discount updated");
    Ok(success(
        state.system.discount_rules().clone(),
        format!("Discount for {} set to ${:.2}", ticket_type, amount),
    ))
}
