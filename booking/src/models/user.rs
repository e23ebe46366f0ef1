use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::reservation::Reservation;
use crate::services::system_manager::{SalesLog, SystemManager};
use crate::utils::error::AppError;

/// Credentials and display name shared by every kind of user.
///
/// Username uniqueness is the account-creation handler's job, not this record's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    username: String,
    password: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Role {
    Customer { reservations: Vec<Reservation> },
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    account: Account,
    #[serde(flatten)]
    role: Role,
}

impl User {
    pub fn customer(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::with_role(
            username,
            password,
            name,
            Role::Customer {
                reservations: Vec::new(),
            },
        )
    }

    pub fn admin(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::with_role(username, password, name, Role::Admin)
    }

    fn with_role(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            account: Account {
                username: username.into(),
                password: password.into(),
                name: name.into(),
            },
            role,
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.account.username = username.into();
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.account.name = name.into();
    }

    /// Plain equality; there is deliberately no password getter.
    pub fn check_password(&self, password: &str) -> bool {
        self.account.password == password
    }

    /// Always empty for admins.
    pub fn reservations(&self) -> &[Reservation] {
        match &self.role {
            Role::Customer { reservations } => reservations,
            Role::Admin => &[],
        }
    }

    pub fn add_reservation(&mut self, reservation: Reservation) -> Result<(), AppError> {
        match &mut self.role {
            Role::Customer { reservations } => {
                reservations.push(reservation);
                Ok(())
            }
            Role::Admin => Err(AppError::Forbidden(
                "Administrators cannot hold reservations".to_string(),
            )),
        }
    }

    /// Removes every reservation with `reservation_id`. Returns whether anything
    /// was removed; an unknown id is a no-op.
    pub fn delete_reservation(&mut self, reservation_id: &str) -> bool {
        match &mut self.role {
            Role::Customer { reservations } => {
                let before = reservations.len();
                reservations.retain(|r| r.id() != reservation_id);
                reservations.len() != before
            }
            Role::Admin => false,
        }
    }

    pub fn view_sales_report(&self, manager: &SystemManager) -> Result<SalesLog, AppError> {
        self.require_admin()?;
        Ok(manager.track_sales())
    }

    pub fn update_discounts(
        &self,
        manager: &mut SystemManager,
        rules: HashMap<String, f64>,
    ) -> Result<(), AppError> {
        self.require_admin()?;
        manager.set_discount_rules(rules);
        Ok(())
    }

    fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Only administrators can manage sales and discounts".to_string(),
            ))
        }
    }
}
