use serde::{Deserialize, Serialize};

/// Payment methods offered by the booking form. The entity itself accepts any label.
pub const PAYMENT_METHODS: [&str; 2] = ["Credit Card", "Digital Wallet"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    amount: f64,
    method: String,
}

impl Payment {
    pub fn new(amount: f64, method: impl Into<String>) -> Self {
        Self {
            amount,
            method: method.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }
}
