use super::money::Price;
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Card, Self::Upi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Upi => "UPI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Cash => "Pay with cash",
            Self::Card => "Credit/Debit card",
            Self::Upi => "UPI/PhonePe/GPay",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            other => Err(CheckoutError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Idle,
    AwaitingSelection,
    Processing,
    Succeeded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingSelection => "awaiting selection",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed payment.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct PaymentConfirmation {
    pub method: PaymentMethod,
    pub amount: Price,
}

/// State of one checkout attempt.
///
/// `idle → awaiting_selection → processing → succeeded → idle`. Leaving
/// the flow (cancel or reset) discards the selected method.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct PaymentSession {
    status: PaymentStatus,
    selected_method: Option<PaymentMethod>,
}

impl PaymentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn selected_method(&self) -> Option<PaymentMethod> {
        self.selected_method
    }

    pub fn is_open(&self) -> bool {
        self.status != PaymentStatus::Idle
    }

    pub fn open(&mut self) -> Result<()> {
        self.expect(PaymentStatus::Idle, "open payment")?;
        self.status = PaymentStatus::AwaitingSelection;
        Ok(())
    }

    pub fn select(&mut self, method: PaymentMethod) -> Result<()> {
        self.expect(PaymentStatus::AwaitingSelection, "select a payment method")?;
        self.selected_method = Some(method);
        Ok(())
    }

    /// Moves to `processing` and returns the method to charge.
    ///
    /// Without a selection the session stays in `awaiting_selection`.
    pub fn begin_processing(&mut self) -> Result<PaymentMethod> {
        self.expect(PaymentStatus::AwaitingSelection, "confirm payment")?;
        let method = self
            .selected_method
            .ok_or(CheckoutError::NoPaymentMethodSelected)?;
        self.status = PaymentStatus::Processing;
        Ok(method)
    }

    pub fn succeed(&mut self) -> Result<()> {
        self.expect(PaymentStatus::Processing, "complete payment")?;
        self.status = PaymentStatus::Succeeded;
        Ok(())
    }

    /// Drops an in-flight payment back to method selection.
    pub fn abort(&mut self) -> Result<()> {
        self.expect(PaymentStatus::Processing, "abort payment")?;
        self.status = PaymentStatus::AwaitingSelection;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.expect(PaymentStatus::AwaitingSelection, "cancel payment")?;
        *self = Self::default();
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.expect(PaymentStatus::Succeeded, "reset payment")?;
        *self = Self::default();
        Ok(())
    }

    fn expect(&self, status: PaymentStatus, action: &'static str) -> Result<()> {
        if self.status == status {
            Ok(())
        } else {
            Err(CheckoutError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }
}
