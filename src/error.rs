use crate::domain::payment::PaymentStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Product not found: no product with barcode {0}")]
    ProductNotFound(String),
    #[error("Please select a payment method")]
    NoPaymentMethodSelected,
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Controls are locked while the payment step is open")]
    ControlsLocked,
    #[error("Cannot {action} while payment is {from}")]
    InvalidTransition {
        from: PaymentStatus,
        action: &'static str,
    },
    #[error("Cart total would exceed the largest supported amount")]
    AmountOverflow,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
