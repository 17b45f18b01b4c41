use crate::error::CheckoutError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A short-lived, user-facing message about the outcome of an action.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&CheckoutError> for Notice {
    fn from(error: &CheckoutError) -> Self {
        match error {
            CheckoutError::ProductNotFound(id) => Notice::error("Product not found")
                .with_description(format!("No product with barcode {id}")),
            CheckoutError::NoPaymentMethodSelected => Notice::error("Please select a payment method"),
            CheckoutError::EmptyCart => {
                Notice::error("Cart is empty").with_description("Scan a product before checkout")
            }
            CheckoutError::ControlsLocked => Notice::error("Payment in progress")
                .with_description("Finish or cancel the payment first"),
            CheckoutError::AmountOverflow => Notice::error("Amount too large")
                .with_description("Cart total would exceed the largest supported amount"),
            other => Notice::error(other.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "[ok]",
            NoticeLevel::Info => "[info]",
            NoticeLevel::Error => "[error]",
        };
        match &self.description {
            Some(description) => write!(f, "{tag} {}: {description}", self.title),
            None => write!(f, "{tag} {}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_notice() {
        let notice = Notice::from(&CheckoutError::ProductNotFound("42".to_string()));
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(
            notice.to_string(),
            "[error] Product not found: No product with barcode 42"
        );
    }

    #[test]
    fn test_missing_method_notice() {
        let notice = Notice::from(&CheckoutError::NoPaymentMethodSelected);
        assert_eq!(notice.to_string(), "[error] Please select a payment method");
    }

    #[test]
    fn test_overflow_notice() {
        let notice = Notice::from(&CheckoutError::AmountOverflow);
        assert_eq!(
            notice.to_string(),
            "[error] Amount too large: Cart total would exceed the largest supported amount"
        );
    }

    #[test]
    fn test_success_notice_display() {
        let notice = Notice::success("Added to cart", "Fresh Milk (1L)");
        assert_eq!(notice.to_string(), "[ok] Added to cart: Fresh Milk (1L)");
    }
}
