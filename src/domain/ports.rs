use super::money::Price;
use super::payment::{PaymentConfirmation, PaymentMethod};
use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Read-only product lookup.
pub trait Catalog: Send + Sync {
    fn lookup(&self, id: &str) -> Option<&Product>;
    fn products(&self) -> &[Product];
}

/// Takes payment for a checkout.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, method: PaymentMethod, amount: Price) -> Result<PaymentConfirmation>;
}

pub type CatalogBox = Box<dyn Catalog>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
