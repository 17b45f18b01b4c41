use crate::domain::money::Price;
use crate::domain::payment::{PaymentConfirmation, PaymentMethod};
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A stand-in gateway that waits for a fixed delay and always approves.
///
/// No money moves. A real deployment has to swap this for an actual
/// payment provider.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    processing_delay: Duration,
}

impl SimulatedGateway {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, method: PaymentMethod, amount: Price) -> Result<PaymentConfirmation> {
        log::debug!("Simulating {method} payment of {amount}");
        tokio::time::sleep(self.processing_delay).await;
        Ok(PaymentConfirmation { method, amount })
    }
}
