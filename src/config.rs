use std::time::Duration;

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;
pub const DEFAULT_SUCCESS_DELAY_MS: u64 = 3000;

/// Timing of the simulated payment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// How long the simulated gateway spends "processing".
    pub processing_delay: Duration,
    /// How long the success confirmation stays up before the cart resets.
    pub success_display_delay: Duration,
}

impl CheckoutConfig {
    pub fn from_millis(processing_ms: u64, success_ms: u64) -> Self {
        Self {
            processing_delay: Duration::from_millis(processing_ms),
            success_display_delay: Duration::from_millis(success_ms),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::from_millis(DEFAULT_PROCESSING_DELAY_MS, DEFAULT_SUCCESS_DELAY_MS)
    }
}
