use super::notice::Notice;
use crate::config::CheckoutConfig;
use crate::domain::cart::{AddOutcome, Cart, CartLine};
use crate::domain::money::Price;
use crate::domain::payment::{PaymentConfirmation, PaymentMethod, PaymentSession, PaymentStatus};
use crate::domain::ports::{Catalog, CatalogBox, PaymentGatewayBox};
use crate::error::{CheckoutError, Result};
use crate::infrastructure::in_memory::InMemoryCatalog;
use crate::infrastructure::simulated::SimulatedGateway;
use serde::Serialize;
use tokio::time::Instant;

/// The checkout counter: cart bookkeeping plus the payment flow.
///
/// `CheckoutService` owns all UI-relevant state. Front ends call its
/// operations and render [`CheckoutService::snapshot`]; they never keep
/// state of their own.
///
/// While a payment step is open every cart and checkout control returns
/// [`CheckoutError::ControlsLocked`], so the amount being paid cannot
/// change underneath the gateway.
pub struct CheckoutService {
    catalog: CatalogBox,
    gateway: PaymentGatewayBox,
    config: CheckoutConfig,
    cart: Cart,
    payment: PaymentSession,
    reset_at: Option<Instant>,
    last_payment: Option<PaymentConfirmation>,
}

/// Serializable view of everything a front end needs to draw.
#[derive(Debug, Serialize)]
pub struct CheckoutSnapshot<'a> {
    pub lines: &'a [CartLine],
    pub item_count: u64,
    pub subtotal: Price,
    pub tax: Price,
    pub total: Price,
    pub payment: &'a PaymentSession,
}

impl CheckoutService {
    /// Creates a new `CheckoutService` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Where scanned ids are resolved.
    /// * `gateway` - Takes payment once a method is confirmed.
    /// * `config` - Payment flow timing.
    pub fn new(catalog: CatalogBox, gateway: PaymentGatewayBox, config: CheckoutConfig) -> Self {
        Self {
            catalog,
            gateway,
            config,
            cart: Cart::new(),
            payment: PaymentSession::new(),
            reset_at: None,
            last_payment: None,
        }
    }

    /// Built-in catalog and a simulated gateway.
    pub fn with_config(config: CheckoutConfig) -> Self {
        Self::new(
            Box::new(InMemoryCatalog::builtin()),
            Box::new(SimulatedGateway::new(config.processing_delay)),
            config,
        )
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn payment(&self) -> &PaymentSession {
        &self.payment
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// The most recent successful payment, kept until the next one.
    pub fn last_payment(&self) -> Option<&PaymentConfirmation> {
        self.last_payment.as_ref()
    }

    /// Handles free-form input from the barcode field.
    ///
    /// Blank input is ignored and yields no notice.
    pub fn scan(&mut self, input: &str) -> Result<Option<Notice>> {
        let id = input.trim();
        if id.is_empty() {
            return Ok(None);
        }
        self.add_item(id).map(Some)
    }

    pub fn add_item(&mut self, id: &str) -> Result<Notice> {
        self.ensure_unlocked()?;
        let product = self
            .catalog
            .lookup(id)
            .ok_or_else(|| CheckoutError::ProductNotFound(id.to_string()))?;

        let notice = match self.cart.add(product)? {
            AddOutcome::Added => Notice::success("Added to cart", product.name.clone()),
            AddOutcome::QuantityUpdated(quantity) => {
                Notice::success("Quantity updated", format!("{} x{quantity}", product.name))
            }
        };
        log::debug!("Added {id} to cart, total now {}", self.cart.total());
        Ok(notice)
    }

    /// Drops the line for `id`. Returns `None` when there was nothing to remove.
    pub fn remove_item(&mut self, id: &str) -> Result<Option<Notice>> {
        self.ensure_unlocked()?;
        let removed = self.cart.remove(id);
        if removed.is_some() {
            log::debug!("Removed {id} from cart");
        }
        Ok(removed.map(|line| Notice::info("Removed from cart", line.product.name)))
    }

    /// Shifts a line's quantity by `delta`, never below zero.
    ///
    /// Returns the new quantity (zero when the line was dropped), or `None`
    /// if `id` is not in the cart.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<Option<u32>> {
        self.ensure_unlocked()?;
        let quantity = self.cart.adjust(id, delta)?;
        log::debug!("Adjusted {id} by {delta}: {quantity:?}");
        Ok(quantity)
    }

    pub fn total(&self) -> Price {
        self.cart.total()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Empties the cart. Normally reached only through [`Self::finish_payment`].
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Opens the payment step and returns the amount due.
    pub fn open_payment(&mut self) -> Result<Price> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.payment.open()?;
        let amount = self.cart.total();
        log::info!("Payment step opened for {amount}");
        Ok(amount)
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.payment.select(method)?;
        log::debug!("Payment method selected: {method}");
        Ok(())
    }

    /// Dismisses the payment step. Only allowed before confirmation.
    pub fn cancel_payment(&mut self) -> Result<()> {
        self.payment.cancel()?;
        log::info!("Payment step cancelled");
        Ok(())
    }

    /// Charges the current total with the selected method.
    ///
    /// On success the session moves to `succeeded` and a reset deadline is
    /// armed; call [`Self::finish_payment`] once it passes. If this future is
    /// dropped mid-flight the session stays in `processing` until
    /// [`Self::abort_payment`] is called.
    pub async fn confirm_payment(&mut self) -> Result<PaymentConfirmation> {
        let method = self.payment.begin_processing()?;
        let amount = self.cart.total();
        log::info!("Processing {method} payment of {amount}");

        let confirmation = match self.gateway.charge(method, amount).await {
            Ok(confirmation) => confirmation,
            Err(e) => {
                log::warn!("Payment gateway failed: {e}");
                self.payment.abort()?;
                return Err(e);
            }
        };

        self.payment.succeed()?;
        self.reset_at = Some(Instant::now() + self.config.success_display_delay);
        self.last_payment = Some(confirmation);
        log::info!("Payment of {} via {} succeeded", confirmation.amount, confirmation.method);
        Ok(confirmation)
    }

    /// Returns an interrupted payment to method selection. The cart is untouched.
    pub fn abort_payment(&mut self) -> Result<()> {
        self.payment.abort()?;
        log::info!("Payment aborted");
        Ok(())
    }

    /// When the success confirmation should be taken down, if one is showing.
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Completes a successful payment: clears the cart and returns to idle.
    pub fn finish_payment(&mut self) -> Result<PaymentConfirmation> {
        if self.payment.status() != PaymentStatus::Succeeded {
            return Err(CheckoutError::InvalidTransition {
                from: self.payment.status(),
                action: "finish payment",
            });
        }
        let confirmation = self.last_payment.ok_or(CheckoutError::InvalidTransition {
            from: PaymentStatus::Succeeded,
            action: "finish payment",
        })?;

        self.payment.reset()?;
        self.clear();
        self.reset_at = None;
        log::info!("Checkout complete, cart cleared");
        Ok(confirmation)
    }

    /// Waits out a pending success display, then finishes the payment.
    pub async fn settle(&mut self) -> Result<Option<PaymentConfirmation>> {
        match self.reset_at {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.finish_payment().map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn snapshot(&self) -> CheckoutSnapshot<'_> {
        CheckoutSnapshot {
            lines: self.cart.lines(),
            item_count: self.cart.item_count(),
            subtotal: self.cart.subtotal(),
            tax: self.cart.tax(),
            total: self.cart.total(),
            payment: &self.payment,
        }
    }

    fn ensure_unlocked(&self) -> Result<()> {
        if self.payment.is_open() {
            Err(CheckoutError::ControlsLocked)
        } else {
            Ok(())
        }
    }
}
