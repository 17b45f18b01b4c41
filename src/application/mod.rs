//! Application layer coordinating the catalog, the cart and the payment flow.
//!
//! `CheckoutService` is the single owner of checkout state. Timed
//! transitions are exposed as awaitable operations and deadlines so that
//! the front end decides when to wait and when to give up.

pub mod checkout;
pub mod notice;
