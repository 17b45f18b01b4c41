//! Domain model: products, the cart and the payment session state machine.
//!
//! Everything here is synchronous and free of I/O. The `ports` module
//! declares the seams the application layer plugs infrastructure into.

pub mod cart;
pub mod money;
pub mod payment;
pub mod ports;
pub mod product;
