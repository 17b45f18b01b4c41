//! Line-oriented terminal front end.
//!
//! Each input line maps to one checkout operation; output is a plain-text
//! rendering of the service state plus notices.

pub mod command;
pub mod render;
pub mod session;
