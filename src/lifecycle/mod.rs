//! Runtime helpers for the demo binary: logging setup and the exercise flow.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`run_exercise`] - Orders items from a village the way a customer would

pub mod exercise;
pub mod tracing;

pub use exercise::*;
pub use self::tracing::*;
