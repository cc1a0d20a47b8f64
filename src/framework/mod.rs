//! Visitor dispatch for the village.
//!
//! # Main Components
//!
//! - [`ShopVisitor`] - Trait implemented by anything that walks the shops of a village
//!
//! # Testing
//!
//! See [`mock`] for a visitor that only records where it has been.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
