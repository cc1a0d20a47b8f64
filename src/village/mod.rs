//! The village: the registry that owns every shop and is the root of every visit.
//!
//! - [`registry`] - Building a village and walking it with a [`ShopVisitor`](crate::framework::ShopVisitor)
//! - [`ordering`] - Placing and picking up orders, including restocking from other shops
//! - [`error`] - Errors raised while loading shops

pub mod error;
pub mod ordering;
pub mod registry;

pub use error::*;
pub use registry::*;
