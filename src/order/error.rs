//! Error types for placing and picking up orders.

use thiserror::Error;

use crate::model::ShopId;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Making `item` requires `item` again somewhere down its ingredient chain.
    #[error("Circular ingredient dependency: {item} needed while making {}", .chain.join(" -> "))]
    CircularDependency { item: String, chain: Vec<String> },

    /// The shop handle does not belong to this village.
    #[error("Unknown shop: {0}")]
    UnknownShop(ShopId),

    /// An item sold by the shop was missing at pickup. Only reported, never returned.
    #[error("{shop}: Item {item} is not in the inventory when it should be")]
    NotInStock { shop: String, item: String },
}
