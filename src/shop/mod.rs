//! Shop state: what a shop sells, how to make it, and what it has on the shelf.
//!
//! Ordering across shops lives on [`Village`](crate::village::Village) because it
//! needs mutable access to every other shop while one shop is restocking.

pub mod entity;

pub use entity::*;

/// Formats a list of items for progress logs ("a, b, c").
pub(crate) fn join_items(items: &[String]) -> String {
    items.join(", ")
}
