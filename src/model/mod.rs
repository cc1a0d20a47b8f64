//! Pure data structures shared by the [`Shop`](crate::shop::Shop), [`Village`](crate::village::Village)
//! and [`OrderVisitor`](crate::order::OrderVisitor) types.

pub mod shop;
pub mod village;

pub use shop::*;
pub use village::*;
