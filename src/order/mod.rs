//! Ordering items from whichever shop in the village sells them.

pub mod error;
pub mod visitor;

pub use error::*;
pub use visitor::*;
