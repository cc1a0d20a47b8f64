//! # Core Visitor Contract
//!
//! A [`Village`] owns its shops in a single `Vec`, so a visitor never gets a
//! long-lived `&mut Shop`. Instead the village hands it the village itself plus
//! the [`ShopId`] being visited. That lets a visit do anything a shop could do,
//! including placing orders that fan out across the whole village again.
//!
//! ## Dispatch
//!
//! Classic visitors need one `visit_*` method per element type. Here the
//! element type is the [`ShopKind`] tag, so there is exactly one entry point and
//! the visitor `match`es on the kind when it cares.

use crate::model::{ShopId, ShopKind};
use crate::order::OrderError;
use crate::village::Village;

/// Trait implemented by every operation that is dispatched across a village.
///
/// [`Village::accept`] calls [`ShopVisitor::visit`] once per shop, in
/// registration order. Returning an error stops the walk.
pub trait ShopVisitor {
    /// Visit one shop of `village`.
    fn visit(&mut self, village: &mut Village, shop: ShopId, kind: ShopKind) -> Result<(), OrderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts shops per kind.
    #[derive(Default)]
    struct KindCounter {
        makers: usize,
        others: usize,
    }

    impl ShopVisitor for KindCounter {
        fn visit(&mut self, _village: &mut Village, _shop: ShopId, kind: ShopKind) -> Result<(), OrderError> {
            match kind {
                ShopKind::Maker => self.makers += 1,
                _ => self.others += 1,
            }
            Ok(())
        }
    }

    #[test]
    fn visitor_sees_every_kind() {
        let mut village = Village::self_sufficiency();
        let mut counter = KindCounter::default();
        village.accept(&mut counter).unwrap();
        assert_eq!(counter.makers, 5);
        assert_eq!(counter.others, 6);
    }
}
