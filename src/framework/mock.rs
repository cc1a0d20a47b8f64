//! # Mock Visitor
//!
//! Utilities for testing village walks in isolation.
//!
//! [`RecordingVisitor`] visits shops without placing orders or touching any
//! inventory. It writes down every shop it was handed, so tests can assert
//! visit order, visit count and which kinds were seen.
//!
//! # Example
//! ```
//! use village_visitor::framework::mock::RecordingVisitor;
//! use village_visitor::village::Village;
//!
//! let mut village = Village::self_sufficiency();
//! let mut recorder = RecordingVisitor::new();
//! village.accept(&mut recorder).unwrap();
//!
//! assert_eq!(recorder.visits().len(), village.len());
//! assert_eq!(recorder.shop_names()[0], "Joe's Burger Joint");
//! ```
//!
//! Use [`RecordingVisitor::expect_visit`] to queue expectations and
//! [`RecordingVisitor::verify`] to check them once the walk is done.

use std::collections::VecDeque;

use super::core::ShopVisitor;
use crate::model::{ShopId, ShopKind};
use crate::order::OrderError;
use crate::village::Village;

/// One recorded visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub shop: ShopId,
    pub kind: ShopKind,
    pub name: String,
}

/// A visitor that records where it has been.
#[derive(Debug, Default)]
pub struct RecordingVisitor {
    visits: Vec<Visit>,
    expectations: VecDeque<String>,
    fail_at: Option<String>,
}

impl RecordingVisitor {
    /// Creates a recorder with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next visit (in order) to be the shop named `name`.
    pub fn expect_visit(&mut self, name: impl Into<String>) -> &mut Self {
        self.expectations.push_back(name.into());
        self
    }

    /// Makes the visit to shop `name` fail, which stops the walk.
    pub fn fail_at(&mut self, name: impl Into<String>) -> &mut Self {
        self.fail_at = Some(name.into());
        self
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn shop_names(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.name.as_str()).collect()
    }

    /// Panics if any expected visit did not happen.
    pub fn verify(&self) {
        if !self.expectations.is_empty() {
            panic!(
                "Not all expected visits happened. Remaining: {:?}",
                self.expectations
            );
        }
    }
}

impl ShopVisitor for RecordingVisitor {
    fn visit(&mut self, village: &mut Village, shop: ShopId, kind: ShopKind) -> Result<(), OrderError> {
        let name = village
            .shop(shop)
            .map(|s| s.name().to_string())
            .ok_or(OrderError::UnknownShop(shop))?;

        if let Some(expected) = self.expectations.pop_front() {
            assert_eq!(expected, name, "Unexpected visit order");
        }

        self.visits.push(Visit {
            shop,
            kind,
            name: name.clone(),
        });

        if self.fail_at.as_deref() == Some(name.as_str()) {
            return Err(OrderError::UnknownShop(shop));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShopConfig, VillageConfig};

    fn three_shops() -> Village {
        let config = VillageConfig::new("Hamlet")
            .with_shop(ShopConfig::new("Baker", "1 Rd.", ShopKind::Baker).sells("bun", &[]))
            .with_shop(ShopConfig::new("Butcher", "2 Rd.", ShopKind::Butcher).sells("patty", &[]))
            .with_shop(
                ShopConfig::new("Grill", "3 Rd.", ShopKind::Restaurant).sells("hamburger", &["bun", "patty"]),
            );
        Village::from_config(config).unwrap()
    }

    #[test]
    fn records_every_shop_in_registration_order() {
        let mut village = three_shops();
        let mut recorder = RecordingVisitor::new();
        recorder.expect_visit("Baker").expect_visit("Butcher").expect_visit("Grill");

        village.accept(&mut recorder).unwrap();

        recorder.verify();
        assert_eq!(
            recorder.visits(),
            &[
                Visit { shop: ShopId(0), kind: ShopKind::Baker, name: "Baker".into() },
                Visit { shop: ShopId(1), kind: ShopKind::Butcher, name: "Butcher".into() },
                Visit { shop: ShopId(2), kind: ShopKind::Restaurant, name: "Grill".into() },
            ]
        );
    }

    #[test]
    fn recording_leaves_inventory_alone() {
        let mut village = three_shops();
        village.accept(&mut RecordingVisitor::new()).unwrap();
        assert!(village.shops().iter().all(|s| s.items().all(|i| s.stock(i) == 0)));
    }

    #[test]
    fn failure_stops_the_walk() {
        let mut village = three_shops();
        let mut recorder = RecordingVisitor::new();
        recorder.fail_at("Butcher");

        assert!(village.accept(&mut recorder).is_err());
        assert_eq!(recorder.shop_names(), vec!["Baker", "Butcher"]);
    }

    #[test]
    fn empty_village_is_a_no_op() {
        let mut village = Village::new("Ghost Town");
        let mut recorder = RecordingVisitor::new();
        village.accept(&mut recorder).unwrap();
        assert!(recorder.visits().is_empty());
    }

    #[test]
    #[should_panic(expected = "Not all expected visits happened")]
    fn verify_panics_on_missing_visit() {
        let mut village = Village::new("Ghost Town");
        let mut recorder = RecordingVisitor::new();
        recorder.expect_visit("Baker");
        village.accept(&mut recorder).unwrap();
        recorder.verify();
    }
}
