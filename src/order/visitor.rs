//! The [`OrderVisitor`].
//!
//! A customer (or a shop that ran out of something) creates an `OrderVisitor`
//! with a shopping list and sends it around the village with
//! [`Village::accept`](crate::village::Village::accept). Whichever shop sells
//! the items takes the order and hands them over; nobody needs to know up front
//! which shop that is.
//!
//! An order that no shop can fill is not an error: [`OrderVisitor::items_received`]
//! stays empty and [`OrderVisitor::source_shop`] stays `None`.

use tracing::debug;

use super::error::OrderError;
use crate::framework::ShopVisitor;
use crate::model::{ShopId, ShopKind};
use crate::village::Village;

/// Visitor that orders items from the shops it visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderVisitor {
    items_to_order: Vec<String>,
    items_received: Vec<String>,
    source_shop: Option<String>,
    /// Items being assembled further up the call stack, outermost first.
    making: Vec<String>,
}

impl OrderVisitor {
    /// Creates a top-level order for `items`.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items_to_order: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates an ingredient order issued while the items in `making` are being assembled.
    pub(crate) fn nested(ingredients: &[String], making: Vec<String>) -> Self {
        Self {
            items_to_order: ingredients.to_vec(),
            making,
            ..Self::default()
        }
    }

    pub fn items_to_order(&self) -> &[String] {
        &self.items_to_order
    }

    /// Items handed over so far, across every shop that filled part of the order.
    pub fn items_received(&self) -> &[String] {
        &self.items_received
    }

    /// Name of the last shop that handed over anything.
    pub fn source_shop(&self) -> Option<&str> {
        self.source_shop.as_deref()
    }

    pub fn is_fulfilled(&self) -> bool {
        !self.items_received.is_empty()
    }

    /// Places the order at `shop` and, if the shop took it, picks it up.
    fn order_from(&mut self, village: &mut Village, shop: ShopId) -> Result<(), OrderError> {
        if village.place_order(shop, &self.items_to_order, &self.making)? {
            village.pickup_order(shop, &self.items_to_order, &mut self.items_received)?;
            self.source_shop = village.shop(shop).map(|s| s.name().to_string());
        }
        Ok(())
    }
}

impl ShopVisitor for OrderVisitor {
    fn visit(&mut self, village: &mut Village, shop: ShopId, kind: ShopKind) -> Result<(), OrderError> {
        debug!(%shop, %kind, items = ?self.items_to_order, "Visiting");
        // Every kind of shop takes orders the same way. Listing them keeps a new
        // kind from silently falling into the same arm.
        match kind {
            ShopKind::Restaurant
            | ShopKind::Butcher
            | ShopKind::Baker
            | ShopKind::VegetableGrocer
            | ShopKind::CondimentGrocer
            | ShopKind::PickleGrocer
            | ShopKind::Maker => self.order_from(village, shop),
        }
    }
}
