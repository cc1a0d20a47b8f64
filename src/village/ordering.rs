//! Placing and picking up orders at a single shop.
//!
//! These are the operations an [`OrderVisitor`] performs at each shop it
//! visits. They live on [`Village`] rather than [`Shop`](crate::shop::Shop)
//! because a shop that is out of something restocks by sending a fresh
//! `OrderVisitor` around the whole village, which needs the other shops.
//!
//! ## Restocking
//!
//! For each item the shop sells but does not have:
//! - empty recipe: the shop makes one unit itself;
//! - otherwise: the shop orders the recipe's ingredients from the village
//!   (in recipe order), then makes one unit.
//!
//! Either way exactly one unit is added. Ingredients that no shop sells are
//! simply not received; the unit is still made.
//!
//! ## Cycles
//!
//! Each nested order carries the chain of items being assembled above it. A
//! shop asked to assemble an item that is already on the chain fails with
//! [`OrderError::CircularDependency`] instead of recursing forever.

use tracing::{error, info, info_span};

use super::registry::Village;
use crate::model::ShopId;
use crate::order::{OrderError, OrderVisitor};
use crate::shop::join_items;

impl Village {
    /// Places an order for `items` at `shop`, restocking anything it sells but is out of.
    ///
    /// `making` is the chain of items being assembled further up the call
    /// stack; pass `&[]` for a customer order.
    ///
    /// Returns `true` if the shop sells at least one of the items, even if none
    /// needed restocking. Call [`Village::pickup_order`] afterwards to receive them.
    pub fn place_order(&mut self, shop: ShopId, items: &[String], making: &[String]) -> Result<bool, OrderError> {
        let this = self.shop_mut(shop)?;
        let shop_name = this.name().to_string();

        let sold_here: Vec<String> = items.iter().filter(|i| this.does_sell(i)).cloned().collect();
        if sold_here.is_empty() {
            return Ok(false);
        }
        let out_of_stock: Vec<String> = sold_here.iter().filter(|i| !this.is_in_stock(i)).cloned().collect();

        info!(shop = %shop_name, items = %join_items(&sold_here), "Received an order");

        for item in &out_of_stock {
            let ingredients = self
                .shop(shop)
                .and_then(|s| s.recipe(item))
                .map(<[String]>::to_vec)
                .unwrap_or_default();

            if ingredients.is_empty() {
                info!(shop = %shop_name, item = %item, "Out of stock, making...");
            } else {
                if making.contains(item) {
                    error!(shop = %shop_name, item = %item, chain = ?making, "Circular ingredient dependency");
                    return Err(OrderError::CircularDependency {
                        item: item.clone(),
                        chain: making.to_vec(),
                    });
                }
                info!(shop = %shop_name, item = %item, "Out of stock, ordering ingredients to make more...");

                let mut chain = making.to_vec();
                chain.push(item.clone());
                let mut restock = OrderVisitor::nested(&ingredients, chain);
                let span = info_span!("restock", item = %item);
                span.in_scope(|| self.accept(&mut restock))?;
            }

            self.shop_mut(shop)?.add_to_inventory(item);
        }

        Ok(true)
    }

    /// Picks up the items sold by `shop`, appending them to `picked_up`.
    ///
    /// Only meaningful after [`Village::place_order`] returned `true`. An item
    /// the shop sells but does not have at this point means the order was
    /// never placed; it is logged and skipped.
    pub fn pickup_order(&mut self, shop: ShopId, items: &[String], picked_up: &mut Vec<String>) -> Result<(), OrderError> {
        let this = self.shop_mut(shop)?;
        let mut handed_over = Vec::new();

        for item in items {
            if !this.does_sell(item) {
                continue;
            }
            if this.take_from_inventory(item) {
                handed_over.push(item.clone());
            } else {
                let violation = OrderError::NotInStock {
                    shop: this.name().to_string(),
                    item: item.clone(),
                };
                error!(error = %violation, "Pickup of unplaced order");
            }
        }

        if !handed_over.is_empty() {
            info!(shop = %this.name(), items = %join_items(&handed_over), "Order picked up");
            picked_up.extend(handed_over);
        }
        Ok(())
    }
}
