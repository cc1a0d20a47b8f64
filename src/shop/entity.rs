//! The [`Shop`] type.
//!
//! A shop knows nothing about other shops. It answers "do you sell this" and
//! "is it on the shelf", and keeps the inventory counts that
//! [`Village::place_order`](crate::village::Village::place_order) and
//! [`Village::pickup_order`](crate::village::Village::pickup_order) mutate.

use std::collections::BTreeMap;

use tracing::trace;

use crate::model::{Recipes, ShopConfig, ShopId, ShopKind};

/// A shop in the village.
#[derive(Debug, Clone)]
pub struct Shop {
    id: ShopId,
    name: String,
    address: String,
    kind: ShopKind,
    recipes: Recipes,
    inventory: BTreeMap<String, u32>,
    units_made: BTreeMap<String, u32>,
}

impl Shop {
    /// Creates a shop with every sold item at zero stock.
    ///
    /// The id is a placeholder until the shop is registered with
    /// [`Village::add_shop`](crate::village::Village::add_shop).
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: ShopKind, recipes: Recipes) -> Self {
        let inventory = recipes.keys().map(|item| (item.clone(), 0)).collect();
        Self {
            id: ShopId(0),
            name: name.into(),
            address: address.into(),
            kind,
            recipes,
            inventory,
            units_made: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> ShopId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ShopId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> ShopKind {
        self.kind
    }

    /// Items this shop sells, in name order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Ingredients needed to make one unit of `item`, if this shop sells it.
    pub fn recipe(&self, item: &str) -> Option<&[String]> {
        self.recipes.get(item).map(Vec::as_slice)
    }

    pub fn does_sell(&self, item: &str) -> bool {
        self.recipes.contains_key(item)
    }

    pub fn is_in_stock(&self, item: &str) -> bool {
        self.stock(item) > 0
    }

    /// Current count of `item` on the shelf; unknown items count as zero.
    pub fn stock(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    /// Total units of `item` this shop has ever made.
    pub fn units_made(&self, item: &str) -> u32 {
        self.units_made.get(item).copied().unwrap_or(0)
    }

    /// Puts one more unit of `item` on the shelf.
    pub fn add_to_inventory(&mut self, item: &str) {
        *self.inventory.entry(item.to_string()).or_insert(0) += 1;
        *self.units_made.entry(item.to_string()).or_insert(0) += 1;
        trace!(shop = %self.name, item, stock = self.stock(item), "Restocked");
    }

    /// Takes one unit of `item` off the shelf. Returns false if there was none.
    pub(crate) fn take_from_inventory(&mut self, item: &str) -> bool {
        match self.inventory.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

impl From<ShopConfig> for Shop {
    fn from(config: ShopConfig) -> Self {
        Shop::new(config.name, config.address, config.kind, config.recipes)
    }
}
