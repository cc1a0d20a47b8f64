use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::VillageError;
use crate::framework::ShopVisitor;
use crate::model::{ShopId, VillageConfig};
use crate::order::{OrderError, OrderVisitor};
use crate::shop::Shop;

/// Counters of how often the village has been walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitStats {
    /// Calls to [`Village::accept`], nested ones included.
    pub accepts: u64,
    /// Individual shop visits across all walks.
    pub shop_visits: u64,
}

/// A collection of shops that can be visited.
///
/// # Ownership
/// The village owns every shop outright. Shops refer back to the village only
/// through their [`ShopId`], which is the shop's index in [`Village::shops`].
/// Shops are never removed or reordered, so a handle stays valid for the life
/// of the village.
///
/// # Item uniqueness
/// No two shops may sell the same item: [`Village::add_shop`] rejects a shop
/// that would introduce a second seller. Otherwise an order for that item would
/// be filled by whichever seller happened to be visited first.
#[derive(Debug, Clone)]
pub struct Village {
    name: String,
    shops: Vec<Shop>,
    stats: VisitStats,
}

impl Village {
    /// Creates an empty village.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shops: Vec::new(),
            stats: VisitStats::default(),
        }
    }

    /// Builds a village from its description, registering shops in order.
    pub fn from_config(config: VillageConfig) -> Result<Self, VillageError> {
        let mut village = Self::new(config.name);
        for shop in config.shops {
            village.add_shop(shop.into())?;
        }
        info!(village = %village.name, shops = village.shops.len(), "Village loaded");
        Ok(village)
    }

    /// Parses a JSON [`VillageConfig`] and builds the village from it.
    pub fn from_json(json: &str) -> Result<Self, VillageError> {
        let config: VillageConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Reads a JSON [`VillageConfig`] from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VillageError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| VillageError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The built-in "Village of Self-Sufficiency".
    pub fn self_sufficiency() -> Self {
        let config = VillageConfig::self_sufficiency();
        let mut village = Self::new(config.name);
        for shop in config.shops {
            // The seed never sells an item twice.
            let id = ShopId(village.shops.len());
            let mut shop = Shop::from(shop);
            shop.set_id(id);
            village.shops.push(shop);
        }
        village
    }

    /// Registers `shop` after every existing shop and returns its handle.
    pub fn add_shop(&mut self, mut shop: Shop) -> Result<ShopId, VillageError> {
        if shop.name().trim().is_empty() {
            return Err(VillageError::EmptyShopName(shop.address().to_string()));
        }
        for item in shop.items() {
            if let Some(existing) = self.seller_of(item) {
                warn!(item, existing = %existing.name(), rejected = %shop.name(), "Duplicate seller");
                return Err(VillageError::DuplicateSeller {
                    item: item.to_string(),
                    existing: existing.name().to_string(),
                    rejected: shop.name().to_string(),
                });
            }
        }

        let id = ShopId(self.shops.len());
        shop.set_id(id);
        debug!(%id, shop = %shop.name(), kind = %shop.kind(), "Shop registered");
        self.shops.push(shop);
        Ok(id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.get(id.index())
    }

    pub(crate) fn shop_mut(&mut self, id: ShopId) -> Result<&mut Shop, OrderError> {
        self.shops.get_mut(id.index()).ok_or(OrderError::UnknownShop(id))
    }

    pub fn shop_by_name(&self, name: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.name() == name)
    }

    /// The shop that sells `item`, if any.
    pub fn seller_of(&self, item: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.does_sell(item))
    }

    pub fn stats(&self) -> VisitStats {
        self.stats
    }

    /// Sends `visitor` to every shop in registration order.
    ///
    /// Every shop is visited even after one of them has filled the order. The
    /// visitor may call back into the village (an ingredient order does), so
    /// this can recurse. The first error stops the walk and is returned.
    pub fn accept<V: ShopVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<(), OrderError> {
        self.stats.accepts += 1;
        for index in 0..self.shops.len() {
            let id = ShopId(index);
            let kind = self.shops[index].kind();
            self.stats.shop_visits += 1;
            visitor.visit(self, id, kind)?;
        }
        Ok(())
    }

    /// Orders `items` from whichever shops sell them.
    pub fn order<I, S>(&mut self, items: I) -> Result<OrderVisitor, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = OrderVisitor::new(items);
        self.accept(&mut order)?;
        Ok(order)
    }
}
