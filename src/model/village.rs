use serde::{Deserialize, Serialize};

use super::shop::{ShopConfig, ShopKind};

/// DTO describing a whole village: its name and shops in registration order.
///
/// This is the only configuration the system has. [`VillageConfig::self_sufficiency`]
/// returns the built-in seed; other layouts can be read from JSON with
/// [`Village::from_json`](crate::village::Village::from_json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageConfig {
    pub name: String,
    #[serde(default)]
    pub shops: Vec<ShopConfig>,
}

impl VillageConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shops: Vec::new(),
        }
    }

    pub fn with_shop(mut self, shop: ShopConfig) -> Self {
        self.shops.push(shop);
        self
    }

    /// The "Village of Self-Sufficiency": everything needed for a hamburger.
    pub fn self_sufficiency() -> Self {
        Self::new("Village of Self-Sufficiency")
            .with_shop(
                ShopConfig::new("Joe's Burger Joint", "47 Millings Rd.", ShopKind::Restaurant).sells(
                    "hamburger",
                    &[
                        "ground beef",
                        "hamburger buns",
                        "ketchup",
                        "mustard",
                        "mayonnaise",
                        "lettuce",
                        "tomato",
                        "onion",
                        "pickles",
                    ],
                ),
            )
            .with_shop(
                ShopConfig::new("Amelia's Butcher Shop", "12 Klaxon Ave.", ShopKind::Butcher)
                    .sells("ground beef", &[]),
            )
            .with_shop(
                ShopConfig::new("Oxel's Breads and Buns Bakery", "131 Worthington Dr.", ShopKind::Baker)
                    .sells("hamburger buns", &[]),
            )
            .with_shop(
                ShopConfig::new("Connie's Condiments", "83 Millings Rd.", ShopKind::CondimentGrocer)
                    .sells("ketchup", &["fresh ketchup"])
                    .sells("mustard", &["fresh mustard"])
                    .sells("mayonnaise", &["fresh mayonnaise"]),
            )
            .with_shop(
                ShopConfig::new("Florence's Vegetables", "32 Main St.", ShopKind::VegetableGrocer)
                    .sells("lettuce", &[])
                    .sells("tomato", &[])
                    .sells("onion", &[])
                    .sells("cucumber", &[])
                    .sells("mustard seed", &[]),
            )
            .with_shop(
                ShopConfig::new("Larry's Pickle Emporium", "34 Main St.", ShopKind::PickleGrocer)
                    .sells("pickles", &["vinegar", "cucumber", "salt"]),
            )
            .with_shop(
                ShopConfig::new("Klyde and Sons Ketchup Makers", "800 Overtown Rd.", ShopKind::Maker)
                    .sells("fresh ketchup", &[]),
            )
            .with_shop(
                ShopConfig::new("Molly's Mustard Mart", "810 Overtown Rd.", ShopKind::Maker)
                    .sells("fresh mustard", &["vinegar", "mustard seed"]),
            )
            .with_shop(
                ShopConfig::new("Turk's Mayo Supply", "820 Overtown Rd.", ShopKind::Maker)
                    .sells("fresh mayonnaise", &[]),
            )
            .with_shop(
                ShopConfig::new("Vinnies' Sour Flavors", "830 Overtown Rd.", ShopKind::Maker)
                    .sells("vinegar", &[]),
            )
            .with_shop(
                ShopConfig::new("Jessie's Salt Works", "920 Overtown Rd.", ShopKind::Maker)
                    .sells("salt", &[]),
            )
    }
}
