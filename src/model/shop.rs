/// Shop descriptors used to build a [`Shop`](crate::shop::Shop).
///
/// # Visitor Dispatch
/// A shop's [`ShopKind`] is the only thing a [`ShopVisitor`](crate::framework::ShopVisitor)
/// sees besides the shop handle. Every kind currently behaves the same; the tag exists so
/// a visitor can specialise per category without one `visit_*` method per shop type.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maps each item a shop sells to the ordered list of ingredients needed to make one unit.
///
/// An empty ingredient list means the shop is the origin of the item.
pub type Recipes = BTreeMap<String, Vec<String>>;

/// Category of a shop in the village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopKind {
    Restaurant,
    Butcher,
    Baker,
    VegetableGrocer,
    CondimentGrocer,
    PickleGrocer,
    Maker,
}

impl fmt::Display for ShopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShopKind::Restaurant => "restaurant",
            ShopKind::Butcher => "butcher",
            ShopKind::Baker => "baker",
            ShopKind::VegetableGrocer => "vegetable grocer",
            ShopKind::CondimentGrocer => "condiment grocer",
            ShopKind::PickleGrocer => "pickle grocer",
            ShopKind::Maker => "maker",
        };
        f.write_str(name)
    }
}

/// Handle of a shop inside its village (index into the village's shop list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub usize);

impl ShopId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shop_{}", self.0)
    }
}

/// DTO describing one shop of a village.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    pub name: String,
    pub address: String,
    pub kind: ShopKind,
    #[serde(default)]
    pub recipes: Recipes,
}

impl ShopConfig {
    /// Creates a shop description with no items; add them with [`ShopConfig::sells`].
    pub fn new(name: impl Into<String>, address: impl Into<String>, kind: ShopKind) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            kind,
            recipes: Recipes::new(),
        }
    }

    /// Adds an item and the ingredients needed to make it.
    pub fn sells(mut self, item: impl Into<String>, ingredients: &[&str]) -> Self {
        self.recipes.insert(
            item.into(),
            ingredients.iter().map(|i| i.to_string()).collect(),
        );
        self
    }
}
