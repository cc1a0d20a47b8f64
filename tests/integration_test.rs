use village_visitor::framework::mock::RecordingVisitor;
use village_visitor::lifecycle::run_exercise;
use village_visitor::model::{ShopConfig, ShopId, ShopKind, VillageConfig};
use village_visitor::village::{Village, VisitStats};

fn all_shelves_empty(village: &Village) -> bool {
    village
        .shops()
        .iter()
        .all(|shop| shop.items().all(|item| shop.stock(item) == 0))
}

/// Full end-to-end order against the seeded village.
/// The hamburger pulls in every shop of the village through nested orders.
#[test]
fn test_hamburger_from_village_of_self_sufficiency() {
    let mut village = Village::self_sufficiency();

    let order = run_exercise(&mut village, ["hamburger"]).expect("Order failed");

    assert_eq!(order.items_received(), ["hamburger"]);
    assert_eq!(order.source_shop(), Some("Joe's Burger Joint"));
    assert!(all_shelves_empty(&village), "Every unit made was picked up");

    // Every shop made exactly what the hamburger needed.
    let made = |shop: &str, item: &str| village.shop_by_name(shop).unwrap().units_made(item);
    assert_eq!(made("Joe's Burger Joint", "hamburger"), 1);
    assert_eq!(made("Amelia's Butcher Shop", "ground beef"), 1);
    assert_eq!(made("Oxel's Breads and Buns Bakery", "hamburger buns"), 1);
    assert_eq!(made("Connie's Condiments", "ketchup"), 1);
    assert_eq!(made("Connie's Condiments", "mustard"), 1);
    assert_eq!(made("Connie's Condiments", "mayonnaise"), 1);
    assert_eq!(made("Florence's Vegetables", "mustard seed"), 1);
    assert_eq!(made("Florence's Vegetables", "cucumber"), 1);
    assert_eq!(made("Larry's Pickle Emporium", "pickles"), 1);
    assert_eq!(made("Molly's Mustard Mart", "fresh mustard"), 1);
    assert_eq!(made("Jessie's Salt Works", "salt"), 1);
    // Vinegar goes into both the mustard and the pickles.
    assert_eq!(made("Vinnies' Sour Flavors", "vinegar"), 2);

    // Customer walk + hamburger, ketchup, mustard, mayonnaise, fresh mustard and pickles restocks.
    assert_eq!(
        village.stats(),
        VisitStats {
            accepts: 7,
            shop_visits: 77
        }
    );
}

/// A second hamburger goes through the whole chain again since nothing is left over.
#[test]
fn test_second_hamburger_restocks_again() {
    let mut village = Village::self_sufficiency();

    village.order(["hamburger"]).unwrap();
    let second = village.order(["hamburger"]).unwrap();

    assert_eq!(second.items_received(), ["hamburger"]);
    let joes = village.shop_by_name("Joe's Burger Joint").unwrap();
    assert_eq!(joes.units_made("hamburger"), 2);
    assert_eq!(joes.stock("hamburger"), 0);
}

/// Ordering several items at once collects them from different shops.
#[test]
fn test_order_spanning_several_shops() {
    let mut village = Village::self_sufficiency();

    let order = village.order(["salt", "lettuce", "ketchup"]).unwrap();

    // Registration order: Connie's (ketchup), Florence's (lettuce), Jessie's (salt).
    assert_eq!(order.items_received(), ["ketchup", "lettuce", "salt"]);
    assert_eq!(order.source_shop(), Some("Jessie's Salt Works"));
    assert!(all_shelves_empty(&village));
}

/// The recording mock sees the village in registration order with the right kinds.
#[test]
fn test_recording_visitor_walks_seed_village() {
    let mut village = Village::self_sufficiency();
    let mut recorder = RecordingVisitor::new();
    recorder
        .expect_visit("Joe's Burger Joint")
        .expect_visit("Amelia's Butcher Shop")
        .expect_visit("Oxel's Breads and Buns Bakery");

    village.accept(&mut recorder).unwrap();
    recorder.verify();

    let kinds: Vec<ShopKind> = recorder.visits().iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShopKind::Restaurant,
            ShopKind::Butcher,
            ShopKind::Baker,
            ShopKind::CondimentGrocer,
            ShopKind::VegetableGrocer,
            ShopKind::PickleGrocer,
            ShopKind::Maker,
            ShopKind::Maker,
            ShopKind::Maker,
            ShopKind::Maker,
            ShopKind::Maker,
        ]
    );
    assert_eq!(recorder.visits()[10].shop, ShopId(10));
}

/// A village described in JSON behaves like one built in code.
#[test]
fn test_village_from_json() {
    let json = r#"{
        "name": "Hamlet",
        "shops": [
            { "name": "Grill", "address": "1 Main St.", "kind": "restaurant",
              "recipes": { "hamburger": ["bun", "patty"] } },
            { "name": "Bakery", "address": "2 Main St.", "kind": "baker",
              "recipes": { "bun": [] } },
            { "name": "Butcher", "address": "3 Main St.", "kind": "butcher",
              "recipes": { "patty": [] } }
        ]
    }"#;

    let mut village = Village::from_json(json).expect("Valid config");
    assert_eq!(village.name(), "Hamlet");
    assert_eq!(village.len(), 3);

    let order = village.order(["hamburger"]).unwrap();
    assert_eq!(order.items_received(), ["hamburger"]);
    assert_eq!(order.source_shop(), Some("Grill"));
}

/// Serializing the seed and loading it back gives the same village.
#[test]
fn test_seed_config_json_round_trip() {
    let json = serde_json::to_string_pretty(&VillageConfig::self_sufficiency()).unwrap();
    let mut village = Village::from_json(&json).unwrap();

    assert_eq!(village.len(), 11);
    let order = village.order(["hamburger"]).unwrap();
    assert_eq!(order.source_shop(), Some("Joe's Burger Joint"));
}

/// Shops added one by one get handles in registration order.
#[test]
fn test_incremental_village() {
    let mut village = Village::new("Hamlet");
    let bakery = village
        .add_shop(ShopConfig::new("Bakery", "2 Main St.", ShopKind::Baker).sells("bread", &[]).into())
        .unwrap();
    let deli = village
        .add_shop(
            ShopConfig::new("Deli", "4 Main St.", ShopKind::Restaurant)
                .sells("sandwich", &["bread", "ham"])
                .into(),
        )
        .unwrap();

    let order = village.order(["sandwich"]).unwrap();

    // Nobody sells ham; the sandwich is made anyway.
    assert_eq!(order.items_received(), ["sandwich"]);
    assert_eq!(village.shop(deli).unwrap().units_made("sandwich"), 1);
    assert_eq!(village.shop(bakery).unwrap().units_made("bread"), 1);
}
