//! # Village Visitor demo
//!
//! Loads a village (the built-in "Village of Self-Sufficiency", or the JSON file
//! named by `VILLAGE_CONFIG`) and orders a hamburger from it without knowing
//! which shop sells hamburgers.

use tracing::{error, info};
use village_visitor::lifecycle::{run_exercise, setup_tracing};
use village_visitor::village::Village;

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Creating village");
    let mut village = match std::env::var("VILLAGE_CONFIG") {
        Ok(path) => Village::from_json_file(&path).map_err(|e| e.to_string())?,
        Err(_) => Village::self_sufficiency(),
    };

    info!(village = %village.name(), "Ordering a hamburger from a shop in the village");
    let order = run_exercise(&mut village, ["hamburger"]).map_err(|e| {
        error!(error = %e, "Order failed");
        e.to_string()
    })?;

    match (order.items_received().first(), order.source_shop()) {
        (Some(item), Some(shop)) => info!("We received a {item} from {shop}."),
        _ => error!("Failed to receive a hamburger"),
    }

    info!("Done.");
    Ok(())
}
