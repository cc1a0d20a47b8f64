//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix
//! (`with_target(false)`); the shop name travels as a structured field instead.
//! Verbosity comes from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Orders** (`info`): "Received an order", "Out of stock, making...",
//!   "Out of stock, ordering ingredients to make more...", "Order picked up"
//! - **Restocks** (`info` span `restock`): nested ingredient orders, so the
//!   ingredient chain shows up as `restock:restock:...`
//! - **Visits** (`debug`): every shop an order visitor is handed
//! - **Inventory** (`trace`): every unit added to a shelf
//! - **Problems** (`warn`/`error`): duplicate sellers, circular recipes,
//!   pickups of items that were never placed
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order progress only
//! RUST_LOG=info cargo run
//!
//! # Include each shop visit
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO visitor_exercise: Ordering from village village="Village of Self-Sufficiency" items=hamburger
//! INFO visitor_exercise: Received an order shop="Joe's Burger Joint" items=hamburger
//! INFO visitor_exercise: Out of stock, ordering ingredients to make more... shop="Joe's Burger Joint" item=hamburger
//! INFO visitor_exercise:restock: Received an order shop="Amelia's Butcher Shop" items=ground beef
//! INFO visitor_exercise:restock: Out of stock, making... shop="Amelia's Butcher Shop" item=ground beef
//! INFO visitor_exercise:restock: Order picked up shop="Amelia's Butcher Shop" items=ground beef
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
