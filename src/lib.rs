#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Village Visitor
//!
//! > **The Visitor pattern, applied to a village of shops that order from each other.**
//!
//! A customer wants a hamburger but does not know which shop sells one. They
//! send an [`OrderVisitor`](order::OrderVisitor) around the village; the burger
//! joint takes the order, finds it is out of hamburgers, and sends visitors of
//! its own around the village for ground beef, buns, condiments and pickles.
//! Those shops may in turn order fresh ketchup, vinegar or salt, and so on down
//! the ingredient chain, until the customer gets their hamburger.
//!
//! ## 🏗️ Design
//!
//! ### 1. Arena + handles instead of back-pointers
//! The [`Village`](village::Village) owns every [`Shop`](shop::Shop) in one
//! `Vec`. Shops are addressed by [`ShopId`](model::ShopId), and every operation
//! that needs more than one shop (placing an order that restocks from others)
//! lives on the village. No shop ever holds a reference to another.
//!
//! ### 2. One visit method, dispatched on a tag
//! Instead of one `visit_*` method per shop type, shops carry a
//! [`ShopKind`](model::ShopKind) and visitors implement a single
//! [`ShopVisitor::visit`](framework::ShopVisitor::visit) that `match`es on it.
//!
//! ### 3. Type-Safe Error Handling
//! Loading errors ([`VillageError`](village::VillageError)) and ordering errors
//! ([`OrderError`](order::OrderError)) are separate `thiserror` enums. Two
//! shops selling the same item are rejected at load time. A recipe that needs
//! itself, directly or through other shops, fails fast with
//! [`OrderError::CircularDependency`](order::OrderError::CircularDependency).
//!
//! ### 4. Observability
//! Every order step is logged with `tracing`; nested restocks run inside
//! `restock` spans so the ingredient chain is visible in the output. See
//! [`lifecycle::tracing`] for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: Plain data ([`ShopKind`](model::ShopKind), [`ShopId`](model::ShopId), config DTOs and the seed village).
//! - [`shop`]: A single shop's recipes and inventory.
//! - [`village`]: The registry of shops, visitor walks, and order placement/pickup.
//! - [`framework`]: The [`ShopVisitor`](framework::ShopVisitor) contract and a recording mock.
//! - [`order`]: The [`OrderVisitor`](order::OrderVisitor) and its errors.
//! - [`lifecycle`]: Tracing setup and the customer-side exercise.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use village_visitor::village::Village;
//!
//! let mut village = Village::self_sufficiency();
//! let order = village.order(["hamburger"]).unwrap();
//!
//! assert_eq!(order.items_received(), ["hamburger"]);
//! assert_eq!(order.source_shop(), Some("Joe's Burger Joint"));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # With a custom village
//! VILLAGE_CONFIG=village.json RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order;
pub mod shop;
pub mod village;
