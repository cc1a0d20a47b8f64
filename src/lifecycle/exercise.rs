use tracing::{info, info_span};

use crate::order::{OrderError, OrderVisitor};
use crate::shop::join_items;
use crate::village::Village;

/// Orders `items` from `village` without knowing which shop sells them.
///
/// Every shop is visited; the one that sells the items takes the order,
/// restocks from the other shops if it has to, and hands the items over.
/// Check [`OrderVisitor::is_fulfilled`] on the result: an order nobody can fill
/// comes back empty rather than as an error.
pub fn run_exercise<I, S>(village: &mut Village, items: I) -> Result<OrderVisitor, OrderError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut order = OrderVisitor::new(items);
    let span = info_span!("visitor_exercise");
    let _guard = span.enter();

    info!(
        village = %village.name(),
        items = %join_items(order.items_to_order()),
        "Ordering from village"
    );
    village.accept(&mut order)?;

    match order.source_shop() {
        Some(shop) => info!(items = %join_items(order.items_received()), shop, "Order received"),
        None => info!(items = %join_items(order.items_to_order()), "Order could not be filled"),
    }
    Ok(order)
}
