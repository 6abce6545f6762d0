//! Walks the core storefront flows end to end: browse, filter, cart,
//! coupon, checkout.

use shophub_commerce::checkout::generate_tracking_number;
use shophub_commerce::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogStore::seeded()?;

    // Browse electronics, cheapest first.
    let query = SearchQuery::new()
        .with_filter(FilterSpec::new().with_category("Electronics"))
        .with_sort(SortMode::PriceLowToHigh);
    println!("Electronics, cheapest first:");
    for product in catalog.search(&query) {
        println!("  {} - {}", product.name, product.price);
    }

    let store = LocalStore::open(std::env::temp_dir().join("shophub-demo"))?;
    let mut session = SessionEngine::with_demo_data(store);

    // View a product and add it to the cart.
    let headphones = catalog.get(&ProductId::new("1")).unwrap().clone();
    session.record_view(headphones.clone());
    let totals = session.add_to_cart(CartItem::new(headphones, 1).with_color("Black"));
    println!("\nCart: {} ({} item)", totals.total, session.cart().item_count());

    // Apply the coupon and re-read totals.
    let totals = session.apply_coupon("SAVE10");
    println!(
        "With coupon: subtotal {}, discount {}, tax {}, shipping {}, total {}",
        totals.subtotal, totals.discount, totals.tax, totals.shipping, totals.total
    );

    // Check out with express delivery.
    let checkout = session.checkout_totals(DeliveryOption::Express);
    let order = Order::place(session.cart().items().to_vec(), checkout.total)
        .with_tracking(generate_tracking_number());
    println!(
        "\nPlaced {} for {} ({})",
        order.id,
        order.total(),
        order.status.display_name()
    );
    session.add_order(order);
    session.clear_cart();

    println!("Orders on file: {}", session.orders().len());
    Ok(())
}
