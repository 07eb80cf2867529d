//! # Sample Order
//!
//! Rings up a small order and prints its receipt. Useful for eyeballing
//! the receipt layout and checking tax configuration.
//!
//! ## Usage
//! ```bash
//! cargo run -p cinos-core --features cli --bin sample-order
//!
//! # Different tax rate
//! CINOS_TAX_RATE=8.25 cargo run -p cinos-core --features cli --bin sample-order
//!
//! # See item-level events
//! RUST_LOG=debug cargo run -p cinos-core --features cli --bin sample-order
//! ```

use cinos_core::{Drink, Food, IceStorm, Order, OrderConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = OrderConfig::from_env()?;
    info!(tax_rate = %config.tax_rate, "configuration loaded");

    let order = sample_order(&config)?;
    info!(
        order_id = %order.id(),
        items = order.item_count(),
        subtotal = %order.subtotal(),
        total = %order.total(),
        "order priced"
    );

    println!("{}", order.receipt());
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show item-level events
/// - Default: INFO, with debug for cinos crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cinos_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sample_order(config: &OrderConfig) -> cinos_core::CoreResult<Order> {
    let mut order = Order::with_config(config);

    let mut drink = Drink::new();
    drink.set_base("sprite")?;
    drink.set_size("large")?;
    drink.set_flavors(["lemon", "lime"])?;
    order.add_item(drink);

    let mut food = Food::new();
    food.set_type("hotdog")?;
    food.set_toppings(["ketchup", "mustard", "chili"])?;
    order.add_item(food);

    let mut storm = IceStorm::new();
    storm.set_flavor("Mint Chocolate Chip")?;
    storm.set_toppings(["Cookie Dough", "Whipped Cream"])?;
    order.add_item(storm);

    Ok(order)
}
