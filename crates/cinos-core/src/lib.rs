//! # cinos-core: Ordering Logic for the Cinos Menu
//!
//! Menu items with validated attributes, their prices, and the order that
//! totals them and prints a receipt. Pure in-memory logic with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cinos Ordering                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Front end / persistence (outside this crate)            │   │
//! │  │     add_item ──► remove_item ──► total ──► receipt              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinos-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │  pricing  │  │   order   │  │ snapshot  │  │   │
//! │  │   │  Drink    │  │  tables   │  │   Order   │  │ ItemRecord│  │   │
//! │  │   │  Food     │  │  Priced   │  │  Receipt  │  │  JSON     │  │   │
//! │  │   │  IceStorm │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Drink, Food, IceStorm and their allow-lists
//! - [`pricing`] - Price tables and the `Priced` trait
//! - [`order`] - The order aggregate
//! - [`receipt`] - Itemized receipt and its text layout
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Tax rate
//! - [`config`] - Order configuration from the environment
//! - [`snapshot`] - Serde records and the JSON boundary
//! - [`validation`] - Label matching and range checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cinos_core::{Drink, Food, Order};
//!
//! let mut drink = Drink::new();
//! drink.set_base("sprite")?;
//! drink.add_flavor("lime")?;
//!
//! let mut food = Food::new();
//! food.set_type("hotdog")?;
//! food.add_topping("ketchup")?;
//! food.add_topping("nacho cheese")?;
//!
//! let mut order = Order::new();
//! order.add_item(drink);
//! order.add_item(food);
//!
//! // 1.65 + 2.60 = 4.25, plus 7.25% tax
//! assert_eq!(order.subtotal().to_string(), "$4.25");
//! assert_eq!(order.total().to_string(), "$4.56");
//! assert!(order.receipt().to_string().contains("Food 2: Type - hotdog"));
//! # Ok::<(), cinos_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod receipt;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::OrderConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Drink, Food, IceStorm, ItemKind, MenuItem};
pub use money::Money;
pub use order::Order;
pub use pricing::Priced;
pub use receipt::{Receipt, ReceiptLine};
pub use snapshot::{ItemRecord, OrderSnapshot};
pub use types::TaxRate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax in basis points (7.25%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 725;

/// Environment variable that overrides the sales tax percentage.
pub const TAX_RATE_ENV: &str = "CINOS_TAX_RATE";
