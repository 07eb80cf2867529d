//! # Order
//!
//! The order aggregate: an ordered list of menu items plus the math that
//! turns them into a subtotal, tax, total and receipt.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  Caller Action            Order Method            State Change          │
//! │  ─────────────            ────────────            ────────────          │
//! │                                                                         │
//! │  Ring up item ───────────► add_item() ──────────► items.push(item)     │
//! │                                                                         │
//! │  Ring up JSON ───────────► add_item_value() ────► validate, push       │
//! │                                                                         │
//! │  Void line ──────────────► remove_item(i) ──────► items.remove(i)      │
//! │                                                                         │
//! │  Show totals ────────────► subtotal/tax/total ──► (read only)          │
//! │                                                                         │
//! │  Print ──────────────────► receipt() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! `total()` always includes tax. `subtotal()` and `tax()` are exposed
//! separately for callers that need the pre-tax figure. Every figure is
//! recomputed on each call from the current items.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::OrderConfig;
use crate::error::{CoreError, CoreResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::pricing::Priced;
use crate::receipt::Receipt;
use crate::snapshot::{ItemRecord, OrderSnapshot};
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;

/// An open order.
///
/// ## Invariants
/// - Items keep insertion order; identical items may appear more than once
/// - Every item is a fully constructed `MenuItem`
/// - A failed call leaves the order exactly as it was
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    created_at: DateTime<Utc>,
    tax_rate: TaxRate,
    items: Vec<MenuItem>,
}

impl Order {
    /// Creates an empty order with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&OrderConfig::default())
    }

    /// Creates an empty order using `config`.
    pub fn with_config(config: &OrderConfig) -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            tax_rate: config.tax_rate,
            items: Vec::new(),
        }
    }

    /// Order ID (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the order.
    pub fn add_item(&mut self, item: impl Into<MenuItem>) {
        let item = item.into();
        debug!(
            order_id = %self.id,
            position = self.items.len(),
            kind = %item.kind(),
            price = %item.price(),
            "item added"
        );
        self.items.push(item);
    }

    /// Appends an item described by untyped JSON.
    ///
    /// ## Errors
    /// Whatever [`MenuItem::from_value`] reports; the order is unchanged.
    pub fn add_item_value(&mut self, value: &Value) -> CoreResult<()> {
        let item = MenuItem::from_value(value)?;
        self.add_item(item);
        Ok(())
    }

    /// Removes and returns the item at `index`; later items shift down.
    ///
    /// ## Errors
    /// `IndexOutOfRange` if `index >= item_count()`.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<MenuItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        debug!(order_id = %self.id, index, kind = %item.kind(), "item removed");
        Ok(item)
    }

    /// Sum of item prices, before tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Tax on the subtotal, rounded half up to the cent.
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    /// Grand total (subtotal + tax).
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    /// Itemized receipt for the order as it stands now.
    pub fn receipt(&self) -> Receipt {
        Receipt::from(self)
    }

    /// Serializable copy of the order.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            id: self.id.clone(),
            created_at: self.created_at,
            tax_rate_bps: self.tax_rate.bps(),
            items: self.items.iter().map(ItemRecord::from).collect(),
        }
    }

    /// Rebuilds an order from a snapshot, validating every item.
    ///
    /// ## Errors
    /// `Snapshot` for an id that is not a UUID, `Validation` for an
    /// out-of-range tax rate, or the first item error.
    pub fn from_snapshot(snapshot: OrderSnapshot) -> CoreResult<Self> {
        let id = Uuid::parse_str(&snapshot.id)
            .map_err(|e| CoreError::Snapshot(format!("order id '{}': {}", snapshot.id, e)))?;
        validate_tax_rate_bps(snapshot.tax_rate_bps)?;

        let items = snapshot
            .items
            .into_iter()
            .map(MenuItem::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Order {
            id: id.to_string(),
            created_at: snapshot.created_at,
            tax_rate: TaxRate::from_bps(snapshot.tax_rate_bps),
            items,
        })
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
