//! # Receipt
//!
//! The itemized receipt for an order.
//!
//! ## Layout
//! ```text
//! Drink 1: Base - sprite, Size - small, Flavors - lime, Total: $1.65
//! Food 2: Type - onion rings, Toppings - chili, Total: $2.35
//! Ice Storm 3: Flavor - Chocolate, Toppings - Cherry, Caramel Sauce, Total: $3.50
//! Subtotal: $7.50
//! Tax (7.25%): $0.54
//! Total: $8.04
//! ```
//!
//! Lines are numbered from 1 in the order items were added. Amounts are
//! exact cents except tax, which is rounded once (half up) when computed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::menu::ItemKind;
use crate::money::Money;
use crate::order::Order;
use crate::pricing::Priced;
use crate::types::TaxRate;

/// One item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// 1-based position on the order.
    pub position: usize,
    pub kind: ItemKind,
    pub description: String,
    pub price: Money,
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}, Total: {}",
            self.kind, self.position, self.description, self.price
        )
    }
}

/// A priced, itemized view of an order at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl From<&Order> for Receipt {
    fn from(order: &Order) -> Self {
        let lines = order
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ReceiptLine {
                position: index + 1,
                kind: item.kind(),
                description: item.description(),
                price: item.price(),
            })
            .collect();

        Receipt {
            lines,
            subtotal: order.subtotal(),
            tax_rate: order.tax_rate(),
            tax: order.tax(),
            total: order.total(),
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        writeln!(f, "Tax ({}): {}", self.tax_rate, self.tax)?;
        write!(f, "Total: {}", self.total)
    }
}
