//! # Menu Items
//!
//! The three kinds of things a customer can order, and the closed
//! [`MenuItem`] type an [`Order`](crate::order::Order) holds.
//!
//! ## Item Types
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │     Drink       │   │      Food       │   │    IceStorm     │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  base           │   │  type           │   │  flavor         │
//! │  size           │   │  toppings (set) │   │  toppings (list)│
//! │  flavors (set)  │   │                 │   │                 │
//! └────────┬────────┘   └────────┬────────┘   └────────┬────────┘
//!          └─────────────────────┼─────────────────────┘
//!                                ▼
//!                    MenuItem::{Drink, Food, IceStorm}
//! ```
//!
//! Because `MenuItem` is an enum, an order cannot hold anything that is not
//! a menu item; the check happens at compile time. Untyped input (JSON) goes
//! through [`MenuItem::from_value`](crate::snapshot), which performs the
//! same check at runtime.

mod drink;
mod food;
mod ice_storm;
mod options;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use drink::Drink;
pub use food::Food;
pub use ice_storm::IceStorm;
pub use options::{
    DrinkBase, DrinkFlavor, DrinkSize, FoodKind, FoodTopping, MenuOption, StormFlavor,
    StormTopping,
};

use crate::pricing::Priced;
use crate::snapshot::ItemRecord;

// =============================================================================
// Item Kind
// =============================================================================

/// Which kind of menu item something is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Drink,
    Food,
    IceStorm,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Drink, ItemKind::Food, ItemKind::IceStorm];

    /// Name printed on receipts.
    pub const fn label(self) -> &'static str {
        match self {
            ItemKind::Drink => "Drink",
            ItemKind::Food => "Food",
            ItemKind::IceStorm => "Ice Storm",
        }
    }

    /// Tag used in serialized item records.
    pub const fn tag(self) -> &'static str {
        match self {
            ItemKind::Drink => "drink",
            ItemKind::Food => "food",
            ItemKind::IceStorm => "ice_storm",
        }
    }

    /// Looks up a kind by its record tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// Any item that can be placed on an order.
///
/// Serializes as an [`ItemRecord`]; deserializing replays the record through
/// the item setters, so stored data is validated exactly like user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub enum MenuItem {
    Drink(Drink),
    Food(Food),
    IceStorm(IceStorm),
}

impl MenuItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            MenuItem::Drink(_) => ItemKind::Drink,
            MenuItem::Food(_) => ItemKind::Food,
            MenuItem::IceStorm(_) => ItemKind::IceStorm,
        }
    }

    /// The item's identifying attributes, without kind or price.
    pub fn description(&self) -> String {
        match self {
            MenuItem::Drink(drink) => drink.to_string(),
            MenuItem::Food(food) => food.to_string(),
            MenuItem::IceStorm(storm) => storm.to_string(),
        }
    }

    /// True once the item's category (base, type, flavor) is chosen.
    pub fn is_configured(&self) -> bool {
        match self {
            MenuItem::Drink(drink) => drink.is_configured(),
            MenuItem::Food(food) => food.is_configured(),
            MenuItem::IceStorm(storm) => storm.is_configured(),
        }
    }

    pub fn as_drink(&self) -> Option<&Drink> {
        match self {
            MenuItem::Drink(drink) => Some(drink),
            _ => None,
        }
    }

    pub fn as_food(&self) -> Option<&Food> {
        match self {
            MenuItem::Food(food) => Some(food),
            _ => None,
        }
    }

    pub fn as_ice_storm(&self) -> Option<&IceStorm> {
        match self {
            MenuItem::IceStorm(storm) => Some(storm),
            _ => None,
        }
    }
}

/// `Ice Storm - Flavor - S'more, Toppings - None, Total: $4.00`
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, Total: {}",
            self.kind(),
            self.description(),
            self.price()
        )
    }
}

impl From<Drink> for MenuItem {
    fn from(drink: Drink) -> Self {
        MenuItem::Drink(drink)
    }
}

impl From<Food> for MenuItem {
    fn from(food: Food) -> Self {
        MenuItem::Food(food)
    }
}

impl From<IceStorm> for MenuItem {
    fn from(storm: IceStorm) -> Self {
        MenuItem::IceStorm(storm)
    }
}
