//! # Pricing
//!
//! Price tables for every menu option and the rules that turn an item's
//! attributes into a price.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Drink     = size price            + 0.15 × flavors                     │
//! │              (replaces the base)                                        │
//! │                                                                         │
//! │  Food      = food type price       + Σ topping prices                   │
//! │              (0 when unset)          (each topping once)                │
//! │                                                                         │
//! │  Ice Storm = flavor price          + Σ topping prices                   │
//! │              (0 when unset)          (every repeat counted)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are computed on every call and never cached, so `price()` always
//! reflects the item's current attributes.

use crate::menu::{
    Drink, DrinkFlavor, DrinkSize, Food, FoodKind, FoodTopping, IceStorm, MenuItem,
    StormFlavor, StormTopping,
};
use crate::money::Money;

/// Anything with a price on the menu.
pub trait Priced {
    /// Current price, computed from the item's attributes.
    fn price(&self) -> Money;
}

// =============================================================================
// Price Tables
// =============================================================================

impl DrinkSize {
    pub const fn price(self) -> Money {
        match self {
            DrinkSize::Small => Money::from_cents(150),
            DrinkSize::Medium => Money::from_cents(175),
            DrinkSize::Large => Money::from_cents(205),
            DrinkSize::Mega => Money::from_cents(215),
        }
    }
}

impl DrinkFlavor {
    /// Every flavor shot costs the same.
    pub const SHOT: Money = Money::from_cents(15);
}

impl FoodKind {
    pub const fn price(self) -> Money {
        match self {
            FoodKind::Hotdog => Money::from_cents(230),
            FoodKind::Corndog => Money::from_cents(200),
            FoodKind::IceCream => Money::from_cents(300),
            FoodKind::OnionRings => Money::from_cents(175),
            FoodKind::FrenchFries => Money::from_cents(150),
            FoodKind::TaterTots => Money::from_cents(170),
            FoodKind::NachoChips => Money::from_cents(190),
        }
    }
}

impl FoodTopping {
    pub const fn price(self) -> Money {
        match self {
            FoodTopping::Cherry
            | FoodTopping::WhippedCream
            | FoodTopping::Ketchup
            | FoodTopping::Mustard => Money::zero(),
            FoodTopping::NachoCheese | FoodTopping::BaconBits => Money::from_cents(30),
            FoodTopping::CaramelSauce | FoodTopping::ChocolateSauce => Money::from_cents(50),
            FoodTopping::Chili => Money::from_cents(60),
        }
    }
}

impl StormFlavor {
    pub const fn price(self) -> Money {
        match self {
            StormFlavor::Chocolate | StormFlavor::VanillaBean => Money::from_cents(300),
            StormFlavor::Banana | StormFlavor::ButterPecan => Money::from_cents(350),
            StormFlavor::MintChocolateChip | StormFlavor::Smore => Money::from_cents(400),
        }
    }
}

impl StormTopping {
    pub const fn price(self) -> Money {
        match self {
            StormTopping::Cherry | StormTopping::WhippedCream => Money::zero(),
            StormTopping::CaramelSauce | StormTopping::ChocolateSauce | StormTopping::Pecans => {
                Money::from_cents(50)
            }
            StormTopping::Storios
            | StormTopping::DigDogs
            | StormTopping::TandTs
            | StormTopping::CookieDough => Money::from_cents(100),
        }
    }
}

// =============================================================================
// Item Prices
// =============================================================================

impl Priced for Drink {
    fn price(&self) -> Money {
        // The base is free; the cup size carries the price.
        self.size().price() + DrinkFlavor::SHOT * self.num_flavors() as i64
    }
}

impl Priced for Food {
    fn price(&self) -> Money {
        let base = self.kind().map(FoodKind::price).unwrap_or_default();
        let toppings: Money = self.toppings().iter().map(|topping| topping.price()).sum();
        base + toppings
    }
}

impl Priced for IceStorm {
    fn price(&self) -> Money {
        let base = self.flavor().map(StormFlavor::price).unwrap_or_default();
        let toppings: Money = self.toppings().iter().map(|topping| topping.price()).sum();
        base + toppings
    }
}

impl Priced for MenuItem {
    fn price(&self) -> Money {
        match self {
            MenuItem::Drink(drink) => drink.price(),
            MenuItem::Food(food) => food.price(),
            MenuItem::IceStorm(storm) => storm.price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuOption;

    #[test]
    fn test_drink_price_uses_size_not_base() {
        let mut drink = Drink::new();
        drink.set_base("sprite").unwrap();
        drink.add_flavor("lemon").unwrap();
        assert_eq!(drink.price(), Money::from_cents(165));

        drink.set_size("mega").unwrap();
        assert_eq!(drink.price(), Money::from_cents(230));

        drink.set_base("leaf wine").unwrap();
        assert_eq!(drink.price(), Money::from_cents(230));
    }

    #[test]
    fn test_drink_flavors_priced_per_shot() {
        let mut drink = Drink::new();
        drink.set_size("medium").unwrap();
        drink.set_flavors(["lemon", "cherry", "mint"]).unwrap();
        // 1.75 + 3 x 0.15
        assert_eq!(drink.price(), Money::from_cents(220));
    }

    #[test]
    fn test_empty_drink_costs_a_small_cup() {
        assert_eq!(Drink::new().price(), DrinkSize::Small.price());
    }

    #[test]
    fn test_food_price_with_toppings() {
        // hotdog 2.30 + ketchup 0.00 + nacho cheese 0.30
        let mut food = Food::new();
        food.set_type("hotdog").unwrap();
        food.add_topping("ketchup").unwrap();
        food.add_topping("nacho cheese").unwrap();
        assert_eq!(food.price(), Money::from_cents(260));
        assert_eq!(food.price().to_string(), "$2.60");

        // ice cream 3.00 + caramel 0.50 + chocolate 0.50
        let mut sundae = Food::new();
        sundae.set_type("ice cream").unwrap();
        sundae.add_topping("caramel sauce").unwrap();
        sundae.add_topping("chocolate sauce").unwrap();
        assert_eq!(sundae.price(), Money::from_cents(400));
    }

    #[test]
    fn test_unset_category_is_free() {
        let mut food = Food::new();
        food.add_topping("chili").unwrap();
        assert_eq!(food.price(), Money::from_cents(60));

        assert!(IceStorm::new().price().is_zero());
    }

    #[test]
    fn test_ice_storm_counts_repeated_toppings() {
        let mut storm = IceStorm::new();
        storm.set_flavor("Chocolate").unwrap();
        storm.add_topping("Cherry").unwrap();
        storm.add_topping("Caramel Sauce").unwrap();
        assert_eq!(storm.price(), Money::from_cents(350));

        storm.add_topping("Caramel Sauce").unwrap();
        assert_eq!(storm.price(), Money::from_cents(400));
    }

    #[test]
    fn test_price_is_pure() {
        let mut storm = IceStorm::new();
        storm.set_flavor("S'more").unwrap();
        storm.add_topping("Storios").unwrap();
        let item = MenuItem::from(storm);
        assert_eq!(item.price(), item.price());
        assert_eq!(item.price(), Money::from_cents(500));
    }

    #[test]
    fn test_every_option_has_a_non_negative_price() {
        let all = DrinkSize::ALL.iter().map(|o| o.price())
            .chain(std::iter::once(DrinkFlavor::SHOT))
            .chain(FoodKind::ALL.iter().map(|o| o.price()))
            .chain(FoodTopping::ALL.iter().map(|o| o.price()))
            .chain(StormFlavor::ALL.iter().map(|o| o.price()))
            .chain(StormTopping::ALL.iter().map(|o| o.price()));
        for price in all {
            assert!(price.cents() >= 0);
        }
    }
}
