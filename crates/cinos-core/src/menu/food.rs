//! # Food
//!
//! A food item: one food type plus distinct toppings.

use std::fmt;

use super::options::{insert_unique, join_labels, parse_all};
use super::{FoodKind, FoodTopping};
use crate::error::CoreResult;
use crate::validation::match_label;

/// A food item on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Food {
    kind: Option<FoodKind>,
    toppings: Vec<FoodTopping>,
}

impl Food {
    /// Creates a food item with no type and no toppings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The food type, e.g. `hotdog`.
    pub fn kind(&self) -> Option<FoodKind> {
        self.kind
    }

    pub fn toppings(&self) -> &[FoodTopping] {
        &self.toppings
    }

    pub fn num_toppings(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_configured(&self) -> bool {
        self.kind.is_some()
    }

    /// Sets the food type, replacing any previous one.
    ///
    /// ## Errors
    /// `InvalidValue` if `food_type` is not on the menu.
    pub fn set_type(&mut self, food_type: &str) -> CoreResult<()> {
        self.kind = Some(match_label(food_type)?);
        Ok(())
    }

    /// Adds a topping. Repeats are ignored.
    pub fn add_topping(&mut self, topping: &str) -> CoreResult<()> {
        let topping = match_label(topping)?;
        insert_unique(&mut self.toppings, topping);
        Ok(())
    }

    /// Adds several toppings, all-or-nothing.
    pub fn set_toppings<I, S>(&mut self, toppings: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for topping in parse_all(toppings)? {
            insert_unique(&mut self.toppings, topping);
        }
        Ok(())
    }
}

/// `Type - onion rings, Toppings - chili`
impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.map(|k| k.to_string());
        write!(
            f,
            "Type - {}, Toppings - {}",
            kind.as_deref().unwrap_or("None"),
            join_labels(&self.toppings)
        )
    }
}
