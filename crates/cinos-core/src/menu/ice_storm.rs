//! # Ice Storm
//!
//! The frozen treat. Unlike drinks and food, toppings are a list: asking for
//! Caramel Sauce twice means two servings, and each is charged.

use std::fmt;

use super::options::{join_labels, parse_all};
use super::{StormFlavor, StormTopping};
use crate::error::CoreResult;
use crate::validation::match_label;

/// An Ice Storm on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IceStorm {
    flavor: Option<StormFlavor>,
    toppings: Vec<StormTopping>,
}

impl IceStorm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flavor(&self) -> Option<StormFlavor> {
        self.flavor
    }

    /// Toppings in the order they were added, repeats included.
    pub fn toppings(&self) -> &[StormTopping] {
        &self.toppings
    }

    pub fn num_toppings(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_configured(&self) -> bool {
        self.flavor.is_some()
    }

    /// Sets the flavor, replacing any previous one.
    pub fn set_flavor(&mut self, flavor: &str) -> CoreResult<()> {
        self.flavor = Some(match_label(flavor)?);
        Ok(())
    }

    /// Appends a topping.
    pub fn add_topping(&mut self, topping: &str) -> CoreResult<()> {
        self.toppings.push(match_label(topping)?);
        Ok(())
    }

    /// Appends several toppings, all-or-nothing.
    pub fn set_toppings<I, S>(&mut self, toppings: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<StormTopping> = parse_all(toppings)?;
        self.toppings.extend(parsed);
        Ok(())
    }
}

/// `Flavor - Chocolate, Toppings - Cherry, Caramel Sauce`
impl fmt::Display for IceStorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavor = self.flavor.map(|s| s.to_string());
        write!(
            f,
            "Flavor - {}, Toppings - {}",
            flavor.as_deref().unwrap_or("None"),
            join_labels(&self.toppings)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization() {
        let storm = IceStorm::new();
        assert_eq!(storm.flavor(), None);
        assert!(storm.toppings().is_empty());
        assert!(!storm.is_configured());
    }

    #[test]
    fn test_set_flavor() {
        let mut storm = IceStorm::new();
        storm.set_flavor("Chocolate").unwrap();
        assert_eq!(storm.flavor(), Some(StormFlavor::Chocolate));
        assert!(storm.is_configured());
    }

    #[test]
    fn test_invalid_flavor() {
        let mut storm = IceStorm::new();
        assert!(storm.set_flavor("Strawberry").is_err());
        assert_eq!(storm.flavor(), None);
    }

    #[test]
    fn test_add_topping() {
        let mut storm = IceStorm::new();
        storm.add_topping("Cherry").unwrap();
        assert!(storm.toppings().contains(&StormTopping::Cherry));
    }

    #[test]
    fn test_invalid_topping() {
        let mut storm = IceStorm::new();
        assert!(storm.add_topping("Sprinkles").is_err());
        assert_eq!(storm.num_toppings(), 0);
    }

    #[test]
    fn test_repeated_topping_is_kept() {
        let mut storm = IceStorm::new();
        storm.add_topping("Pecans").unwrap();
        storm.add_topping("Pecans").unwrap();
        assert_eq!(storm.num_toppings(), 2);
    }

    #[test]
    fn test_set_toppings_is_atomic() {
        let mut storm = IceStorm::new();
        storm.add_topping("Storios").unwrap();
        assert!(storm.set_toppings(["Dig Dogs", "Sprinkles"]).is_err());
        assert_eq!(storm.toppings(), &[StormTopping::Storios]);

        storm.set_toppings(["Dig Dogs", "Dig Dogs"]).unwrap();
        assert_eq!(storm.num_toppings(), 3);
    }

    #[test]
    fn test_set_toppings_from_owned_strings() {
        let toppings: Vec<String> = vec!["T&T's".to_string(), "cookie dough".to_string()];
        let mut storm = IceStorm::new();
        storm.set_toppings(toppings).unwrap();
        assert_eq!(
            storm.toppings(),
            &[StormTopping::TandTs, StormTopping::CookieDough]
        );
    }

    #[test]
    fn test_display() {
        let mut storm = IceStorm::new();
        storm.set_flavor("S'more").unwrap();
        storm.add_topping("Chocolate Sauce").unwrap();
        let text = storm.to_string();
        assert!(text.contains("S'more"));
        assert!(text.contains("Chocolate Sauce"));
        assert_eq!(IceStorm::new().to_string(), "Flavor - None, Toppings - None");
    }
}
