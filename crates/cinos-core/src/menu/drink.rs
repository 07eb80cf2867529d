//! # Drink
//!
//! A drink: one base, a cup size, and any number of distinct flavor shots.

use std::fmt;

use super::options::{insert_unique, join_labels, parse_all};
use super::{DrinkBase, DrinkFlavor, DrinkSize};
use crate::error::CoreResult;
use crate::validation::match_label;

/// A drink on an order.
///
/// ## Lifecycle
/// ```text
/// Drink::new()                 base: None, size: small, flavors: []
///      │
///      ├── set_base("sprite")  base: sprite        (configured)
///      ├── set_size("large")   size: large
///      └── add_flavor("lime")  flavors: [lime]     (set: no repeats)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drink {
    base: Option<DrinkBase>,
    size: DrinkSize,
    flavors: Vec<DrinkFlavor>,
}

impl Drink {
    /// Creates a small drink with no base and no flavors.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<DrinkBase> {
        self.base
    }

    pub fn size(&self) -> DrinkSize {
        self.size
    }

    /// Flavors in the order they were first added.
    pub fn flavors(&self) -> &[DrinkFlavor] {
        &self.flavors
    }

    pub fn num_flavors(&self) -> usize {
        self.flavors.len()
    }

    /// True once a base has been chosen.
    pub fn is_configured(&self) -> bool {
        self.base.is_some()
    }

    /// Sets the base, replacing any previous one.
    ///
    /// ## Errors
    /// `InvalidValue` if `base` is not on the menu. The drink is unchanged.
    pub fn set_base(&mut self, base: &str) -> CoreResult<()> {
        self.base = Some(match_label(base)?);
        Ok(())
    }

    /// Sets the cup size.
    pub fn set_size(&mut self, size: &str) -> CoreResult<()> {
        self.size = match_label(size)?;
        Ok(())
    }

    /// Adds a flavor. Adding a flavor the drink already has is a no-op.
    pub fn add_flavor(&mut self, flavor: &str) -> CoreResult<()> {
        let flavor = match_label(flavor)?;
        insert_unique(&mut self.flavors, flavor);
        Ok(())
    }

    /// Adds several flavors at once.
    ///
    /// All-or-nothing: every label is checked before any is added, so a bad
    /// label leaves the drink exactly as it was.
    pub fn set_flavors<I, S>(&mut self, flavors: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for flavor in parse_all(flavors)? {
            insert_unique(&mut self.flavors, flavor);
        }
        Ok(())
    }
}

/// `Base - sprite, Size - small, Flavors - lemon, lime`
impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base.map(|b| b.to_string());
        write!(
            f,
            "Base - {}, Size - {}, Flavors - {}",
            base.as_deref().unwrap_or("None"),
            self.size,
            join_labels(&self.flavors)
        )
    }
}
