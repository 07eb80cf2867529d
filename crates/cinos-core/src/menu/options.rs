//! # Menu Options
//!
//! The fixed allow-lists every menu item draws its attributes from.
//!
//! Each list is a plain Rust enum, so a stored attribute can never be off
//! the menu. The only way to turn user text into an option is
//! [`crate::validation::match_label`], which is where labels are checked.
//!
//! ## Allow-lists
//! ```text
//! ┌────────────────┬──────────────────┬────────────────────────────────────┐
//! │ Item           │ Category         │ Modifiers                          │
//! ├────────────────┼──────────────────┼────────────────────────────────────┤
//! │ Drink          │ DrinkBase        │ DrinkFlavor (set) + DrinkSize      │
//! │ Food           │ FoodKind         │ FoodTopping (set)                  │
//! │ Ice Storm      │ StormFlavor      │ StormTopping (list, repeats ok)    │
//! └────────────────┴──────────────────┴────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::validation::match_label;

/// A value on one of the menu allow-lists.
pub trait MenuOption: Copy + Eq + fmt::Debug + 'static {
    /// Field name used in error messages ("base", "topping", ...).
    const FIELD: &'static str;

    /// Every option, in menu order.
    const ALL: &'static [Self];

    /// Canonical menu spelling.
    fn label(self) -> &'static str;

    /// Canonical spellings of every option, in menu order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.label()).collect()
    }
}

macro_rules! menu_options {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl MenuOption for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> CoreResult<Self> {
                match_label(s)
            }
        }
    };
}

// =============================================================================
// Drinks
// =============================================================================

menu_options! {
    /// The liquid a drink is built on.
    DrinkBase ("base") {
        Water => "water",
        Sprite => "sprite",
        PokeAcola => "poke-acola",
        MrSalt => "Mr. Salt",
        HillFog => "hill fog",
        LeafWine => "leaf wine",
    }
}

menu_options! {
    /// Flavor shots added to a drink.
    DrinkFlavor ("flavor") {
        Lemon => "lemon",
        Cherry => "cherry",
        Strawberry => "strawberry",
        Mint => "mint",
        Blueberry => "blueberry",
        Lime => "lime",
    }
}

menu_options! {
    /// Cup size. The size, not the base, sets a drink's price.
    #[derive(Default)]
    DrinkSize ("size") {
        #[default]
        Small => "small",
        Medium => "medium",
        Large => "large",
        Mega => "mega",
    }
}

// =============================================================================
// Food
// =============================================================================

menu_options! {
    FoodKind ("food type") {
        Hotdog => "hotdog",
        Corndog => "corndog",
        IceCream => "ice cream",
        OnionRings => "onion rings",
        FrenchFries => "french fries",
        TaterTots => "tater tots",
        NachoChips => "nacho chips",
    }
}

menu_options! {
    FoodTopping ("topping") {
        Cherry => "cherry",
        WhippedCream => "whipped cream",
        CaramelSauce => "caramel sauce",
        ChocolateSauce => "chocolate sauce",
        NachoCheese => "nacho cheese",
        Chili => "chili",
        BaconBits => "bacon bits",
        Ketchup => "ketchup",
        Mustard => "mustard",
    }
}

// =============================================================================
// Ice Storms
// =============================================================================

menu_options! {
    StormFlavor ("flavor") {
        MintChocolateChip => "Mint Chocolate Chip",
        Chocolate => "Chocolate",
        VanillaBean => "Vanilla Bean",
        Banana => "Banana",
        ButterPecan => "Butter Pecan",
        Smore => "S'more",
    }
}

menu_options! {
    StormTopping ("topping") {
        Cherry => "Cherry",
        WhippedCream => "Whipped Cream",
        CaramelSauce => "Caramel Sauce",
        ChocolateSauce => "Chocolate Sauce",
        Storios => "Storios",
        DigDogs => "Dig Dogs",
        TandTs => "T&T's",
        CookieDough => "Cookie Dough",
        Pecans => "Pecans",
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses every label up front so a bulk set either applies in full or
/// not at all.
pub(crate) fn parse_all<T, I, S>(labels: I) -> CoreResult<Vec<T>>
where
    T: MenuOption,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| match_label(label.as_ref()))
        .collect()
}

/// Appends `option` unless it is already present. Keeps insertion order.
pub(crate) fn insert_unique<T: MenuOption>(options: &mut Vec<T>, option: T) {
    if !options.contains(&option) {
        options.push(option);
    }
}

/// Joins option labels for display, or `None` when there are none.
pub(crate) fn join_labels<T: MenuOption>(options: &[T]) -> String {
    if options.is_empty() {
        return "None".to_string();
    }
    options
        .iter()
        .map(|option| option.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Unit Tests
// =============================================================================
