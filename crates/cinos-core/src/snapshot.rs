//! # Snapshots
//!
//! Plain serde records for menu items and orders, and the JSON entry point
//! for untyped input.
//!
//! ## Reconstruction Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON ──► ItemRecord (strings) ──► Drink::new() + set_base/add_flavor  │
//! │                                     Food::new() + set_type/add_topping │
//! │                                     IceStorm::new() + set_flavor/...   │
//! │                                                                         │
//! │  Records never build items directly. Every label goes through the      │
//! │  same setter a cashier's input would, so stored data cannot smuggle    │
//! │  an off-menu value into an order.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Format
//! ```json
//! { "kind": "drink", "base": "sprite", "size": "small", "flavors": ["lime"] }
//! { "kind": "food", "type": "hotdog", "toppings": ["ketchup"] }
//! { "kind": "ice_storm", "flavor": "Chocolate", "toppings": ["Cherry", "Cherry"] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::menu::{Drink, Food, IceStorm, ItemKind, MenuItem, MenuOption};

// =============================================================================
// Item Record
// =============================================================================

/// Serialized form of a [`MenuItem`]: every attribute as its menu label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemRecord {
    Drink {
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        flavors: Vec<String>,
    },
    Food {
        #[serde(rename = "type", default)]
        food_type: Option<String>,
        #[serde(default)]
        toppings: Vec<String>,
    },
    IceStorm {
        #[serde(default)]
        flavor: Option<String>,
        #[serde(default)]
        toppings: Vec<String>,
    },
}

impl ItemKind {
    /// Names of the record's category and modifier fields for this kind.
    fn record_fields(self) -> (&'static str, &'static str) {
        match self {
            ItemKind::Drink => ("base", "flavors"),
            ItemKind::Food => ("type", "toppings"),
            ItemKind::IceStorm => ("flavor", "toppings"),
        }
    }
}

fn labels<T: MenuOption>(options: &[T]) -> Vec<String> {
    options.iter().map(|option| option.label().to_string()).collect()
}

impl From<&MenuItem> for ItemRecord {
    fn from(item: &MenuItem) -> Self {
        match item {
            MenuItem::Drink(drink) => ItemRecord::Drink {
                base: drink.base().map(|base| base.label().to_string()),
                size: Some(drink.size().label().to_string()),
                flavors: labels(drink.flavors()),
            },
            MenuItem::Food(food) => ItemRecord::Food {
                food_type: food.kind().map(|kind| kind.label().to_string()),
                toppings: labels(food.toppings()),
            },
            MenuItem::IceStorm(storm) => ItemRecord::IceStorm {
                flavor: storm.flavor().map(|flavor| flavor.label().to_string()),
                toppings: labels(storm.toppings()),
            },
        }
    }
}

impl From<MenuItem> for ItemRecord {
    fn from(item: MenuItem) -> Self {
        ItemRecord::from(&item)
    }
}

impl TryFrom<ItemRecord> for MenuItem {
    type Error = CoreError;

    fn try_from(record: ItemRecord) -> CoreResult<Self> {
        match record {
            ItemRecord::Drink { base, size, flavors } => {
                let mut drink = Drink::new();
                if let Some(base) = base {
                    drink.set_base(&base)?;
                }
                if let Some(size) = size {
                    drink.set_size(&size)?;
                }
                drink.set_flavors(&flavors)?;
                Ok(MenuItem::Drink(drink))
            }
            ItemRecord::Food { food_type, toppings } => {
                let mut food = Food::new();
                if let Some(food_type) = food_type {
                    food.set_type(&food_type)?;
                }
                food.set_toppings(&toppings)?;
                Ok(MenuItem::Food(food))
            }
            ItemRecord::IceStorm { flavor, toppings } => {
                let mut storm = IceStorm::new();
                if let Some(flavor) = flavor {
                    storm.set_flavor(&flavor)?;
                }
                storm.set_toppings(&toppings)?;
                Ok(MenuItem::IceStorm(storm))
            }
        }
    }
}

// =============================================================================
// Untyped Input
// =============================================================================

impl MenuItem {
    /// Builds an item from untyped JSON.
    ///
    /// ## Errors
    /// - `InvalidType`: not an object, or `kind` missing / not a menu kind
    /// - `InvalidInputType`: category not a string, modifiers not a list of
    ///   strings
    /// - `InvalidValue`: a label that is not on the menu
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let object = value.as_object().ok_or_else(|| CoreError::InvalidType {
            found: json_type_name(value).to_string(),
        })?;

        let kind = match object.get("kind") {
            Some(Value::String(tag)) => {
                ItemKind::from_tag(tag).ok_or_else(|| CoreError::InvalidType {
                    found: tag.clone(),
                })?
            }
            Some(other) => {
                return Err(CoreError::InvalidType {
                    found: json_type_name(other).to_string(),
                })
            }
            None => {
                return Err(CoreError::InvalidType {
                    found: "object without a kind".to_string(),
                })
            }
        };

        let (category_field, modifier_field) = kind.record_fields();
        let mut string_fields = vec![category_field];
        if kind == ItemKind::Drink {
            string_fields.push("size");
        }
        for field in string_fields {
            match object.get(field) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(CoreError::InvalidInputType {
                        field,
                        expected: "a string",
                    })
                }
            }
        }
        match object.get(modifier_field) {
            None | Some(Value::Null) => {}
            Some(Value::Array(entries)) if entries.iter().all(Value::is_string) => {}
            Some(_) => {
                return Err(CoreError::InvalidInputType {
                    field: modifier_field,
                    expected: "a list of strings",
                })
            }
        }

        let record: ItemRecord = serde_json::from_value(without_nulls(object))
            .map_err(|e| CoreError::Snapshot(e.to_string()))?;
        MenuItem::try_from(record)
    }
}

/// Drops `null` members so they read as "not set" rather than as values.
fn without_nulls(object: &serde_json::Map<String, Value>) -> Value {
    Value::Object(
        object
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// Serialized form of an [`Order`](crate::order::Order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub tax_rate_bps: u32,
    pub items: Vec<ItemRecord>,
}

impl OrderSnapshot {
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Snapshot(e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{DrinkBase, DrinkFlavor, DrinkSize, StormTopping};
    use serde_json::json;

    fn sample_drink() -> MenuItem {
        let mut drink = Drink::new();
        drink.set_base("Mr. Salt").unwrap();
        drink.set_size("large").unwrap();
        drink.set_flavors(["mint", "lime"]).unwrap();
        MenuItem::Drink(drink)
    }

    #[test]
    fn test_record_uses_menu_labels() {
        let record = ItemRecord::from(&sample_drink());
        assert_eq!(
            record,
            ItemRecord::Drink {
                base: Some("Mr. Salt".to_string()),
                size: Some("large".to_string()),
                flavors: vec!["mint".to_string(), "lime".to_string()],
            }
        );
    }

    #[test]
    fn test_item_json_shape() {
        let value = serde_json::to_value(sample_drink()).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "drink", "base": "Mr. Salt", "size": "large", "flavors": ["mint", "lime"] })
        );

        let back: MenuItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample_drink());
    }

    #[test]
    fn test_deserialize_validates_labels() {
        let bad = json!({ "kind": "food", "type": "burger" });
        let err = serde_json::from_value::<MenuItem>(bad).unwrap_err();
        assert!(err.to_string().contains("burger"));
    }

    #[test]
    fn test_record_normalizes_case() {
        let record = ItemRecord::Drink {
            base: Some("SPRITE".to_string()),
            size: None,
            flavors: vec!["Lime".to_string()],
        };
        let drink = MenuItem::try_from(record).unwrap();
        let drink = drink.as_drink().unwrap();
        assert_eq!(drink.base(), Some(DrinkBase::Sprite));
        assert_eq!(drink.size(), DrinkSize::Small);
        assert_eq!(drink.flavors(), &[DrinkFlavor::Lime]);
    }

    #[test]
    fn test_ice_storm_record_keeps_repeats() {
        let value = json!({ "kind": "ice_storm", "flavor": "Banana", "toppings": ["Pecans", "Pecans"] });
        let item = MenuItem::from_value(&value).unwrap();
        assert_eq!(
            item.as_ice_storm().unwrap().toppings(),
            &[StormTopping::Pecans, StormTopping::Pecans]
        );
    }

    #[test]
    fn test_from_value_rejects_non_items() {
        let err = MenuItem::from_value(&json!("hotdog")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidType { ref found } if found == "a string"));

        let err = MenuItem::from_value(&json!({ "kind": "burger" })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidType { ref found } if found == "burger"));

        let err = MenuItem::from_value(&json!({ "type": "hotdog" })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidType { .. }));
    }

    #[test]
    fn test_from_value_rejects_wrong_shapes() {
        let err = MenuItem::from_value(&json!({ "kind": "drink", "flavors": "lemon" })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInputType { field: "flavors", .. }));

        let err =
            MenuItem::from_value(&json!({ "kind": "food", "toppings": ["chili", 3] })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInputType { field: "toppings", .. }));

        let err = MenuItem::from_value(&json!({ "kind": "ice_storm", "flavor": 7 })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInputType { field: "flavor", .. }));
    }

    #[test]
    fn test_from_value_rejects_bad_labels() {
        let err =
            MenuItem::from_value(&json!({ "kind": "drink", "flavors": ["lemon", "vanilla"] }))
                .unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { field: "flavor", .. }));
    }

    #[test]
    fn test_from_value_treats_null_as_unset() {
        let item = MenuItem::from_value(&json!({ "kind": "food", "type": null, "toppings": null }))
            .unwrap();
        assert_eq!(item, MenuItem::Food(Food::new()));
    }

    #[test]
    fn test_snapshot_json_errors() {
        let err = OrderSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Snapshot(_)));
    }
}
