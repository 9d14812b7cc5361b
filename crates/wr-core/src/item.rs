use serde::{Deserialize, Serialize};

/// An item definition. Items are immutable once the catalog is built;
/// locations and the rider's pack refer to them by id.
///
/// The three effect values are independent. Zero means "no effect of that
/// kind", so a single item may restore fuel, health and condition at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Text shown by `examine`.
    pub description: String,
    /// Whether the item can be picked up.
    #[serde(default = "default_takeable")]
    pub takeable: bool,
    /// Whether the `use` command works on this item.
    #[serde(default)]
    pub useable: bool,
    /// Message printed when the item is used.
    #[serde(default)]
    pub use_message: String,
    /// Alternate names accepted by the command parser.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Fuel restored on use.
    #[serde(default)]
    pub fuel_value: u32,
    /// Health restored on use.
    #[serde(default)]
    pub food_value: u32,
    /// Bike condition restored on use.
    #[serde(default)]
    pub repair_value: u32,
}

fn default_takeable() -> bool {
    true
}

impl Item {
    /// Create a takeable, non-useable item with no effects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            takeable: true,
            useable: false,
            use_message: String::new(),
            aliases: Vec::new(),
            fuel_value: 0,
            food_value: 0,
            repair_value: 0,
        }
    }

    /// Mark the item useable with the given message.
    pub fn useable(mut self, message: impl Into<String>) -> Self {
        self.useable = true;
        self.use_message = message.into();
        self
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Set the alias list.
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Set the fuel value.
    pub fn with_fuel(mut self, value: u32) -> Self {
        self.fuel_value = value;
        self
    }

    /// Set the food (health) value.
    pub fn with_food(mut self, value: u32) -> Self {
        self.food_value = value;
        self
    }

    /// Set the repair value.
    pub fn with_repair(mut self, value: u32) -> Self {
        self.repair_value = value;
        self
    }

    /// Whether `query` names this item.
    ///
    /// `query` must already be lower-cased. It matches when it is a
    /// substring of the display name, equals the id, or equals an alias.
    pub fn matches(&self, id: &str, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || id.to_lowercase() == query
            || self.aliases.iter().any(|a| a.to_lowercase() == query)
    }

    /// Whether the item has any numeric effect.
    pub fn has_effect(&self) -> bool {
        self.fuel_value > 0 || self.food_value > 0 || self.repair_value > 0
    }

    /// Whether `use` consumes the item. Condition-only items survive.
    pub fn consumed_on_use(&self) -> bool {
        self.fuel_value > 0 || self.food_value > 0
    }
}
