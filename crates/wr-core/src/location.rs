use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A place on the map.
///
/// `items` and `visited` are the only fields that change during play; both
/// round-trip through the save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    /// Display name.
    pub name: String,
    /// Text shown when the location is rendered.
    pub description: String,
    /// Direction label to destination location id.
    pub exits: BTreeMap<String, String>,
    /// Ids of the items lying here, in drop order.
    #[serde(default)]
    pub items: Vec<String>,
    /// Set the first time the location is rendered.
    #[serde(default)]
    pub visited: bool,
    /// Enables random encounters on arrival.
    #[serde(default)]
    pub dangerous: bool,
    /// Fuel charged to leave through any exit.
    #[serde(default = "default_fuel_cost")]
    pub fuel_cost: u32,
}

fn default_fuel_cost() -> u32 {
    1
}

impl Location {
    /// Create a safe location with no exits, no items and a fuel cost of 1.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            visited: false,
            dangerous: false,
            fuel_cost: default_fuel_cost(),
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), to.into());
        self
    }

    /// Place items here.
    pub fn with_items(mut self, items: &[&str]) -> Self {
        self.items.extend(items.iter().map(|i| i.to_string()));
        self
    }

    /// Set the fuel cost to leave.
    pub fn with_fuel_cost(mut self, cost: u32) -> Self {
        self.fuel_cost = cost;
        self
    }

    /// Flag the location as dangerous.
    pub fn dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    /// Destination of the exit in `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    /// Direction labels of all exits.
    pub fn routes(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Remove the first occurrence of `item_id`. Returns whether it was here.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|id| id == item_id) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Leave an item here.
    pub fn add_item(&mut self, item_id: impl Into<String>) {
        self.items.push(item_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let loc = Location::new("Bridge", "Creaky.")
            .with_exit("north", "city")
            .with_items(&["pills"])
            .with_fuel_cost(2)
            .dangerous();

        assert_eq!(loc.exit("north"), Some("city"));
        assert_eq!(loc.exit("south"), None);
        assert_eq!(loc.items, vec!["pills"]);
        assert_eq!(loc.fuel_cost, 2);
        assert!(loc.dangerous);
        assert!(!loc.visited);
    }

    #[test]
    fn item_list_management() {
        let mut loc = Location::new("Yard", "Junk.").with_items(&["tire", "can", "tire"]);

        assert!(loc.remove_item("tire"));
        assert_eq!(loc.items, vec!["can", "tire"]);
        assert!(!loc.remove_item("flag"));

        loc.add_item("flag");
        assert_eq!(loc.items, vec!["can", "tire", "flag"]);
    }

    #[test]
    fn defaults_when_fields_absent() {
        let loc: Location = serde_json::from_str(
            r#"{"name": "Field", "description": "Flat.", "exits": {"east": "road"}}"#,
        )
        .unwrap();
        assert!(loc.items.is_empty());
        assert!(!loc.visited);
        assert!(!loc.dangerous);
        assert_eq!(loc.fuel_cost, 1);
        assert_eq!(loc.routes(), vec!["east"]);
    }

    #[test]
    fn missing_exits_rejected() {
        let result: Result<Location, _> =
            serde_json::from_str(r#"{"name": "Field", "description": "Flat."}"#);
        assert!(result.is_err());
    }
}
