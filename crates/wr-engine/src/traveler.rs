//! Rider state and clamped resource gauges.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::rules::{GAUGE_MAX, MILES_PER_LOCATION};

/// A resource level held in `0..=100`.
///
/// Every constructor and every arithmetic operation clamps, including
/// deserialization, so a gauge is never observed outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Gauge(u32);

impl Gauge {
    /// A gauge at 100.
    pub const FULL: Self = Self(GAUGE_MAX);

    /// A gauge at 0.
    pub const EMPTY: Self = Self(0);

    /// Create a gauge, clamping `value` into range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, i64::from(GAUGE_MAX)) as u32)
    }

    /// Current level.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether the gauge reads zero.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add up to `amount`, capped at 100. Returns the amount actually added.
    pub fn raise(&mut self, amount: u32) -> u32 {
        let before = self.0;
        self.0 = self.0.saturating_add(amount).min(GAUGE_MAX);
        self.0 - before
    }

    /// Remove up to `amount`, floored at 0. Returns the amount actually removed.
    pub fn lower(&mut self, amount: u32) -> u32 {
        let before = self.0;
        self.0 = self.0.saturating_sub(amount);
        before - self.0
    }

    /// Fill level as a 10-cell bar.
    pub fn bar(self) -> String {
        let filled = (self.0 / 10) as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }
}

impl From<i64> for Gauge {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Gauge> for i64 {
    fn from(gauge: Gauge) -> Self {
        i64::from(gauge.0)
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The rider: pack, position and the three depleting resources.
///
/// Field names match the save file's `rider` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Traveler {
    /// Item ids in pickup order. Duplicates are allowed.
    pub inventory: Vec<String>,
    /// Id of the location the rider is at.
    pub current_location: String,
    /// Rider health.
    pub health: Gauge,
    /// Fuel in the tank.
    pub fuel: Gauge,
    /// Mechanical condition of the bike.
    #[serde(rename = "bike_condition")]
    pub condition: Gauge,
    /// Miles credited for newly visited locations.
    pub miles_traveled: u32,
    /// Elapsed days, kept to one decimal place.
    pub days_survived: f64,
}

impl Traveler {
    /// Create a rider from the session's starting values.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            inventory: config.starting_inventory.clone(),
            current_location: config.start_location.clone(),
            health: Gauge::new(i64::from(config.starting_health)),
            fuel: Gauge::new(i64::from(config.starting_fuel)),
            condition: Gauge::new(i64::from(config.starting_condition)),
            miles_traveled: 0,
            days_survived: 0.0,
        }
    }

    /// Check if the rider carries an item.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// Put an item in the pack.
    pub fn add_item(&mut self, item_id: impl Into<String>) {
        self.inventory.push(item_id.into());
    }

    /// Remove the first copy of an item. Returns whether one was carried.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|id| id == item_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Advance the day counter.
    pub fn pass_time(&mut self, days: f64) {
        self.days_survived = ((self.days_survived + days) * 10.0).round() / 10.0;
    }

    /// Whole days survived.
    pub fn whole_days(&self) -> u32 {
        self.days_survived.floor() as u32
    }

    /// Credit the mileage for reaching a location for the first time.
    pub fn record_first_visit(&mut self) {
        self.miles_traveled = self.miles_traveled.saturating_add(MILES_PER_LOCATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rider() -> Traveler {
        Traveler::new(&GameConfig::default())
    }

    #[test]
    fn starting_state() {
        let t = rider();
        assert_eq!(t.inventory, vec!["toolkit", "water_bottle", "jerky"]);
        assert_eq!(t.current_location, "dc_ruins");
        assert_eq!(t.health, Gauge::FULL);
        assert_eq!(t.fuel.value(), 50);
        assert_eq!(t.condition, Gauge::FULL);
        assert_eq!(t.miles_traveled, 0);
        assert_eq!(t.whole_days(), 0);
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut t = rider();
        t.add_item("jerky");
        assert_eq!(t.inventory.iter().filter(|i| *i == "jerky").count(), 2);

        assert!(t.remove_item("jerky"));
        assert!(t.has_item("jerky"));
        assert!(t.remove_item("jerky"));
        assert!(!t.has_item("jerky"));
        assert!(!t.remove_item("jerky"));
    }

    #[test]
    fn gauge_reports_actual_change() {
        let mut g = Gauge::new(90);
        assert_eq!(g.raise(25), 10);
        assert_eq!(g, Gauge::FULL);
        assert_eq!(g.lower(30), 30);
        assert_eq!(g.lower(500), 70);
        assert!(g.is_empty());
    }

    #[test]
    fn gauge_bar() {
        assert_eq!(Gauge::new(40).bar(), "████░░░░░░");
        assert_eq!(Gauge::FULL.bar(), "██████████");
        assert_eq!(Gauge::EMPTY.bar(), "░░░░░░░░░░");
    }

    #[test]
    fn gauge_deserialization_clamps() {
        let g: Gauge = serde_json::from_str("250").unwrap();
        assert_eq!(g, Gauge::FULL);
        let g: Gauge = serde_json::from_str("-4").unwrap();
        assert_eq!(g, Gauge::EMPTY);
        assert_eq!(serde_json::to_string(&Gauge::new(42)).unwrap(), "42");
    }

    #[test]
    fn day_counter_stays_on_tenths() {
        let mut t = rider();
        for _ in 0..10 {
            t.pass_time(0.1);
        }
        assert_eq!(t.days_survived, 1.0);
        assert_eq!(t.whole_days(), 1);
    }

    #[test]
    fn first_visit_adds_miles() {
        let mut t = rider();
        t.record_first_visit();
        t.record_first_visit();
        assert_eq!(t.miles_traveled, 100);
    }

    #[test]
    fn rider_field_names_in_json() {
        let json = serde_json::to_value(rider()).unwrap();
        for key in [
            "inventory",
            "current_location",
            "health",
            "fuel",
            "bike_condition",
            "miles_traveled",
            "days_survived",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    proptest! {
        #[test]
        fn gauge_new_in_range(value in any::<i64>()) {
            prop_assert!(Gauge::new(value).value() <= 100);
        }

        #[test]
        fn gauge_ops_stay_in_range(
            start in any::<i64>(),
            ops in proptest::collection::vec((any::<bool>(), any::<u32>()), 0..32),
        ) {
            let mut g = Gauge::new(start);
            for (up, amount) in ops {
                let before = g.value();
                if up {
                    let gained = g.raise(amount);
                    prop_assert_eq!(g.value(), before + gained);
                } else {
                    let lost = g.lower(amount);
                    prop_assert_eq!(g.value(), before - lost);
                }
                prop_assert!(g.value() <= 100);
            }
        }
    }
}
