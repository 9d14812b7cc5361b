use rand::Rng;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::parser::resolve_item;
use crate::rules::{REST_DAYS, REST_FUEL_COST, REST_HEAL};
use crate::session::GameSession;

impl GameSession {
    /// Pour a fuel item into the tank. The item is used up.
    pub(crate) fn refuel(&mut self, name: &str) -> EngineResult<String> {
        let id = resolve_item(&self.catalog, name, &self.traveler.inventory)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?
            .to_string();
        let item = self.item_def(&id)?;
        if item.fuel_value == 0 {
            return Err(EngineError::NotFuel(item.name.clone()));
        }
        let amount = item.fuel_value;

        let gained = self.traveler.fuel.raise(amount);
        self.traveler.remove_item(&id);
        debug!(item = %id, gained, "refuel");
        Ok(format!(
            "You add fuel to your tank (+{gained} fuel)\nCurrent fuel: {}",
            self.traveler.fuel
        ))
    }

    /// Repair the bike. Every repair item except the toolkit is used up.
    pub(crate) fn repair(&mut self, name: &str) -> EngineResult<String> {
        let id = resolve_item(&self.catalog, name, &self.traveler.inventory)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?
            .to_string();
        let item = self.item_def(&id)?;
        if item.repair_value == 0 {
            return Err(EngineError::NotRepair(item.name.clone()));
        }
        let amount = item.repair_value;
        let first_line = if id == self.config.toolkit {
            "You perform maintenance with your toolkit.".to_string()
        } else {
            format!("You use the {} to repair your bike.", item.name)
        };

        let gained = self.traveler.condition.raise(amount);
        if id != self.config.toolkit {
            self.traveler.remove_item(&id);
        }
        debug!(item = %id, gained, "repair");
        Ok(format!(
            "{first_line}\nBike condition improved by {gained}% (now {})",
            self.traveler.condition
        ))
    }

    /// Camp for the night: heal, burn some idle fuel and lose a day.
    pub(crate) fn rest(&mut self) -> String {
        let healed = self
            .traveler
            .health
            .raise(self.rng.random_range(REST_HEAL));
        let burned = self.traveler.fuel.lower(REST_FUEL_COST);
        self.traveler.pass_time(REST_DAYS);
        debug!(healed, burned, "rest");

        format!(
            "You make camp and rest for the night...\n\
             The wasteland is quiet except for distant howls and the wind.\n\
             You feel refreshed (+{healed} health)\n\
             Your bike used some fuel overnight (-{burned} fuel)"
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::fixtures::session;
    use crate::traveler::Gauge;

    #[test]
    fn refuel_reports_actual_gain() {
        let mut s = session();
        s.take("gas").unwrap();
        s.traveler.fuel = Gauge::new(90);

        let text = s.refuel("gas").unwrap();
        assert!(text.contains("(+10 fuel)"));
        assert!(text.contains("Current fuel: 100%"));
        assert!(!s.traveler().has_item("gas_can"));
    }

    #[test]
    fn refuel_failures_are_distinct() {
        let mut s = session();
        assert!(matches!(
            s.refuel("gas"),
            Err(EngineError::NotCarrying(_))
        ));
        let err = s.refuel("water").unwrap_err();
        assert_eq!(err.to_string(), "The Water Bottle can't be used as fuel.");
        assert!(s.traveler().has_item("water"));
    }

    #[test]
    fn repair_with_toolkit_keeps_it() {
        let mut s = session();
        s.traveler.condition = Gauge::new(40);

        let text = s.repair("tools").unwrap();
        assert!(text.starts_with("You perform maintenance"));
        assert!(text.contains("improved by 15% (now 55%)"));
        assert!(s.traveler().has_item("toolkit"));
    }

    #[test]
    fn repair_with_part_consumes_it() {
        let mut s = session();
        s.take("tire").unwrap();
        s.traveler.condition = Gauge::new(90);

        let text = s.repair("spare").unwrap();
        assert!(text.contains("You use the Spare Tire"));
        assert!(text.contains("improved by 10%"));
        assert!(!s.traveler().has_item("tire"));
    }

    #[test]
    fn repair_with_non_part_fails() {
        let mut s = session();
        assert!(matches!(
            s.repair("water"),
            Err(EngineError::NotRepair(_))
        ));
    }

    #[test]
    fn rest_heals_burns_fuel_and_takes_a_day() {
        let mut s = session();
        s.traveler.health = Gauge::new(50);

        s.rest();
        let health = s.traveler().health.value();
        assert!((60..=70).contains(&health));
        assert_eq!(s.traveler().fuel.value(), 48);
        assert!((s.traveler().days_survived - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rest_with_little_fuel_floors_at_zero() {
        let mut s = session();
        s.traveler.fuel = Gauge::new(1);
        let text = s.rest();
        assert!(s.traveler().fuel.is_empty());
        assert!(text.contains("(-1 fuel)"));
    }
}
