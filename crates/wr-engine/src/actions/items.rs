use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::narrator;
use crate::parser::resolve_item;
use crate::session::GameSession;

impl GameSession {
    /// Move an item from the current location into the pack.
    pub(crate) fn take(&mut self, name: &str) -> EngineResult<String> {
        let here = self.current_location()?;
        let id = resolve_item(&self.catalog, name, &here.items)
            .ok_or_else(|| EngineError::NotHere(name.to_string()))?
            .to_string();
        let item = self.item_def(&id)?;
        if !item.takeable {
            return Err(EngineError::CannotTake(item.name.clone()));
        }
        let message = format!("You secure the {} in your pack.", item.name);

        self.current_location_mut()?.remove_item(&id);
        self.traveler.add_item(id.as_str());
        debug!(item = %id, "take");
        Ok(message)
    }

    /// Leave an item from the pack at the current location.
    pub(crate) fn drop_item(&mut self, name: &str) -> EngineResult<String> {
        let id = resolve_item(&self.catalog, name, &self.traveler.inventory)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?
            .to_string();
        let message = format!("You drop the {} here.", self.item_def(&id)?.name);

        self.current_location_mut()?.add_item(id.as_str());
        self.traveler.remove_item(&id);
        debug!(item = %id, "drop");
        Ok(message)
    }

    /// Use an item from the pack, applying every effect it has.
    ///
    /// Items with a fuel or food effect are used up; repair-only items and
    /// the toolkit stay in the pack.
    pub(crate) fn use_item(&mut self, name: &str) -> EngineResult<String> {
        let id = resolve_item(&self.catalog, name, &self.traveler.inventory)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?
            .to_string();
        let item = self.item_def(&id)?.clone();
        if !item.useable {
            return Err(EngineError::NotUseable(item.name));
        }

        let mut output = vec![item.use_message.clone()];
        let rider = &mut self.traveler;
        if item.fuel_value > 0 {
            let gained = rider.fuel.raise(item.fuel_value);
            output.push(format!("Fuel increased by {gained}% (now {})", rider.fuel));
        }
        if item.food_value > 0 {
            let gained = rider.health.raise(item.food_value);
            output.push(format!(
                "Health increased by {gained}% (now {})",
                rider.health
            ));
        }
        if item.repair_value > 0 {
            let gained = rider.condition.raise(item.repair_value);
            output.push(format!(
                "Bike condition improved by {gained}% (now {})",
                rider.condition
            ));
        }

        if item.consumed_on_use() && id != self.config.toolkit {
            self.traveler.remove_item(&id);
        }
        debug!(item = %id, "use");
        Ok(output.join("\n"))
    }

    /// Describe an item in the pack or, failing that, at the location.
    pub(crate) fn examine(&self, name: &str) -> EngineResult<String> {
        let here = self.current_location()?;
        let id = resolve_item(&self.catalog, name, &self.traveler.inventory)
            .or_else(|| resolve_item(&self.catalog, name, &here.items))
            .ok_or_else(|| EngineError::NotVisible(name.to_string()))?;
        Ok(narrator::item_details(self.item_def(id)?))
    }
}
