use rand::Rng;
use tracing::info;

use crate::encounter::roll_encounter;
use crate::error::{EngineError, EngineResult};
use crate::parser::normalize_direction;
use crate::rules::{ROUGH_TERRAIN_DAMAGE, ROUGH_TERRAIN_THRESHOLD};
use crate::session::{GameSession, GameState};

impl GameSession {
    /// Ride through the exit in `direction`.
    ///
    /// Leaving costs the current location's fuel; nothing changes if the
    /// tank can't cover it. Costs above the rough-terrain threshold damage
    /// the bike, and dangerous destinations may trigger an encounter.
    pub(crate) fn ride(&mut self, direction: &str) -> EngineResult<String> {
        let direction = normalize_direction(direction);
        let here = self.current_location()?;
        let destination = here
            .exit(&direction)
            .ok_or_else(|| EngineError::NoExit(direction.clone()))?
            .to_string();
        let cost = here.fuel_cost;

        let available = self.traveler.fuel.value();
        if available < cost {
            return Err(EngineError::NotEnoughFuel {
                direction,
                needed: cost,
                available,
            });
        }

        let mut output = Vec::new();
        self.traveler.fuel.lower(cost);
        if cost > ROUGH_TERRAIN_THRESHOLD {
            let damage = self
                .traveler
                .condition
                .lower(self.rng.random_range(ROUGH_TERRAIN_DAMAGE));
            output.push(format!(
                "The rough terrain damages your bike (-{damage} condition)"
            ));
        }

        info!(
            from = %self.traveler.current_location,
            to = %destination,
            fuel = self.traveler.fuel.value(),
            "ride"
        );
        self.traveler.current_location = destination;
        output.push(format!(
            "You ride {direction}, engine roaring across the wasteland..."
        ));

        if self.current_location()?.dangerous && self.rng.random_bool(self.config.encounter_chance)
        {
            let encounter = roll_encounter(&mut self.rng);
            let outcome = encounter.resolve(&mut self.traveler, &mut self.rng);
            info!(
                condition_lost = outcome.condition_lost,
                health_lost = outcome.health_lost,
                "encounter"
            );
            output.push(outcome.to_string());
        }

        output.push(self.render_current()?);

        if self.traveler.current_location == self.config.victory_location {
            self.state = GameState::Won;
            info!(
                miles = self.traveler.miles_traveled,
                days = self.traveler.days_survived,
                "journey won"
            );
        }

        Ok(output.join("\n"))
    }
}
