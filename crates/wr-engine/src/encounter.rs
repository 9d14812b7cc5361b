//! Random encounters in dangerous locations.
//!
//! Each encounter pairs its narrative with an explicit effect. The effect is
//! rolled separately from the narrative, so changing the wording never
//! changes what happens to the rider.

use rand::Rng;
use rand::rngs::StdRng;

use crate::traveler::Traveler;

/// What an encounter does to the rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterEffect {
    /// Narrative only.
    None,
    /// Bike condition loss, uniform in `min..=max`.
    BikeDamage {
        /// Smallest loss.
        min: u32,
        /// Largest loss.
        max: u32,
    },
    /// Health loss, uniform in `min..=max`.
    HealthLoss {
        /// Smallest loss.
        min: u32,
        /// Largest loss.
        max: u32,
    },
}

/// A narrative paired with its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    /// Text shown to the player.
    pub narrative: &'static str,
    /// What happens to the rider.
    pub effect: EncounterEffect,
}

/// Condition lost to raiders or a pothole.
const BIKE_DAMAGE: EncounterEffect = EncounterEffect::BikeDamage { min: 5, max: 15 };
/// Health lost to radiation.
const RADIATION: EncounterEffect = EncounterEffect::HealthLoss { min: 5, max: 10 };

/// The encounter table. Each entry is equally likely.
pub const ENCOUNTERS: [Encounter; 5] = [
    Encounter {
        narrative: "Raiders spot you! You gun the engine and escape, but not without some bike damage.",
        effect: BIKE_DAMAGE,
    },
    Encounter {
        narrative: "You ride through a radiation pocket. You feel sick but push through.",
        effect: RADIATION,
    },
    Encounter {
        narrative: "A dust storm hits! Visibility drops to zero, but you navigate by instinct.",
        effect: EncounterEffect::None,
    },
    Encounter {
        narrative: "A pack of mutant wolves howls in the distance. You rev the engine to scare them off.",
        effect: EncounterEffect::None,
    },
    Encounter {
        narrative: "Your bike hits a pothole hard. The suspension takes a beating.",
        effect: BIKE_DAMAGE,
    },
];

/// What an encounter actually cost the rider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterOutcome {
    /// The narrative that played out.
    pub narrative: &'static str,
    /// Condition actually lost.
    pub condition_lost: u32,
    /// Health actually lost.
    pub health_lost: u32,
}

impl std::fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.narrative)?;
        if self.condition_lost > 0 {
            write!(f, " (-{} condition)", self.condition_lost)?;
        }
        if self.health_lost > 0 {
            write!(f, " (-{} health)", self.health_lost)?;
        }
        Ok(())
    }
}

/// Pick an encounter uniformly from the table.
pub fn roll_encounter(rng: &mut StdRng) -> &'static Encounter {
    &ENCOUNTERS[rng.random_range(0..ENCOUNTERS.len())]
}

impl Encounter {
    /// Apply this encounter's effect to the rider.
    pub fn resolve(&self, rider: &mut Traveler, rng: &mut StdRng) -> EncounterOutcome {
        let mut outcome = EncounterOutcome {
            narrative: self.narrative,
            condition_lost: 0,
            health_lost: 0,
        };
        match self.effect {
            EncounterEffect::None => {}
            EncounterEffect::BikeDamage { min, max } => {
                outcome.condition_lost = rider.condition.lower(rng.random_range(min..=max));
            }
            EncounterEffect::HealthLoss { min, max } => {
                outcome.health_lost = rider.health.lower(rng.random_range(min..=max));
            }
        }
        outcome
    }
}
