//! Configuration for a game session.

use std::path::{Path, PathBuf};

use crate::rules::{ENCOUNTER_CHANCE, GAUGE_MAX};

/// Default world file name, looked up in the working directory.
pub const DEFAULT_WORLD_FILE: &str = "wasteland.json";

/// Default save file name, written to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "wasteland_save.json";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Where `save` and `load` read and write.
    pub save_path: PathBuf,
    /// RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Location id the rider starts at.
    pub start_location: String,
    /// Item ids the rider starts with.
    pub starting_inventory: Vec<String>,
    /// Starting fuel (clamped to 0-100).
    pub starting_fuel: u32,
    /// Starting health (clamped to 0-100).
    pub starting_health: u32,
    /// Starting bike condition (clamped to 0-100).
    pub starting_condition: u32,
    /// Arriving here wins the game.
    pub victory_location: String,
    /// Item id of the reusable toolkit, which is never consumed.
    pub toolkit: String,
    /// Probability (0.0-1.0) of an encounter at a dangerous location.
    pub encounter_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            seed: None,
            start_location: "dc_ruins".to_string(),
            starting_inventory: vec![
                "toolkit".to_string(),
                "water_bottle".to_string(),
                "jerky".to_string(),
            ],
            starting_fuel: 50,
            starting_health: GAUGE_MAX,
            starting_condition: GAUGE_MAX,
            victory_location: "los_angeles".to_string(),
            toolkit: "toolkit".to_string(),
            encounter_chance: ENCOUNTER_CHANCE,
        }
    }
}

impl GameConfig {
    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl AsRef<Path>) -> Self {
        self.save_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting location.
    pub fn with_start(mut self, location: impl Into<String>) -> Self {
        self.start_location = location.into();
        self
    }

    /// Set the starting inventory.
    pub fn with_inventory(mut self, items: &[&str]) -> Self {
        self.starting_inventory = items.iter().map(|i| i.to_string()).collect();
        self
    }

    /// Set the starting fuel (clamped to 0-100).
    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.starting_fuel = fuel.min(GAUGE_MAX);
        self
    }

    /// Set the victory location.
    pub fn with_victory(mut self, location: impl Into<String>) -> Self {
        self.victory_location = location.into();
        self
    }

    /// Set the encounter probability (clamped to 0.0-1.0).
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }
}
