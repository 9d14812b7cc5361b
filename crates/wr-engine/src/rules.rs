//! Game-rule constants.

use std::ops::RangeInclusive;

/// Upper bound of every resource gauge.
pub const GAUGE_MAX: u32 = 100;

/// Miles credited the first time a location is rendered.
pub const MILES_PER_LOCATION: u32 = 50;

/// Days that pass with every command, recognized or not.
pub const DAY_TICK: f64 = 0.1;

/// Exits costing more fuel than this damage the bike.
pub const ROUGH_TERRAIN_THRESHOLD: u32 = 3;

/// Condition lost on rough terrain.
pub const ROUGH_TERRAIN_DAMAGE: RangeInclusive<u32> = 1..=5;

/// Probability of an encounter on arrival at a dangerous location.
pub const ENCOUNTER_CHANCE: f64 = 0.3;

/// Health restored by resting.
pub const REST_HEAL: RangeInclusive<u32> = 10..=20;

/// Fuel the bike burns overnight.
pub const REST_FUEL_COST: u32 = 2;

/// Days a rest takes, on top of the command tick.
pub const REST_DAYS: f64 = 1.0;

/// Length of the whole journey, used for the distance estimate.
pub const JOURNEY_MILES: u32 = 2500;
