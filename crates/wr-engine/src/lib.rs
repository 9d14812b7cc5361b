//! Game engine for Wasteland Rider.
//!
//! Owns the rider's state and the command loop's single step: parse a line
//! of input, dispatch it to an action handler, apply the universal time tick
//! and decide whether the journey has ended. Rendering is plain text; the
//! binary decides how to print it.

/// Action handlers, one file per verb family.
mod actions;
/// Session configuration.
pub mod config;
/// Random encounters in dangerous locations.
pub mod encounter;
/// Error types for the engine.
pub mod error;
/// Text rendering for locations, status and help.
pub mod narrator;
/// Command parsing and item name resolution.
pub mod parser;
/// Save file format.
pub mod persistence;
/// Game-rule constants.
pub mod rules;
/// The game session and its command dispatcher.
pub mod session;
/// Rider state and clamped resource gauges.
pub mod traveler;

pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use parser::{Command, parse_command};
pub use session::{GameSession, GameState, LossCause, Turn};
pub use traveler::{Gauge, Traveler};

#[cfg(test)]
mod fixtures;
