//! Core types for Wasteland Rider: items, locations, and the world catalog.
//!
//! This crate defines the static world data the game runs on. It knows
//! nothing about the rider or the command loop. A [`Catalog`] is either
//! loaded from a JSON world file or built from the bundled default world.

/// The world catalog: location and item tables plus the loader.
pub mod catalog;
/// The bundled opening leg of the journey.
pub mod default_world;
/// Error types used throughout the crate.
pub mod error;
/// Item definitions.
pub mod item;
/// Location records and the exit graph.
pub mod location;

/// Re-export catalog types.
pub use catalog::{Catalog, WorldSource};
/// Re-export the default world builder.
pub use default_world::default_world;
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export item types.
pub use item::Item;
/// Re-export location types.
pub use location::Location;
