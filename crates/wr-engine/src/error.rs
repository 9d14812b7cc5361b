//! Error types for the game engine.
//!
//! Most variants are in-game failures: the handler did nothing and the
//! message is shown to the player. Only session construction errors are
//! fatal to the caller.

use std::path::PathBuf;

use thiserror::Error;
use wr_core::CatalogError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session already ended in a win or loss.
    #[error("The journey is over.")]
    SessionOver,

    /// A location id does not exist in the catalog.
    #[error("location not found: \"{0}\"")]
    LocationNotFound(String),

    /// An item id has no definition in the catalog.
    #[error("unknown item: \"{0}\"")]
    UnknownItem(String),

    /// The world data is inconsistent.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No exit in the requested direction.
    #[error("You can't ride {0} from here. Check your map and try a different route.")]
    NoExit(String),

    /// Not enough fuel to leave through an exit.
    #[error("You don't have enough fuel to travel {direction}. Need {needed} fuel, but only have {available}.")]
    NotEnoughFuel {
        /// Requested direction.
        direction: String,
        /// Fuel cost of leaving.
        needed: u32,
        /// Fuel in the tank.
        available: u32,
    },

    /// The named item is not at the current location.
    #[error("There's no {0} here to take.")]
    NotHere(String),

    /// The item is fixed in place.
    #[error("You can't take the {0}.")]
    CannotTake(String),

    /// The named item is not in the pack.
    #[error("You don't have any {0}.")]
    NotCarrying(String),

    /// The named item is neither carried nor at the current location.
    #[error("You don't see a {0} here.")]
    NotVisible(String),

    /// The item has no fuel value.
    #[error("The {0} can't be used as fuel.")]
    NotFuel(String),

    /// The item has no repair value.
    #[error("The {0} can't be used for repairs.")]
    NotRepair(String),

    /// The item is not useable.
    #[error("You can't use the {0} right now.")]
    NotUseable(String),

    /// No save file exists.
    #[error("No saved game found.")]
    NoSavedGame,

    /// Reading or writing the save file failed.
    #[error("Error accessing save file {}: {source}", path.display())]
    SaveIo {
        /// Save file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The save file could not be encoded or decoded.
    #[error("Saved game data is unreadable: {0}")]
    CorruptSave(#[from] serde_json::Error),

    /// The save file does not fit the loaded world.
    #[error("Saved game does not match this world: {0}")]
    InvalidSave(#[source] CatalogError),
}
