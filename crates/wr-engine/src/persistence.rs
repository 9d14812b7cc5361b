//! Save file format.
//!
//! A save holds the rider and the full location table. Item definitions
//! are never saved; a save is only meaningful against the world it came
//! from, so `restore` validates it before anything is replaced.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wr_core::{Catalog, Location};

use crate::error::{EngineError, EngineResult};
use crate::traveler::Traveler;

/// On-disk save document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveGame {
    /// The rider's full state.
    pub rider: Traveler,
    /// Every location record, including item lists and visited flags.
    pub locations: BTreeMap<String, Location>,
}

impl SaveGame {
    /// Snapshot the rider and the catalog's locations.
    pub fn capture(rider: &Traveler, catalog: &Catalog) -> Self {
        Self {
            rider: rider.clone(),
            locations: catalog.locations().clone(),
        }
    }

    /// Write the save to `path`, replacing any existing file.
    ///
    /// The document is encoded before the file is touched, so an encoding
    /// failure leaves a previous save intact.
    pub fn write(&self, path: &Path) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| EngineError::SaveIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "game saved");
        Ok(())
    }

    /// Read a save from `path`.
    pub fn read(path: &Path) -> EngineResult<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no save file");
                return Err(EngineError::NoSavedGame);
            }
            Err(source) => {
                return Err(EngineError::SaveIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(serde_json::from_str(&json)?)
    }

    /// Apply the save to a copy of `base`.
    ///
    /// Saved locations replace their counterparts wholesale; item
    /// definitions come from `base`. Fails without side effects if the
    /// result would reference unknown items or locations.
    pub fn restore(self, base: &Catalog) -> EngineResult<(Catalog, Traveler)> {
        let mut catalog = base.clone();
        catalog.replace_locations(self.locations);
        catalog.validate().map_err(EngineError::InvalidSave)?;
        catalog
            .validate_inventory(&self.rider.inventory)
            .map_err(EngineError::InvalidSave)?;
        if !catalog.contains_location(&self.rider.current_location) {
            return Err(EngineError::InvalidSave(
                wr_core::CatalogError::LocationNotFound(self.rider.current_location.clone()),
            ));
        }
        Ok((catalog, self.rider))
    }
}
