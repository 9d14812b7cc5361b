use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::default_world::default_world;
use crate::error::{CatalogError, CatalogResult};
use crate::item::Item;
use crate::location::Location;

/// Where a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldSource {
    /// Parsed from a world file.
    File(PathBuf),
    /// The bundled default world (no readable world file was present).
    BuiltIn,
}

impl std::fmt::Display for WorldSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "built-in default world"),
        }
    }
}

/// The world catalog. Owns every location and item definition.
///
/// Item definitions never change after construction. Locations change only
/// through their item lists and visited flags, or wholesale when a saved
/// game is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    locations: BTreeMap<String, Location>,
    #[serde(default)]
    items: BTreeMap<String, Item>,
}

impl Catalog {
    /// Build a catalog from its two tables. Does not validate.
    pub fn new(locations: BTreeMap<String, Location>, items: BTreeMap<String, Item>) -> Self {
        Self { locations, items }
    }

    /// Parse and validate a JSON world document.
    pub fn from_json(source: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the world file at `path`, or the default world if the file is
    /// missing or can't be read. A file that reads but fails to parse or
    /// validate is an error.
    pub fn load_or_default(path: &Path) -> CatalogResult<(Self, WorldSource)> {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "world file not found, using default world");
                return Ok((default_world(), WorldSource::BuiltIn));
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "world file unreadable, using default world"
                );
                return Ok((default_world(), WorldSource::BuiltIn));
            }
        };

        let catalog = Self::from_json(&source)?;
        info!(
            path = %path.display(),
            locations = catalog.locations.len(),
            items = catalog.items.len(),
            "loaded world file"
        );
        Ok((catalog, WorldSource::File(path.to_path_buf())))
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a location by id.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Get a mutable location by id.
    pub fn location_mut(&mut self, id: &str) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    /// Get an item definition by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Whether a location with this id exists.
    pub fn contains_location(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Whether an item with this id exists.
    pub fn contains_item(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// The full location table.
    pub fn locations(&self) -> &BTreeMap<String, Location> {
        &self.locations
    }

    /// The item-definition table.
    pub fn items(&self) -> &BTreeMap<String, Item> {
        &self.items
    }

    /// Display name of an item, falling back to its id.
    pub fn item_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map_or(id, |item| item.name.as_str())
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace location records wholesale, keyed by id. Locations not in
    /// `locations` are left as they are. Item definitions are untouched.
    pub fn replace_locations(&mut self, locations: BTreeMap<String, Location>) {
        self.locations.extend(locations);
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check referential integrity: every exit leads to a known location and
    /// every item in a location list has a definition.
    pub fn validate(&self) -> CatalogResult<()> {
        for (id, location) in &self.locations {
            for (direction, to) in &location.exits {
                if !self.locations.contains_key(to) {
                    return Err(CatalogError::DanglingExit {
                        from: id.clone(),
                        direction: direction.clone(),
                        to: to.clone(),
                    });
                }
            }
            for item in &location.items {
                if !self.contains_item(item) {
                    return Err(CatalogError::UnknownItem {
                        item: item.clone(),
                        owner: format!("location \"{id}\""),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that every id in a rider's inventory has a definition.
    pub fn validate_inventory(&self, inventory: &[String]) -> CatalogResult<()> {
        match inventory.iter().find(|id| !self.contains_item(id)) {
            Some(item) => Err(CatalogError::UnknownItem {
                item: item.clone(),
                owner: "the rider's pack".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Every location reachable from `start` along exits, including `start`.
    pub fn reachable_from(&self, start: &str) -> CatalogResult<BTreeSet<&str>> {
        let (start, _) = self
            .locations
            .get_key_value(start)
            .ok_or_else(|| CatalogError::LocationNotFound(start.to_string()))?;

        let mut seen = BTreeSet::from([start.as_str()]);
        let mut queue = VecDeque::from([start.as_str()]);

        while let Some(current) = queue.pop_front() {
            let Some(location) = self.locations.get(current) else {
                continue;
            };
            for to in location.exits.values() {
                if seen.insert(to.as_str()) {
                    queue.push_back(to.as_str());
                }
            }
        }

        Ok(seen)
    }
}
