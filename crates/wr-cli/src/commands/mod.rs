pub mod check;
pub mod play;

use std::path::Path;

use wr_core::{Catalog, WorldSource};

/// Load the world file, or the built-in world when it doesn't exist.
fn load_world(path: &Path) -> Result<(Catalog, WorldSource), String> {
    Catalog::load_or_default(path).map_err(|e| format!("invalid world file: {e}"))
}
