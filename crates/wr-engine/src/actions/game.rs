use tracing::info;

use crate::error::EngineResult;
use crate::persistence::SaveGame;
use crate::session::GameSession;

impl GameSession {
    /// Write the rider and the location table to the save file.
    pub(crate) fn save(&self) -> EngineResult<String> {
        SaveGame::capture(&self.traveler, &self.catalog).write(&self.config.save_path)?;
        Ok("Game saved successfully!".to_string())
    }

    /// Replace the rider and location table from the save file.
    ///
    /// The save is checked against this world before anything changes, so
    /// a failed load leaves the session as it was.
    pub(crate) fn load(&mut self) -> EngineResult<String> {
        let (catalog, traveler) = SaveGame::read(&self.config.save_path)?.restore(&self.catalog)?;
        self.catalog = catalog;
        self.traveler = traveler;
        info!(
            path = %self.config.save_path.display(),
            location = %self.traveler.current_location,
            "game loaded"
        );

        let view = self.render_current()?;
        Ok(format!("Game loaded successfully!\n{view}"))
    }
}
