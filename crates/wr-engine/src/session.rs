//! The game session and its command dispatcher.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wr_core::{Catalog, Item, Location};

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::narrator;
use crate::parser::{Command, parse_command};
use crate::rules::DAY_TICK;
use crate::traveler::Traveler;

/// Whether the journey is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Commands are accepted.
    Playing,
    /// The rider reached the victory location.
    Won,
    /// A critical resource ran out.
    Lost {
        /// Which resource.
        cause: LossCause,
    },
}

/// Why the journey ended in a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Fuel reached zero.
    OutOfFuel,
    /// Bike condition reached zero.
    BrokenDown,
}

impl std::fmt::Display for LossCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfFuel => write!(f, "out of fuel"),
            Self::BrokenDown => write!(f, "broken down"),
        }
    }
}

/// The outcome of one processed line of input.
#[derive(Debug)]
pub struct Turn {
    /// Handler output, or the in-game failure to show the player.
    pub result: EngineResult<String>,
    /// Set when this turn ended the journey: the win or loss narrative.
    pub ending: Option<String>,
    /// The player asked to quit.
    pub quit: bool,
}

impl Turn {
    /// Whether the loop should stop after this turn.
    pub fn is_final(&self) -> bool {
        self.quit || self.ending.is_some()
    }
}

/// A single playthrough.
///
/// Owns the world catalog, the rider and the RNG. The loop feeds it one
/// line at a time through [`GameSession::process`].
pub struct GameSession {
    pub(crate) catalog: Catalog,
    pub(crate) traveler: Traveler,
    pub(crate) state: GameState,
    pub(crate) config: GameConfig,
    pub(crate) rng: StdRng,
}

impl GameSession {
    /// Create a session over `catalog`.
    ///
    /// Fails if the configured start location or any starting item is not
    /// in the catalog.
    pub fn new(catalog: Catalog, config: GameConfig) -> EngineResult<Self> {
        catalog.validate()?;
        if !catalog.contains_location(&config.start_location) {
            return Err(EngineError::LocationNotFound(config.start_location.clone()));
        }
        catalog.validate_inventory(&config.starting_inventory)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let traveler = Traveler::new(&config);
        debug!(start = %config.start_location, seed = ?config.seed, "new session");

        Ok(Self {
            catalog,
            traveler,
            state: GameState::Playing,
            config,
            rng,
        })
    }

    /// The world catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The rider.
    pub fn traveler(&self) -> &Traveler {
        &self.traveler
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the session has ended in a win or loss.
    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Render the current location. The first render of a location marks
    /// it visited and credits the mileage.
    pub fn look(&mut self) -> EngineResult<String> {
        self.render_current()
    }

    /// Process one line of input.
    ///
    /// Every accepted line advances the day counter, whether or not the
    /// command is recognized or succeeds. Afterwards the resource check runs
    /// unless the command won the game or quit. A session that is already
    /// over refuses input without ticking.
    pub fn process(&mut self, input: &str) -> Turn {
        if self.is_over() {
            return Turn {
                result: Err(EngineError::SessionOver),
                ending: None,
                quit: false,
            };
        }

        let command = parse_command(input);
        let quit = command == Command::Quit;
        self.traveler.pass_time(DAY_TICK);
        let result = self.execute(command);

        let ending = match self.state {
            GameState::Won => Some(narrator::victory(&self.traveler)),
            GameState::Playing if !quit => self
                .check_resources()
                .map(|cause| narrator::defeat(cause, &self.traveler)),
            _ => None,
        };

        Turn {
            result,
            ending,
            quit,
        }
    }

    /// Execute a parsed command. Does not tick the clock or check
    /// resources; use [`GameSession::process`] for a full turn.
    pub fn execute(&mut self, command: Command) -> EngineResult<String> {
        if self.is_over() {
            return Err(EngineError::SessionOver);
        }

        match command {
            Command::Move { direction } => self.ride(&direction),
            Command::Take { item } => self.take(&item),
            Command::Drop { item } => self.drop_item(&item),
            Command::Use { item } => self.use_item(&item),
            Command::Refuel { item } => self.refuel(&item),
            Command::Repair { item } => self.repair(&item),
            Command::Rest => Ok(self.rest()),
            Command::Look => self.look(),
            Command::Inventory => Ok(self.inventory()),
            Command::Examine { item } => self.examine(&item),
            Command::Status => self.status(),
            Command::Help { topic } => Ok(narrator::help(topic.as_deref())),
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Quit => Ok("Safe travels, wasteland rider!".to_string()),
            Command::Empty => Ok(String::new()),
            Command::Unknown { input } => Ok(self.reject(&input)),
        }
    }

    // -----------------------------------------------------------------------
    // Shared helpers for the action handlers
    // -----------------------------------------------------------------------

    pub(crate) fn current_location(&self) -> EngineResult<&Location> {
        let id = &self.traveler.current_location;
        self.catalog
            .location(id)
            .ok_or_else(|| EngineError::LocationNotFound(id.clone()))
    }

    pub(crate) fn current_location_mut(&mut self) -> EngineResult<&mut Location> {
        let id = &self.traveler.current_location;
        self.catalog
            .location_mut(id)
            .ok_or_else(|| EngineError::LocationNotFound(id.clone()))
    }

    pub(crate) fn item_def(&self, id: &str) -> EngineResult<&Item> {
        self.catalog
            .item(id)
            .ok_or_else(|| EngineError::UnknownItem(id.to_string()))
    }

    pub(crate) fn render_current(&mut self) -> EngineResult<String> {
        let id = &self.traveler.current_location;
        let location = self
            .catalog
            .location_mut(id)
            .ok_or_else(|| EngineError::LocationNotFound(id.clone()))?;
        if !location.visited {
            location.visited = true;
            self.traveler.record_first_visit();
            debug!(
                location = %self.traveler.current_location,
                miles = self.traveler.miles_traveled,
                "first visit"
            );
        }

        let location = self.current_location()?;
        Ok(narrator::describe_location(
            location,
            &self.catalog,
            &self.traveler,
        ))
    }

    fn check_resources(&mut self) -> Option<LossCause> {
        let cause = if self.traveler.fuel.is_empty() {
            LossCause::OutOfFuel
        } else if self.traveler.condition.is_empty() {
            LossCause::BrokenDown
        } else {
            return None;
        };

        self.state = GameState::Lost { cause };
        info!(
            %cause,
            miles = self.traveler.miles_traveled,
            days = self.traveler.days_survived,
            "journey lost"
        );
        Some(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use crate::traveler::Gauge;

    #[test]
    fn new_rejects_unknown_start() {
        let catalog = Catalog::from_json(TEST_WORLD).unwrap();
        let result = GameSession::new(catalog, config().with_start("atlantis"));
        assert!(matches!(result, Err(EngineError::LocationNotFound(_))));
    }

    #[test]
    fn new_rejects_unknown_starting_item() {
        let catalog = Catalog::from_json(TEST_WORLD).unwrap();
        let result = GameSession::new(catalog, config().with_inventory(&["jetpack"]));
        assert!(matches!(result, Err(EngineError::Catalog(_))));
    }

    #[test]
    fn first_look_credits_miles_once() {
        let mut s = session();
        assert_eq!(s.traveler().miles_traveled, 0);

        let text = s.look().unwrap();
        assert!(text.contains("Base Camp"));
        assert_eq!(s.traveler().miles_traveled, 50);
        assert!(s.catalog().location("camp").unwrap().visited);

        s.look().unwrap();
        assert_eq!(s.traveler().miles_traveled, 50);
    }

    #[test]
    fn every_command_ticks() {
        let mut s = session();
        s.process("look");
        s.process("");
        s.process("dance wildly");
        s.process("take nothing");
        assert!((s.traveler().days_survived - 0.4).abs() < 1e-9);
    }

    #[test]
    fn fuel_at_zero_ends_on_any_command() {
        let mut s = session();
        s.traveler.fuel = Gauge::EMPTY;

        let turn = s.process("inventory");
        assert!(turn.result.is_ok());
        assert!(turn.is_final());
        assert_eq!(
            s.state(),
            GameState::Lost {
                cause: LossCause::OutOfFuel
            }
        );
        let ending = turn.ending.unwrap();
        assert!(ending.contains("runs out of fuel"));
        assert!(ending.contains("Miles traveled: 0"));
    }

    #[test]
    fn broken_bike_ends_even_after_failed_command() {
        let mut s = session();
        s.traveler.condition = Gauge::EMPTY;

        let turn = s.process("drop anvil");
        assert!(turn.result.is_err());
        assert_eq!(
            s.state(),
            GameState::Lost {
                cause: LossCause::BrokenDown
            }
        );
    }

    #[test]
    fn finished_session_refuses_input() {
        let mut s = session();
        s.traveler.fuel = Gauge::EMPTY;
        s.process("look");
        let days = s.traveler().days_survived;

        let turn = s.process("look");
        assert!(matches!(turn.result, Err(EngineError::SessionOver)));
        assert!(turn.ending.is_none());
        assert_eq!(s.traveler().days_survived, days);
        assert!(matches!(
            s.execute(Command::Rest),
            Err(EngineError::SessionOver)
        ));
    }

    #[test]
    fn quit_skips_resource_check() {
        let mut s = session();
        s.traveler.fuel = Gauge::EMPTY;

        let turn = s.process("quit");
        assert!(turn.quit);
        assert!(turn.ending.is_none());
        assert_eq!(s.state(), GameState::Playing);
    }

    #[test]
    fn reaching_the_coast_wins() {
        let mut s = session();
        s.look().unwrap();
        assert!(s.process("west").result.is_ok());
        let turn = s.process("ride west");

        assert_eq!(s.state(), GameState::Won);
        let ending = turn.ending.unwrap();
        assert!(ending.contains("made it to Los Angeles"));
        assert!(ending.contains("Miles traveled: 150"));
        assert!(s.is_over());
        assert!(s.process("look").result.is_err());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut s = session();
        let before = s.traveler().clone();
        let turn = s.process("   ");
        assert_eq!(turn.result.unwrap(), "");
        assert_eq!(s.traveler().inventory, before.inventory);
        assert_eq!(s.traveler().fuel, before.fuel);
    }
}
